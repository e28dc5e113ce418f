//! Element types
//!
//! [`DType`] is the runtime tag for every element type an [`NdArray`] can
//! hold. [`Element`] ties a Rust scalar to its tag and supplies the numeric
//! conversions the array operations need, and [`Promote`] picks the result
//! type of mixed-type arithmetic at compile time.
//!
//! [`NdArray`]: crate::ndarray::NdArray

pub mod complex;
mod element;
mod promotion;

pub use complex::{Complex64, Complex128};
pub use element::Element;
pub use promotion::{Promote, promote};

use std::fmt;

/// Runtime tag of an array's element type
///
/// Arrays are statically typed, so the tag only feeds validation (linear
/// algebra rejects complex input), byte-order handling and error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    /// `f64`
    F64,
    /// `f32`
    F32,
    /// `i64`
    I64,
    /// `i32`
    I32,
    /// `i16`
    I16,
    /// `i8`
    I8,
    /// `u64`
    U64,
    /// `u32`
    U32,
    /// `u16`
    U16,
    /// `u8`
    U8,
    /// `bool`, produced by comparisons and used as masks
    Bool,
    /// Pair of `f32` (re, im)
    Complex64,
    /// Pair of `f64` (re, im)
    Complex128,
}

impl DType {
    /// Width of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::I64 | Self::U64 | Self::Complex64 => 8,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::I16 | Self::U16 => 2,
            Self::I8 | Self::U8 | Self::Bool => 1,
        }
    }

    /// `Complex64` or `Complex128`
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Real tag of each complex component, `None` for non-complex types
    ///
    /// Byte swapping reverses each component separately.
    #[inline]
    pub const fn complex_component_dtype(self) -> Option<Self> {
        match self {
            Self::Complex64 => Some(Self::F32),
            Self::Complex128 => Some(Self::F64),
            _ => None,
        }
    }

    /// `i8` through `i64`
    #[inline]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32 | Self::I16 | Self::I8)
    }

    /// `u8` through `u64`
    #[inline]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U64 | Self::U32 | Self::U16 | Self::U8)
    }

    /// Signed or unsigned integer
    #[inline]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    /// Rust spelling of the type (`c64`/`c128` for the complex pairs)
    pub const fn name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::U64 => "u64",
            Self::U32 => "u32",
            Self::U16 => "u16",
            Self::U8 => "u8",
            Self::Bool => "bool",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

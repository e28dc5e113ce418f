//! Element trait for mapping Rust types to DType

use super::DType;
use super::complex::{Complex64, Complex128};
use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Rem, Sub};

/// Trait for types that can be numeric elements of an `NdArray`
///
/// This trait connects Rust's type system to numcore's runtime dtype tags.
/// It's implemented for the primitive integer and float types and for the
/// complex types in [`super::complex`].
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - arrays are plain value holders
/// - `Pod + Zeroable` - raw byte views for `dump`, `load` and `byteswap`
/// - `Default` - the zero value, so numeric arrays can be zero-filled
/// - `Add + Sub + Mul + Div` - arithmetic (Output = Self)
/// - `PartialOrd` - ordering for min/max/sort (complex: by magnitude)
///
/// `Neg` and `Rem` are not required since unsigned and complex types
/// respectively don't support them; the operations needing them add the
/// bound themselves.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Default
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Floating point type used for averages of this element type.
    ///
    /// Integers average into `f64`, floats keep their width and complex
    /// types stay complex.
    type Float: Element;

    /// Convert to f64 for generic numeric operations
    ///
    /// For complex types this returns the **magnitude** (|z|), consistent
    /// with `PartialOrd` comparing complex values by magnitude.
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    ///
    /// For complex types this creates a real number (imaginary part = 0).
    fn from_f64(v: f64) -> Self;

    /// Convert to the averaging type without losing the imaginary part.
    fn to_float(self) -> Self::Float;

    /// Widen to `Complex128`; real values gain a zero imaginary part
    fn to_complex128(self) -> Complex128;

    /// Narrow from `Complex128`; real types keep only the real part
    fn from_complex128(z: Complex128) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Whether this value is NaN (always false for integers)
    #[inline]
    fn is_nan_val(self) -> bool {
        false
    }

    /// Absolute value (magnitude for complex) as f64
    #[inline]
    fn magnitude_f64(self) -> f64 {
        self.to_f64().abs()
    }

    /// `self / rhs`, or `None` where integer division would trap (a zero
    /// divisor, or `MIN / -1` for signed types)
    ///
    /// Floating point and complex division always succeed with IEEE results.
    #[inline]
    fn checked_quotient(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    /// `self % rhs`, or `None` where integer remainder would trap
    #[inline]
    fn checked_remainder(self, rhs: Self) -> Option<Self>
    where
        Self: Rem<Output = Self>,
    {
        Some(self % rhs)
    }
}

macro_rules! impl_int_element {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;
                type Float = f64;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_complex128(self) -> Complex128 {
                    Complex128::new(self as f64, 0.0)
                }

                #[inline]
                fn from_complex128(z: Complex128) -> Self {
                    z.re as $t
                }

                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }

                #[inline]
                fn checked_remainder(self, rhs: Self) -> Option<Self>
                where
                    Self: Rem<Output = Self>,
                {
                    self.checked_rem(rhs)
                }
            }
        )*
    };
}

impl_int_element!(
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
);

impl Element for f64 {
    const DTYPE: DType = DType::F64;
    type Float = f64;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_float(self) -> f64 {
        self
    }

    #[inline]
    fn to_complex128(self) -> Complex128 {
        Complex128::new(self, 0.0)
    }

    #[inline]
    fn from_complex128(z: Complex128) -> Self {
        z.re
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_nan_val(self) -> bool {
        self.is_nan()
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
    type Float = f32;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_float(self) -> f32 {
        self
    }

    #[inline]
    fn to_complex128(self) -> Complex128 {
        Complex128::new(self as f64, 0.0)
    }

    #[inline]
    fn from_complex128(z: Complex128) -> Self {
        z.re as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_nan_val(self) -> bool {
        self.is_nan()
    }
}

// ============================================================================
// Complex types
//
// - to_f64(): magnitude, a lossy single-scalar view used for ordering
// - from_f64(): real number (im = 0)
// - to_float(): identity, so averages keep the imaginary part
// ============================================================================

impl Element for Complex64 {
    const DTYPE: DType = DType::Complex64;
    type Float = Complex64;

    /// Returns magnitude (|z|). For the real part, use `.re` directly.
    #[inline]
    fn to_f64(self) -> f64 {
        self.magnitude() as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::new(v as f32, 0.0)
    }

    #[inline]
    fn to_float(self) -> Self {
        self
    }

    #[inline]
    fn to_complex128(self) -> Complex128 {
        self.into()
    }

    #[inline]
    fn from_complex128(z: Complex128) -> Self {
        z.into()
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_nan_val(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl Element for Complex128 {
    const DTYPE: DType = DType::Complex128;
    type Float = Complex128;

    /// Returns magnitude (|z|). For the real part, use `.re` directly.
    #[inline]
    fn to_f64(self) -> f64 {
        self.magnitude()
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::new(v, 0.0)
    }

    #[inline]
    fn to_float(self) -> Self {
        self
    }

    #[inline]
    fn to_complex128(self) -> Complex128 {
        self
    }

    #[inline]
    fn from_complex128(z: Complex128) -> Self {
        z
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_nan_val(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

//! Type promotion rules for binary operations
//!
//! Two layers agree with each other:
//! - [`promote`] maps a pair of runtime tags to the result tag.
//! - [`Promote`] is the compile-time version used by mixed-type array
//!   arithmetic. Its `Output` is the Rust type whose `DTYPE` equals
//!   `promote(Self::DTYPE, Rhs::DTYPE)`.

use super::complex::{Complex64, Complex128};
use super::{DType, Element};

/// Promote two dtypes to a common dtype for binary operations
///
/// Follows NumPy-like promotion rules:
/// - Complex wins over real, floats win over integers
/// - Larger types win over smaller types
/// - Signed wins over unsigned when mixing
/// - `Complex64` paired with a type it cannot hold exactly becomes `Complex128`
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    let priority = |dt: DType| -> u8 {
        match dt {
            Complex128 => 120,
            Complex64 => 110,
            F64 => 100,
            F32 => 90,
            I64 => 65,
            U64 => 60,
            I32 => 55,
            U32 => 50,
            I16 => 45,
            U16 => 40,
            I8 => 35,
            U8 => 30,
            Bool => 25,
        }
    };

    // f32 components cannot hold f64 or wide integers exactly
    if lhs == Complex64 || rhs == Complex64 {
        let other = if lhs == Complex64 { rhs } else { lhs };
        if matches!(other, Complex128 | F64 | I64 | U64 | I32 | U32) {
            return Complex128;
        }
    }

    // Mixing signed and unsigned integers: signed type of same or larger size
    if lhs.is_signed_int() && rhs.is_unsigned_int() {
        return match (lhs, rhs) {
            (I64, _) => I64,
            (I32, U64 | U32) => I64,
            (I32, _) => I32,
            (I16, U64 | U32) => I64,
            (I16, U16) => I32,
            (I16, _) => I16,
            (I8, U64 | U32) => I64,
            (I8, U16) => I32,
            (I8, _) => I16,
            _ => I64,
        };
    }
    if rhs.is_signed_int() && lhs.is_unsigned_int() {
        return promote(rhs, lhs);
    }

    if priority(lhs) >= priority(rhs) {
        lhs
    } else {
        rhs
    }
}

/// Compile-time promotion between two element types
///
/// `a.add(&b)` on `NdArray<T>` and `NdArray<U>` produces
/// `NdArray<<T as Promote<U>>::Output>`. Both operands are lifted into the
/// output type before the arithmetic is applied.
pub trait Promote<Rhs: Element>: Element {
    /// Element type of the result
    type Output: Element;

    /// Lift a left-hand operand into the output type
    fn lift_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Lift a right-hand operand into the output type
    fn lift_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Value conversion used by the promotion table
trait Lift<O> {
    fn lift(self) -> O;
}

macro_rules! impl_lift_real {
    ($out:ty: $($src:ty),*) => {
        $(
            impl Lift<$out> for $src {
                #[inline]
                fn lift(self) -> $out {
                    <$out as Element>::from_f64(self as f64)
                }
            }
        )*
    };
}

impl_lift_real!(f64: f32, i64, i32, i16, i8, u64, u32, u16, u8);
impl_lift_real!(f32: i64, i32, i16, i8, u64, u32, u16, u8);
impl_lift_real!(Complex128: f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);
impl_lift_real!(Complex64: f32, i16, i8, u16, u8);

macro_rules! impl_lift_int {
    ($out:ty: $($src:ty),*) => {
        $(
            impl Lift<$out> for $src {
                #[inline]
                fn lift(self) -> $out {
                    self as $out
                }
            }
        )*
    };
}

impl_lift_int!(i64: i32, i16, i8, u64, u32, u16, u8);
impl_lift_int!(i32: i16, i8, u16, u8);
impl_lift_int!(i16: i8, u8);
impl_lift_int!(u64: u32, u16, u8);
impl_lift_int!(u32: u16, u8);
impl_lift_int!(u16: u8);

impl Lift<Complex128> for Complex64 {
    #[inline]
    fn lift(self) -> Complex128 {
        self.into()
    }
}

macro_rules! impl_promote_same {
    ($($t:ty),*) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline]
                fn lift_lhs(self) -> $t {
                    self
                }

                #[inline]
                fn lift_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

impl_promote_same!(
    f64, f32, i64, i32, i16, i8, u64, u32, u16, u8, Complex64, Complex128
);

/// Implements `Promote` in both directions for a widening pair
macro_rules! impl_promote_pair {
    ($($narrow:ty => $wide:ty),* $(,)?) => {
        $(
            impl Promote<$narrow> for $wide {
                type Output = $wide;

                #[inline]
                fn lift_lhs(self) -> $wide {
                    self
                }

                #[inline]
                fn lift_rhs(rhs: $narrow) -> $wide {
                    rhs.lift()
                }
            }

            impl Promote<$wide> for $narrow {
                type Output = $wide;

                #[inline]
                fn lift_lhs(self) -> $wide {
                    self.lift()
                }

                #[inline]
                fn lift_rhs(rhs: $wide) -> $wide {
                    rhs
                }
            }
        )*
    };
}

impl_promote_pair!(
    f32 => f64,
    i64 => f64,
    i32 => f64,
    i16 => f64,
    i8 => f64,
    u64 => f64,
    u32 => f64,
    u16 => f64,
    u8 => f64,
    i64 => f32,
    i32 => f32,
    i16 => f32,
    i8 => f32,
    u64 => f32,
    u32 => f32,
    u16 => f32,
    u8 => f32,
    f64 => Complex128,
    f32 => Complex128,
    i64 => Complex128,
    i32 => Complex128,
    i16 => Complex128,
    i8 => Complex128,
    u64 => Complex128,
    u32 => Complex128,
    u16 => Complex128,
    u8 => Complex128,
    Complex64 => Complex128,
    f32 => Complex64,
    i16 => Complex64,
    i8 => Complex64,
    u16 => Complex64,
    u8 => Complex64,
    i32 => i64,
    i16 => i64,
    i8 => i64,
    i16 => i32,
    i8 => i32,
    i8 => i16,
    u32 => u64,
    u16 => u64,
    u8 => u64,
    u16 => u32,
    u8 => u32,
    u8 => u16,
    u64 => i64,
    u32 => i64,
    u16 => i64,
    u8 => i64,
    u16 => i32,
    u8 => i32,
    u8 => i16,
);

/// Implements `Promote` in both directions for a signed/unsigned pair whose
/// common type is wider than either operand
macro_rules! impl_promote_common {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn lift_lhs(self) -> $out {
                    self.lift()
                }

                #[inline]
                fn lift_rhs(rhs: $rhs) -> $out {
                    rhs.lift()
                }
            }

            impl Promote<$lhs> for $rhs {
                type Output = $out;

                #[inline]
                fn lift_lhs(self) -> $out {
                    self.lift()
                }

                #[inline]
                fn lift_rhs(rhs: $lhs) -> $out {
                    rhs.lift()
                }
            }
        )*
    };
}

impl_promote_common! {
    i32, u64 => i64;
    i32, u32 => i64;
    i16, u64 => i64;
    i16, u32 => i64;
    i16, u16 => i32;
    i8, u64 => i64;
    i8, u32 => i64;
    i8, u16 => i32;
    i8, u8 => i16;
}

/// `f64` with `Complex64` needs the wider complex type on both sides
impl Promote<Complex64> for f64 {
    type Output = Complex128;

    #[inline]
    fn lift_lhs(self) -> Complex128 {
        self.lift()
    }

    #[inline]
    fn lift_rhs(rhs: Complex64) -> Complex128 {
        rhs.lift()
    }
}

impl Promote<f64> for Complex64 {
    type Output = Complex128;

    #[inline]
    fn lift_lhs(self) -> Complex128 {
        self.lift()
    }

    #[inline]
    fn lift_rhs(rhs: f64) -> Complex128 {
        rhs.lift()
    }
}

//! Complex scalar types for complex-valued arrays
//!
//! `Complex64` (two `f32`) and `Complex128` (two `f64`) are `#[repr(C)]` and
//! `Pod`, so complex arrays can be dumped and byte-swapped like real ones.
//! Values are stored interleaved (re, im), matching NumPy's layout.
//!
//! Arithmetic follows the usual definitions:
//! - `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
//!
//! Ordering (`PartialOrd`) compares magnitudes so that sorting and min/max
//! are defined for complex arrays.

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_complex {
    ($name:ident, $float:ty, $doc_bits:literal) => {
        #[doc = concat!($doc_bits, "-bit complex number with ", stringify!($float), " real and imaginary parts")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// Zero complex number
            pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

            /// One (real unit)
            pub const ONE: Self = Self { re: 1.0, im: 0.0 };

            /// Create a new complex number
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// Magnitude: |z| = sqrt(re² + im²)
            #[inline]
            pub fn magnitude(self) -> $float {
                self.re.hypot(self.im)
            }

            /// Squared magnitude: |z|² = re² + im²
            #[inline]
            pub fn magnitude_squared(self) -> $float {
                self.re * self.re + self.im * self.im
            }

            /// Complex conjugate: conj(a + bi) = a - bi
            #[inline]
            pub fn conj(self) -> Self {
                Self {
                    re: self.re,
                    im: -self.im,
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new(self.re + rhs.re, self.im + rhs.im)
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.re - rhs.re, self.im - rhs.im)
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(
                    self.re * rhs.re - self.im * rhs.im,
                    self.re * rhs.im + self.im * rhs.re,
                )
            }
        }

        impl Div for $name {
            type Output = Self;

            /// Division by zero yields NaN components (IEEE semantics).
            #[inline]
            fn div(self, rhs: Self) -> Self {
                let denom = rhs.magnitude_squared();
                Self::new(
                    (self.re * rhs.re + self.im * rhs.im) / denom,
                    (self.im * rhs.re - self.re * rhs.im) / denom,
                )
            }
        }

        impl Mul<$float> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $float) -> Self {
                Self::new(self.re * rhs, self.im * rhs)
            }
        }

        impl Div<$float> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $float) -> Self {
                Self::new(self.re / rhs, self.im / rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.re, -self.im)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl PartialOrd for $name {
            /// Complex numbers are not naturally ordered; this compares
            /// magnitudes so sorting and min/max are well defined.
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.magnitude().partial_cmp(&other.magnitude())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im >= 0.0 {
                    write!(f, "{}+{}i", self.re, self.im)
                } else {
                    write!(f, "{}{}i", self.re, self.im)
                }
            }
        }

        impl From<$float> for $name {
            #[inline]
            fn from(re: $float) -> Self {
                Self { re, im: 0.0 }
            }
        }

        impl From<($float, $float)> for $name {
            #[inline]
            fn from((re, im): ($float, $float)) -> Self {
                Self { re, im }
            }
        }
    };
}

impl_complex!(Complex64, f32, "64");
impl_complex!(Complex128, f64, "128");

impl From<Complex64> for Complex128 {
    #[inline]
    fn from(z: Complex64) -> Self {
        Self::new(z.re as f64, z.im as f64)
    }
}

impl From<Complex128> for Complex64 {
    /// Narrowing conversion, precision may be lost
    #[inline]
    fn from(z: Complex128) -> Self {
        Self::new(z.re as f32, z.im as f32)
    }
}

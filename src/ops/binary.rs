//! Elementwise arithmetic: array-array (with promotion and broadcasting),
//! array-scalar, in-place and operator forms

use super::{map_array, zip_broadcast};
use crate::dtype::{Element, Promote};
use crate::error::{Error, Result};
use crate::ndarray::NdArray;
use paste::paste;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Unwrap a checked integer kernel's output, failing if any element trapped
fn collect_checked<T>(values: NdArray<Option<T>>) -> Result<NdArray<T>> {
    let shape = values.shape();
    let data = values
        .into_vec()
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| Error::invalid_argument("rhs", "integer division by zero or overflow"))?;
    Ok(NdArray::from_parts(shape, data))
}

impl<T: Copy> NdArray<T> {
    /// Combine `other` into `self` elementwise; `other` must broadcast to
    /// `self`'s shape. `self` is untouched on error.
    pub(crate) fn zip_inplace<U: Copy>(
        &mut self,
        other: &NdArray<U>,
        f: impl Fn(T, U) -> T,
    ) -> Result<&mut Self> {
        let result = zip_broadcast(self, other, f)?;
        if result.shape() != self.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        self.as_mut_slice().copy_from_slice(result.as_slice());
        Ok(self)
    }
}

macro_rules! arithmetic_methods {
    ($($op:ident, $sym:tt, $verb:literal);* $(;)?) => {
        paste! {
            impl<T: Element> NdArray<T> {
                $(
                    #[doc = concat!("Elementwise ", $verb, " with broadcasting and type promotion")]
                    ///
                    /// Returns `ShapeMismatch` when the shapes cannot be broadcast.
                    pub fn $op<U: Element>(&self, other: &NdArray<U>) -> Result<NdArray<<T as Promote<U>>::Output>>
                    where
                        T: Promote<U>,
                    {
                        zip_broadcast(self, other, |a, b| {
                            <T as Promote<U>>::lift_lhs(a) $sym <T as Promote<U>>::lift_rhs(b)
                        })
                    }

                    #[doc = concat!("Elementwise ", $verb, " with a scalar")]
                    pub fn [<$op _scalar>](&self, value: T) -> NdArray<T> {
                        map_array(self, |x| x $sym value)
                    }

                    #[doc = concat!("In-place elementwise ", $verb, "; `other` must broadcast to `self`")]
                    pub fn [<$op _inplace>](&mut self, other: &NdArray<T>) -> Result<&mut Self> {
                        self.zip_inplace(other, |a, b| a $sym b)
                    }
                )*
            }
        }
    };
}

arithmetic_methods! {
    add, +, "addition";
    sub, -, "subtraction";
    mul, *, "multiplication";
}

impl<T: Element> NdArray<T> {
    /// Elementwise division with broadcasting and type promotion
    ///
    /// Floating point division by zero follows IEEE (inf/NaN). Integer
    /// division by zero, and `MIN / -1` for signed types, return
    /// `InvalidArgument`.
    pub fn div<U: Element>(&self, other: &NdArray<U>) -> Result<NdArray<<T as Promote<U>>::Output>>
    where
        T: Promote<U>,
    {
        collect_checked(zip_broadcast(self, other, |a, b| {
            <T as Promote<U>>::lift_lhs(a).checked_quotient(<T as Promote<U>>::lift_rhs(b))
        })?)
    }

    /// Elementwise division by a scalar
    pub fn div_scalar(&self, value: T) -> Result<NdArray<T>> {
        collect_checked(map_array(self, |x| x.checked_quotient(value)))
    }

    /// In-place elementwise division; `other` must broadcast to `self`
    ///
    /// `self` is untouched on error.
    pub fn div_inplace(&mut self, other: &NdArray<T>) -> Result<&mut Self> {
        let quotient = collect_checked(zip_broadcast(self, other, T::checked_quotient)?)?;
        if quotient.shape() != self.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        self.as_mut_slice().copy_from_slice(quotient.as_slice());
        Ok(self)
    }
}

impl<T: Element + Rem<Output = T>> NdArray<T> {
    /// Elementwise remainder with broadcasting
    ///
    /// Integer remainder by zero, and `MIN % -1` for signed types, return
    /// `InvalidArgument`.
    pub fn rem(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        collect_checked(zip_broadcast(self, other, T::checked_remainder)?)
    }

    /// Elementwise remainder by a scalar
    pub fn rem_scalar(&self, value: T) -> Result<NdArray<T>> {
        collect_checked(map_array(self, |x| x.checked_remainder(value)))
    }
}

// ============================================================================
// Operator forms
// ============================================================================

macro_rules! impl_array_binop {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl<T, U> $trait<&NdArray<U>> for &NdArray<T>
            where
                T: Promote<U>,
                U: Element,
            {
                type Output = Result<NdArray<<T as Promote<U>>::Output>>;

                fn $method(self, rhs: &NdArray<U>) -> Self::Output {
                    NdArray::<T>::$method(self, rhs)
                }
            }
        )*
    };
}

impl_array_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
}

impl<T: Element + Rem<Output = T>> Rem<&NdArray<T>> for &NdArray<T> {
    type Output = Result<NdArray<T>>;

    fn rem(self, rhs: &NdArray<T>) -> Self::Output {
        NdArray::<T>::rem(self, rhs)
    }
}

impl<T: Element + Neg<Output = T>> Neg for &NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        map_array(self, |x| -x)
    }
}

impl<T: Element + Neg<Output = T>> Neg for NdArray<T> {
    type Output = NdArray<T>;

    fn neg(mut self) -> NdArray<T> {
        self.iter_mut().for_each(|x| *x = -*x);
        self
    }
}

/// Scalar operators, implemented per element type so that they never overlap
/// with the array-array impls above.
///
/// Because several right-hand types are accepted for `&NdArray<T>`, an
/// unsuffixed integer literal on the right (`&a + 1`) can leave inference
/// with no unique choice; write `&a + 1i32`, or call `add_scalar`.
macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<$t> for &NdArray<$t> {
                type Output = NdArray<$t>;

                fn add(self, rhs: $t) -> NdArray<$t> {
                    self.add_scalar(rhs)
                }
            }

            impl Sub<$t> for &NdArray<$t> {
                type Output = NdArray<$t>;

                fn sub(self, rhs: $t) -> NdArray<$t> {
                    self.sub_scalar(rhs)
                }
            }

            impl Mul<$t> for &NdArray<$t> {
                type Output = NdArray<$t>;

                fn mul(self, rhs: $t) -> NdArray<$t> {
                    self.mul_scalar(rhs)
                }
            }

            impl Div<$t> for &NdArray<$t> {
                type Output = Result<NdArray<$t>>;

                fn div(self, rhs: $t) -> Result<NdArray<$t>> {
                    self.div_scalar(rhs)
                }
            }

            impl Add<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn add(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    map_array(rhs, |x| self + x)
                }
            }

            impl Sub<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn sub(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    map_array(rhs, |x| self - x)
                }
            }

            impl Mul<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn mul(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    map_array(rhs, |x| self * x)
                }
            }

            impl AddAssign<$t> for NdArray<$t> {
                fn add_assign(&mut self, rhs: $t) {
                    self.iter_mut().for_each(|x| *x = *x + rhs);
                }
            }

            impl SubAssign<$t> for NdArray<$t> {
                fn sub_assign(&mut self, rhs: $t) {
                    self.iter_mut().for_each(|x| *x = *x - rhs);
                }
            }

            impl MulAssign<$t> for NdArray<$t> {
                fn mul_assign(&mut self, rhs: $t) {
                    self.iter_mut().for_each(|x| *x = *x * rhs);
                }
            }

            /// # Panics
            ///
            /// Integer division by zero (or `MIN / -1`) panics, as it does
            /// for the scalar type. Use [`NdArray::div_scalar`] for a checked
            /// version.
            impl DivAssign<$t> for NdArray<$t> {
                fn div_assign(&mut self, rhs: $t) {
                    self.iter_mut().for_each(|x| *x = *x / rhs);
                }
            }
        )*
    };
}

impl_scalar_ops!(
    f64,
    f32,
    i64,
    i32,
    i16,
    i8,
    u64,
    u32,
    u16,
    u8,
    crate::dtype::Complex64,
    crate::dtype::Complex128,
);

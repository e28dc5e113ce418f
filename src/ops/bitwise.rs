//! Bitwise operations for integer (and boolean) arrays, and logical operations
//! for any element type

use super::{map_array, zip_broadcast};
use crate::error::Result;
use crate::ndarray::NdArray;
use paste::paste;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

macro_rules! bitwise_methods {
    ($($op:ident, $trait:ident, $sym:tt);* $(;)?) => {
        paste! {
            $(
                impl<T: Copy + $trait<Output = T>> NdArray<T> {
                    #[doc = concat!("Elementwise `a ", stringify!($sym), " b` with broadcasting")]
                    pub fn $op(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
                        zip_broadcast(self, other, |a, b| a $sym b)
                    }

                    #[doc = concat!("Elementwise `a ", stringify!($sym), " value`")]
                    pub fn [<$op _scalar>](&self, value: T) -> NdArray<T> {
                        map_array(self, |a| a $sym value)
                    }
                }

                impl<T: Copy + $trait<Output = T>> $trait<&NdArray<T>> for &NdArray<T> {
                    type Output = Result<NdArray<T>>;

                    fn $op(self, rhs: &NdArray<T>) -> Self::Output {
                        NdArray::<T>::$op(self, rhs)
                    }
                }

                impl<T: Copy + $trait<Output = T>> $trait<T> for &NdArray<T> {
                    type Output = NdArray<T>;

                    fn $op(self, rhs: T) -> NdArray<T> {
                        self.[<$op _scalar>](rhs)
                    }
                }
            )*
        }
    };
}

bitwise_methods! {
    bitand, BitAnd, &;
    bitor, BitOr, |;
    bitxor, BitXor, ^;
}

impl<T: Copy + Not<Output = T>> NdArray<T> {
    /// Elementwise bitwise complement (logical not for `bool`)
    pub fn bitnot(&self) -> NdArray<T> {
        map_array(self, |a| !a)
    }
}

impl<T: Copy + Not<Output = T>> Not for &NdArray<T> {
    type Output = NdArray<T>;

    fn not(self) -> NdArray<T> {
        self.bitnot()
    }
}

impl<T: Copy + Shl<u32, Output = T>> NdArray<T> {
    /// Shift every element left by `bits`
    pub fn shl(&self, bits: u32) -> NdArray<T> {
        map_array(self, |a| a << bits)
    }
}

impl<T: Copy + Shr<u32, Output = T>> NdArray<T> {
    /// Shift every element right by `bits`
    pub fn shr(&self, bits: u32) -> NdArray<T> {
        map_array(self, |a| a >> bits)
    }
}

impl<T: Copy + Shl<u32, Output = T>> Shl<u32> for &NdArray<T> {
    type Output = NdArray<T>;

    fn shl(self, bits: u32) -> NdArray<T> {
        NdArray::<T>::shl(self, bits)
    }
}

impl<T: Copy + Shr<u32, Output = T>> Shr<u32> for &NdArray<T> {
    type Output = NdArray<T>;

    fn shr(self, bits: u32) -> NdArray<T> {
        NdArray::<T>::shr(self, bits)
    }
}

// ============================================================================
// Logical operations: an element is true when it differs from zero
// ============================================================================

#[inline]
fn truthy<T: PartialEq + Default>(x: T) -> bool {
    x != T::default()
}

impl<T: Copy + Default + PartialEq> NdArray<T> {
    /// Elementwise logical AND with broadcasting
    pub fn logical_and(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        zip_broadcast(self, other, |a, b| truthy(a) && truthy(b))
    }

    /// Elementwise logical OR with broadcasting
    pub fn logical_or(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        zip_broadcast(self, other, |a, b| truthy(a) || truthy(b))
    }

    /// Elementwise logical XOR with broadcasting
    pub fn logical_xor(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        zip_broadcast(self, other, |a, b| truthy(a) != truthy(b))
    }

    /// Elementwise logical NOT
    pub fn logical_not(&self) -> NdArray<bool> {
        map_array(self, |a| !truthy(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitwise_arrays() {
        let a = NdArray::from_slice(&[0b1100u8, 0b1010]);
        let b = NdArray::from_slice(&[0b1010u8, 0b0110]);
        assert_eq!((&a & &b).unwrap().as_slice(), &[0b1000, 0b0010]);
        assert_eq!((&a | &b).unwrap().as_slice(), &[0b1110, 0b1110]);
        assert_eq!(a.bitxor(&b).unwrap().as_slice(), &[0b0110, 0b1100]);
        assert_eq!((!&a).as_slice(), &[0b1111_0011, 0b1111_0101]);
    }

    #[test]
    fn test_bitwise_scalar_and_shift() {
        let a = NdArray::from_slice(&[1i32, 2, 3]);
        assert_eq!((&a & 1).as_slice(), &[1, 0, 1]);
        assert_eq!((&a << 2).as_slice(), &[4, 8, 12]);
        assert_eq!(a.shr(1).as_slice(), &[0, 1, 1]);
    }

    #[test]
    fn test_bool_bitwise() {
        let a = NdArray::from_slice(&[true, true, false]);
        let b = NdArray::from_slice(&[true, false, false]);
        assert_eq!(a.bitand(&b).unwrap().as_slice(), &[true, false, false]);
        assert_eq!(a.bitnot().as_slice(), &[false, false, true]);
    }

    #[test]
    fn test_logical_ops() {
        let a = NdArray::from_slice(&[0.0, 1.5, -2.0, 0.0]);
        let b = NdArray::from_slice(&[0.0, 0.0, 3.0, 4.0]);
        assert_eq!(
            a.logical_and(&b).unwrap().as_slice(),
            &[false, false, true, false]
        );
        assert_eq!(
            a.logical_or(&b).unwrap().as_slice(),
            &[false, true, true, true]
        );
        assert_eq!(
            a.logical_xor(&b).unwrap().as_slice(),
            &[false, true, false, true]
        );
        assert_eq!(a.logical_not().as_slice(), &[true, false, false, true]);
    }
}

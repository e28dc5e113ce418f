//! Matrix powers, chained products and the cross-product matrix

use super::helpers::to_f64_square;
use super::inverse::inv;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};
use std::ops::Neg;

/// `A^power` for square `A`
///
/// `power == 0` gives the identity, positive powers use exponentiation by
/// squaring, and negative powers raise `inv(A)` to `|power|`.
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType`, and `SingularMatrix` for a negative
/// power of a singular matrix.
pub fn matrix_power<T: Element>(a: &NdArray<T>, power: i32) -> Result<NdArray<f64>> {
    let (a, n) = to_f64_square(a, "matrix_power")?;
    let mut base = if power < 0 { inv(&a)? } else { a };
    let mut result = NdArray::<f64>::identity(n);
    let mut exp = power.unsigned_abs();

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.dot(&base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.dot(&base)?;
        }
    }
    Ok(result)
}

/// Left-to-right product `A1 @ A2 @ ... @ Ak`
///
/// # Errors
///
/// `InvalidArgument` for an empty list, `ShapeMismatch` when
/// `Ai.cols() != Ai+1.rows()` for some adjacent pair.
pub fn multi_dot<T: Element>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    let (first, rest) = arrays
        .split_first()
        .ok_or_else(|| Error::invalid_argument("arrays", "multi_dot needs at least one array"))?;

    rest.iter().try_fold((*first).clone(), |acc, next| {
        if acc.cols() != next.rows() {
            return Err(Error::shape_mismatch(
                Shape::new(acc.cols(), next.cols()),
                next.shape(),
            ));
        }
        acc.dot(next)
    })
}

/// Skew-symmetric cross-product matrix of a 3-vector
///
/// `hat(v) @ w == v × w`:
///
/// ```text
/// [  0  -z   y ]
/// [  z   0  -x ]
/// [ -y   x   0 ]
/// ```
///
/// # Errors
///
/// `InvalidArgument` unless `v` has exactly three elements.
pub fn hat<T: Element + Neg<Output = T>>(v: &NdArray<T>) -> Result<NdArray<T>> {
    match v.as_slice() {
        &[x, y, z] => Ok(hat_xyz(x, y, z)),
        other => Err(Error::invalid_argument(
            "v",
            format!("expected 3 elements, got {}", other.len()),
        )),
    }
}

/// [`hat`] from the three components directly
pub fn hat_xyz<T: Element + Neg<Output = T>>(x: T, y: T, z: T) -> NdArray<T> {
    let o = T::zero();
    NdArray::from_parts(Shape::square(3), vec![o, -z, y, z, o, -x, -y, x, o])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_power() {
        let a = NdArray::from_vec(2, 2, vec![1, 1, 1, 0]).unwrap();
        let fib = matrix_power(&a, 10).unwrap();
        assert_eq!(fib.as_slice(), &[89.0, 55.0, 55.0, 34.0]);

        assert_eq!(matrix_power(&a, 0).unwrap(), NdArray::<f64>::identity(2));

        let inv_sq = matrix_power(&a, -2).unwrap();
        let back = inv_sq.dot(&matrix_power(&a, 2).unwrap()).unwrap();
        for (x, e) in back.iter().zip(NdArray::<f64>::identity(2).iter()) {
            assert!((x - e).abs() < 1e-12);
        }

        assert!(matrix_power(&NdArray::<f64>::zeros(2, 3), 2).is_err());
    }

    #[test]
    fn test_multi_dot() {
        let a = NdArray::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = NdArray::from_vec(3, 1, vec![1, 0, -1]).unwrap();
        let c = NdArray::from_vec(1, 2, vec![2, 3]).unwrap();
        let out = multi_dot(&[&a, &b, &c]).unwrap();
        assert_eq!(out.shape(), Shape::new(2, 2));
        assert_eq!(out.as_slice(), &[-4, -6, -4, -6]);

        assert!(matches!(multi_dot(&[&a, &a]), Err(Error::ShapeMismatch { .. })));
        assert!(multi_dot::<i32>(&[]).is_err());
    }

    #[test]
    fn test_hat_is_cross_product() {
        let v = NdArray::from_slice(&[1.0, 2.0, 3.0]);
        let w = NdArray::from_vec(3, 1, vec![4.0, 5.0, 6.0]).unwrap();
        let cross = hat(&v).unwrap().dot(&w).unwrap();
        assert_eq!(cross.as_slice(), &[-3.0, 6.0, -3.0]);

        let h = hat_xyz(1, 2, 3);
        assert_eq!(h.transpose(), -&h);
        assert!(hat(&NdArray::from_slice(&[1.0, 2.0])).is_err());
    }
}

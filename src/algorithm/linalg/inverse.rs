//! Matrix inverse by Gauss-Jordan elimination

use super::helpers::{pivot_tolerance, to_f64_square};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;
use log::debug;

/// Inverse of a square matrix
///
/// Gauss-Jordan elimination on `[A | I]` with partial pivoting: each column
/// takes the remaining row with the largest magnitude as its pivot.
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType` for complex input, and `SingularMatrix`
/// when the best available pivot is numerically zero.
pub fn inv<T: Element>(a: &NdArray<T>) -> Result<NdArray<f64>> {
    let (a, n) = to_f64_square(a, "inv")?;
    let mut work = a.into_vec();
    let tol = pivot_tolerance(&work, n);
    let mut inverse = NdArray::<f64>::identity(n).into_vec();

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&i, &j| work[i * n + k].abs().total_cmp(&work[j * n + k].abs()))
            .unwrap_or(k);
        let pivot = work[pivot_row * n + k];
        if pivot.abs() <= tol {
            return Err(Error::singular("inv"));
        }
        if pivot_row != k {
            debug!("inv: swapping rows {k} and {pivot_row}");
            for j in 0..n {
                work.swap(k * n + j, pivot_row * n + j);
                inverse.swap(k * n + j, pivot_row * n + j);
            }
        }

        for j in 0..n {
            work[k * n + j] /= pivot;
            inverse[k * n + j] /= pivot;
        }

        for i in (0..n).filter(|&i| i != k) {
            let factor = work[i * n + k];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                work[i * n + j] -= factor * work[k * n + j];
                inverse[i * n + j] -= factor * inverse[k * n + j];
            }
        }
    }

    NdArray::from_vec(n, n, inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inv_2x2() {
        let a = NdArray::from_vec(2, 2, vec![4, 7, 2, 6]).unwrap();
        let inv_a = inv(&a).unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (x, e) in inv_a.iter().zip(expected) {
            assert!((x - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inv_needs_pivoting() {
        let a = NdArray::from_vec(3, 3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]).unwrap();
        let product = a.dot(&inv(&a).unwrap()).unwrap();
        let eye = NdArray::<f64>::identity(3);
        for (x, e) in product.iter().zip(eye.iter()) {
            assert!((x - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inv_singular() {
        let a = NdArray::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert!(matches!(inv(&a), Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_inv_empty() {
        assert!(inv(&NdArray::<f64>::new()).unwrap().is_empty());
    }
}

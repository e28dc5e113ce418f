//! Cholesky decomposition

use super::helpers::{is_symmetric, to_f64_square};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;

/// Cholesky decomposition: A = L @ L^T
///
/// Cholesky–Banachiewicz, filling `L` row by row.
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType`, and `NotPositiveDefinite` when `A` is
/// not symmetric or a diagonal term is not strictly positive.
pub fn cholesky<T: Element>(a: &NdArray<T>) -> Result<NdArray<f64>> {
    let (a, n) = to_f64_square(a, "cholesky")?;
    if !is_symmetric(&a) {
        return Err(Error::NotPositiveDefinite);
    }
    let a = a.as_slice();
    let mut l = vec![0.0; n * n];

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[i * n + k] * l[j * n + k]).sum();
            if i == j {
                let diag = a[i * n + i] - sum;
                if diag <= 0.0 || !diag.is_finite() {
                    return Err(Error::NotPositiveDefinite);
                }
                l[i * n + j] = diag.sqrt();
            } else {
                l[i * n + j] = (a[i * n + j] - sum) / l[j * n + j];
            }
        }
    }

    NdArray::from_vec(n, n, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cholesky_known_factor() {
        let a = NdArray::from_vec(3, 3, vec![4, 12, -16, 12, 37, -43, -16, -43, 98]).unwrap();
        let l = cholesky(&a).unwrap();
        assert_eq!(l.as_slice(), &[2.0, 0.0, 0.0, 6.0, 1.0, 0.0, -8.0, 5.0, 3.0]);
    }

    #[test]
    fn test_cholesky_rejects() {
        let not_sym = NdArray::from_vec(2, 2, vec![4.0, 1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(cholesky(&not_sym), Err(Error::NotPositiveDefinite)));

        let indefinite = NdArray::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).unwrap();
        assert!(matches!(cholesky(&indefinite), Err(Error::NotPositiveDefinite)));

        let rect = NdArray::<f64>::zeros(2, 3);
        assert!(matches!(cholesky(&rect), Err(Error::NotSquare { .. })));
    }
}

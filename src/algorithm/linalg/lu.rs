//! LU decompositions: unpivoted Doolittle and scaled partial pivoting

use super::decompositions::{LuDecomposition, PivotLuDecomposition};
use super::helpers::{pivot_tolerance, to_f64_square};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;
use log::debug;

/// Unpivoted LU decomposition (Doolittle): A = LU
///
/// ```text
/// U[k, j] = A[k, j] - Σ_{s<k} L[k, s] U[s, j]          (j ≥ k)
/// L[i, k] = (A[i, k] - Σ_{s<k} L[i, s] U[s, k]) / U[k, k]  (i > k)
/// ```
///
/// A numerically zero `U[k, k]` is tolerated when every entry below it
/// is already zero (the column of `L` is then zero).
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType`, and `SingularMatrix` when a zero pivot
/// has a non-zero entry left to eliminate.
pub fn lu_decomposition<T: Element>(a: &NdArray<T>) -> Result<LuDecomposition> {
    let (a, n) = to_f64_square(a, "lu_decomposition")?;
    let a = a.as_slice();
    let tol = pivot_tolerance(a, n);
    let mut l = NdArray::<f64>::identity(n).into_vec();
    let mut u = vec![0.0; n * n];

    for k in 0..n {
        for j in k..n {
            let sum: f64 = (0..k).map(|s| l[k * n + s] * u[s * n + j]).sum();
            u[k * n + j] = a[k * n + j] - sum;
        }

        let pivot = u[k * n + k];
        for i in k + 1..n {
            let sum: f64 = (0..k).map(|s| l[i * n + s] * u[s * n + k]).sum();
            let numerator = a[i * n + k] - sum;
            l[i * n + k] = if pivot.abs() > tol {
                numerator / pivot
            } else if numerator.abs() <= tol {
                0.0
            } else {
                return Err(Error::singular("lu_decomposition"));
            };
        }
    }

    Ok(LuDecomposition {
        l: NdArray::from_vec(n, n, l)?,
        u: NdArray::from_vec(n, n, u)?,
    })
}

/// Row-major factors of `PA = LU` plus the row permutation
pub(crate) struct PivotedFactors {
    pub(crate) n: usize,
    pub(crate) l: Vec<f64>,
    pub(crate) u: Vec<f64>,
    /// Row `k` of `PA` is row `perm[k]` of `A`
    pub(crate) perm: Vec<usize>,
}

impl PivotedFactors {
    /// Solve `A x = b` for each column of the row-major `n x k` matrix `b`
    pub(crate) fn solve_columns(&self, b: &[f64], k: usize) -> Vec<f64> {
        let n = self.n;
        let mut x = vec![0.0; n * k];
        for col in 0..k {
            // Forward substitution: L y = P b
            let mut y = vec![0.0; n];
            for i in 0..n {
                let sum: f64 = (0..i).map(|j| self.l[i * n + j] * y[j]).sum();
                y[i] = b[self.perm[i] * k + col] - sum;
            }
            // Back substitution: U x = y
            for i in (0..n).rev() {
                let sum: f64 = (i + 1..n).map(|j| self.u[i * n + j] * x[j * k + col]).sum();
                x[i * k + col] = (y[i] - sum) / self.u[i * n + i];
            }
        }
        x
    }
}

/// Scaled partial pivoting elimination on a row-major `n x n` matrix
///
/// The pivot for column `k` is the remaining row maximising
/// `|u[i, k]| / Σ_j |u[i, j]|`.
pub(crate) fn factor_pivoted(a: &[f64], n: usize, op: &'static str) -> Result<PivotedFactors> {
    let tol = pivot_tolerance(a, n);
    let mut u = a.to_vec();
    let mut l = vec![0.0; n * n];
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let scaled = |i: usize| {
            let row_sum: f64 = u[i * n..(i + 1) * n].iter().map(|x| x.abs()).sum();
            if row_sum > 0.0 {
                u[i * n + k].abs() / row_sum
            } else {
                0.0
            }
        };
        let pivot_row = (k..n)
            .max_by(|&i, &j| scaled(i).total_cmp(&scaled(j)))
            .unwrap_or(k);

        if u[pivot_row * n + k].abs() <= tol {
            return Err(Error::singular(op));
        }
        if pivot_row != k {
            debug!("{op}: swapping rows {k} and {pivot_row}");
            for j in 0..n {
                u.swap(k * n + j, pivot_row * n + j);
            }
            for j in 0..k {
                l.swap(k * n + j, pivot_row * n + j);
            }
            perm.swap(k, pivot_row);
        }

        let pivot = u[k * n + k];
        for i in k + 1..n {
            let factor = u[i * n + k] / pivot;
            l[i * n + k] = factor;
            u[i * n + k] = 0.0;
            for j in k + 1..n {
                u[i * n + j] -= factor * u[k * n + j];
            }
        }
    }

    for i in 0..n {
        l[i * n + i] = 1.0;
    }
    Ok(PivotedFactors { n, l, u, perm })
}

/// LU decomposition with scaled partial pivoting: PA = LU
///
/// `P` is returned as a dense 0/1 permutation matrix.
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType`, and `SingularMatrix` when every
/// remaining entry of a pivot column is numerically zero.
pub fn pivot_lu_decomposition<T: Element>(a: &NdArray<T>) -> Result<PivotLuDecomposition> {
    let (a, n) = to_f64_square(a, "pivot_lu_decomposition")?;
    let PivotedFactors { l, u, perm, .. } =
        factor_pivoted(a.as_slice(), n, "pivot_lu_decomposition")?;

    let mut p = NdArray::<f64>::zeros(n, n);
    for (row, &src) in perm.iter().enumerate() {
        p[(row, src)] = 1.0;
    }

    Ok(PivotLuDecomposition {
        l: NdArray::from_vec(n, n, l)?,
        u: NdArray::from_vec(n, n, u)?,
        p,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &NdArray<f64>, b: &NdArray<f64>) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-10, "{a} != {b}");
        }
    }

    #[test]
    fn test_doolittle() {
        let a = NdArray::from_vec(3, 3, vec![2.0, -1.0, -2.0, -4.0, 6.0, 3.0, -4.0, -2.0, 8.0]).unwrap();
        let (l, u) = lu_decomposition(&a).unwrap().into_parts();
        assert_close(&l.dot(&u).unwrap(), &a);
        assert_eq!(l.diagonal(0).as_slice(), &[1.0, 1.0, 1.0]);
        assert_eq!(u.get_at(2, 0).unwrap(), 0.0);
        assert_eq!(l.get_at(0, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_doolittle_zero_pivot() {
        let a = NdArray::from_vec(2, 2, vec![0.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(matches!(
            lu_decomposition(&a),
            Err(Error::SingularMatrix { .. })
        ));

        // Nothing to eliminate under the zero pivot
        let b = NdArray::from_vec(2, 2, vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        let (l, u) = lu_decomposition(&b).unwrap().into_parts();
        assert_close(&l.dot(&u).unwrap(), &b);
    }

    #[test]
    fn test_pivot_lu() {
        let a = NdArray::from_vec(3, 3, vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0]).unwrap();
        let (l, u, p) = pivot_lu_decomposition(&a).unwrap().into_parts();
        assert_close(&p.dot(&a).unwrap(), &l.dot(&u).unwrap());
        assert_eq!(p.sum(crate::ops::Axis::None).item().unwrap(), 3.0);
        assert!(u.get_at(1, 0).unwrap() == 0.0 && u.get_at(2, 1).unwrap() == 0.0);
    }

    #[test]
    fn test_pivot_lu_singular() {
        let a = NdArray::from_vec(3, 3, vec![1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0]).unwrap();
        assert!(matches!(
            pivot_lu_decomposition(&a),
            Err(Error::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_solve_columns() {
        let a = [2.0, 1.0, 1.0, 3.0];
        let factors = factor_pivoted(&a, 2, "solve").unwrap();
        let x = factors.solve_columns(&[3.0, 5.0], 1);
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }
}

//! Linear solvers: exact (`solve`), least squares (`lstsq`) and the
//! Moore-Penrose pseudo-inverse (`pinv`)

use super::helpers::{to_f64_matrix, to_f64_square};
use super::lu::factor_pivoted;
use super::svd::{ThinSvd, jacobi_svd};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};

/// Right-hand side as a row-major `rows x k` buffer
///
/// A flat vector of length `rows` is taken as a single column.
fn rhs_columns<T: Element>(b: &NdArray<T>, rows: usize, op: &'static str) -> Result<(Vec<f64>, usize)> {
    let b = to_f64_matrix(b, op)?;
    if b.rows() == rows {
        let k = b.cols();
        return Ok((b.into_vec(), k));
    }
    if b.is_flat() && b.size() == rows {
        return Ok((b.into_vec(), 1));
    }
    Err(Error::shape_mismatch(Shape::new(rows, b.cols()), b.shape()))
}

/// Solve `A x = b` for square `A`
///
/// Pivoted LU followed by forward and back substitution. `b` is either
/// `n x k` (one solve per column) or a flat vector of length `n`, in which
/// case the result is `n x 1`.
///
/// # Errors
///
/// `NotSquare`, `ShapeMismatch` for an incompatible `b`, `UnsupportedDType`,
/// and `SingularMatrix`.
pub fn solve<T: Element, U: Element>(a: &NdArray<T>, b: &NdArray<U>) -> Result<NdArray<f64>> {
    let (a, n) = to_f64_square(a, "solve")?;
    let (rhs, k) = rhs_columns(b, n, "solve")?;
    let factors = factor_pivoted(a.as_slice(), n, "solve")?;
    NdArray::from_vec(n, k, factors.solve_columns(&rhs, k))
}

/// `V diag(σ⁺) U^T` with σ below `cutoff` treated as zero: [n, m]
fn pseudo_inverse(svd: &ThinSvd, cutoff: f64) -> Vec<f64> {
    let ThinSvd { m, n, k, .. } = *svd;
    let inv_sigma: Vec<f64> = svd
        .sigma
        .iter()
        .map(|&s| if s > cutoff { 1.0 / s } else { 0.0 })
        .collect();

    let mut out = vec![0.0; n * m];
    for i in 0..n {
        for j in 0..m {
            out[i * m + j] = (0..k)
                .map(|l| svd.v[i * k + l] * inv_sigma[l] * svd.u[j * k + l])
                .sum();
        }
    }
    out
}

/// Moore-Penrose pseudo-inverse from the SVD, `n x m` for `m x n` input
///
/// Singular values at or below `max(m, n) * ε * σ_max` are treated as zero.
pub fn pinv<T: Element>(a: &NdArray<T>) -> Result<NdArray<f64>> {
    let a = to_f64_matrix(a, "pinv")?;
    let (m, n) = (a.rows(), a.cols());
    let svd = jacobi_svd(a.as_slice(), m, n);
    let sigma_max = svd.sigma.first().copied().unwrap_or(0.0);
    let cutoff = m.max(n) as f64 * f64::EPSILON * sigma_max;
    NdArray::from_vec(n, m, pseudo_inverse(&svd, cutoff))
}

/// Minimum-norm least squares solution of `A x ≈ b`
///
/// Singular values at or below `tolerance * σ_max` are truncated.
/// `b` is `m x k` or a flat vector of length `m`; the result is `n x k`
/// (`n x 1` for a flat `b`). [`DEFAULT_LSTSQ_TOLERANCE`](super::DEFAULT_LSTSQ_TOLERANCE)
/// suits well-scaled problems.
///
/// # Errors
///
/// `ShapeMismatch` for an incompatible `b`, `InvalidArgument` for a
/// negative or non-finite tolerance, `UnsupportedDType`.
pub fn lstsq<T: Element, U: Element>(
    a: &NdArray<T>,
    b: &NdArray<U>,
    tolerance: f64,
) -> Result<NdArray<f64>> {
    if !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(Error::invalid_argument(
            "tolerance",
            format!("must be finite and non-negative, got {tolerance}"),
        ));
    }
    let a = to_f64_matrix(a, "lstsq")?;
    let (m, n) = (a.rows(), a.cols());
    let (rhs, k) = rhs_columns(b, m, "lstsq")?;

    let svd = jacobi_svd(a.as_slice(), m, n);
    let sigma_max = svd.sigma.first().copied().unwrap_or(0.0);
    let pinv = pseudo_inverse(&svd, tolerance * sigma_max);

    let pinv = NdArray::from_vec(n, m, pinv)?;
    let rhs = NdArray::from_vec(m, k, rhs)?;
    pinv.dot(&rhs)
}

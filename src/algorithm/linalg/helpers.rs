//! Helper functions for linear algebra operations
//!
//! Validation utilities, tolerances and the `f64` working-copy conversion
//! shared by every routine in [`crate::linalg`].

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};

/// Upper bound on Jacobi sweeps for `svd` and `eig`
pub const MAX_JACOBI_SWEEPS: usize = 60;

/// Relative singular value cutoff used when callers have no better choice
pub const DEFAULT_LSTSQ_TOLERANCE: f64 = 1e-12;

/// Machine epsilons allowed between two values considered equal
const EPSILON_SCALE: f64 = 64.0;

/// Validate matrix is square, returning its order
pub fn validate_square_matrix(shape: Shape) -> Result<usize> {
    if !shape.is_square() {
        return Err(Error::not_square(shape));
    }
    Ok(shape.rows)
}

/// Validate dtype is real for linear algebra operations
pub fn validate_linalg_dtype(dtype: DType, op: &'static str) -> Result<()> {
    if dtype.is_complex() {
        return Err(Error::unsupported_dtype(dtype, op));
    }
    Ok(())
}

/// Relative comparison scaled by `f64::EPSILON`
///
/// Values below 1 in magnitude are compared absolutely.
#[inline]
pub fn essentially_equal(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON_SCALE * f64::EPSILON * scale
}

/// Threshold below which a pivot of an `n x n` matrix is treated as zero
#[inline]
pub fn pivot_tolerance(data: &[f64], n: usize) -> f64 {
    let max_abs = data.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    (n.max(1) as f64) * f64::EPSILON * max_abs
}

/// Whether a square matrix equals its transpose within [`essentially_equal`]
pub fn is_symmetric(a: &NdArray<f64>) -> bool {
    let n = a.rows();
    let data = a.as_slice();
    (0..n).all(|i| (i + 1..n).all(|j| essentially_equal(data[i * n + j], data[j * n + i])))
}

/// Copy a real matrix into an `f64` working array
///
/// Returns `UnsupportedDType` for complex input.
pub fn to_f64_matrix<T: Element>(a: &NdArray<T>, op: &'static str) -> Result<NdArray<f64>> {
    validate_linalg_dtype(T::DTYPE, op)?;
    Ok(a.astype::<f64>())
}

/// Square `f64` working copy; `NotSquare` and `UnsupportedDType` as above
pub fn to_f64_square<T: Element>(a: &NdArray<T>, op: &'static str) -> Result<(NdArray<f64>, usize)> {
    let n = validate_square_matrix(a.shape())?;
    Ok((to_f64_matrix(a, op)?, n))
}

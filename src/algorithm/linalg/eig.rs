//! Eigendecomposition of real symmetric matrices by two-sided Jacobi
//! rotations

use super::decompositions::EigenDecomposition;
use super::helpers::{MAX_JACOBI_SWEEPS, is_symmetric, to_f64_square};
use super::jacobi::{JacobiRotation, identity, rotate_columns, rotate_symmetric, select_columns};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};
use log::{debug, warn};

/// Eigenvalues (ascending) and row-major eigenvector columns
fn jacobi_eig(a: &[f64], n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut work = a.to_vec();
    let mut v = identity(n);

    let frobenius = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let tol = n as f64 * f64::EPSILON * frobenius;
    let max_off_diag = |w: &[f64]| {
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .fold(0.0f64, |acc, (i, j)| acc.max(w[i * n + j].abs()))
    };

    let mut sweeps = 0;
    while max_off_diag(&work) > tol {
        if sweeps == MAX_JACOBI_SWEEPS {
            warn!("eig: {n}x{n} did not converge within {MAX_JACOBI_SWEEPS} sweeps");
            break;
        }
        sweeps += 1;
        for p in 0..n {
            for q in p + 1..n {
                let a_pq = work[p * n + q];
                if a_pq.abs() <= tol {
                    continue;
                }
                let rot = JacobiRotation::compute(work[p * n + p], work[q * n + q], a_pq);
                rotate_symmetric(&mut work, n, p, q, &rot);
                rotate_columns(&mut v, n, p, q, &rot);
            }
        }
    }
    debug!("eig: {n}x{n} finished after {sweeps} sweeps");

    let diag: Vec<f64> = (0..n).map(|i| work[i * n + i]).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| diag[i].total_cmp(&diag[j]));

    let values = order.iter().map(|&i| diag[i]).collect();
    let vectors = select_columns(&v, n, &order);
    (values, vectors)
}

fn symmetric_input<T: Element>(a: &NdArray<T>, op: &'static str) -> Result<(NdArray<f64>, usize)> {
    let (a, n) = to_f64_square(a, op)?;
    if !is_symmetric(&a) {
        return Err(Error::invalid_argument("a", "eigendecomposition requires a symmetric matrix"));
    }
    Ok((a, n))
}

/// Eigendecomposition of a real symmetric matrix
///
/// Eigenvalues are returned as `1 x n` in ascending order; column `i` of the
/// eigenvector matrix belongs to eigenvalue `i`.
///
/// # Errors
///
/// `NotSquare`, `UnsupportedDType`, and `InvalidArgument` for a
/// non-symmetric matrix.
pub fn eig<T: Element>(a: &NdArray<T>) -> Result<EigenDecomposition> {
    let (a, n) = symmetric_input(a, "eig")?;
    let (values, vectors) = jacobi_eig(a.as_slice(), n);
    Ok(EigenDecomposition {
        eigenvalues: NdArray::from_parts(Shape::new(1, n), values),
        eigenvectors: NdArray::from_vec(n, n, vectors)?,
    })
}

/// Eigenvalues of a real symmetric matrix, ascending, as `1 x n`
pub fn eigvals<T: Element>(a: &NdArray<T>) -> Result<NdArray<f64>> {
    let (a, n) = symmetric_input(a, "eigvals")?;
    let (values, _) = jacobi_eig(a.as_slice(), n);
    Ok(NdArray::from_parts(Shape::new(1, n), values))
}

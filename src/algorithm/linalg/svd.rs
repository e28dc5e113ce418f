//! Singular value decomposition by one-sided Jacobi rotations

use super::decompositions::SvdDecomposition;
use super::helpers::{MAX_JACOBI_SWEEPS, to_f64_matrix};
use super::jacobi::{JacobiRotation, gram_elements, identity, normalize_columns, rotate_columns, select_columns};
use crate::dtype::Element;
use crate::error::Result;
use crate::ndarray::{NdArray, Shape};
use log::{debug, warn};

/// Thin SVD factors as row-major buffers: `U` [m, k], `σ` [k], `V` [n, k]
pub(crate) struct ThinSvd {
    pub(crate) m: usize,
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) u: Vec<f64>,
    pub(crate) sigma: Vec<f64>,
    /// Right singular vectors as columns (not transposed)
    pub(crate) v: Vec<f64>,
}

/// One-sided Jacobi SVD of a row-major `m x n` matrix
///
/// 1. If m < n, factor A^T instead and swap U and V at the end
/// 2. B = A, V = I; rotate column pairs of B (and V) until every pair is
///    orthogonal to within `work_m * ε` relative to the column norms
/// 3. σ_j = ||B[:,j]||, U[:,j] = B[:,j] / σ_j
/// 4. Order by σ descending
pub(crate) fn jacobi_svd(a: &[f64], m: usize, n: usize) -> ThinSvd {
    let k = m.min(n);
    if k == 0 {
        return ThinSvd {
            m,
            n,
            k,
            u: Vec::new(),
            sigma: Vec::new(),
            v: Vec::new(),
        };
    }

    let transpose = m < n;
    let (work_m, work_n) = if transpose { (n, m) } else { (m, n) };
    let mut b = if transpose {
        let mut t = vec![0.0; m * n];
        for i in 0..m {
            for j in 0..n {
                t[j * m + i] = a[i * n + j];
            }
        }
        t
    } else {
        a.to_vec()
    };
    let mut v = identity(work_n);

    let tol = work_m as f64 * f64::EPSILON;
    let mut converged = false;
    let mut sweeps = 0;
    while sweeps < MAX_JACOBI_SWEEPS {
        sweeps += 1;
        let mut rotated = false;
        for p in 0..work_n {
            for q in p + 1..work_n {
                let (a_pp, a_qq, a_pq) = gram_elements(&b, work_n, p, q);
                if a_pq.abs() <= tol * (a_pp * a_qq).sqrt() {
                    continue;
                }
                let rot = JacobiRotation::compute(a_pp, a_qq, a_pq);
                rotate_columns(&mut b, work_n, p, q, &rot);
                rotate_columns(&mut v, work_n, p, q, &rot);
                rotated = true;
            }
        }
        if !rotated {
            converged = true;
            break;
        }
    }
    if converged {
        debug!("svd: {m}x{n} converged after {sweeps} sweeps");
    } else {
        warn!("svd: {m}x{n} did not converge within {MAX_JACOBI_SWEEPS} sweeps");
    }

    let frobenius = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norms = normalize_columns(&mut b, work_n, frobenius * f64::EPSILON);
    let mut order: Vec<usize> = (0..work_n).collect();
    order.sort_by(|&i, &j| norms[j].total_cmp(&norms[i]));

    let sigma: Vec<f64> = order.iter().map(|&j| norms[j]).collect();
    let left = select_columns(&b, work_n, &order);
    let right = select_columns(&v, work_n, &order);

    // A^T = U' Σ V'^T  =>  A = V' Σ U'^T
    let (u, v) = if transpose { (right, left) } else { (left, right) };
    ThinSvd { m, n, k, u, sigma, v }
}

impl ThinSvd {
    /// `V` [n, k] transposed into [k, n]
    fn v_transposed(&self) -> Vec<f64> {
        let mut vt = vec![0.0; self.k * self.n];
        for i in 0..self.n {
            for j in 0..self.k {
                vt[j * self.n + i] = self.v[i * self.k + j];
            }
        }
        vt
    }
}

/// Singular value decomposition: A = U @ S @ V
///
/// For an `m x n` input with `k = min(m, n)`, returns `U` [m, k], `S` as a
/// dense `k x k` diagonal matrix with singular values in descending order,
/// and `V` [k, n] (already transposed).
///
/// ```
/// use numcore::prelude::*;
///
/// let a = NdArray::from_vec(2, 3, vec![3.0, 2.0, 2.0, 2.0, 3.0, -2.0])?;
/// let (u, s, v) = linalg::svd(&a)?.into_parts();
/// let back = u.dot(&s)?.dot(&v)?;
/// assert!(back.iter().zip(a.iter()).all(|(x, y)| (x - y).abs() < 1e-10));
/// assert!((s.get_at(0, 0)? - 5.0).abs() < 1e-10);
/// # Ok::<(), numcore::error::Error>(())
/// ```
///
/// # Errors
///
/// `UnsupportedDType` for complex input.
pub fn svd<T: Element>(a: &NdArray<T>) -> Result<SvdDecomposition> {
    let a = to_f64_matrix(a, "svd")?;
    let thin = jacobi_svd(a.as_slice(), a.rows(), a.cols());

    let mut s = NdArray::<f64>::square(thin.k);
    for (i, &sigma) in thin.sigma.iter().enumerate() {
        s[(i, i)] = sigma;
    }
    let vt = thin.v_transposed();

    Ok(SvdDecomposition {
        u: NdArray::from_vec(thin.m, thin.k, thin.u)?,
        s,
        v: NdArray::from_vec(thin.k, thin.n, vt)?,
    })
}

/// Singular values only, descending, as a `1 x k` array
pub fn svdvals<T: Element>(a: &NdArray<T>) -> Result<NdArray<f64>> {
    let a = to_f64_matrix(a, "svdvals")?;
    let thin = jacobi_svd(a.as_slice(), a.rows(), a.cols());
    Ok(NdArray::from_parts(Shape::new(1, thin.k), thin.sigma))
}

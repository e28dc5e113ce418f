//! Jacobi rotation utilities shared by one-sided SVD and two-sided
//! symmetric eigendecomposition
//!
//! Matrices are row-major `f64` slices. The rotation parameters use the
//! LAPACK formula to avoid catastrophic cancellation.

/// Jacobi rotation parameters (cosine and sine of rotation angle)
///
/// ```text
/// J = [ c  s ]
///     [-s  c ]
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JacobiRotation {
    /// Cosine of rotation angle
    pub c: f64,
    /// Sine of rotation angle
    pub s: f64,
}

impl JacobiRotation {
    /// Rotation that zeroes `a_pq` of the symmetric 2x2 block
    /// `[[a_pp, a_pq], [a_pq, a_qq]]`
    ///
    /// ```text
    /// τ = (a_qq - a_pp) / (2 * a_pq)
    /// t = sign(τ) / (|τ| + sqrt(1 + τ²))
    /// c = 1 / sqrt(1 + t²)
    /// s = t * c
    /// ```
    #[inline]
    pub fn compute(a_pp: f64, a_qq: f64, a_pq: f64) -> Self {
        let tau_den = 2.0 * a_pq;
        if tau_den.abs() < 1e-300 {
            return Self { c: 1.0, s: 0.0 };
        }

        let tau = (a_qq - a_pp) / tau_den;
        let t = tau.signum() / (tau.abs() + (1.0 + tau * tau).sqrt());
        let c = 1.0 / (1.0 + t * t).sqrt();
        Self { c, s: t * c }
    }
}

/// `[col_p, col_q] <- [c*col_p - s*col_q, s*col_p + c*col_q]`
#[inline]
pub fn rotate_columns(data: &mut [f64], cols: usize, p: usize, q: usize, rot: &JacobiRotation) {
    for row in data.chunks_exact_mut(cols) {
        let (vp, vq) = (row[p], row[q]);
        row[p] = rot.c * vp - rot.s * vq;
        row[q] = rot.s * vp + rot.c * vq;
    }
}

/// `A <- J^T A J` on a symmetric `n x n` matrix, zeroing `A[p,q]`
pub fn rotate_symmetric(work: &mut [f64], n: usize, p: usize, q: usize, rot: &JacobiRotation) {
    let (a_pp, a_qq, a_pq) = (work[p * n + p], work[q * n + q], work[p * n + q]);
    let JacobiRotation { c, s } = *rot;

    for k in (0..n).filter(|&k| k != p && k != q) {
        let a_kp = work[k * n + p];
        let a_kq = work[k * n + q];
        let new_kp = c * a_kp - s * a_kq;
        let new_kq = s * a_kp + c * a_kq;
        work[k * n + p] = new_kp;
        work[p * n + k] = new_kp;
        work[k * n + q] = new_kq;
        work[q * n + k] = new_kq;
    }

    let (c2, s2, cs2) = (c * c, s * s, 2.0 * c * s);
    work[p * n + p] = c2 * a_pp - cs2 * a_pq + s2 * a_qq;
    work[q * n + q] = s2 * a_pp + cs2 * a_pq + c2 * a_qq;
    work[p * n + q] = 0.0;
    work[q * n + p] = 0.0;
}

/// `(B[:,p]·B[:,p], B[:,q]·B[:,q], B[:,p]·B[:,q])`
#[inline]
pub fn gram_elements(b: &[f64], cols: usize, p: usize, q: usize) -> (f64, f64, f64) {
    b.chunks_exact(cols)
        .fold((0.0, 0.0, 0.0), |(pp, qq, pq), row| {
            let (bp, bq) = (row[p], row[q]);
            (pp + bp * bp, qq + bq * bq, pq + bp * bq)
        })
}

/// `n x n` identity, row-major
pub fn identity(n: usize) -> Vec<f64> {
    let mut out = vec![0.0; n * n];
    for i in 0..n {
        out[i * n + i] = 1.0;
    }
    out
}

/// Normalize each column in place and return the original norms
///
/// Columns with norm at or below `eps` are zeroed.
pub fn normalize_columns(data: &mut [f64], cols: usize, eps: f64) -> Vec<f64> {
    let mut norms = vec![0.0; cols];
    for row in data.chunks_exact(cols) {
        for (n, &v) in norms.iter_mut().zip(row) {
            *n += v * v;
        }
    }
    norms.iter_mut().for_each(|n| *n = n.sqrt());

    for row in data.chunks_exact_mut(cols) {
        for (v, &n) in row.iter_mut().zip(&norms) {
            *v = if n > eps { *v / n } else { 0.0 };
        }
    }
    norms
}

/// Copy columns `indices[..]` (in that order) into a `rows x indices.len()`
/// matrix
pub fn select_columns(data: &[f64], cols: usize, indices: &[usize]) -> Vec<f64> {
    data.chunks_exact(cols.max(1))
        .flat_map(|row| indices.iter().map(move |&j| row[j]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_zero_offdiag() {
        let rot = JacobiRotation::compute(1.0, 2.0, 0.0);
        assert!((rot.c - 1.0).abs() < 1e-10);
        assert!(rot.s.abs() < 1e-10);
    }

    #[test]
    fn test_rotation_equal_diag() {
        let rot = JacobiRotation::compute(1.0, 1.0, 0.5);
        let expected = 1.0 / 2.0f64.sqrt();
        assert!((rot.c - expected).abs() < 1e-10);
        assert!((rot.s.abs() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_rotate_symmetric_diagonalizes_2x2() {
        let mut work = vec![2.0, 1.0, 1.0, 2.0];
        let rot = JacobiRotation::compute(work[0], work[3], work[1]);
        rotate_symmetric(&mut work, 2, 0, 1, &rot);
        let mut diag = [work[0], work[3]];
        diag.sort_by(f64::total_cmp);
        assert!((diag[0] - 1.0).abs() < 1e-12);
        assert!((diag[1] - 3.0).abs() < 1e-12);
        assert_eq!(work[1], 0.0);
    }

    #[test]
    fn test_normalize_and_select() {
        let mut data = vec![3.0, 0.0, 4.0, 0.0];
        let norms = normalize_columns(&mut data, 2, 1e-12);
        assert_eq!(norms, vec![5.0, 0.0]);
        assert_eq!(data, vec![0.6, 0.0, 0.8, 0.0]);
        assert_eq!(select_columns(&data, 2, &[1, 0]), vec![0.0, 0.6, 0.0, 0.8]);
    }
}

//! Determinant

use super::helpers::{to_f64_matrix, validate_square_matrix};
use crate::dtype::Element;
use crate::error::Result;
use crate::ndarray::NdArray;

/// Determinant of a square matrix
///
/// Orders up to 3 use closed forms evaluated in `T`, which keeps integer
/// results exact and also accepts complex input. Larger matrices (and
/// unsigned element types, whose cofactors can go negative) are reduced by
/// partial-pivot elimination in `f64`; integer results are rounded to the
/// nearest value. The determinant of a `0 x 0` matrix is 1.
///
/// # Errors
///
/// `NotSquare` for rectangular input, `UnsupportedDType` for complex input
/// larger than 3 x 3.
pub fn det<T: Element>(a: &NdArray<T>) -> Result<T> {
    let n = validate_square_matrix(a.shape())?;
    let m = a.as_slice();

    if T::DTYPE.is_unsigned_int() && n > 1 {
        return det_by_elimination(a);
    }

    Ok(match n {
        0 => T::one(),
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        3 => {
            let minor = |i: usize, j: usize, k: usize, l: usize| m[i] * m[j] - m[k] * m[l];
            m[0] * minor(4, 8, 5, 7) - m[1] * minor(3, 8, 5, 6) + m[2] * minor(3, 7, 4, 6)
        }
        _ => return det_by_elimination(a),
    })
}

fn det_by_elimination<T: Element>(a: &NdArray<T>) -> Result<T> {
    let n = a.rows();
    let mut work = to_f64_matrix(a, "det")?.into_vec();
    let mut det = 1.0;

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&i, &j| work[i * n + k].abs().total_cmp(&work[j * n + k].abs()))
            .unwrap_or(k);
        let pivot = work[pivot_row * n + k];
        if pivot == 0.0 {
            return Ok(T::zero());
        }
        if pivot_row != k {
            for j in 0..n {
                work.swap(k * n + j, pivot_row * n + j);
            }
            det = -det;
        }
        det *= pivot;

        for i in k + 1..n {
            let factor = work[i * n + k] / pivot;
            if factor != 0.0 {
                for j in k..n {
                    work[i * n + j] -= factor * work[k * n + j];
                }
            }
        }
    }

    if T::DTYPE.is_int() {
        det = det.round();
    }
    Ok(T::from_f64(det))
}

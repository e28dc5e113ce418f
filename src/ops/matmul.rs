//! Matrix product
//!
//! `dot` computes `C[m, n] = A[m, k] @ B[k, n]` with an i-k-j loop so the
//! inner loop streams contiguous rows of `B` and `C`. With the `rayon`
//! feature, output rows are computed in parallel once the product is large
//! enough to amortise the thread-pool overhead.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Skip Rayon below this many multiply-adds
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 32 * 1024;

/// One output row: `out += a_row @ b`
#[inline]
fn row_product<T: Element>(a_row: &[T], b: &[T], n: usize, out: &mut [T]) {
    for (kk, &a_ik) in a_row.iter().enumerate() {
        let b_row = &b[kk * n..(kk + 1) * n];
        for (o, &b_kj) in out.iter_mut().zip(b_row) {
            *o = *o + a_ik * b_kj;
        }
    }
}

fn matmul_kernel<T: Element>(a: &[T], b: &[T], out: &mut [T], k: usize, n: usize) {
    if n == 0 {
        return;
    }

    #[cfg(feature = "rayon")]
    if out.len() * k >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(n).enumerate().for_each(|(i, out_row)| {
            row_product(&a[i * k..(i + 1) * k], b, n, out_row);
        });
        return;
    }

    for (i, out_row) in out.chunks_mut(n).enumerate() {
        row_product(&a[i * k..(i + 1) * k], b, n, out_row);
    }
}

impl<T: Element> NdArray<T> {
    /// Matrix product of `self` and `other`
    ///
    /// Two flat vectors with the same number of elements whose shapes do not
    /// chain give their `1 x 1` inner product. Any other pair with
    /// `self.cols() != other.rows()` returns `ShapeMismatch`.
    ///
    /// ```
    /// use numcore::prelude::*;
    ///
    /// let a = NdArray::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = NdArray::from_vec(2, 1, vec![1.0, 1.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap().as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn dot(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        if self.cols() != other.rows() {
            if self.is_flat() && other.is_flat() && self.size() == other.size() {
                let inner = self
                    .iter()
                    .zip(other.iter())
                    .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
                return Ok(NdArray::from_parts(Shape::new(1, 1), vec![inner]));
            }
            return Err(Error::shape_mismatch(
                Shape::new(self.cols(), other.cols()),
                other.shape(),
            ));
        }

        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let mut out = vec![T::zero(); m * n];
        matmul_kernel(self.as_slice(), other.as_slice(), &mut out, k, n);
        Ok(NdArray::from_parts(Shape::new(m, n), out))
    }
}

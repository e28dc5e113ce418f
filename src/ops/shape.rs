//! Shape manipulation: reshape, resize, transpose, tiling and diagonals

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape, wrap_index};

impl<T> NdArray<T> {
    /// True when the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// True for a single row or a single column
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.rows() == 1 || self.cols() == 1
    }

    /// True for exactly one element
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.size() == 1
    }

    /// True when rows equal columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Size of the element buffer in bytes
    #[inline]
    pub fn nbytes(&self) -> usize {
        self.size() * std::mem::size_of::<T>()
    }

    /// Reinterpret the buffer as `rows x cols`
    ///
    /// Returns `ShapeMismatch` if the element count would change.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Self> {
        let shape = Shape::new(rows, cols);
        if shape.size() != self.size() {
            return Err(Error::shape_mismatch(self.shape(), shape));
        }
        self.set_shape(shape);
        Ok(self)
    }

    /// Reshape with at most one dimension given as `-1` and inferred
    pub fn reshape_inferred(&mut self, rows: isize, cols: isize) -> Result<&mut Self> {
        let size = self.size();
        let infer = |known: isize, arg: &'static str| -> Result<usize> {
            if known <= 0 {
                return Err(Error::invalid_argument(arg, "cannot infer against a non-positive dimension"));
            }
            let known = known as usize;
            if size % known != 0 {
                return Err(Error::invalid_argument(
                    arg,
                    format!("{size} elements do not divide into {known}"),
                ));
            }
            Ok(size / known)
        };
        let (r, c) = match (rows, cols) {
            (-1, -1) => return Err(Error::invalid_argument("rows", "only one dimension may be -1")),
            (-1, c) => (infer(c, "cols")?, c as usize),
            (r, -1) => (r as usize, infer(r, "rows")?),
            (r, c) if r < 0 || c < 0 => {
                return Err(Error::invalid_argument("rows", "dimensions must be non-negative or -1"));
            }
            (r, c) => (r as usize, c as usize),
        };
        self.reshape(r, c)
    }
}

impl<T: Copy + Default> NdArray<T> {
    /// Resize to `rows x cols`, discarding the contents (zero-filled)
    pub fn resize_fast(&mut self, rows: usize, cols: usize) -> &mut Self {
        let shape = Shape::new(rows, cols);
        self.replace_parts(shape, vec![T::default(); shape.size()]);
        self
    }

    /// Resize to `rows x cols`, keeping the overlapping top-left block and
    /// zero-filling the rest
    pub fn resize_slow(&mut self, rows: usize, cols: usize) -> &mut Self {
        let shape = Shape::new(rows, cols);
        let mut data = vec![T::default(); shape.size()];
        let keep_rows = rows.min(self.rows());
        let keep_cols = cols.min(self.cols());
        for r in 0..keep_rows {
            let src = r * self.cols();
            data[r * cols..r * cols + keep_cols]
                .copy_from_slice(&self.as_slice()[src..src + keep_cols]);
        }
        self.replace_parts(shape, data);
        self
    }

    /// Transposed copy
    pub fn transpose(&self) -> NdArray<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let src = self.as_slice();
        let mut data = Vec::with_capacity(self.size());
        for c in 0..cols {
            data.extend((0..rows).map(|r| src[r * cols + c]));
        }
        NdArray::from_parts(self.shape().transposed(), data)
    }

    /// Copy as a `1 x size` row vector
    pub fn flatten(&self) -> NdArray<T> {
        NdArray::from_parts(Shape::new(1, self.size()), self.to_vec())
    }

    /// Tile the array `rows` times vertically and `cols` times horizontally
    pub fn repeat(&self, rows: usize, cols: usize) -> NdArray<T> {
        let shape = Shape::new(self.rows() * rows, self.cols() * cols);
        let mut data = Vec::with_capacity(shape.size());
        for _ in 0..rows {
            for row in self.as_slice().chunks(self.cols().max(1)) {
                for _ in 0..cols {
                    data.extend_from_slice(row);
                }
            }
        }
        NdArray::from_parts(shape, data)
    }

    /// Swap two rows in place; negative indices count from the end
    pub fn swap_rows(&mut self, a: isize, b: isize) -> Result<&mut Self> {
        let a = wrap_index(a, self.rows())?;
        let b = wrap_index(b, self.rows())?;
        let cols = self.cols();
        for c in 0..cols {
            self.as_mut_slice().swap(a * cols + c, b * cols + c);
        }
        Ok(self)
    }

    /// Swap two columns in place; negative indices count from the end
    pub fn swap_cols(&mut self, a: isize, b: isize) -> Result<&mut Self> {
        let a = wrap_index(a, self.cols())?;
        let b = wrap_index(b, self.cols())?;
        let cols = self.cols();
        for r in 0..self.rows() {
            self.as_mut_slice().swap(r * cols + a, r * cols + b);
        }
        Ok(self)
    }

    /// Diagonal as a `1 x k` array
    ///
    /// A positive `offset` selects a diagonal above the main one, a negative
    /// one below it. Offsets past the edge give an empty array.
    pub fn diagonal(&self, offset: isize) -> NdArray<T> {
        let (row0, col0) = if offset >= 0 {
            (0, offset.unsigned_abs())
        } else {
            (offset.unsigned_abs(), 0)
        };
        let len = self
            .rows()
            .saturating_sub(row0)
            .min(self.cols().saturating_sub(col0));
        let data: Vec<T> = (0..len)
            .map(|i| self.as_slice()[(row0 + i) * self.cols() + col0 + i])
            .collect();
        NdArray::from_parts(Shape::new(1, len), data)
    }
}

impl<T: Element> NdArray<T> {
    /// Sum of the diagonal selected by `offset`
    pub fn trace(&self, offset: isize) -> T {
        self.diagonal(offset)
            .iter()
            .fold(T::zero(), |acc, &x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape() {
        let mut a = NdArray::<i32>::arange(6);
        a.reshape(2, 3).unwrap();
        assert_eq!(a.shape(), Shape::new(2, 3));
        assert!(a.reshape(4, 2).is_err());
        assert_eq!(a.shape(), Shape::new(2, 3));

        a.reshape_inferred(-1, 2).unwrap();
        assert_eq!(a.shape(), Shape::new(3, 2));
        a.reshape_inferred(1, -1).unwrap();
        assert_eq!(a.shape(), Shape::new(1, 6));
        assert!(a.reshape_inferred(-1, 4).is_err());
        assert!(a.reshape_inferred(-1, -1).is_err());
    }

    #[test]
    fn test_resize() {
        let mut a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        a.resize_slow(3, 1);
        assert_eq!(a.as_slice(), &[1, 3, 0]);

        let mut b = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        b.resize_slow(2, 3);
        assert_eq!(b.as_slice(), &[1, 2, 0, 3, 4, 0]);

        b.resize_fast(1, 2);
        assert_eq!(b.as_slice(), &[0, 0]);
    }

    #[test]
    fn test_transpose_and_flatten() {
        let a = NdArray::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), a);
        assert_eq!(a.flatten().shape(), Shape::new(1, 6));
    }

    #[test]
    fn test_repeat() {
        let a = NdArray::from_vec(1, 2, vec![1, 2]).unwrap();
        let r = a.repeat(2, 2);
        assert_eq!(r.shape(), Shape::new(2, 4));
        assert_eq!(r.as_slice(), &[1, 2, 1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_swaps() {
        let mut a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        a.swap_rows(0, -1).unwrap();
        assert_eq!(a.as_slice(), &[3, 4, 1, 2]);
        a.swap_cols(0, 1).unwrap();
        assert_eq!(a.as_slice(), &[4, 3, 2, 1]);
        assert!(a.swap_rows(0, 2).is_err());
    }

    #[test]
    fn test_diagonal_and_trace() {
        let a = NdArray::from_vec(3, 3, (1..=9).collect()).unwrap();
        assert_eq!(a.diagonal(0).as_slice(), &[1, 5, 9]);
        assert_eq!(a.diagonal(1).as_slice(), &[2, 6]);
        assert_eq!(a.diagonal(-2).as_slice(), &[7]);
        assert!(a.diagonal(3).is_empty());
        assert_eq!(a.trace(0), 15);
        assert_eq!(a.trace(-1), 12);
    }

    #[test]
    fn test_predicates() {
        let a = NdArray::<f64>::zeros(1, 4);
        assert!(a.is_flat());
        assert!(!a.is_square());
        assert_eq!(a.nbytes(), 32);
        assert!(NdArray::<f64>::zeros(1, 1).is_scalar());
        assert!(NdArray::<f64>::new().is_empty());
    }
}

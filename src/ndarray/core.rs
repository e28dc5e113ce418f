//! Core NdArray type

use super::{Endian, Shape, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense two-dimensional array stored in row-major order
///
/// `NdArray` is the fundamental data structure in numcore. It consists of:
/// - **Shape**: `rows x cols`
/// - **Storage**: an exclusively owned buffer of exactly `rows * cols` elements
///
/// Every array owns its data. `clone()` is a deep copy and there are no views,
/// so mutation through `&mut` never affects another array.
///
/// # Example
///
/// ```
/// use numcore::prelude::*;
///
/// let a = NdArray::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.get_at(1, 0).unwrap(), 3.0);
/// assert_eq!(a.shape(), Shape::new(2, 2));
/// ```
#[derive(Clone, Debug)]
pub struct NdArray<T> {
    shape: Shape,
    storage: Storage<T>,
}

/// Resolve a possibly negative index against an axis of length `n`
#[inline]
pub(crate) fn wrap_index(index: isize, n: usize) -> Result<usize> {
    let resolved = if index < 0 { index + n as isize } else { index };
    if resolved < 0 || resolved as usize >= n {
        return Err(Error::index_out_of_range(index, n));
    }
    Ok(resolved as usize)
}

// ============================================================================
// Shape queries and raw access (no bounds on T)
// ============================================================================

impl<T> NdArray<T> {
    /// Build from a vector whose length already matches `shape`
    #[inline]
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.size(), data.len());
        Self {
            shape,
            storage: Storage::from_vec(data),
        }
    }

    /// Create an array from a row-major vector
    ///
    /// Returns `ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(rows, cols);
        if data.len() != shape.size() {
            return Err(Error::shape_mismatch(shape, Shape::new(1, data.len())));
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Shape of the array
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Total number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    /// Elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Mutable elements in row-major order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Consume the array and return its elements in row-major order
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage<T> {
        &mut self.storage
    }

    /// Byte order tag of the buffer
    #[inline]
    pub fn endianess(&self) -> Endian {
        self.storage.endian()
    }

    /// Replace shape and buffer together; the caller guarantees they agree
    #[inline]
    pub(crate) fn replace_parts(&mut self, shape: Shape, data: Vec<T>) {
        debug_assert_eq!(shape.size(), data.len());
        let endian = self.storage.endian();
        self.shape = shape;
        self.storage = Storage::from_vec(data);
        self.storage.set_endian(endian);
    }

    /// Change the shape without touching the buffer; sizes must agree
    #[inline]
    pub(crate) fn set_shape(&mut self, shape: Shape) {
        debug_assert_eq!(shape.size(), self.storage.len());
        self.shape = shape;
    }

    /// Flat row-major offset of `(row, col)` with negative wrap per axis
    #[inline]
    pub(crate) fn offset(&self, row: isize, col: isize) -> Result<usize> {
        let r = wrap_index(row, self.shape.rows)?;
        let c = wrap_index(col, self.shape.cols)?;
        Ok(r * self.shape.cols + c)
    }
}

// ============================================================================
// Construction and element access
// ============================================================================

impl<T: Copy + Default> NdArray<T> {
    /// Empty `0 x 0` array
    pub fn new() -> Self {
        Self::from_parts(Shape::default(), Vec::new())
    }

    /// Zero-filled `n x n` array
    pub fn square(n: usize) -> Self {
        Self::from_shape(Shape::square(n))
    }

    /// Zero-filled `rows x cols` array
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self::from_shape(Shape::new(rows, cols))
    }

    /// Zero-filled array of the given shape
    pub fn from_shape(shape: Shape) -> Self {
        Self {
            shape,
            storage: Storage::zeroed(shape.size()),
        }
    }

    /// Zero-filled `rows x cols` array
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::with_shape(rows, cols)
    }

    /// `rows x cols` array filled with `value`
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self::from_parts(Shape::new(rows, cols), vec![value; rows * cols])
    }

    /// `1 x n` row vector copied from a slice
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_parts(Shape::new(1, data.len()), data.to_vec())
    }

    /// Build from a list of equally long rows
    ///
    /// Returns `ShapeMismatch` for ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::shape_mismatch(
                    Shape::new(1, cols),
                    Shape::new(1, row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(Shape::new(rows.len(), cols), data))
    }

    /// Copy an external buffer into the array
    ///
    /// `data.len()` must equal `size()`; nothing is written otherwise.
    pub fn set_array(&mut self, data: &[T]) -> Result<()> {
        if data.len() != self.size() {
            return Err(Error::shape_mismatch(self.shape, Shape::new(1, data.len())));
        }
        self.as_mut_slice().copy_from_slice(data);
        Ok(())
    }

    /// Copy of the elements in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Flat element access; negative indices count from the end
    pub fn get(&self, index: isize) -> Result<T> {
        let i = wrap_index(index, self.size())?;
        Ok(self.as_slice()[i])
    }

    /// Flat element write; negative indices count from the end
    pub fn put(&mut self, index: isize, value: T) -> Result<()> {
        let i = wrap_index(index, self.size())?;
        self.as_mut_slice()[i] = value;
        Ok(())
    }

    /// Element at `(row, col)`; negative indices wrap per axis
    pub fn get_at(&self, row: isize, col: isize) -> Result<T> {
        let i = self.offset(row, col)?;
        Ok(self.as_slice()[i])
    }

    /// Write the element at `(row, col)`; negative indices wrap per axis
    pub fn put_at(&mut self, row: isize, col: isize, value: T) -> Result<()> {
        let i = self.offset(row, col)?;
        self.as_mut_slice()[i] = value;
        Ok(())
    }

    /// First element
    pub fn front(&self) -> Result<T> {
        self.get(0)
    }

    /// Last element
    pub fn back(&self) -> Result<T> {
        self.get(-1)
    }

    /// The single element of a `1 x 1` array
    pub fn item(&self) -> Result<T> {
        if self.size() != 1 {
            return Err(Error::shape_mismatch(Shape::new(1, 1), self.shape));
        }
        Ok(self.as_slice()[0])
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.as_mut_slice().fill(value);
        self
    }

    /// Set every element to zero
    pub fn fill_zeros(&mut self) -> &mut Self {
        self.fill(T::default())
    }
}

impl<T: Copy + Default> Default for NdArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Numeric constructors
// ============================================================================

impl<T: Element> NdArray<T> {
    /// Runtime dtype tag of the elements
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// `rows x cols` array of ones
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::one())
    }

    /// Set every element to one
    pub fn fill_ones(&mut self) -> &mut Self {
        self.fill(T::one())
    }

    /// `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        Self::eye(n, n)
    }

    /// `rows x cols` matrix with ones on the main diagonal
    pub fn eye(rows: usize, cols: usize) -> Self {
        let mut out = Self::with_shape(rows, cols);
        for i in 0..rows.min(cols) {
            out.as_mut_slice()[i * cols + i] = T::one();
        }
        out
    }

    /// `1 x n` row vector `0, 1, ..., n-1`
    pub fn arange(n: usize) -> Self {
        let data = (0..n).map(|i| T::from_f64(i as f64)).collect();
        Self::from_parts(Shape::new(1, n), data)
    }

    /// `1 x num` row vector of evenly spaced values over `[start, stop]`
    pub fn linspace(start: f64, stop: f64, num: usize) -> Self {
        let step = if num > 1 {
            (stop - start) / (num - 1) as f64
        } else {
            0.0
        };
        let data = (0..num)
            .map(|i| {
                if num > 1 && i == num - 1 {
                    T::from_f64(stop)
                } else {
                    T::from_f64(start + step * i as f64)
                }
            })
            .collect();
        Self::from_parts(Shape::new(1, num), data)
    }

    /// Convert every element to another element type
    ///
    /// Real to real goes through `f64`; real to complex keeps the value as the
    /// real part; complex to real keeps the real part.
    pub fn astype<U: Element>(&self) -> NdArray<U> {
        let data = self
            .as_slice()
            .iter()
            .map(|&x| {
                if T::DTYPE.is_complex() || U::DTYPE.is_complex() {
                    U::from_complex128(x.to_complex128())
                } else {
                    U::from_f64(x.to_f64())
                }
            })
            .collect();
        NdArray::from_parts(self.shape, data)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T: PartialEq> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for NdArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for NdArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<(usize, usize)> for NdArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.shape.rows && col < self.shape.cols,
            "index ({row}, {col}) out of bounds for shape {}",
            self.shape
        );
        &self.as_slice()[row * self.shape.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for NdArray<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.shape.rows && col < self.shape.cols,
            "index ({row}, {col}) out of bounds for shape {}",
            self.shape
        );
        let cols = self.shape.cols;
        &mut self.as_mut_slice()[row * cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.shape.rows {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            let row = &self.as_slice()[r * self.shape.cols..(r + 1) * self.shape.cols];
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_shape() {
        let a = NdArray::<f64>::with_shape(3, 4);
        assert_eq!(a.shape(), Shape::new(3, 4));
        assert_eq!(a.size(), 12);
        assert!(a.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(NdArray::from_vec(2, 2, vec![1, 2, 3]).is_err());
        let a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a[(1, 1)], 4);
    }

    #[test]
    fn test_from_rows() {
        let a = NdArray::<i32>::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(a.shape(), Shape::new(2, 3));
        assert_eq!(a.get_at(1, 2).unwrap(), 6);

        let ragged: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        assert!(NdArray::<i32>::from_rows(&ragged).is_err());
    }

    #[test]
    fn test_negative_indexing() {
        let a = NdArray::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(a.get(-1).unwrap(), 6);
        assert_eq!(a.get_at(-1, -3).unwrap(), 4);
        assert!(matches!(
            a.get(6),
            Err(Error::IndexOutOfRange { index: 6, size: 6 })
        ));
        assert!(a.get_at(0, 3).is_err());
        assert!(a.get(-7).is_err());
    }

    #[test]
    fn test_put_and_item() {
        let mut a = NdArray::<i32>::square(1);
        a.put(0, 7).unwrap();
        assert_eq!(a.item().unwrap(), 7);
        assert!(NdArray::<i32>::square(2).item().is_err());
    }

    #[test]
    fn test_set_array_rejects_wrong_length() {
        let mut a = NdArray::<f64>::with_shape(2, 2);
        assert!(a.set_array(&[1.0, 2.0]).is_err());
        assert!(a.as_slice().iter().all(|&x| x == 0.0));
        a.set_array(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.back().unwrap(), 4.0);
    }

    #[test]
    fn test_eye_and_identity() {
        let e = NdArray::<f64>::eye(2, 3);
        assert_eq!(e.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(NdArray::<i32>::identity(2).as_slice(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_linspace_and_arange() {
        let l = NdArray::<f64>::linspace(0.0, 1.0, 5);
        assert_eq!(l.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(NdArray::<u8>::arange(4).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_astype() {
        let a = NdArray::from_slice(&[1.7f64, -2.2]);
        assert_eq!(a.astype::<i32>().as_slice(), &[1, -2]);
        let c = a.astype::<crate::dtype::Complex128>();
        assert_eq!(c.as_slice()[0].re, 1.7);
        assert_eq!(c.as_slice()[0].im, 0.0);
    }

    #[test]
    fn test_display() {
        let a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
    }
}

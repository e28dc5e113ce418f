//! Slicing, gathering and scattering, plus value-level edits

use super::map_array;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape, Slice, wrap_index};
use num_traits::Float;

impl<T: Copy + Default> NdArray<T> {
    /// Slice covering every row
    pub fn row_slice(&self) -> Slice {
        Slice::range(0, self.rows() as isize)
    }

    /// Slice covering every column
    pub fn col_slice(&self) -> Slice {
        Slice::range(0, self.cols() as isize)
    }

    /// Flat offsets selected by a row slice and a column slice, row-major
    fn slice_offsets(&self, rows: &Slice, cols: &Slice) -> Result<(Shape, Vec<usize>)> {
        let row_idx = rows.to_indices(self.rows())?;
        let col_idx = cols.to_indices(self.cols())?;
        let shape = Shape::new(row_idx.len(), col_idx.len());
        let offsets = row_idx
            .iter()
            .flat_map(|&r| col_idx.iter().map(move |&c| r * self.cols() + c))
            .collect();
        Ok((shape, offsets))
    }

    /// Copy of the cross product of `rows` and `cols`
    ///
    /// ```
    /// use numcore::prelude::*;
    ///
    /// let a = NdArray::from_vec(3, 3, (0..9).collect()).unwrap();
    /// let corners = a.get_slice(&Slice::new(0, 3, 2).unwrap(), &Slice::new(0, 3, 2).unwrap()).unwrap();
    /// assert_eq!(corners.as_slice(), &[0, 2, 6, 8]);
    /// ```
    pub fn get_slice(&self, rows: &Slice, cols: &Slice) -> Result<NdArray<T>> {
        let (shape, offsets) = self.slice_offsets(rows, cols)?;
        let data = offsets.iter().map(|&i| self.as_slice()[i]).collect();
        Ok(NdArray::from_parts(shape, data))
    }

    /// Write `value` into every selected position
    pub fn put_slice(&mut self, rows: &Slice, cols: &Slice, value: T) -> Result<&mut Self> {
        let (_, offsets) = self.slice_offsets(rows, cols)?;
        for i in offsets {
            self.as_mut_slice()[i] = value;
        }
        Ok(self)
    }

    /// Write `values` into the selected positions
    ///
    /// `values` must have the region's `(row_count, col_count)` shape; nothing
    /// is written otherwise.
    pub fn put_slice_array(
        &mut self,
        rows: &Slice,
        cols: &Slice,
        values: &NdArray<T>,
    ) -> Result<&mut Self> {
        let (shape, offsets) = self.slice_offsets(rows, cols)?;
        if values.shape() != shape {
            return Err(Error::shape_mismatch(shape, values.shape()));
        }
        for (i, &v) in offsets.into_iter().zip(values.iter()) {
            self.as_mut_slice()[i] = v;
        }
        Ok(self)
    }

    /// Row `row` as a `1 x cols` array; negative indices count from the end
    pub fn row(&self, row: isize) -> Result<NdArray<T>> {
        let r = wrap_index(row, self.rows())?;
        let start = r * self.cols();
        Ok(NdArray::from_slice(&self.as_slice()[start..start + self.cols()]))
    }

    /// Column `col` as a `rows x 1` array; negative indices count from the end
    pub fn column(&self, col: isize) -> Result<NdArray<T>> {
        let c = wrap_index(col, self.cols())?;
        let data = (0..self.rows())
            .map(|r| self.as_slice()[r * self.cols() + c])
            .collect();
        Ok(NdArray::from_parts(Shape::new(self.rows(), 1), data))
    }

    fn check_flat_indices(&self, indices: &NdArray<usize>) -> Result<()> {
        match indices.iter().find(|&&i| i >= self.size()) {
            Some(&bad) => Err(Error::index_out_of_range(bad as isize, self.size())),
            None => Ok(()),
        }
    }

    fn check_mask(&self, mask: &NdArray<bool>) -> Result<()> {
        if mask.shape() != self.shape() {
            return Err(Error::shape_mismatch(self.shape(), mask.shape()));
        }
        Ok(())
    }

    /// Gather the elements at flat `indices` into a `1 x k` array
    pub fn get_by_indices(&self, indices: &NdArray<usize>) -> Result<NdArray<T>> {
        self.check_flat_indices(indices)?;
        let data = indices.iter().map(|&i| self.as_slice()[i]).collect();
        Ok(NdArray::from_parts(Shape::new(1, indices.size()), data))
    }

    /// Gather the elements where `mask` is true, in row-major order
    pub fn get_by_mask(&self, mask: &NdArray<bool>) -> Result<NdArray<T>> {
        self.check_mask(mask)?;
        let data: Vec<T> = self
            .iter()
            .zip(mask.iter())
            .filter_map(|(&v, &m)| m.then_some(v))
            .collect();
        Ok(NdArray::from_parts(Shape::new(1, data.len()), data))
    }

    /// Write `value` at every flat index in `indices`
    pub fn put_indices(&mut self, indices: &NdArray<usize>, value: T) -> Result<&mut Self> {
        self.check_flat_indices(indices)?;
        for &i in indices.iter() {
            self.as_mut_slice()[i] = value;
        }
        Ok(self)
    }

    /// Write `value` wherever `mask` is true
    pub fn put_mask(&mut self, mask: &NdArray<bool>, value: T) -> Result<&mut Self> {
        self.check_mask(mask)?;
        for (v, &m) in self.iter_mut().zip(mask.iter()) {
            if m {
                *v = value;
            }
        }
        Ok(self)
    }

    /// Write `values` in order into the positions where `mask` is true
    ///
    /// `values.size()` must equal the number of true entries.
    pub fn put_mask_array(&mut self, mask: &NdArray<bool>, values: &NdArray<T>) -> Result<&mut Self> {
        self.check_mask(mask)?;
        let count = mask.iter().filter(|&&m| m).count();
        if values.size() != count {
            return Err(Error::shape_mismatch(Shape::new(1, count), values.shape()));
        }
        let mut source = values.iter();
        for (v, &m) in self.iter_mut().zip(mask.iter()) {
            if m {
                if let Some(&x) = source.next() {
                    *v = x;
                }
            }
        }
        Ok(self)
    }
}

impl<T: Copy + Default + PartialEq> NdArray<T> {
    /// Replace every occurrence of `old` with `new`
    pub fn replace(&mut self, old: T, new: T) -> &mut Self {
        for v in self.iter_mut().filter(|v| **v == old) {
            *v = new;
        }
        self
    }

    /// Row and column indices of the non-zero elements, each `1 x k`
    pub fn nonzero(&self) -> (NdArray<usize>, NdArray<usize>) {
        let flat = self.flatnonzero();
        let cols = self.cols().max(1);
        let rows = map_array(&flat, |i| i / cols);
        let cols = map_array(&flat, |i| i % cols);
        (rows, cols)
    }

    /// Flat indices of the non-zero elements as `1 x k`
    pub fn flatnonzero(&self) -> NdArray<usize> {
        let data: Vec<usize> = self
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != T::default())
            .map(|(i, _)| i)
            .collect();
        NdArray::from_parts(Shape::new(1, data.len()), data)
    }
}

impl<T: Element> NdArray<T> {
    /// Limit every element to `[min, max]`
    pub fn clip(&self, min: T, max: T) -> NdArray<T> {
        map_array(self, |x| {
            if x < min {
                min
            } else if x > max {
                max
            } else {
                x
            }
        })
    }
}

impl<T: Element + Float> NdArray<T> {
    /// Round every element to `decimals` decimal places
    pub fn round(&self, decimals: i32) -> NdArray<T> {
        let factor = T::from_f64(10f64.powi(decimals));
        map_array(self, |x| (x * factor).round() / factor)
    }

    /// Set every element to NaN
    pub fn nans(&mut self) -> &mut Self {
        self.fill(T::nan())
    }
}

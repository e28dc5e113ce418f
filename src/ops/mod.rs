//! Array operations
//!
//! Every operation is an inherent method on [`NdArray`], grouped by file:
//!
//! ```text
//! NdArray<T>
//!   ├── binary      add, sub, mul, div, rem (+ scalar, in-place and operator forms)
//!   ├── compare     equal, less, greater, ... -> NdArray<bool>
//!   ├── bitwise     bitand, bitor, bitxor, shl, shr, logical_*
//!   ├── reduce      sum, prod, min, max, argmin, argmax, all, any, ptp, ...
//!   ├── statistics  mean, median, var, stdev, norm
//!   ├── cumulative  cumsum, cumprod
//!   ├── sorting     sort, argsort, partition, argpartition, is_sorted
//!   ├── indexing    slices, masks, index lists, replace, clip, round
//!   ├── shape       reshape, resize, transpose, repeat, diagonal, ...
//!   └── matmul      dot
//! ```
//!
//! Binary operations broadcast with NumPy's 2D rules: each dimension must be
//! equal or one of them must be 1. That covers scalars (`1 x 1`), row vectors
//! (`1 x cols`) and column vectors (`rows x 1`).

mod binary;
mod bitwise;
mod compare;
mod cumulative;
mod indexing;
mod matmul;
mod reduce;
mod shape;
mod sorting;
mod statistics;

use crate::error::{Error, Result};
use crate::ndarray::{NdArray, Shape};
use std::iter::StepBy;
use std::ops::Range;

/// Axis selector for reductions, sorting and cumulative operations
///
/// - `None` treats the array as one flat lane; results are `1 x 1`
///   (or `1 x size` for cumulative operations).
/// - `Row` reduces down each column, producing `1 x cols`.
/// - `Col` reduces across each row, producing `rows x 1`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// All elements as one flat lane
    #[default]
    None,
    /// One lane per column (runs down the rows)
    Row,
    /// One lane per row (runs across the columns)
    Col,
}

/// Compute the broadcast shape of two operands
///
/// Returns `None` if the shapes are incompatible.
pub fn broadcast_shape(a: Shape, b: Shape) -> Option<Shape> {
    let dim = |x: usize, y: usize| {
        if x == y {
            Some(x)
        } else if x == 1 {
            Some(y)
        } else if y == 1 {
            Some(x)
        } else {
            None
        }
    };
    Some(Shape::new(dim(a.rows, b.rows)?, dim(a.cols, b.cols)?))
}

/// Offset into an operand of shape `src` for output position `(r, c)`
#[inline]
fn broadcast_offset(src: Shape, r: usize, c: usize) -> usize {
    let r = if src.rows == 1 { 0 } else { r };
    let c = if src.cols == 1 { 0 } else { c };
    r * src.cols + c
}

/// Apply `f` elementwise over two broadcast operands
pub(crate) fn zip_broadcast<A, B, O, F>(a: &NdArray<A>, b: &NdArray<B>, f: F) -> Result<NdArray<O>>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B) -> O,
{
    let out_shape = broadcast_shape(a.shape(), b.shape())
        .ok_or_else(|| Error::shape_mismatch(a.shape(), b.shape()))?;

    let data: Vec<O> = if a.shape() == b.shape() {
        a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
    } else {
        let (sa, sb) = (a.shape(), b.shape());
        let (da, db) = (a.as_slice(), b.as_slice());
        let mut data = Vec::with_capacity(out_shape.size());
        for r in 0..out_shape.rows {
            for c in 0..out_shape.cols {
                data.push(f(da[broadcast_offset(sa, r, c)], db[broadcast_offset(sb, r, c)]));
            }
        }
        data
    };
    Ok(NdArray::from_parts(out_shape, data))
}

/// Apply `f` elementwise to one operand
#[inline]
pub(crate) fn map_array<A: Copy, O>(a: &NdArray<A>, f: impl Fn(A) -> O) -> NdArray<O> {
    NdArray::from_parts(a.shape(), a.iter().map(|&x| f(x)).collect())
}

/// Lanes of an array along an axis
///
/// A lane is the sequence of flat offsets one reduction consumes: the whole
/// buffer for `Axis::None`, a column for `Axis::Row`, a row for `Axis::Col`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Lanes {
    shape: Shape,
    axis: Axis,
}

impl Lanes {
    #[inline]
    pub(crate) fn new(shape: Shape, axis: Axis) -> Self {
        Self { shape, axis }
    }

    /// Number of lanes
    #[inline]
    pub(crate) fn count(&self) -> usize {
        match self.axis {
            Axis::None => 1,
            Axis::Row => self.shape.cols,
            Axis::Col => self.shape.rows,
        }
    }

    /// Elements per lane
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self.axis {
            Axis::None => self.shape.size(),
            Axis::Row => self.shape.rows,
            Axis::Col => self.shape.cols,
        }
    }

    /// Flat offsets of lane `lane`, in lane order
    #[inline]
    pub(crate) fn offsets(&self, lane: usize) -> StepBy<Range<usize>> {
        let size = self.shape.size();
        match self.axis {
            Axis::None => (0..size).step_by(1),
            Axis::Row => (lane..size).step_by(self.shape.cols.max(1)),
            Axis::Col => (lane * self.shape.cols..(lane + 1) * self.shape.cols).step_by(1),
        }
    }

    /// Copy of lane `lane`
    #[inline]
    pub(crate) fn gather<T: Copy>(&self, data: &[T], lane: usize) -> Vec<T> {
        self.offsets(lane).map(|i| data[i]).collect()
    }

    /// Shape of a reduction producing one value per lane
    #[inline]
    pub(crate) fn reduced_shape(&self) -> Shape {
        match self.axis {
            Axis::None => Shape::new(1, 1),
            Axis::Row => Shape::new(1, self.shape.cols),
            Axis::Col => Shape::new(self.shape.rows, 1),
        }
    }

    /// Shape of an operation producing one value per input element
    ///
    /// `Axis::None` flattens to `1 x size`.
    #[inline]
    pub(crate) fn elementwise_shape(&self) -> Shape {
        match self.axis {
            Axis::None => Shape::new(1, self.shape.size()),
            _ => self.shape,
        }
    }
}

/// Reduce each lane of `a` with `f`, collecting one value per lane
pub(crate) fn reduce_lanes<T: Copy, O>(
    a: &NdArray<T>,
    axis: Axis,
    f: impl Fn(&[T]) -> O,
) -> NdArray<O> {
    let lanes = Lanes::new(a.shape(), axis);
    let data = (0..lanes.count())
        .map(|lane| f(&lanes.gather(a.as_slice(), lane)))
        .collect();
    NdArray::from_parts(lanes.reduced_shape(), data)
}

/// Fallible variant of [`reduce_lanes`]
pub(crate) fn try_reduce_lanes<T: Copy, O>(
    a: &NdArray<T>,
    axis: Axis,
    f: impl Fn(&[T]) -> Result<O>,
) -> Result<NdArray<O>> {
    let lanes = Lanes::new(a.shape(), axis);
    let data = (0..lanes.count())
        .map(|lane| f(&lanes.gather(a.as_slice(), lane)))
        .collect::<Result<Vec<O>>>()?;
    Ok(NdArray::from_parts(lanes.reduced_shape(), data))
}

/// Transform each lane with `f` (same length out), writing results back in
/// lane order
pub(crate) fn transform_lanes<T: Copy, O: Copy + Default>(
    a: &NdArray<T>,
    axis: Axis,
    f: impl Fn(&[T]) -> Vec<O>,
) -> NdArray<O> {
    let lanes = Lanes::new(a.shape(), axis);
    let mut out = NdArray::from_shape(lanes.elementwise_shape());
    for lane in 0..lanes.count() {
        let values = f(&lanes.gather(a.as_slice(), lane));
        for (i, v) in lanes.offsets(lane).zip(values) {
            out.as_mut_slice()[i] = v;
        }
    }
    out
}

/// In-place variant of [`transform_lanes`]; the shape is kept for every axis
pub(crate) fn transform_lanes_inplace<T: Copy>(
    a: &mut NdArray<T>,
    axis: Axis,
    f: impl Fn(&mut [T]),
) {
    let lanes = Lanes::new(a.shape(), axis);
    for lane in 0..lanes.count() {
        let mut values = lanes.gather(a.as_slice(), lane);
        f(&mut values);
        for (i, v) in lanes.offsets(lane).zip(values) {
            a.as_mut_slice()[i] = v;
        }
    }
}

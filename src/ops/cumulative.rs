//! Running totals along an axis

use super::{Axis, transform_lanes};
use crate::dtype::Element;
use crate::ndarray::NdArray;

fn running<T: Copy>(lane: &[T], init: T, f: impl Fn(T, T) -> T) -> Vec<T> {
    lane.iter()
        .scan(init, |acc, &x| {
            *acc = f(*acc, x);
            Some(*acc)
        })
        .collect()
}

impl<T: Element> NdArray<T> {
    /// Cumulative sum
    ///
    /// `Axis::None` returns the running total of the flattened array as
    /// `1 x size`; `Row` runs down each column and `Col` along each row,
    /// both keeping the input shape.
    pub fn cumsum(&self, axis: Axis) -> NdArray<T> {
        transform_lanes(self, axis, |lane| running(lane, T::zero(), |a, b| a + b))
    }

    /// Cumulative product, with the same axis handling as [`NdArray::cumsum`]
    pub fn cumprod(&self, axis: Axis) -> NdArray<T> {
        transform_lanes(self, axis, |lane| running(lane, T::one(), |a, b| a * b))
    }
}

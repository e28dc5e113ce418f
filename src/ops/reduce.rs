//! Axis reductions: sum, prod, extrema, truth tests

use super::{Axis, reduce_lanes, try_reduce_lanes};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;

/// Index of the lane element preferred by `better(candidate, current)`
fn select_index<T: Copy>(lane: &[T], better: impl Fn(T, T) -> bool) -> Result<usize> {
    if lane.is_empty() {
        return Err(Error::invalid_argument("axis", "reduction over an empty lane"));
    }
    let mut best = 0;
    for (i, &v) in lane.iter().enumerate().skip(1) {
        if better(v, lane[best]) {
            best = i;
        }
    }
    Ok(best)
}

#[inline]
fn argmin_lane<T: Copy + PartialOrd>(lane: &[T]) -> Result<usize> {
    select_index(lane, |a, b| a < b)
}

#[inline]
fn argmax_lane<T: Copy + PartialOrd>(lane: &[T]) -> Result<usize> {
    select_index(lane, |a, b| a > b)
}

impl<T: Element> NdArray<T> {
    /// Sum of each lane (zero for empty lanes)
    pub fn sum(&self, axis: Axis) -> NdArray<T> {
        reduce_lanes(self, axis, |lane| {
            lane.iter().fold(T::zero(), |acc, &x| acc + x)
        })
    }

    /// Product of each lane (one for empty lanes)
    pub fn prod(&self, axis: Axis) -> NdArray<T> {
        reduce_lanes(self, axis, |lane| {
            lane.iter().fold(T::one(), |acc, &x| acc * x)
        })
    }

    /// Minimum of each lane
    ///
    /// Returns `InvalidArgument` if a lane is empty.
    pub fn min(&self, axis: Axis) -> Result<NdArray<T>> {
        try_reduce_lanes(self, axis, |lane| Ok(lane[argmin_lane(lane)?]))
    }

    /// Maximum of each lane
    ///
    /// Returns `InvalidArgument` if a lane is empty.
    pub fn max(&self, axis: Axis) -> Result<NdArray<T>> {
        try_reduce_lanes(self, axis, |lane| Ok(lane[argmax_lane(lane)?]))
    }

    /// Position of the first minimum within each lane
    ///
    /// For `Axis::None` this is the flat row-major index.
    pub fn argmin(&self, axis: Axis) -> Result<NdArray<usize>> {
        try_reduce_lanes(self, axis, argmin_lane)
    }

    /// Position of the first maximum within each lane
    pub fn argmax(&self, axis: Axis) -> Result<NdArray<usize>> {
        try_reduce_lanes(self, axis, argmax_lane)
    }

    /// Peak to peak (`max - min`) of each lane
    pub fn ptp(&self, axis: Axis) -> Result<NdArray<T>> {
        try_reduce_lanes(self, axis, |lane| {
            Ok(lane[argmax_lane(lane)?] - lane[argmin_lane(lane)?])
        })
    }
}

impl<T: Copy + Default + PartialEq> NdArray<T> {
    /// True for lanes whose elements are all non-zero (empty lanes are true)
    pub fn all(&self, axis: Axis) -> NdArray<bool> {
        reduce_lanes(self, axis, |lane| lane.iter().all(|&x| x != T::default()))
    }

    /// True for lanes with at least one non-zero element
    pub fn any(&self, axis: Axis) -> NdArray<bool> {
        reduce_lanes(self, axis, |lane| lane.iter().any(|&x| x != T::default()))
    }

    /// True for lanes with no non-zero element
    pub fn none(&self, axis: Axis) -> NdArray<bool> {
        reduce_lanes(self, axis, |lane| lane.iter().all(|&x| x == T::default()))
    }

    /// Number of non-zero elements in each lane
    pub fn count_nonzero(&self, axis: Axis) -> NdArray<usize> {
        reduce_lanes(self, axis, |lane| {
            lane.iter().filter(|&&x| x != T::default()).count()
        })
    }

    /// True for lanes containing `value`
    pub fn contains(&self, value: T, axis: Axis) -> NdArray<bool> {
        reduce_lanes(self, axis, |lane| lane.contains(&value))
    }
}

//! Sorting and partitioning along an axis

use super::{Axis, Lanes, reduce_lanes, transform_lanes, transform_lanes_inplace};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;
use std::cmp::Ordering;

/// Numeric ordering with NaN placed after every other value
#[inline]
pub(crate) fn nan_last_cmp<T: Element>(a: &T, b: &T) -> Ordering {
    match (a.is_nan_val(), b.is_nan_val()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

fn argsort_lane<T: Element>(lane: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..lane.len()).collect();
    indices.sort_by(|&i, &j| nan_last_cmp(&lane[i], &lane[j]));
    indices
}

fn argpartition_lane<T: Element>(lane: &[T], kth: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..lane.len()).collect();
    indices.select_nth_unstable_by(kth, |&i, &j| nan_last_cmp(&lane[i], &lane[j]));
    indices
}

impl<T: Element> NdArray<T> {
    /// `kth` must index into every lane
    fn check_kth(&self, kth: usize, axis: Axis) -> Result<()> {
        let lanes = Lanes::new(self.shape(), axis);
        if lanes.count() > 0 && kth >= lanes.len() {
            return Err(Error::invalid_argument(
                "kth",
                format!("{kth} out of range for lanes of length {}", lanes.len()),
            ));
        }
        Ok(())
    }

    /// Sort each lane in place (ascending, NaN last)
    ///
    /// `Axis::None` sorts the flattened buffer and keeps the shape.
    pub fn sort(&mut self, axis: Axis) -> &mut Self {
        transform_lanes_inplace(self, axis, |lane| lane.sort_by(nan_last_cmp));
        self
    }

    /// Indices that would sort each lane
    ///
    /// `Axis::None` returns `1 x size` flat indices; otherwise the indices are
    /// positions within each lane and the input shape is kept.
    pub fn argsort(&self, axis: Axis) -> NdArray<usize> {
        transform_lanes(self, axis, argsort_lane)
    }

    /// Partially sort each lane in place around position `kth`
    ///
    /// Afterwards the element at `kth` is the one a full sort would place
    /// there, with no greater element before it and no smaller one after.
    pub fn partition(&mut self, kth: usize, axis: Axis) -> Result<&mut Self> {
        self.check_kth(kth, axis)?;
        transform_lanes_inplace(self, axis, |lane| {
            lane.select_nth_unstable_by(kth, nan_last_cmp);
        });
        Ok(self)
    }

    /// Indices that would partition each lane around `kth`
    pub fn argpartition(&self, kth: usize, axis: Axis) -> Result<NdArray<usize>> {
        self.check_kth(kth, axis)?;
        Ok(transform_lanes(self, axis, |lane| argpartition_lane(lane, kth)))
    }

    /// True for lanes already in ascending order
    pub fn is_sorted(&self, axis: Axis) -> NdArray<bool> {
        reduce_lanes(self, axis, |lane| {
            lane.windows(2)
                .all(|w| nan_last_cmp(&w[0], &w[1]) != Ordering::Greater)
        })
    }
}

//! Statistical reductions: mean, median, variance, standard deviation, norm

use super::sorting::nan_last_cmp;
use super::{Axis, reduce_lanes, try_reduce_lanes};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ndarray::NdArray;

fn lane_mean<T: Element>(lane: &[T]) -> T::Float {
    let total = lane
        .iter()
        .fold(<T::Float as Element>::zero(), |acc, &x| acc + x.to_float());
    total / <T::Float as Element>::from_f64(lane.len() as f64)
}

fn lane_var<T: Element>(lane: &[T]) -> f64 {
    let mean = lane_mean(lane);
    let sum_sq: f64 = lane
        .iter()
        .map(|&x| {
            let d = (x.to_float() - mean).magnitude_f64();
            d * d
        })
        .sum();
    sum_sq / lane.len() as f64
}

impl<T: Element> NdArray<T> {
    /// Arithmetic mean of each lane
    ///
    /// Integers average into `f64`, floats keep their width and complex
    /// values stay complex. An empty lane yields NaN.
    pub fn mean(&self, axis: Axis) -> NdArray<T::Float> {
        reduce_lanes(self, axis, lane_mean)
    }

    /// Median of each lane
    ///
    /// For an even count the two middle values are averaged in `T`. NaN sorts
    /// last. Returns `InvalidArgument` for an empty lane.
    pub fn median(&self, axis: Axis) -> Result<NdArray<T>> {
        try_reduce_lanes(self, axis, |lane| {
            if lane.is_empty() {
                return Err(Error::invalid_argument("axis", "median of an empty lane"));
            }
            let mut values = lane.to_vec();
            values.sort_by(|a, b| nan_last_cmp(a, b));
            let mid = values.len() / 2;
            if values.len() % 2 == 1 {
                Ok(values[mid])
            } else {
                Ok((values[mid - 1] + values[mid]) / T::from_f64(2.0))
            }
        })
    }

    /// Population variance of each lane (magnitudes for complex values)
    pub fn var(&self, axis: Axis) -> NdArray<f64> {
        reduce_lanes(self, axis, lane_var)
    }

    /// Population standard deviation of each lane
    pub fn stdev(&self, axis: Axis) -> NdArray<f64> {
        reduce_lanes(self, axis, |lane| lane_var(lane).sqrt())
    }

    /// Euclidean (Frobenius for `Axis::None`) norm of each lane
    pub fn norm(&self, axis: Axis) -> NdArray<f64> {
        reduce_lanes(self, axis, |lane| {
            lane.iter()
                .map(|&x| {
                    let m = x.magnitude_f64();
                    m * m
                })
                .sum::<f64>()
                .sqrt()
        })
    }
}

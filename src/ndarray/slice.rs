//! Slice type: `start:stop:step` selection along one axis

use crate::error::{Error, Result};
use std::fmt;

/// A `start:stop:step` range over one axis of an array
///
/// Fields are public and may hold any values; they are interpreted against an
/// axis length by [`Slice::num_elements`] and [`Slice::to_indices`]:
///
/// - Negative `start`/`stop` count from the end of the axis (`+ n`).
/// - Bounds are then clamped into `[0, n]` for positive steps and into
///   `[-1, n - 1]` for negative steps.
/// - `stop` is exclusive. An empty range is valid and yields no indices.
/// - A zero `step` is the only error.
///
/// ```
/// use numcore::ndarray::Slice;
///
/// let s = Slice::new(0, 10, 3).unwrap();
/// assert_eq!(s.num_elements(10).unwrap(), 4);
/// assert_eq!(s.to_indices(10).unwrap(), vec![0, 3, 6, 9]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First index (inclusive)
    pub start: isize,
    /// End index (exclusive)
    pub stop: isize,
    /// Stride between selected indices, never zero
    pub step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self {
            start: 0,
            stop: 1,
            step: 1,
        }
    }
}

impl Slice {
    /// Create a slice, rejecting a zero step
    pub fn new(start: isize, stop: isize, step: isize) -> Result<Self> {
        if step == 0 {
            return Err(Error::invalid_argument("step", "slice step cannot be zero"));
        }
        Ok(Self { start, stop, step })
    }

    /// `start:stop` with unit step
    #[inline]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// `0:stop` with unit step
    #[inline]
    pub const fn to(stop: isize) -> Self {
        Self::range(0, stop)
    }

    /// Normalized `(start, stop, step)` against an axis of length `n`
    fn bounds(&self, n: usize) -> Result<(isize, isize, isize)> {
        if self.step == 0 {
            return Err(Error::invalid_argument("step", "slice step cannot be zero"));
        }
        let len = n as isize;
        let (lower, upper) = if self.step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |v: isize| {
            if v < 0 {
                (v + len).max(lower)
            } else {
                v.min(upper)
            }
        };
        Ok((clamp(self.start), clamp(self.stop), self.step))
    }

    /// Number of indices selected on an axis of length `n`
    pub fn num_elements(&self, n: usize) -> Result<usize> {
        let (start, stop, step) = self.bounds(n)?;
        // Clamped bounds differ by at most n + 1, the step may be any nonzero isize
        let stride = step.unsigned_abs();
        let count = if step > 0 {
            if start < stop {
                (stop - start - 1) as usize / stride + 1
            } else {
                0
            }
        } else if stop < start {
            (start - stop - 1) as usize / stride + 1
        } else {
            0
        };
        Ok(count)
    }

    /// The selected indices, in traversal order, on an axis of length `n`
    pub fn to_indices(&self, n: usize) -> Result<Vec<usize>> {
        let count = self.num_elements(n)?;
        let (start, _, step) = self.bounds(n)?;
        Ok((0..count as isize)
            .map(|i| (start + i * step) as usize)
            .collect())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.start, self.stop, self.step)
    }
}

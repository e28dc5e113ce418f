//! Shape type: dimensions of a 2D array

use std::fmt;

/// Dimensions of an [`NdArray`](super::NdArray): `rows` by `cols`
///
/// Both dimensions are unsigned, so a negative dimension cannot be
/// constructed. A `0 x 0` shape is the null shape of an empty array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// Create a `rows x cols` shape
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create an `n x n` shape
    #[inline]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Total number of elements
    #[inline]
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// True when both dimensions are zero
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// True when `rows == cols`
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The shape with rows and columns swapped
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

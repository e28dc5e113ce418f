//! Error types for numcore

use crate::dtype::DType;
use crate::ndarray::Shape;
use thiserror::Error;

/// Result type alias using numcore's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numcore operations
#[derive(Error, Debug)]
pub enum Error {
    /// Flat, row/column or slice access beyond the array bounds
    #[error("Index {index} out of range for axis of size {size}")]
    IndexOutOfRange {
        /// The requested index (after negative wrap-around)
        index: isize,
        /// Size of the indexed axis
        size: usize,
    },

    /// Incompatible operand shapes or buffer lengths
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Expected shape
        expected: Shape,
        /// Actual shape
        got: Shape,
    },

    /// Square-only operation given a rectangular matrix
    #[error("Matrix must be square, got {shape}")]
    NotSquare {
        /// Shape of the offending matrix
        shape: Shape,
    },

    /// Zero (or numerically zero) pivot encountered
    #[error("Matrix is singular in '{op}'")]
    SingularMatrix {
        /// The operation that detected the singularity
        op: &'static str,
    },

    /// Cholesky precondition violated
    #[error("Matrix is not symmetric positive definite")]
    NotPositiveDefinite,

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Unsupported element type for an operation
    #[error("Unsupported dtype {dtype} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// File system failure during dump/load
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: Shape, got: Shape) -> Self {
        Self::ShapeMismatch { expected, got }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: isize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a not-square error
    pub fn not_square(shape: Shape) -> Self {
        Self::NotSquare { shape }
    }

    /// Create a singular matrix error
    pub fn singular(op: &'static str) -> Self {
        Self::SingularMatrix { op }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }
}

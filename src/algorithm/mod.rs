//! Numerical algorithms built on top of [`NdArray`](crate::ndarray::NdArray)
//!
//! # Available Algorithms
//!
//! - [`linalg`] - determinants, inverses, LU/Cholesky/SVD/eigen
//!   decompositions, linear solvers and matrix products
//!
//! Every routine computes in `f64` on a contiguous row-major copy of its
//! input, so callers may pass any real element type.

pub mod linalg;

//! # numcore
//!
//! **Dense two-dimensional arrays in the style of NumPy, with a classical
//! numerical linear algebra layer.**
//!
//! numcore provides a statically typed `NdArray<T>` over real, integer and
//! complex element types, with broadcasting arithmetic, axis reductions,
//! slicing and masking, plus LU, Cholesky, SVD and eigen decompositions.
//!
//! ## Features
//!
//! - **Arrays**: row-major 2D storage, negative indexing, Python-style slices
//! - **Arithmetic**: broadcasting operators with NumPy type promotion
//! - **Reductions**: sum, mean, median, min, max, argmin, argmax along axes
//! - **Linear algebra**: det, inv, lu, cholesky, svd, pinv, solve, lstsq, eig
//! - **I/O**: raw binary dump/load and delimited text export
//!
//! ## Quick Start
//!
//! ```
//! use numcore::prelude::*;
//!
//! let a = NdArray::from_vec(2, 2, vec![4.0f64, 3.0, 6.0, 3.0])?;
//! let b = NdArray::from_vec(2, 1, vec![10.0f64, 12.0])?;
//!
//! let x = linalg::solve(&a, &b)?;
//! let residual = (&a.dot(&x)? - &b)?;
//! assert!(residual.iter().all(|r: &f64| r.abs() < 1e-10));
//! # Ok::<(), numcore::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel row loop for matrix products

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod ndarray;
pub mod ops;

pub use algorithm::linalg;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg;
    pub use crate::dtype::{Complex64, Complex128, DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ndarray::{Endian, NdArray, Order, Shape, Slice};
    pub use crate::ops::Axis;
}

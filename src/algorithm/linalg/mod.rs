//! Dense linear algebra
//!
//! All routines accept `&NdArray<T>` for any real element type and compute
//! in `f64`. Complex input is rejected with `UnsupportedDType`, except for
//! the closed-form determinants of matrices up to 3 x 3.
//!
//! # Module Structure
//!
//! - `decompositions`: result types (LU, pivoted LU, SVD, eigen)
//! - `helpers`: validation, tolerances and `f64` conversion
//! - `jacobi`: rotation utilities shared by SVD and eigendecomposition
//! - `det`, `inverse`, `lu`, `cholesky`, `svd`, `eig`: the factorizations
//! - `solvers`: `solve`, `lstsq`, `pinv`
//! - `products`: `matrix_power`, `multi_dot`, `hat`
//!
//! # Example
//!
//! ```
//! use numcore::prelude::*;
//!
//! let a = NdArray::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0])?;
//! let l = linalg::cholesky(&a)?;
//! let back = l.dot(&l.transpose())?;
//! assert!(back.iter().zip(a.iter()).all(|(x, y)| (x - y).abs() < 1e-12));
//! # Ok::<(), numcore::error::Error>(())
//! ```

mod cholesky;
mod decompositions;
mod det;
mod eig;
pub mod helpers;
mod inverse;
pub(crate) mod jacobi;
mod lu;
mod products;
mod solvers;
mod svd;

pub use cholesky::cholesky;
pub use decompositions::{
    EigenDecomposition, LuDecomposition, PivotLuDecomposition, SvdDecomposition,
};
pub use det::det;
pub use eig::{eig, eigvals};
pub use helpers::{DEFAULT_LSTSQ_TOLERANCE, MAX_JACOBI_SWEEPS};
pub use inverse::inv;
pub use lu::{lu_decomposition, pivot_lu_decomposition};
pub use products::{hat, hat_xyz, matrix_power, multi_dot};
pub use solvers::{lstsq, pinv, solve};
pub use svd::{svd, svdvals};

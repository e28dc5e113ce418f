//! Decomposition result types
//!
//! Every factor is a dense `NdArray<f64>`; `into_parts` hands the factors
//! back as a tuple for destructuring.

use crate::ndarray::NdArray;

/// LU decomposition result: A = LU
///
/// L is lower triangular with unit diagonal, U is upper triangular.
#[derive(Clone, Debug)]
pub struct LuDecomposition {
    /// Unit lower triangular factor L [n, n]
    pub l: NdArray<f64>,

    /// Upper triangular factor U [n, n]
    pub u: NdArray<f64>,
}

impl LuDecomposition {
    /// Split into `(l, u)`
    pub fn into_parts(self) -> (NdArray<f64>, NdArray<f64>) {
        (self.l, self.u)
    }
}

/// Pivoted LU decomposition result: PA = LU
#[derive(Clone, Debug)]
pub struct PivotLuDecomposition {
    /// Unit lower triangular factor L [n, n]
    pub l: NdArray<f64>,

    /// Upper triangular factor U [n, n]
    pub u: NdArray<f64>,

    /// Dense 0/1 permutation matrix P [n, n]
    pub p: NdArray<f64>,
}

impl PivotLuDecomposition {
    /// Split into `(l, u, p)`
    pub fn into_parts(self) -> (NdArray<f64>, NdArray<f64>, NdArray<f64>) {
        (self.l, self.u, self.p)
    }
}

/// Thin singular value decomposition: A = U @ S @ V
///
/// With `k = min(m, n)` for an `m x n` input.
#[derive(Clone, Debug)]
pub struct SvdDecomposition {
    /// Left singular vectors U [m, k], orthonormal columns
    pub u: NdArray<f64>,

    /// Singular values on the diagonal of S [k, k] (descending)
    pub s: NdArray<f64>,

    /// Right singular vectors, already transposed: V [k, n]
    pub v: NdArray<f64>,
}

impl SvdDecomposition {
    /// Split into `(u, s, v)`
    pub fn into_parts(self) -> (NdArray<f64>, NdArray<f64>, NdArray<f64>) {
        (self.u, self.s, self.v)
    }
}

/// Eigendecomposition of a real symmetric matrix: A = V @ diag(λ) @ V^T
///
/// - A @ V[:,i] = λ[i] * V[:,i] for each eigenpair
/// - V^T @ V = I
#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    /// Eigenvalues λ [1, n] in ascending order
    pub eigenvalues: NdArray<f64>,

    /// Eigenvector matrix V [n, n] where V[:,i] is the eigenvector for λ[i]
    pub eigenvectors: NdArray<f64>,
}

impl EigenDecomposition {
    /// Split into `(eigenvalues, eigenvectors)`
    pub fn into_parts(self) -> (NdArray<f64>, NdArray<f64>) {
        (self.eigenvalues, self.eigenvectors)
    }
}

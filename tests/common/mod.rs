//! Common test utilities
#![allow(dead_code)]

use numcore::ndarray::NdArray;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Check if a square matrix is close to identity
pub fn assert_near_identity(m: &NdArray<f64>, tol: f64, msg: &str) {
    assert!(m.is_square(), "{}: not square: {}", msg, m.shape());
    let n = m.rows();
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { 1.0 } else { 0.0 };
            let actual = m[(i, j)];
            let diff = (actual - expected).abs();
            assert!(
                diff <= tol,
                "{}: element [{},{}] differs: {} vs {} (diff={})",
                msg,
                i,
                j,
                actual,
                expected,
                diff
            );
        }
    }
}

/// Seeded RNG so failures reproduce
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `rows x cols` matrix with entries drawn uniformly from `[low, high)`
pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, low: f64, high: f64) -> NdArray<f64> {
    let data = (0..rows * cols).map(|_| rng.random_range(low..high)).collect();
    NdArray::from_vec(rows, cols, data).unwrap()
}

/// `rows x cols` matrix of whole numbers drawn uniformly from `[low, high)`
pub fn random_int_matrix(rng: &mut StdRng, rows: usize, cols: usize, low: i32, high: i32) -> NdArray<f64> {
    let data = (0..rows * cols)
        .map(|_| f64::from(rng.random_range(low..high)))
        .collect();
    NdArray::from_vec(rows, cols, data).unwrap()
}

/// Symmetric positive definite `n x n` matrix: `B B^T + n I`
pub fn random_spd(rng: &mut StdRng, n: usize) -> NdArray<f64> {
    let b = random_matrix(rng, n, n, -1.0, 1.0);
    let bbt = b.dot(&b.transpose()).unwrap();
    let shift = &NdArray::<f64>::identity(n) * n as f64;
    (&bbt + &shift).unwrap()
}

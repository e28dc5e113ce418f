//! Integration tests for NdArray construction, element access and shape
//! manipulation
//!
//! Tests verify:
//! - Constructors produce the documented shapes and fill values
//! - Negative flat and (row, col) indexing, with range errors
//! - Buffer replacement is all-or-nothing
//! - Reshape/resize/transpose/repeat/diagonal semantics

mod common;

use numcore::error::Error;
use numcore::prelude::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_constructors() {
    let sq = NdArray::<f64>::square(3);
    assert_eq!(sq.shape(), Shape::new(3, 3));
    assert!(sq.iter().all(|&x| x == 0.0));

    let full = NdArray::full(2, 4, 7u8);
    assert_eq!(full.size(), 8);
    assert!(full.iter().all(|&x| x == 7));

    let ones = NdArray::<i64>::ones(2, 2);
    assert_eq!(ones.sum(Axis::None).item().unwrap(), 4);

    let eye = NdArray::<f32>::eye(2, 3);
    assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    let empty = NdArray::<f64>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.shape(), Shape::new(0, 0));
}

#[test]
fn test_from_rows_and_from_vec() {
    let a = NdArray::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(a.shape(), Shape::new(2, 3));
    assert_eq!(a.get_at(1, 2).unwrap(), 6);

    let ragged: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
    assert!(matches!(
        NdArray::from_rows(&ragged),
        Err(Error::ShapeMismatch { .. })
    ));

    assert!(NdArray::from_vec(2, 2, vec![1.0; 3]).is_err());
}

#[test]
fn test_linspace_and_arange() {
    let l = NdArray::<f64>::linspace(0.0, 1.0, 5);
    common::assert_allclose_f64(l.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0], 0.0, 1e-15, "linspace");

    let r = NdArray::<i32>::arange(4);
    assert_eq!(r.as_slice(), &[0, 1, 2, 3]);
}

// ============================================================================
// Element access
// ============================================================================

#[test]
fn test_negative_indexing() {
    let mut a = NdArray::from_vec(3, 3, (1..=9).collect::<Vec<i32>>()).unwrap();
    assert_eq!(a.get(-1).unwrap(), 9);
    assert_eq!(a.get_at(-1, 0).unwrap(), 7);
    assert_eq!(a.get_at(0, -1).unwrap(), 3);
    assert_eq!(a.front().unwrap(), 1);
    assert_eq!(a.back().unwrap(), 9);

    a.put_at(-2, -2, 50).unwrap();
    assert_eq!(a[(1, 1)], 50);

    assert!(matches!(a.get(9), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(a.get(-10), Err(Error::IndexOutOfRange { .. })));
    assert!(a.get_at(3, 0).is_err());
}

#[test]
fn test_set_array_is_atomic() {
    let mut a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    assert!(a.set_array(&[9, 9, 9]).is_err());
    assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    a.set_array(&[5, 6, 7, 8]).unwrap();
    assert_eq!(a.as_slice(), &[5, 6, 7, 8]);
}

#[test]
fn test_fill_variants() {
    let mut a = NdArray::<f64>::zeros(2, 2);
    a.fill_ones();
    assert!(a.iter().all(|&x| x == 1.0));
    a.fill(3.5);
    assert_eq!(a.sum(Axis::None).item().unwrap(), 14.0);
    a.fill_zeros();
    assert!(a.iter().all(|&x| x == 0.0));
    a.nans();
    assert!(a.iter().all(|x| x.is_nan()));
}

#[test]
fn test_astype() {
    let a = NdArray::from_slice(&[1.7f64, -2.2, 3.0]);
    let i: NdArray<i32> = a.astype();
    assert_eq!(i.as_slice(), &[1, -2, 3]);

    let z: NdArray<Complex128> = a.astype();
    assert_eq!(z.get(0).unwrap(), Complex128::new(1.7, 0.0));
}

// ============================================================================
// Shape manipulation
// ============================================================================

#[test]
fn test_reshape_and_flatten() {
    let mut a = NdArray::<f64>::arange(12);
    a.reshape(3, 4).unwrap();
    assert_eq!(a.get_at(2, 0).unwrap(), 8.0);
    a.reshape_inferred(-1, 6).unwrap();
    assert_eq!(a.shape(), Shape::new(2, 6));
    assert!(a.reshape(5, 5).is_err());
    assert_eq!(a.flatten().shape(), Shape::new(1, 12));
}

#[test]
fn test_resize_keeps_overlap() {
    let mut a = NdArray::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    a.resize_slow(3, 2);
    assert_eq!(a.as_slice(), &[1, 2, 4, 5, 0, 0]);
    a.resize_fast(2, 2);
    assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_transpose_repeat_diagonal() {
    let a = NdArray::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let t = a.transpose();
    assert_eq!(t.get_at(2, 1).unwrap(), 6);

    let tiled = a.repeat(2, 1);
    assert_eq!(tiled.shape(), Shape::new(4, 3));
    assert_eq!(tiled.row(3).unwrap().as_slice(), &[4, 5, 6]);

    assert_eq!(a.diagonal(0).as_slice(), &[1, 5]);
    assert_eq!(a.diagonal(1).as_slice(), &[2, 6]);
    assert_eq!(a.trace(0), 6);
}

#[test]
fn test_display() {
    let a = NdArray::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a.to_string(), "[[1, 2],\n [3, 4]]");
}

//! Integration tests for slicing, masking and index-list access
//!
//! Tests verify:
//! - Slice normalisation against an axis length (negative bounds, steps)
//! - Slice reads and writes, with size checks before any write
//! - Boolean masks and flat index lists for gather/scatter

mod common;

use numcore::error::Error;
use numcore::prelude::*;

fn grid(rows: usize, cols: usize) -> NdArray<i32> {
    NdArray::from_vec(rows, cols, (0..(rows * cols) as i32).collect()).unwrap()
}

// ============================================================================
// Slice
// ============================================================================

#[test]
fn test_slice_stepped_count() {
    let s = Slice::new(0, 10, 3).unwrap();
    assert_eq!(s.num_elements(10).unwrap(), 4);
    assert_eq!(s.to_indices(10).unwrap(), vec![0, 3, 6, 9]);
    assert_eq!(s.to_string(), "[0:10:3]");
}

#[test]
fn test_slice_negative_bounds_and_step() {
    let s = Slice::new(-3, -1, 1).unwrap();
    assert_eq!(s.to_indices(10).unwrap(), vec![7, 8]);

    let rev = Slice::new(-1, -11, -2).unwrap();
    assert_eq!(rev.to_indices(10).unwrap(), vec![9, 7, 5, 3, 1]);

    let clamped = Slice::range(-100, 100);
    assert_eq!(clamped.num_elements(4).unwrap(), 4);

    assert!(matches!(Slice::new(0, 5, 0), Err(Error::InvalidArgument { .. })));
}

// ============================================================================
// Slice access
// ============================================================================

#[test]
fn test_get_and_put_slice() {
    let mut a = grid(4, 4);
    let block = a.get_slice(&Slice::range(1, 3), &Slice::range(1, 3)).unwrap();
    assert_eq!(block.as_slice(), &[5, 6, 9, 10]);

    a.put_slice(&Slice::new(0, 4, 3).unwrap(), &a.col_slice(), -1).unwrap();
    assert_eq!(a.row(0).unwrap().as_slice(), &[-1; 4]);
    assert_eq!(a.row(3).unwrap().as_slice(), &[-1; 4]);
    assert_eq!(a.row(1).unwrap().as_slice(), &[4, 5, 6, 7]);
}

#[test]
fn test_put_slice_array_mismatch_leaves_array_untouched() {
    let mut a = grid(3, 3);
    let before = a.clone();
    let values = NdArray::from_slice(&[1, 2]);
    let rows = a.row_slice();
    let result = a.put_slice_array(&rows, &Slice::to(1), &values);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    assert_eq!(a, before);
}

#[test]
fn test_put_slice_array_requires_region_shape() {
    let mut a = grid(3, 3);
    let before = a.clone();
    let column = NdArray::from_vec(4, 1, vec![1, 2, 3, 4]).unwrap();
    let result = a.put_slice_array(&Slice::to(2), &Slice::to(2), &column);
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    assert_eq!(a, before);

    let block = NdArray::from_vec(2, 2, vec![-1, -2, -3, -4]).unwrap();
    a.put_slice_array(&Slice::range(1, 3), &Slice::range(1, 3), &block)
        .unwrap();
    assert_eq!(a.row(2).unwrap().as_slice(), &[6, -3, -4]);
}

#[test]
fn test_column_and_row_extraction() {
    let a = grid(3, 4);
    let c = a.column(2).unwrap();
    assert_eq!(c.shape(), Shape::new(3, 1));
    assert_eq!(c.as_slice(), &[2, 6, 10]);
    assert!(a.column(4).is_err());
    assert_eq!(a.row(-1).unwrap().as_slice(), &[8, 9, 10, 11]);
}

// ============================================================================
// Masks and index lists
// ============================================================================

#[test]
fn test_mask_roundtrip() {
    let mut a = grid(3, 3);
    let even = a.rem_scalar(2).unwrap().equal_scalar(0);
    let picked = a.get_by_mask(&even).unwrap();
    assert_eq!(picked.as_slice(), &[0, 2, 4, 6, 8]);

    let negated = -&picked;
    a.put_mask_array(&even, &negated).unwrap();
    assert_eq!(a.as_slice(), &[0, 1, -2, 3, -4, 5, -6, 7, -8]);
}

#[test]
fn test_index_lists_and_nonzero() {
    let mut a = NdArray::<f64>::zeros(3, 3);
    let idx = NdArray::from_slice(&[0usize, 4, 8]);
    a.put_indices(&idx, 1.0).unwrap();
    assert_eq!(a, NdArray::identity(3));

    let (rows, cols) = a.nonzero();
    assert_eq!(rows.as_slice(), &[0, 1, 2]);
    assert_eq!(cols.as_slice(), &[0, 1, 2]);
    assert_eq!(a.get_by_indices(&a.flatnonzero()).unwrap().as_slice(), &[1.0; 3]);

    let out_of_range = NdArray::from_slice(&[9usize]);
    assert!(matches!(
        a.put_indices(&out_of_range, 2.0),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_clip_replace_round() {
    let mut a = NdArray::from_slice(&[-2.5, 0.123456, 7.0, 0.123456]);
    a.replace(0.123456, 0.5);
    assert_eq!(a.as_slice(), &[-2.5, 0.5, 7.0, 0.5]);
    assert_eq!(a.clip(-1.0, 1.0).as_slice(), &[-1.0, 0.5, 1.0, 0.5]);

    let r = NdArray::from_slice(&[3.14159, 2.71828]).round(2);
    common::assert_allclose_f64(r.as_slice(), &[3.14, 2.72], 0.0, 1e-12, "round");
}

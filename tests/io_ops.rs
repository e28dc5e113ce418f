//! Integration tests for binary dumps, text files and byte order

mod common;

use common::{random_matrix, rng};
use numcore::error::Error;
use numcore::prelude::*;
use std::fs;

#[test]
fn test_dump_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let a = random_matrix(&mut rng(4), 10, 100, -1.0, 1.0);

    let written = a.dump(dir.path().join("matrix")).unwrap();
    assert_eq!(written.extension().unwrap(), "bin");
    assert_eq!(fs::metadata(&written).unwrap().len(), 8000);

    let back = NdArray::<f64>::load(&written).unwrap();
    assert_eq!(back.shape(), Shape::new(1, 1000));
    assert_eq!(back.as_slice(), a.as_slice());

    let explicit = a.dump(dir.path().join("matrix.raw")).unwrap();
    assert_eq!(explicit, dir.path().join("matrix.raw"));
}

#[test]
fn test_load_rejects_partial_element() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.bin");
    fs::write(&path, [0u8; 7]).unwrap();
    assert!(matches!(NdArray::<f64>::load(&path), Err(Error::ShapeMismatch { .. })));
    assert_eq!(NdArray::<u8>::load(&path).unwrap().size(), 7);

    let missing = dir.path().join("missing.bin");
    assert!(matches!(NdArray::<f64>::load(&missing), Err(Error::Io(_))));
}

#[test]
fn test_text_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.txt");
    let a = NdArray::from_vec(2, 2, vec![1.5, -0.1, 1e-9, 42.0]).unwrap();

    a.tofile(&path, ", ").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1.5, -0.1, 0.000000001, 42");

    let back = NdArray::<f64>::fromfile(&path, ",").unwrap();
    assert_eq!(back.as_slice(), a.as_slice());
    assert_eq!(back.shape(), Shape::new(1, 4));

    fs::write(&path, "1 2 x").unwrap();
    assert!(matches!(
        NdArray::<i32>::fromfile(&path, " "),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_raw_tofile_matches_dump() {
    let dir = tempfile::tempdir().unwrap();
    let a = NdArray::from_slice(&[1i32, -2, 3]);
    let raw = dir.path().join("raw");
    a.tofile(&raw, "").unwrap();
    assert!(raw.extension().is_none());
    assert_eq!(NdArray::<i32>::fromfile(&raw, "").unwrap(), a);
}

#[test]
fn test_byte_order_roundtrip() {
    let a = NdArray::from_slice(&[1.0f64, -2.5]);
    let mut b = a.clone();
    b.byteswap();
    assert_ne!(b.as_slice(), a.as_slice());
    assert_eq!(b.endianess(), Endian::host().swapped());

    let restored = b.newbyteorder(Endian::host());
    assert_eq!(restored.as_slice(), a.as_slice());

    let big = a.newbyteorder(Endian::Big);
    assert_eq!(big.endianess(), Endian::Big);
    assert_eq!(big.get(0).unwrap().to_bits(), 1.0f64.to_bits().to_be());
}

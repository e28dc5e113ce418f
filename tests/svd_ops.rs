//! Integration tests for the singular value decomposition and the solvers
//! built on it

mod common;

use common::{assert_allclose_f64, assert_near_identity, init_logging, random_matrix, rng};
use numcore::error::Error;
use numcore::prelude::*;

#[test]
fn test_svd_reconstructs_random_shapes() {
    init_logging();
    let mut r = rng(1);
    for (m, n) in [(1, 1), (4, 4), (7, 3), (3, 7), (12, 9)] {
        let a = random_matrix(&mut r, m, n, -3.0, 3.0);
        let (u, s, v) = linalg::svd(&a).unwrap().into_parts();
        let k = m.min(n);

        assert_eq!(u.shape(), Shape::new(m, k));
        assert_eq!(s.shape(), Shape::new(k, k));
        assert_eq!(v.shape(), Shape::new(k, n));

        let usv = linalg::multi_dot(&[&u, &s, &v]).unwrap();
        assert_allclose_f64(usv.as_slice(), a.as_slice(), 1e-10, 1e-10, &format!("U S V, {m}x{n}"));

        assert_near_identity(&u.transpose().dot(&u).unwrap(), 1e-10, "U^T U");
        assert_near_identity(&v.dot(&v.transpose()).unwrap(), 1e-10, "V V^T");

        let sigma = s.diagonal(0);
        assert!(sigma.iter().all(|&x| x >= 0.0));
        assert!(sigma.as_slice().windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_svdvals_known_values() {
    let a = NdArray::from_vec(2, 2, vec![3.0, 0.0, 4.0, 5.0]).unwrap();
    let s = linalg::svdvals(&a).unwrap();
    assert_eq!(s.shape(), Shape::new(1, 2));
    assert_allclose_f64(s.as_slice(), &[45f64.sqrt(), 5f64.sqrt()], 0.0, 1e-12, "svdvals");

    let rank_one = NdArray::from_vec(3, 2, vec![1, 2, 2, 4, 3, 6]).unwrap();
    let s = linalg::svdvals(&rank_one).unwrap();
    assert!((s.get(0).unwrap() - 70f64.sqrt()).abs() < 1e-12);
    assert!(s.get(1).unwrap().abs() < 1e-12);
}

#[test]
fn test_pinv_penrose_conditions() {
    let mut r = rng(8);
    let a = random_matrix(&mut r, 6, 4, -1.0, 1.0);
    let p = linalg::pinv(&a).unwrap();
    assert_eq!(p.shape(), Shape::new(4, 6));

    let apa = linalg::multi_dot(&[&a, &p, &a]).unwrap();
    assert_allclose_f64(apa.as_slice(), a.as_slice(), 1e-10, 1e-10, "A P A");
    let pap = linalg::multi_dot(&[&p, &a, &p]).unwrap();
    assert_allclose_f64(pap.as_slice(), p.as_slice(), 1e-10, 1e-10, "P A P");

    let square = random_matrix(&mut r, 5, 5, -1.0, 1.0);
    let direct = linalg::inv(&square).unwrap();
    let pseudo = linalg::pinv(&square).unwrap();
    assert_allclose_f64(pseudo.as_slice(), direct.as_slice(), 1e-8, 1e-8, "pinv of invertible");
}

#[test]
fn test_lstsq_line_fit() {
    // y = 2x + 1 sampled exactly
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let mut design = NdArray::<f64>::ones(5, 2);
    for (i, &x) in xs.iter().enumerate() {
        design.put_at(i as isize, 0, x).unwrap();
    }
    let y = NdArray::from_slice(&xs.map(|x| 2.0 * x + 1.0));

    let coef = linalg::lstsq(&design, &y, linalg::DEFAULT_LSTSQ_TOLERANCE).unwrap();
    assert_eq!(coef.shape(), Shape::new(2, 1));
    assert_allclose_f64(coef.as_slice(), &[2.0, 1.0], 0.0, 1e-10, "slope and intercept");
}

#[test]
fn test_lstsq_rank_deficient_minimum_norm() {
    // duplicated column: the minimum-norm solution splits the weight evenly
    let a = NdArray::from_vec(3, 2, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]).unwrap();
    let b = NdArray::from_vec(3, 1, vec![2.0, 4.0, 6.0]).unwrap();
    let x = linalg::lstsq(&a, &b, 1e-10).unwrap();
    assert_allclose_f64(x.as_slice(), &[1.0, 1.0], 0.0, 1e-10, "minimum norm");

    assert!(matches!(linalg::lstsq(&a, &b, -1.0), Err(Error::InvalidArgument { .. })));
    assert!(matches!(linalg::lstsq(&a, &b, f64::NAN), Err(Error::InvalidArgument { .. })));
    let wrong = NdArray::from_slice(&[1.0, 2.0]);
    assert!(matches!(linalg::lstsq(&a, &wrong, 1e-10), Err(Error::ShapeMismatch { .. })));
}

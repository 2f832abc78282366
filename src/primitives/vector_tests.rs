use super::*;

#[test]
fn test_from_slice_and_len() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn test_from_vec_preserves_order() {
    let v = Vector::from_vec(vec![4.0, 5.0]);
    assert_eq!(v.as_slice(), &[4.0, 5.0]);
    assert_eq!(v[0], 4.0);
    assert_eq!(v[1], 5.0);
}

#[test]
fn test_zeros() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert_eq!(v.sum(), 0.0);
}

#[test]
fn test_dot() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    assert_eq!(a.dot(&b), 32.0);
}

#[test]
#[should_panic(expected = "equal lengths")]
fn test_dot_length_mismatch_panics() {
    let a = Vector::from_slice(&[1.0, 2.0]);
    let b = Vector::from_slice(&[1.0]);
    let _ = a.dot(&b);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[3.0, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_norm_of_empty_is_zero() {
    let v = Vector::from_vec(Vec::new());
    assert!(v.is_empty());
    assert_eq!(v.norm(), 0.0);
}

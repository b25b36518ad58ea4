pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m: Matrix<f64> = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    let err = result.expect_err("3 elements cannot fill a 2x3 matrix");
    assert!(err.to_string().contains("dimension mismatch"));
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_transpose() {
    let m: Matrix<f64> = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-12);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-12);
    assert_eq!(t.transpose(), m);
}

#[test]
fn test_row_and_column() {
    let m: Matrix<f64> = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    let row = m.row(0);
    assert_eq!(row.len(), 3);
    assert!((row[2] - 3.0).abs() < 1e-12);
    let col = m.column(1);
    assert_eq!(col.as_slice(), &[2.0, 5.0]);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2x3");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).expect("3x2");
    let c = a.matmul(&b).expect("2x3 * 3x2 is compatible");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11
    assert!((c.get(0, 0) - 58.0).abs() < 1e-12);
    assert!((c.get(0, 1) - 64.0).abs() < 1e-12);
    assert!((c.get(1, 0) - 139.0).abs() < 1e-12);
    assert!((c.get(1, 1) - 154.0).abs() < 1e-12);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_frobenius_distance() {
    let a = Matrix::from_vec(1, 2, vec![0.0, 0.0]).expect("1x2");
    let b = Matrix::from_vec(1, 2, vec![3.0, 4.0]).expect("1x2");
    let d = a.frobenius_distance(&b).expect("same shape");
    assert!((d - 5.0).abs() < 1e-12);
    assert!(a.frobenius_distance(&Matrix::zeros(2, 1)).is_err());
}

#[test]
fn test_mean_and_non_negative() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 6.0]).expect("2x2");
    assert!((m.mean() - 3.0).abs() < 1e-12);
    assert!(m.is_non_negative());
    assert_eq!(Matrix::zeros(0, 0).mean(), 0.0);

    let neg = Matrix::from_vec(1, 2, vec![1.0, -0.5]).expect("1x2");
    assert!(!neg.is_non_negative());
}

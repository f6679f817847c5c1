pub(crate) use super::*;

#[test]
fn test_new_is_zero_filled() {
    let m = Matrix::new(2, 3).expect("small allocation succeeds");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice().len(), 6);
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_new_empty_dimensions() {
    let m = Matrix::new(0, 0).expect("empty allocation succeeds");
    assert_eq!(m.shape(), (0, 0));
    assert!(m.as_slice().is_empty());

    let tall = Matrix::new(3, 0).expect("empty allocation succeeds");
    assert_eq!(tall.n_rows(), 3);
    assert!(tall.as_slice().is_empty());
    assert_eq!(tall.iter_rows().count(), 3);
}

#[test]
fn test_new_overflowing_dimensions() {
    let err = Matrix::new(usize::MAX, 2).expect_err("rows * cols overflows");
    assert_eq!(
        err,
        MarkovError::AllocationFailed {
            rows: usize::MAX,
            cols: 2
        }
    );
}

#[test]
fn test_new_unallocatable_buffer() {
    // Fits in usize but not in isize::MAX bytes of f64
    let rows = usize::MAX / 16;
    assert!(matches!(
        Matrix::new(rows, 1),
        Err(MarkovError::AllocationFailed { .. })
    ));
}

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 2), 6.0);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(MarkovError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]])
        .expect("rows have equal length");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.as_slice(), &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
}

#[test]
fn test_from_rows_ragged() {
    let err = Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).expect_err("second row is short");
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn test_from_rows_empty() {
    let m = Matrix::from_rows(&[]).expect("no rows is a 0x0 matrix");
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn test_identity() {
    let m = Matrix::identity(3).expect("small allocation succeeds");
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(m.get(i, j), expected);
        }
    }
}

#[test]
fn test_get_set_row_major_layout() {
    let mut m = Matrix::new(2, 3).expect("small allocation succeeds");
    m.set(1, 2, 42.0);
    m.set(0, 1, -1.5);
    assert_eq!(m.get(1, 2), 42.0);
    // (i, j) lives at i * cols + j
    assert_eq!(m.as_slice()[5], 42.0);
    assert_eq!(m.as_slice()[1], -1.5);
}

#[test]
fn test_index_sugar() {
    let mut m = Matrix::new(2, 2).expect("small allocation succeeds");
    m[(1, 0)] = 0.5;
    assert_eq!(m[(1, 0)], 0.5);
    assert_eq!(m.get(1, 0), 0.5);
}

#[test]
#[should_panic]
fn test_get_out_of_bounds_panics() {
    let m = Matrix::new(2, 2).expect("small allocation succeeds");
    let _ = m.get(2, 0);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_is_square() {
    assert!(Matrix::new(3, 3).expect("alloc").is_square());
    assert!(!Matrix::new(2, 3).expect("alloc").is_square());
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    assert!((c.get(0, 0) - 58.0).abs() < 1e-12);
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert!((c.get(0, 1) - 64.0).abs() < 1e-12);
    assert!((c.get(1, 0) - 139.0).abs() < 1e-12);
    assert!((c.get(1, 1) - 154.0).abs() < 1e-12);
}

#[test]
fn test_matmul_leaves_inputs_untouched() {
    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).expect("valid");
    let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).expect("valid");
    let (a_before, b_before) = (a.clone(), b.clone());
    let _ = a.matmul(&b).expect("compatible dims");
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1.0; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!(matches!(
        a.matmul(&b),
        Err(MarkovError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matmul_empty_inner_dimension() {
    // (2x0) * (0x3) is a 2x3 zero matrix
    let a = Matrix::new(2, 0).expect("alloc");
    let b = Matrix::new(0, 3).expect("alloc");
    let c = a.matmul(&b).expect("inner dims agree");
    assert_eq!(c.shape(), (2, 3));
    assert!(c.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_clone_is_deep() {
    let a = Matrix::from_rows(&[&[1.0, 2.0]]).expect("valid");
    let mut b = a.clone();
    b.set(0, 0, 99.0);
    assert_eq!(a.get(0, 0), 1.0);
}

#[test]
fn test_approx_eq() {
    let a = Matrix::from_rows(&[&[0.86, 0.14]]).expect("valid");
    let b = Matrix::from_rows(&[&[0.86 + 1e-12, 0.14]]).expect("valid");
    assert!(a.approx_eq(&b, 1e-9));
    assert!(!a.approx_eq(&b, 0.0));

    let c = Matrix::from_rows(&[&[0.86], &[0.14]]).expect("valid");
    assert!(!a.approx_eq(&c, 1.0));
}

#[test]
fn test_display_fixed_width() {
    let m = Matrix::from_rows(&[&[58.0, 64.0], &[139.0, 154.0]]).expect("valid");
    assert_eq!(m.to_string(), " 58.0000  64.0000 \n139.0000 154.0000 \n");
}

#[test]
fn test_write_labeled() {
    let m = Matrix::from_rows(&[&[0.9, 0.1], &[0.5, 0.5]]).expect("valid");
    let mut out = Vec::new();
    m.write_labeled(&mut out, Some("Markov chain M"))
        .expect("writing to a Vec succeeds");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        "Markov chain M (2x2):\n  0.9000   0.1000 \n  0.5000   0.5000 \n\n"
    );
}

#[test]
fn test_write_unlabeled() {
    let m = Matrix::from_rows(&[&[1.0]]).expect("valid");
    let mut out = Vec::new();
    m.write_labeled(&mut out, None).expect("writing to a Vec succeeds");
    assert_eq!(String::from_utf8(out).expect("utf8"), "  1.0000 \n\n");
}

#[test]
fn test_serde_json_shape() {
    let m = Matrix::from_rows(&[&[1.0, 2.0]]).expect("valid");
    let json = serde_json::to_value(&m).expect("serializable");
    assert_eq!(json["rows"], 1);
    assert_eq!(json["cols"], 2);
    assert_eq!(json["data"], serde_json::json!([1.0, 2.0]));
}

#[test]
fn test_deserialize_rejects_bad_length() {
    let bad = r#"{"rows": 2, "cols": 2, "data": [1.0, 2.0, 3.0]}"#;
    let err = serde_json::from_str::<Matrix>(bad).expect_err("3 != 2*2");
    assert!(err.to_string().contains("dimension mismatch"));
}

// =========================================================================
// FALSIFY: Dense matrix contract
//
// Each test states an algebraic law of the row-major Matrix and tries to
// break it with a concrete counterexample.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations", ch. 1
// =========================================================================

use super::*;

/// Matmul shape: (m x k) * (k x n) = (m x n)
#[test]
fn falsify_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// Right identity: A * I_n = A
#[test]
fn falsify_right_identity() {
    let a = Matrix::from_vec(2, 3, vec![1.5, -2.0, 3.25, 4.0, 0.0, -6.5]).expect("valid");
    let i = Matrix::identity(3).expect("alloc");
    let ai = a.matmul(&i).expect("compatible dims");
    assert_eq!(ai, a, "FALSIFIED: A*I != A");
}

/// Left identity: I_m * A = A
#[test]
fn falsify_left_identity() {
    let a = Matrix::from_vec(2, 3, vec![1.5, -2.0, 3.25, 4.0, 0.0, -6.5]).expect("valid");
    let i = Matrix::identity(2).expect("alloc");
    let ia = i.matmul(&a).expect("compatible dims");
    assert_eq!(ia, a, "FALSIFIED: I*A != A");
}

/// Inner dimension mismatch always fails, in both orders.
#[test]
fn falsify_inner_dimension_check() {
    let a = Matrix::new(2, 3).expect("alloc");
    let b = Matrix::new(2, 3).expect("alloc");
    assert!(a.matmul(&b).is_err(), "FALSIFIED: (2x3)*(2x3) accepted");
    assert!(b.matmul(&a).is_err(), "FALSIFIED: (2x3)*(2x3) accepted");
}

/// Associativity: (A*B)*C = A*(B*C) for exactly representable values
#[test]
fn falsify_matmul_associative() {
    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).expect("valid");
    let b = Matrix::from_rows(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, -1.0]]).expect("valid");
    let c = Matrix::from_rows(&[&[2.0], &[1.0], &[3.0]]).expect("valid");

    let left = a.matmul(&b).and_then(|ab| ab.matmul(&c)).expect("dims");
    let right = b.matmul(&c).and_then(|bc| a.matmul(&bc)).expect("dims");
    assert_eq!(left, right, "FALSIFIED: (AB)C != A(BC)");
}

/// Buffer length equals rows * cols for every constructor.
#[test]
fn falsify_buffer_length_invariant() {
    for (rows, cols) in [(0, 0), (0, 4), (4, 0), (1, 1), (3, 5)] {
        let m = Matrix::new(rows, cols).expect("alloc");
        assert_eq!(
            m.as_slice().len(),
            rows * cols,
            "FALSIFIED: {rows}x{cols} buffer has {} elements",
            m.as_slice().len()
        );
    }
    let id = Matrix::identity(4).expect("alloc");
    assert_eq!(id.as_slice().len(), 16);
}

// =========================================================================
// FALSIFY: Transition power contract
//
// Exponentiation by squaring must agree with the semigroup law of matrix
// powers and keep stochastic matrices stochastic.
//
// References:
//   - Knuth (1997) "The Art of Computer Programming", vol. 2, 4.6.3
//   - Norris (1997) "Markov Chains", 1.1
// =========================================================================

use super::*;

fn three_state() -> Matrix {
    Matrix::from_rows(&[&[0.5, 0.25, 0.25], &[0.0, 0.5, 0.5], &[0.75, 0.0, 0.25]])
        .expect("valid rows")
}

/// Semigroup law: M^a * M^b = M^(a+b)
#[test]
fn falsify_semigroup_law() {
    let m = three_state();
    for a in 1..=5 {
        for b in 1..=5 {
            let lhs = power(&m, a)
                .and_then(|ma| power(&m, b).and_then(|mb| ma.matmul(&mb)))
                .expect("square, k >= 1");
            let rhs = power(&m, a + b).expect("square, k >= 1");
            assert!(
                lhs.approx_eq(&rhs, 1e-12),
                "FALSIFIED: M^{a} * M^{b} != M^{}",
                a + b
            );
        }
    }
}

/// M^3 computed directly agrees with M^2 * M
#[test]
fn falsify_cube_consistency() {
    let m = Matrix::from_rows(&[&[0.9, 0.1], &[0.5, 0.5]]).expect("valid rows");
    let m2 = power(&m, 2).expect("square");
    let m3 = power(&m, 3).expect("square");
    let m2m = m2.matmul(&m).expect("square");
    assert!(m3.approx_eq(&m2m, 1e-12), "FALSIFIED: M^3 != M^2 * M");
}

/// Powers of a stochastic matrix stay stochastic.
#[test]
fn falsify_closure_under_powers() {
    let m = three_state();
    for k in [1, 2, 3, 8, 31, 64] {
        let mk = power(&m, k).expect("square");
        assert!(is_chain(&mk, 1e-9), "FALSIFIED: M^{k} is not stochastic");
    }
}

/// Identity is a fixed point of every power.
#[test]
fn falsify_identity_fixed_point() {
    let id = Matrix::identity(4).expect("alloc");
    for k in [1, 2, 5, 100, u32::MAX] {
        assert_eq!(power(&id, k).expect("square"), id, "FALSIFIED: I^{k} != I");
    }
}

/// Perturbing one entry past eps flips the validity check.
#[test]
fn falsify_tolerance_boundary() {
    let eps = 1e-6;
    let m = Matrix::from_rows(&[&[0.5, 0.5], &[0.25, 0.75]]).expect("valid rows");
    assert!(is_chain(&m, eps));

    let mut up = m.clone();
    up.set(0, 0, 0.5 + 2.0 * eps);
    assert!(!is_chain(&up, eps), "FALSIFIED: +2eps perturbation accepted");

    let mut down = m.clone();
    down.set(1, 1, 0.75 - 2.0 * eps);
    assert!(!is_chain(&down, eps), "FALSIFIED: -2eps perturbation accepted");
}

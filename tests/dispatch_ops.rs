//! Integration tests for the pairwise operator tables
//!
//! Every ordered pair of kinds is checked against reference dense arithmetic,
//! and every computed result must come back in its narrowed encoding.

mod common;

use common::{
    assert_matrix_eq, assert_narrowed, dense_add, dense_matmul, dense_sub, samples,
};
use polymat::prelude::*;

const ADD_SHAPES: [(usize, usize); 5] = [(3, 3), (4, 4), (3, 1), (1, 1), (2, 3)];

/// `(m, k, n)`: left operand `m x k`, right operand `k x n`
const MUL_SHAPES: [(usize, usize, usize); 8] = [
    (3, 3, 3),
    (4, 4, 4),
    (3, 1, 3),
    (3, 1, 1),
    (1, 1, 1),
    (2, 3, 1),
    (3, 3, 1),
    (1, 3, 3),
];

fn is_zero(m: &Matrix) -> bool {
    m.kind() == MatrixKind::Zero
}

fn is_identity(m: &Matrix) -> bool {
    m.kind() == MatrixKind::Identity
}

#[test]
fn test_plus_every_pair_matches_dense() {
    for (rows, columns) in ADD_SHAPES {
        for a in samples(rows, columns, 0) {
            for b in samples(rows, columns, 2) {
                let msg = format!("{} + {} ({rows}x{columns})", a.kind(), b.kind());
                let sum = a.plus(&b).unwrap();
                assert_eq!(sum.shape(), a.shape(), "{msg}");
                assert_matrix_eq(&sum, &dense_add(&a.data(), &b.data()), &msg);
                assert_eq!(b.plus(&a).unwrap().data(), sum.data(), "{msg}: commuted");
                if !is_zero(&a) && !is_zero(&b) {
                    assert_narrowed(&sum, &msg);
                }
            }
        }
    }
}

#[test]
fn test_minus_every_pair_matches_dense() {
    for (rows, columns) in ADD_SHAPES {
        for a in samples(rows, columns, 1) {
            for b in samples(rows, columns, 3) {
                let msg = format!("{} - {} ({rows}x{columns})", a.kind(), b.kind());
                let difference = a.minus(&b).unwrap();
                assert_matrix_eq(&difference, &dense_sub(&a.data(), &b.data()), &msg);
                if !is_zero(&b) {
                    assert_narrowed(&difference, &msg);
                }
            }
        }
    }
}

#[test]
fn test_times_every_pair_matches_dense() {
    for (m, k, n) in MUL_SHAPES {
        for a in samples(m, k, 0) {
            for b in samples(k, n, 4) {
                let msg = format!("{} x {} ({m}x{k} . {k}x{n})", a.kind(), b.kind());
                let product = a.times(&b).unwrap();
                assert_eq!(product.shape(), Shape::new(m, n).unwrap(), "{msg}");
                assert_matrix_eq(&product, &dense_matmul(&a.data(), &b.data()), &msg);
                if !is_identity(&a) && !is_identity(&b) {
                    assert_narrowed(&product, &msg);
                }
            }
        }
    }
}

#[test]
fn test_shape_mismatch_for_every_pair() {
    for a in samples(2, 3, 0) {
        for b in samples(3, 3, 0) {
            assert!(matches!(
                a.plus(&b),
                Err(Error::ShapeMismatch { op: "plus", .. })
            ));
            assert!(matches!(
                a.minus(&b),
                Err(Error::ShapeMismatch { op: "minus", .. })
            ));
            assert!(matches!(
                b.times(&a),
                Err(Error::ShapeMismatch { op: "times", .. })
            ));
            assert!(a.times(&b).is_ok());
        }
    }
}

#[test]
fn test_identity_and_zero_laws() {
    for a in samples(3, 3, 1) {
        let i = Matrix::identity(3).unwrap();
        let z = Matrix::zero(a.shape());
        assert_eq!(a.times(&i).unwrap(), a, "{} x I", a.kind());
        assert_eq!(i.times(&a).unwrap(), a, "I x {}", a.kind());
        assert_eq!(a.plus(&z).unwrap(), a, "{} + 0", a.kind());
        assert_eq!(a.times(&z).unwrap().kind(), MatrixKind::Zero);
        assert_eq!(a.minus(&a).unwrap().kind(), MatrixKind::Zero);
    }
}

#[test]
fn test_diagonals_multiplying_to_ones_give_identity() {
    let a = Matrix::diagonal(&[2.0, 4.0, 0.5]).unwrap();
    let b = Matrix::diagonal(&[0.5, 0.25, 2.0]).unwrap();
    assert_eq!(a.times(&b).unwrap().kind(), MatrixKind::Identity);

    let anti = Matrix::anti_diagonal(&[2.0, 1.0, 4.0]).unwrap();
    let inverse = Matrix::anti_diagonal(&[0.25, 1.0, 0.5]).unwrap();
    let product = anti.times(&inverse).unwrap();
    assert_eq!(product.kind(), MatrixKind::Identity);
    assert_eq!(product, Matrix::identity(3).unwrap());
}

#[test]
fn test_narrowing_expectations() {
    let shape = Shape::new(3, 3).unwrap();

    // Diagonal + AntiDiagonal has no line pattern
    let d = Matrix::diagonal(&[1.0, 2.0, 3.0]).unwrap();
    let a = Matrix::anti_diagonal(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(d.plus(&a).unwrap().kind(), MatrixKind::Csr);

    // Cancelling the off-centre cells leaves the centre cell only
    let cross = d.plus(&a).unwrap();
    let corners = Matrix::sparse(shape, [(0, 0, -1.0), (0, 2, -1.0), (2, 0, -3.0), (2, 2, -3.0)])
        .unwrap();
    let centre = cross.plus(&corners).unwrap();
    assert_eq!(centre.kind(), MatrixKind::Diagonal);
    assert_eq!(centre.get(1, 1).unwrap(), 4.0);

    // A ones column times a row gives identical rows
    let ones = Matrix::column_matrix(Shape::new(3, 1).unwrap(), vec![1.0; 3]).unwrap();
    let row = Matrix::dense(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    let outer = ones.times(&row).unwrap();
    assert_eq!(outer.kind(), MatrixKind::RowMatrix);
    assert_eq!(outer.data(), vec![vec![1.0, 2.0, 3.0]; 3]);

    // Dense product landing on one column
    let full = Matrix::dense(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let v = Matrix::vector(&[1.0, 0.0]).unwrap();
    let column = full.times(&v).unwrap();
    assert_eq!(column.kind(), MatrixKind::Vector);
    assert_eq!(column.data(), vec![vec![1.0], vec![3.0]]);
}

#[test]
fn test_scalar_operators_against_dense() {
    for a in samples(3, 3, 2) {
        let msg = format!("{}", a.kind());
        let expected: Vec<Vec<f64>> = a
            .data()
            .iter()
            .map(|row| row.iter().map(|v| v * -2.0).collect())
            .collect();
        let scaled = a.times_scalar(-2.0);
        assert_matrix_eq(&scaled, &expected, &msg);
        assert_narrowed(&scaled, &msg);
        assert_eq!(&a * -2.0, scaled);
        assert_eq!(a.clone() * -2.0, scaled);

        let shifted = a.plus_scalar(1.5);
        let expected: Vec<Vec<f64>> = a
            .data()
            .iter()
            .map(|row| row.iter().map(|v| v + 1.5).collect())
            .collect();
        assert_matrix_eq(&shifted, &expected, &msg);
        assert_narrowed(&shifted, &msg);
        assert_matrix_eq(&shifted.minus_scalar(1.5), &a.data(), &msg);

        assert_matrix_eq(&(-a.clone()), &a.times_scalar(-1.0).data(), &msg);
    }
}

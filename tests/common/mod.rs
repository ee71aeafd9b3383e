//! Common test utilities
#![allow(dead_code)]

use polymat::prelude::*;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert a matrix reads back as `expected`, cell by cell
pub fn assert_matrix_eq(m: &Matrix, expected: &[Vec<f64>], msg: &str) {
    let shape = m.shape();
    assert_eq!(shape.rows(), expected.len(), "{}: row count", msg);
    let got = m.data();
    for (r, (got_row, want_row)) in got.iter().zip(expected).enumerate() {
        assert_allclose_f64(got_row, want_row, 0.0, 1e-12, &format!("{msg}: row {r}"));
    }
}

/// Reference cell-wise sum of two dense grids
pub fn dense_add(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| x + y).collect())
        .collect()
}

/// Reference cell-wise difference of two dense grids
pub fn dense_sub(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| x - y).collect())
        .collect()
}

/// Reference triple-loop product of two dense grids
pub fn dense_matmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let columns = b[0].len();
    a.iter()
        .map(|row| {
            (0..columns)
                .map(|c| row.iter().zip(b).map(|(x, brow)| x * brow[c]).sum())
                .collect()
        })
        .collect()
}

/// Kind a grid narrows to, or `None` when it matches no structural pattern
pub fn pattern_kind(data: &[Vec<f64>]) -> Option<MatrixKind> {
    let rows = data.len();
    let columns = data[0].len();
    let cells = || {
        data.iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    };
    let nonzero = || cells().filter(|&(_, _, v)| v != 0.0);

    if nonzero().next().is_none() {
        return Some(MatrixKind::Zero);
    }
    if rows == columns {
        if nonzero().all(|(r, c, _)| r == c) {
            if (0..rows).all(|i| data[i][i] == 1.0) {
                return Some(MatrixKind::Identity);
            }
            return Some(MatrixKind::Diagonal);
        }
        if nonzero().all(|(r, c, _)| r + c == rows - 1) {
            return Some(MatrixKind::AntiDiagonal);
        }
    }
    if rows > 1 && data.iter().all(|row| row == &data[0]) {
        return Some(MatrixKind::RowMatrix);
    }
    if columns > 1 && data.iter().all(|row| row.iter().all(|&v| v == row[0])) {
        return Some(MatrixKind::ColumnMatrix);
    }
    if columns == 1 {
        return Some(MatrixKind::Vector);
    }
    None
}

/// Assert a computed result is in the encoding its cell pattern calls for
pub fn assert_narrowed(m: &Matrix, msg: &str) {
    if let Some(kind) = pattern_kind(&m.data()) {
        assert_eq!(m.kind(), kind, "{}: not narrowed", msg);
    }
}

/// Deterministic small-integer value for cell `(r, c)` with a seed
fn cell_value(r: usize, c: usize, seed: usize) -> f64 {
    ((r * 7 + c * 3 + seed) % 5) as f64 + 1.0
}

/// One sample of every kind that can take `rows x columns`
///
/// Samples are built through the public constructors with small integer
/// values, so every product and sum is exact.
pub fn samples(rows: usize, columns: usize, seed: usize) -> Vec<Matrix> {
    let shape = Shape::new(rows, columns).unwrap();
    let mut out = vec![Matrix::zero(shape)];

    if rows == columns {
        let n = rows;
        let line: Vec<f64> = (0..n).map(|i| cell_value(i, i, seed)).collect();
        out.push(Matrix::identity(n).unwrap());
        out.push(Matrix::diagonal(&line).unwrap());
        out.push(Matrix::anti_diagonal(&line).unwrap());
    }

    let row: Vec<f64> = (0..columns).map(|c| cell_value(0, c, seed)).collect();
    let column: Vec<f64> = (0..rows).map(|r| cell_value(r, 0, seed + 1)).collect();
    out.push(Matrix::row_matrix(shape, row).unwrap());
    out.push(Matrix::column_matrix(shape, column).unwrap());

    if columns == 1 {
        let values: Vec<f64> = (0..rows)
            .map(|r| if r % 2 == 0 { cell_value(r, 0, seed) } else { 0.0 })
            .collect();
        out.push(Matrix::vector(&values).unwrap());
    }

    let dense: Vec<Vec<f64>> = (0..rows)
        .map(|r| (0..columns).map(|c| cell_value(r, c, seed) - 3.0).collect())
        .collect();
    out.push(Matrix::dense(dense).unwrap());

    let cells = (0..rows)
        .flat_map(|r| (0..columns).map(move |c| (r, c)))
        .filter(|&(r, c)| (r + 2 * c + seed) % 3 == 0)
        .map(|(r, c)| (r, c, cell_value(r, c, seed)));
    out.push(Matrix::sparse(shape, cells).unwrap());

    out
}

/// The 3x3 sparse matrix used throughout the examples
///
/// ```text
/// [7  5  0]
/// [0  3 11]
/// [0  2  0]
/// ```
pub fn sample_csr() -> Matrix {
    Matrix::sparse(
        Shape::square(3).unwrap(),
        [
            (0, 0, 7.0),
            (0, 1, 5.0),
            (1, 1, 3.0),
            (1, 2, 11.0),
            (2, 1, 2.0),
        ],
    )
    .unwrap()
}

//! Structural narrowing of computed results
//!
//! A result is re-encoded as the first kind whose pattern it matches:
//!
//! 1. Zero: no non-zero cell
//! 2. Identity: square, main diagonal only, every value exactly 1
//! 3. Diagonal: square, main diagonal only (every non-zero 1x1 lands here)
//! 4. AntiDiagonal: square, anti-diagonal only
//! 5. RowMatrix: more than one row, all rows identical
//! 6. ColumnMatrix: more than one column, all columns identical
//! 7. Vector: a single column
//!
//! Otherwise the value keeps its representation. Narrowing never widens: the
//! checks run over stored entries (every cell for Full) and a result only
//! moves to a cheaper encoding.

use log::debug;

use super::Matrix;
use crate::format::Storage;
use crate::shape::{Order, Shape};
use crate::sparse::{CsrMatrix, SparseVector};
use crate::storage::{Axis, FullMatrix, LineMatrix, Orientation, UniformMatrix};

impl Matrix {
    /// Re-encode `self` as the most specific representation of its pattern
    pub(crate) fn narrow(self) -> Matrix {
        let before = self.kind();
        let shape = self.shape();
        let narrowed = match self {
            Matrix::Zero(_) | Matrix::Identity(_) => self,
            Matrix::Line(line) => narrow_line(line),
            Matrix::Uniform(uniform) => narrow_uniform(uniform),
            Matrix::Vector(vector) => narrow_vector(vector),
            Matrix::Full(full) => narrow_full(full),
            Matrix::Csr(csr) => narrow_csr(csr),
        };
        let after = narrowed.kind();
        if after != before {
            debug!("narrowed {shape} result from {before} to {after}");
        }
        narrowed
    }
}

fn narrow_line(line: LineMatrix) -> Matrix {
    let size = line.size();
    if line.values().iter().all(|&v| v == 0.0) {
        return Matrix::Zero(Shape::of(size, size));
    }
    // An anti-diagonal holding only its centre cell is a diagonal.
    let centre_only = line
        .values()
        .iter()
        .enumerate()
        .all(|(i, &v)| v == 0.0 || 2 * i + 1 == size);
    let line = match line.orientation() {
        Orientation::Anti if centre_only => {
            LineMatrix::from_parts(line.into_values(), Orientation::Main)
        }
        _ => line,
    };
    if line.orientation() == Orientation::Main && line.values().iter().all(|&v| v == 1.0) {
        return Matrix::Identity(Order::of(size));
    }
    Matrix::Line(line)
}

fn narrow_uniform(uniform: UniformMatrix) -> Matrix {
    let shape = uniform.shape();
    let values = uniform.values();
    if values.iter().all(|&v| v == 0.0) {
        return Matrix::Zero(shape);
    }
    if shape.rows() == 1 && shape.columns() == 1 {
        return narrow_line(LineMatrix::from_parts(values.to_vec(), Orientation::Main));
    }

    let constant = values.windows(2).all(|w| w[0] == w[1]);
    match uniform.axis() {
        // A single row is a ColumnMatrix when its values repeat.
        Axis::Row if shape.rows() == 1 && constant => Matrix::Uniform(UniformMatrix::from_parts(
            shape,
            Axis::Column,
            vec![values[0]],
        )),
        Axis::Row => Matrix::Uniform(uniform),
        Axis::Column if shape.rows() > 1 && constant => Matrix::Uniform(UniformMatrix::from_parts(
            shape,
            Axis::Row,
            vec![values[0]; shape.columns()],
        )),
        Axis::Column if shape.columns() > 1 => Matrix::Uniform(uniform),
        Axis::Column => Matrix::Vector(SparseVector::from_entries(
            shape.rows(),
            values.iter().copied().enumerate(),
        )),
    }
}

fn narrow_vector(vector: SparseVector) -> Matrix {
    let rows = vector.len();
    if vector.nnz() == 0 {
        return Matrix::Zero(Shape::of(rows, 1));
    }
    if rows == 1 {
        return narrow_line(LineMatrix::from_parts(vec![vector.get(0)], Orientation::Main));
    }
    if vector.is_constant() {
        let value = vector.values()[0];
        return Matrix::Uniform(UniformMatrix::from_parts(vector.shape(), Axis::Row, vec![value]));
    }
    Matrix::Vector(vector)
}

/// Line whose pattern covers every non-zero entry, if one exists
fn line_pattern<S: Storage>(storage: &S) -> Option<LineMatrix> {
    let shape = storage.shape();
    if !shape.is_square() {
        return None;
    }
    let size = shape.rows();
    let nonzero = || storage.entries().filter(|&(_, _, v)| v != 0.0);

    [Orientation::Main, Orientation::Anti]
        .into_iter()
        .find(|orientation| nonzero().all(|(r, c, _)| orientation.column_of(r, size) == c))
        .map(|orientation| {
            let mut values = vec![0.0; size];
            for (r, _, v) in nonzero() {
                values[r] = v;
            }
            LineMatrix::from_parts(values, orientation)
        })
}

fn narrow_full(full: FullMatrix) -> Matrix {
    let shape = full.shape();
    if full.as_slice().iter().all(|&v| v == 0.0) {
        return Matrix::Zero(shape);
    }
    if let Some(line) = line_pattern(&full) {
        return narrow_line(line);
    }

    let first = full.row(0);
    if shape.rows() > 1 && full.rows().all(|row| row == first) {
        return Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Row, first.to_vec()));
    }
    if shape.columns() > 1 && full.rows().all(|row| row.iter().all(|&v| v == row[0])) {
        let column = full.rows().map(|row| row[0]).collect();
        return Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Column, column));
    }
    if shape.columns() == 1 {
        let entries = full.as_slice().iter().copied().enumerate();
        return Matrix::Vector(SparseVector::from_entries(shape.rows(), entries));
    }
    Matrix::Full(full)
}

fn narrow_csr(csr: CsrMatrix) -> Matrix {
    let shape = csr.shape();
    if csr.nnz() == 0 {
        return Matrix::Zero(shape);
    }
    if let Some(line) = line_pattern(&csr) {
        return narrow_line(line);
    }

    // Identical rows: every row is stored and matches the first.
    if shape.rows() > 1 && csr.ner() == shape.rows() {
        let (first_cols, first_vals) = csr.compressed_row(0);
        if csr
            .rows()
            .all(|(_, cols, vals)| cols == first_cols && vals == first_vals)
        {
            let mut row = vec![0.0; shape.columns()];
            for (&c, &v) in first_cols.iter().zip(first_vals) {
                row[c] = v;
            }
            return Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Row, row));
        }
    }

    // Identical columns: every stored row is full and constant.
    if shape.columns() > 1
        && csr
            .rows()
            .all(|(_, cols, vals)| cols.len() == shape.columns() && vals.iter().all(|&v| v == vals[0]))
    {
        let mut column = vec![0.0; shape.rows()];
        for (r, _, vals) in csr.rows() {
            column[r] = vals[0];
        }
        return Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Column, column));
    }

    if shape.columns() == 1 {
        return Matrix::Vector(csr.to_vector());
    }
    Matrix::Csr(csr)
}

//! Construction entry points
//!
//! Constructors keep the representation they name; only operator results are
//! narrowed.

use super::Matrix;
use crate::error::Result;
use crate::shape::{Cell, Order, Shape};
use crate::sparse::{CsrMatrix, SparseVector};
use crate::storage::{Axis, FullMatrix, LineMatrix, Orientation, UniformMatrix};

impl Matrix {
    /// Sparse matrix from `(row, column, value)` cells.
    ///
    /// Cells may come in any order. Zero values are dropped and repeated
    /// coordinates are summed.
    ///
    /// Each coordinate should appear at most once. Summing repeats is how this
    /// crate resolves them, not a guarantee callers should build on.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if a cell lies outside `shape`.
    ///
    /// # Example
    ///
    /// ```
    /// # use polymat::prelude::*;
    /// let shape = Shape::new(3, 3)?;
    /// let m = Matrix::sparse(shape, [(0, 0, 7.0), (0, 1, 5.0), (1, 1, 3.0), (1, 2, 11.0), (2, 1, 2.0)])?;
    /// assert_eq!(m.data(), vec![vec![7.0, 5.0, 0.0], vec![0.0, 3.0, 11.0], vec![0.0, 2.0, 0.0]]);
    /// # Ok::<(), polymat::error::Error>(())
    /// ```
    pub fn sparse<I, C>(shape: Shape, cells: I) -> Result<Matrix>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        CsrMatrix::from_cells(shape, cells).map(Matrix::Csr)
    }

    /// Dense matrix from its rows.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when there are no rows, `InvalidShape` when the rows
    /// are empty and `RaggedRows` when their lengths differ.
    pub fn dense(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        FullMatrix::from_rows(rows).map(Matrix::Full)
    }

    /// Square diagonal matrix with `values` on the main diagonal
    pub fn diagonal(values: &[f64]) -> Result<Matrix> {
        LineMatrix::new(values.to_vec(), Orientation::Main).map(Matrix::Line)
    }

    /// Square matrix with `values[i]` at `(i, n - 1 - i)`
    pub fn anti_diagonal(values: &[f64]) -> Result<Matrix> {
        LineMatrix::new(values.to_vec(), Orientation::Anti).map(Matrix::Line)
    }

    /// Column vector; zero entries are not stored
    pub fn vector(values: &[f64]) -> Result<Matrix> {
        SparseVector::from_dense(values).map(Matrix::Vector)
    }

    /// `n x n` identity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` when `n` is 0.
    pub fn identity(n: usize) -> Result<Matrix> {
        Order::new(n).map(Matrix::Identity)
    }

    /// All-zero matrix
    pub fn zero(shape: Shape) -> Matrix {
        Matrix::Zero(shape)
    }

    /// Matrix whose every row is `values` (length `shape.columns()`)
    pub fn row_matrix(shape: Shape, values: Vec<f64>) -> Result<Matrix> {
        UniformMatrix::new(shape, Axis::Row, values).map(Matrix::Uniform)
    }

    /// Matrix whose every column is `values` (length `shape.rows()`)
    pub fn column_matrix(shape: Shape, values: Vec<f64>) -> Result<Matrix> {
        UniformMatrix::new(shape, Axis::Column, values).map(Matrix::Uniform)
    }
}

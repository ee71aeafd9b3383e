//! Representation kinds and the storage trait every representation implements

use crate::shape::Shape;

/// Internal encoding of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// Every cell is zero. Storage: O(1)
    Zero,

    /// Ones on the main diagonal. Storage: O(1)
    Identity,

    /// One value per row at column `i`. Storage: O(n)
    Diagonal,

    /// One value per row at column `n - 1 - i`. Storage: O(n)
    AntiDiagonal,

    /// Every row identical. Storage: O(columns)
    RowMatrix,

    /// Every column identical. Storage: O(rows)
    ColumnMatrix,

    /// Single sparse column. Storage: O(nnz)
    Vector,

    /// Dense row-major. Storage: O(rows * columns)
    Full,

    /// Compressed Sparse Row over non-empty rows. Storage: O(2 * nnz + 2 * ner)
    Csr,
}

impl MatrixKind {
    /// Returns the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Zero => "Zero",
            MatrixKind::Identity => "Identity",
            MatrixKind::Diagonal => "Diagonal",
            MatrixKind::AntiDiagonal => "AntiDiagonal",
            MatrixKind::RowMatrix => "RowMatrix",
            MatrixKind::ColumnMatrix => "ColumnMatrix",
            MatrixKind::Vector => "Vector",
            MatrixKind::Full => "Full",
            MatrixKind::Csr => "CSR",
        }
    }
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for matrix storage backends
///
/// Each non-degenerate representation (line, uniform, vector, full, CSR)
/// implements this trait; [`crate::matrix::Matrix`] delegates to it.
pub trait Storage {
    /// Returns the shape
    fn shape(&self) -> Shape;

    /// Returns the value at `(row, column)`.
    ///
    /// The coordinate must already be validated against [`Storage::shape`].
    fn value_at(&self, row: usize, column: usize) -> f64;

    /// Returns the number of explicitly stored values
    fn nnz(&self) -> usize;

    /// Iterates the stored entries as `(row, column, value)` in row-major order.
    ///
    /// Entries not yielded are zero.
    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_;

    /// Maximum absolute column sum
    fn norm_one(&self) -> f64;

    /// Maximum absolute row sum
    fn norm_infinity(&self) -> f64;

    /// Square root of the sum of squared cells
    fn frobenius_norm(&self) -> f64;

    /// Returns the number of rows
    #[inline]
    fn nrows(&self) -> usize {
        self.shape().rows()
    }

    /// Returns the number of columns
    #[inline]
    fn ncols(&self) -> usize {
        self.shape().columns()
    }

    /// Materializes every cell, row by row
    fn to_dense(&self) -> Vec<Vec<f64>> {
        let mut data = vec![vec![0.0; self.ncols()]; self.nrows()];
        for (row, column, value) in self.entries() {
            data[row][column] = value;
        }
        data
    }
}

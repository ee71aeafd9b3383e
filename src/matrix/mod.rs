//! The `Matrix` enum: one closed set of representations behind a single value type

mod construct;
mod narrow;

use crate::error::Result;
use crate::format::{MatrixKind, Storage};
use crate::shape::{Order, Shape};
use crate::sparse::{CsrMatrix, SparseVector};
use crate::storage::{Axis, FullMatrix, LineMatrix, Orientation, UniformMatrix};

/// Evaluate `$body` with `$s` bound to the storage of a structured variant.
///
/// Zero and Identity carry no storage and get their own expressions.
macro_rules! with_storage {
    (
        $matrix:expr,
        Zero($shape:pat) => $zero:expr,
        Identity($n:pat) => $identity:expr,
        $s:ident => $body:expr $(,)?
    ) => {
        match $matrix {
            Matrix::Zero($shape) => $zero,
            Matrix::Identity($n) => $identity,
            Matrix::Line($s) => $body,
            Matrix::Uniform($s) => $body,
            Matrix::Vector($s) => $body,
            Matrix::Full($s) => $body,
            Matrix::Csr($s) => $body,
        }
    };
}

/// An immutable `f64` matrix in one of several structural encodings
///
/// Build values through the constructors ([`Matrix::sparse`],
/// [`Matrix::dense`], [`Matrix::diagonal`], ...). Arithmetic picks an
/// algorithm from the encodings of both operands and returns the most
/// specific encoding that fits the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    /// Every cell is zero
    Zero(Shape),
    /// `n x n` identity; [`Order`] guarantees `n > 0`
    Identity(Order),
    /// Diagonal or anti-diagonal
    Line(LineMatrix),
    /// Row-uniform or column-uniform
    Uniform(UniformMatrix),
    /// Single sparse column
    Vector(SparseVector),
    /// Dense row-major
    Full(FullMatrix),
    /// Compressed sparse rows
    Csr(CsrMatrix),
}

impl Matrix {
    /// Representation kind
    pub fn kind(&self) -> MatrixKind {
        match self {
            Matrix::Zero(_) => MatrixKind::Zero,
            Matrix::Identity(_) => MatrixKind::Identity,
            Matrix::Line(line) => match line.orientation() {
                Orientation::Main => MatrixKind::Diagonal,
                Orientation::Anti => MatrixKind::AntiDiagonal,
            },
            Matrix::Uniform(uniform) => match uniform.axis() {
                Axis::Row => MatrixKind::RowMatrix,
                Axis::Column => MatrixKind::ColumnMatrix,
            },
            Matrix::Vector(_) => MatrixKind::Vector,
            Matrix::Full(_) => MatrixKind::Full,
            Matrix::Csr(_) => MatrixKind::Csr,
        }
    }

    /// Dimensions
    pub fn shape(&self) -> Shape {
        with_storage!(self,
            Zero(shape) => *shape,
            Identity(n) => n.shape(),
            s => s.shape(),
        )
    }

    /// Value at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the coordinate is outside the shape.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.shape().check_index(row, column)?;
        Ok(self.value_at(row, column))
    }

    /// Value at an already validated coordinate
    pub(crate) fn value_at(&self, row: usize, column: usize) -> f64 {
        with_storage!(self,
            Zero(_) => 0.0,
            Identity(_) => if row == column { 1.0 } else { 0.0 },
            s => s.value_at(row, column),
        )
    }

    /// Number of explicitly stored values.
    ///
    /// Zero stores none; Identity counts its diagonal; dense storage counts
    /// every cell.
    pub fn nnz(&self) -> usize {
        with_storage!(self,
            Zero(_) => 0,
            Identity(n) => n.get(),
            s => s.nnz(),
        )
    }

    /// Every cell, row by row
    pub fn data(&self) -> Vec<Vec<f64>> {
        with_storage!(self,
            Zero(shape) => vec![vec![0.0; shape.columns()]; shape.rows()],
            Identity(n) => LineMatrix::ones(n.get()).to_dense(),
            s => s.to_dense(),
        )
    }

    /// Maximum absolute column sum
    pub fn norm_one(&self) -> f64 {
        with_storage!(self,
            Zero(_) => 0.0,
            Identity(_) => 1.0,
            s => s.norm_one(),
        )
    }

    /// Maximum absolute row sum
    pub fn norm_infinity(&self) -> f64 {
        with_storage!(self,
            Zero(_) => 0.0,
            Identity(_) => 1.0,
            s => s.norm_infinity(),
        )
    }

    /// Square root of the sum of squared cells
    pub fn frobenius_norm(&self) -> f64 {
        with_storage!(self,
            Zero(_) => 0.0,
            Identity(n) => (n.get() as f64).sqrt(),
            s => s.frobenius_norm(),
        )
    }

    /// Dense copy
    pub(crate) fn to_full(&self) -> FullMatrix {
        with_storage!(self,
            Zero(shape) => FullMatrix::zeros(*shape),
            Identity(n) => FullMatrix::from_storage(&LineMatrix::ones(n.get())),
            s => FullMatrix::from_storage(s),
        )
    }

    /// Non-zero `(column, value)` pairs of `row`, in column order
    pub(crate) fn row_entries(&self, row: usize) -> Vec<(usize, f64)> {
        let nonzero = |&(_, v): &(usize, f64)| v != 0.0;
        match self {
            Matrix::Zero(_) => Vec::new(),
            Matrix::Identity(_) => vec![(row, 1.0)],
            Matrix::Line(line) => [(line.column_of(row), line.values()[row])]
                .into_iter()
                .filter(nonzero)
                .collect(),
            Matrix::Uniform(uniform) => (0..uniform.ncols())
                .map(|column| (column, uniform.value_at(row, column)))
                .filter(nonzero)
                .collect(),
            Matrix::Vector(vector) => [(0, vector.get(row))].into_iter().filter(nonzero).collect(),
            Matrix::Full(full) => full
                .row(row)
                .iter()
                .copied()
                .enumerate()
                .filter(nonzero)
                .collect(),
            Matrix::Csr(csr) => csr
                .row(row)
                .map(|(columns, values)| {
                    columns
                        .iter()
                        .copied()
                        .zip(values.iter().copied())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
        }
    }
}

impl From<LineMatrix> for Matrix {
    fn from(line: LineMatrix) -> Self {
        Matrix::Line(line)
    }
}

impl From<UniformMatrix> for Matrix {
    fn from(uniform: UniformMatrix) -> Self {
        Matrix::Uniform(uniform)
    }
}

impl From<SparseVector> for Matrix {
    fn from(vector: SparseVector) -> Self {
        Matrix::Vector(vector)
    }
}

impl From<FullMatrix> for Matrix {
    fn from(full: FullMatrix) -> Self {
        Matrix::Full(full)
    }
}

impl From<CsrMatrix> for Matrix {
    fn from(csr: CsrMatrix) -> Self {
        Matrix::Csr(csr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn all_kinds() -> Vec<Matrix> {
        vec![
            Matrix::zero(Shape::new(2, 3).unwrap()),
            Matrix::identity(3).unwrap(),
            Matrix::diagonal(&[1.0, 2.0, 3.0]).unwrap(),
            Matrix::anti_diagonal(&[1.0, 2.0, 3.0]).unwrap(),
            Matrix::row_matrix(Shape::new(2, 3).unwrap(), vec![1.0, 0.0, 2.0]).unwrap(),
            Matrix::column_matrix(Shape::new(2, 3).unwrap(), vec![4.0, -1.0]).unwrap(),
            Matrix::vector(&[0.0, 3.0, 0.0]).unwrap(),
            Matrix::dense(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(),
            Matrix::sparse(Shape::new(3, 2).unwrap(), [(0, 1, 5.0), (2, 0, -6.0)]).unwrap(),
        ]
    }

    #[test]
    fn test_get_agrees_with_data() {
        for m in all_kinds() {
            let data = m.data();
            let shape = m.shape();
            assert_eq!(data.len(), shape.rows());
            for (r, row) in data.iter().enumerate() {
                assert_eq!(row.len(), shape.columns());
                for (c, &value) in row.iter().enumerate() {
                    assert_eq!(m.get(r, c).unwrap(), value, "{} at ({r}, {c})", m.kind());
                }
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        for m in all_kinds() {
            let shape = m.shape();
            assert!(matches!(
                m.get(shape.rows(), 0),
                Err(Error::IndexOutOfBounds { .. })
            ));
            assert!(m.get(0, shape.columns()).is_err());
        }
    }

    #[test]
    fn test_kinds() {
        let kinds: Vec<_> = all_kinds().iter().map(Matrix::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MatrixKind::Zero,
                MatrixKind::Identity,
                MatrixKind::Diagonal,
                MatrixKind::AntiDiagonal,
                MatrixKind::RowMatrix,
                MatrixKind::ColumnMatrix,
                MatrixKind::Vector,
                MatrixKind::Full,
                MatrixKind::Csr,
            ]
        );
    }

    #[test]
    fn test_norms_of_degenerate_kinds() {
        let zero = Matrix::zero(Shape::new(2, 3).unwrap());
        assert_eq!(zero.norm_one(), 0.0);
        assert_eq!(zero.nnz(), 0);

        let identity = Matrix::identity(4).unwrap();
        assert_eq!(identity.norm_one(), 1.0);
        assert_eq!(identity.norm_infinity(), 1.0);
        assert_eq!(identity.frobenius_norm(), 2.0);
        assert_eq!(identity.nnz(), 4);
    }

    #[test]
    fn test_row_entries() {
        let m = Matrix::sparse(Shape::new(2, 3).unwrap(), [(1, 0, 2.0), (1, 2, 3.0)]).unwrap();
        assert!(m.row_entries(0).is_empty());
        assert_eq!(m.row_entries(1), vec![(0, 2.0), (2, 3.0)]);

        let full = Matrix::dense(vec![vec![0.0, 4.0]]).unwrap();
        assert_eq!(full.row_entries(0), vec![(1, 4.0)]);

        let anti = Matrix::anti_diagonal(&[1.0, 2.0]).unwrap();
        assert_eq!(anti.row_entries(0), vec![(1, 1.0)]);
    }

    #[test]
    fn test_matrix_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Matrix>();
    }
}

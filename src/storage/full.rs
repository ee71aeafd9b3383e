//! Dense row-major storage, the fallback and accumulation target

use crate::error::{Error, Result};
use crate::format::Storage;
use crate::shape::Shape;

/// Dense matrix stored as one contiguous row-major buffer
#[derive(Debug, Clone, PartialEq)]
pub struct FullMatrix {
    shape: Shape,
    data: Vec<f64>,
}

impl FullMatrix {
    /// Create a dense matrix from its rows.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if there are no rows
    /// - `InvalidShape` if the rows are empty
    /// - `RaggedRows` if a row's length differs from the first row's
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::invalid_argument("rows", "dense input has no rows"));
        };
        let columns = first.len();
        let shape = Shape::new(rows.len(), columns)?;

        let mut data = Vec::with_capacity(shape.numel());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(Error::RaggedRows {
                    row,
                    expected: columns,
                    got: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { shape, data })
    }

    /// All-zero dense matrix, used as an accumulation target
    pub(crate) fn zeros(shape: Shape) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.numel()],
        }
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        Self { shape, data }
    }

    /// Materialize any storage into a dense matrix
    pub(crate) fn from_storage<S: Storage>(storage: &S) -> Self {
        let mut full = Self::zeros(storage.shape());
        for (row, column, value) in storage.entries() {
            full.data[row * full.shape.columns() + column] = value;
        }
        full
    }

    /// Outer product `left ⊗ right`
    pub(crate) fn outer(left: &[f64], right: &[f64]) -> Self {
        let shape = Shape::of(left.len(), right.len());
        let data = left
            .iter()
            .flat_map(|l| right.iter().map(move |r| l * r))
            .collect();
        Self { shape, data }
    }

    /// Row `row` as a slice
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let columns = self.shape.columns();
        &self.data[row * columns..(row + 1) * columns]
    }

    /// Mutable row `row`
    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let columns = self.shape.columns();
        &mut self.data[row * columns..(row + 1) * columns]
    }

    /// Row-major buffer
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Add `(row, column, value)` entries into the matrix in place
    pub(crate) fn scatter_add<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let columns = self.shape.columns();
        for (row, column, value) in entries {
            self.data[row * columns + column] += value;
        }
    }

    pub(crate) fn scaled(mut self, scalar: f64) -> Self {
        self.data.iter_mut().for_each(|v| *v *= scalar);
        self
    }

    pub(crate) fn shifted(mut self, scalar: f64) -> Self {
        self.data.iter_mut().for_each(|v| *v += scalar);
        self
    }

    /// Elementwise sum
    pub(crate) fn add(&self, other: &FullMatrix) -> FullMatrix {
        debug_assert_eq!(self.shape, other.shape);
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Self::from_parts(self.shape, data)
    }

    /// Iterate the rows
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.shape.columns())
    }
}

impl Storage for FullMatrix {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn value_at(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.shape.columns() + column]
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let columns = self.shape.columns();
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i / columns, i % columns, value))
    }

    fn norm_one(&self) -> f64 {
        let mut sums = vec![0.0; self.shape.columns()];
        for row in self.rows() {
            for (sum, v) in sums.iter_mut().zip(row) {
                *sum += v.abs();
            }
        }
        sums.into_iter().fold(0.0, f64::max)
    }

    fn norm_infinity(&self) -> f64 {
        self.rows()
            .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    fn to_dense(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_validation() {
        assert!(matches!(
            FullMatrix::from_rows(vec![]),
            Err(Error::InvalidArgument { arg: "rows", .. })
        ));
        assert!(matches!(
            FullMatrix::from_rows(vec![vec![], vec![]]),
            Err(Error::InvalidShape {
                rows: 2,
                columns: 0
            })
        ));
        assert_eq!(
            FullMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(Error::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_full_layout_and_norms() {
        let full = FullMatrix::from_rows(vec![vec![1.0, -2.0, 3.0], vec![-4.0, 5.0, -6.0]]).unwrap();
        assert_eq!(full.row(1), &[-4.0, 5.0, -6.0]);
        assert_eq!(full.value_at(0, 2), 3.0);
        assert_eq!(full.nnz(), 6);
        assert_eq!(full.norm_one(), 9.0);
        assert_eq!(full.norm_infinity(), 15.0);
        assert_eq!(full.frobenius_norm(), 91f64.sqrt());
    }

    #[test]
    fn test_scatter_add() {
        let mut full = FullMatrix::zeros(Shape::new(2, 2).unwrap());
        full.scatter_add([(0, 1, 2.0), (1, 0, 3.0), (0, 1, 1.0)]);
        assert_eq!(full.to_dense(), vec![vec![0.0, 3.0], vec![3.0, 0.0]]);
    }

    #[test]
    fn test_outer() {
        let full = FullMatrix::outer(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
        assert_eq!(
            full.to_dense(),
            vec![vec![3.0, 4.0, 5.0], vec![6.0, 8.0, 10.0]]
        );
    }
}

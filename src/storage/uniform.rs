//! RowMatrix and ColumnMatrix: matrices whose rows (or columns) are all identical

use crate::error::{Error, Result};
use crate::format::Storage;
use crate::shape::Shape;

/// Which line is repeated across the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// One representative row (length `columns`) repeated on every row
    Row,
    /// One representative column (length `rows`) repeated on every column
    Column,
}

/// Matrix storing a single representative row or column
#[derive(Debug, Clone, PartialEq)]
pub struct UniformMatrix {
    shape: Shape,
    axis: Axis,
    values: Vec<f64>,
}

impl UniformMatrix {
    /// Create a uniform matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `values.len()` is not `shape.columns()` for
    /// [`Axis::Row`] or `shape.rows()` for [`Axis::Column`].
    pub fn new(shape: Shape, axis: Axis, values: Vec<f64>) -> Result<Self> {
        let expected = Self::line_len(shape, axis);
        if values.len() != expected {
            return Err(Error::invalid_argument(
                "values",
                format!(
                    "{:?} matrix of shape {} needs {} values, got {}",
                    axis,
                    shape,
                    expected,
                    values.len()
                ),
            ));
        }
        Ok(Self {
            shape,
            axis,
            values,
        })
    }

    pub(crate) fn from_parts(shape: Shape, axis: Axis, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), Self::line_len(shape, axis));
        Self {
            shape,
            axis,
            values,
        }
    }

    fn line_len(shape: Shape, axis: Axis) -> usize {
        match axis {
            Axis::Row => shape.columns(),
            Axis::Column => shape.rows(),
        }
    }

    /// The repeated axis
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The representative row or column
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// How many times the representative line is repeated
    #[inline]
    pub fn repeats(&self) -> usize {
        match self.axis {
            Axis::Row => self.shape.rows(),
            Axis::Column => self.shape.columns(),
        }
    }

    pub(crate) fn scaled(mut self, scalar: f64) -> Self {
        self.values.iter_mut().for_each(|v| *v *= scalar);
        self
    }

    pub(crate) fn shifted(mut self, scalar: f64) -> Self {
        self.values.iter_mut().for_each(|v| *v += scalar);
        self
    }

    /// Sum of two uniform matrices repeating the same axis
    pub(crate) fn add_aligned(&self, other: &UniformMatrix) -> UniformMatrix {
        debug_assert_eq!(self.axis, other.axis);
        debug_assert_eq!(self.shape, other.shape);
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a + b)
            .collect();
        Self::from_parts(self.shape, self.axis, values)
    }

    fn abs_sum(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    fn abs_max(&self) -> f64 {
        self.values.iter().fold(0.0, |max, v| v.abs().max(max))
    }
}

impl Storage for UniformMatrix {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn value_at(&self, row: usize, column: usize) -> f64 {
        match self.axis {
            Axis::Row => self.values[column],
            Axis::Column => self.values[row],
        }
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let columns = self.shape.columns();
        (0..self.shape.rows()).flat_map(move |row| {
            (0..columns).map(move |column| (row, column, self.value_at(row, column)))
        })
    }

    fn norm_one(&self) -> f64 {
        match self.axis {
            Axis::Row => self.repeats() as f64 * self.abs_max(),
            Axis::Column => self.abs_sum(),
        }
    }

    fn norm_infinity(&self) -> f64 {
        match self.axis {
            Axis::Row => self.abs_sum(),
            Axis::Column => self.repeats() as f64 * self.abs_max(),
        }
    }

    fn frobenius_norm(&self) -> f64 {
        let squares: f64 = self.values.iter().map(|v| v * v).sum();
        (self.repeats() as f64 * squares).sqrt()
    }
}

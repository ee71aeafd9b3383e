//! Single-value-per-row matrices: Diagonal and AntiDiagonal
//!
//! Both are one [`LineMatrix`] parametrized by an [`Orientation`], whose
//! `column_of` is the index-complement function mapping a row to the column
//! that holds its value.

use crate::error::{Error, Result};
use crate::format::Storage;
use crate::shape::Shape;

/// Which line of a square matrix carries the values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Main diagonal: row `i` holds its value at column `i`
    Main,
    /// Anti-diagonal: row `i` holds its value at column `n - 1 - i`
    Anti,
}

impl Orientation {
    /// Column holding the value of `row` in an `size x size` matrix.
    ///
    /// The mapping is an involution, so it also maps a column back to its row.
    #[inline]
    pub fn column_of(self, row: usize, size: usize) -> usize {
        match self {
            Orientation::Main => row,
            Orientation::Anti => size - 1 - row,
        }
    }

    /// Orientation of the product of a `self` line with an `other` line
    #[inline]
    pub fn compose(self, other: Orientation) -> Orientation {
        if self == other {
            Orientation::Main
        } else {
            Orientation::Anti
        }
    }
}

/// Square matrix with exactly one structural value per row
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatrix {
    values: Vec<f64>,
    orientation: Orientation,
}

impl LineMatrix {
    /// Create a line matrix from its values; the size is `values.len()`
    pub fn new(values: Vec<f64>, orientation: Orientation) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidShape {
                rows: 0,
                columns: 0,
            });
        }
        Ok(Self {
            values,
            orientation,
        })
    }

    pub(crate) fn from_parts(values: Vec<f64>, orientation: Orientation) -> Self {
        debug_assert!(!values.is_empty());
        Self {
            values,
            orientation,
        }
    }

    /// Main-diagonal line with every value equal to `value`
    pub(crate) fn filled(size: usize, value: f64) -> Self {
        Self::from_parts(vec![value; size], Orientation::Main)
    }

    /// The identity as a line, used to reuse line algorithms for Identity
    pub(crate) fn ones(size: usize) -> Self {
        Self::filled(size, 1.0)
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Values in row order
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Which line carries the values
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Column holding the value of `row`
    #[inline]
    pub fn column_of(&self, row: usize) -> usize {
        self.orientation.column_of(row, self.size())
    }

    /// Row holding the value of `column`
    #[inline]
    pub fn row_of(&self, column: usize) -> usize {
        self.orientation.column_of(column, self.size())
    }

    pub(crate) fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Multiply every value by `scalar`, reusing the storage
    pub(crate) fn scaled(mut self, scalar: f64) -> Self {
        self.values.iter_mut().for_each(|v| *v *= scalar);
        self
    }

    /// Elementwise sum of two lines sharing an orientation
    pub(crate) fn add_aligned(&self, other: &LineMatrix) -> LineMatrix {
        debug_assert_eq!(self.orientation, other.orientation);
        debug_assert_eq!(self.size(), other.size());
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a + b)
            .collect();
        Self::from_parts(values, self.orientation)
    }

    /// Product `self x other`.
    ///
    /// Row `i` of `self` picks row `column_of(i)` of `other`, so the value is
    /// `a_i * b_{column_of(i)}` and the orientation is the composition. Diag x Anti
    /// and Anti x Diag both give an anti-diagonal, with differently paired values.
    pub(crate) fn compose(&self, other: &LineMatrix) -> LineMatrix {
        debug_assert_eq!(self.size(), other.size());
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(i, a)| a * other.values[self.column_of(i)])
            .collect();
        Self::from_parts(values, self.orientation.compose(other.orientation))
    }
}

impl Storage for LineMatrix {
    fn shape(&self) -> Shape {
        Shape::of(self.size(), self.size())
    }

    fn value_at(&self, row: usize, column: usize) -> f64 {
        if self.column_of(row) == column {
            self.values[row]
        } else {
            0.0
        }
    }

    fn nnz(&self) -> usize {
        self.size()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(row, &value)| (row, self.column_of(row), value))
    }

    fn norm_one(&self) -> f64 {
        self.values.iter().fold(0.0, |max, v| v.abs().max(max))
    }

    fn norm_infinity(&self) -> f64 {
        // Every row and every column holds exactly one value.
        self.norm_one()
    }

    fn frobenius_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

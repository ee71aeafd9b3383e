//! Shape and Cell: the value types every representation is built from

use crate::error::{Error, Result};
use std::fmt;

/// Dimensions of a matrix: `rows x columns`, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

impl Shape {
    /// Create a shape, rejecting zero dimensions
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidShape { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Create an `n x n` shape
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    /// Create a `rows x 1` shape
    pub fn column(rows: usize) -> Result<Self> {
        Self::new(rows, 1)
    }

    /// Build a shape from dimensions already known to be positive.
    #[inline]
    pub(crate) fn of(rows: usize, columns: usize) -> Self {
        debug_assert!(rows > 0 && columns > 0, "shape {rows}x{columns}");
        Self { rows, columns }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn numel(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether rows == columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Whether `(row, column)` lies inside this shape
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Validate a coordinate against this shape
    pub fn check_index(&self, row: usize, column: usize) -> Result<()> {
        if self.contains(row, column) {
            Ok(())
        } else {
            Err(Error::out_of_bounds(row, column, *self))
        }
    }

    /// Validate that `other` has exactly this shape (addition rule)
    pub fn check_same(&self, other: Shape, op: &'static str) -> Result<()> {
        if *self == other {
            Ok(())
        } else {
            Err(Error::shape_mismatch(op, *self, other))
        }
    }

    /// Shape of `self x other`, or an error when the inner dimensions differ
    pub fn product_shape(&self, other: Shape) -> Result<Shape> {
        if self.columns != other.rows {
            return Err(Error::shape_mismatch("times", *self, other));
        }
        Ok(Shape::of(self.rows, other.columns))
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = Error;

    fn try_from((rows, columns): (usize, usize)) -> Result<Self> {
        Self::new(rows, columns)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Side length of a square identity, always positive
///
/// The field is private so a zero order cannot be built:
///
/// ```compile_fail
/// use polymat::matrix::Matrix;
/// use polymat::shape::Order;
///
/// let _ = Matrix::Identity(Order(0));
/// ```
///
/// ```
/// use polymat::matrix::Matrix;
/// use polymat::shape::Order;
///
/// assert!(Order::new(0).is_err());
/// let i = Matrix::Identity(Order::new(2)?);
/// assert_eq!(i, Matrix::identity(2)?);
/// # Ok::<(), polymat::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order(usize);

impl Order {
    /// Create an order, rejecting zero
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidShape {
                rows: 0,
                columns: 0,
            });
        }
        Ok(Self(n))
    }

    #[inline]
    pub(crate) fn of(n: usize) -> Self {
        debug_assert!(n > 0, "order {n}");
        Self(n)
    }

    /// The side length
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// The `n x n` shape
    #[inline]
    pub fn shape(self) -> Shape {
        Shape::of(self.0, self.0)
    }
}

/// A `(row, column, value)` triple used as sparse construction input
///
/// Cells are ordered row-major through [`Cell::position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
    /// Stored value
    pub value: f64,
}

impl Cell {
    /// Create a cell
    pub fn new(row: usize, column: usize, value: f64) -> Self {
        Self { row, column, value }
    }

    /// Row-major ordering key
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl From<(usize, usize, f64)> for Cell {
    fn from((row, column, value): (usize, usize, f64)) -> Self {
        Self::new(row, column, value)
    }
}

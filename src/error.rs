//! Error types for polymat

use crate::shape::Shape;
use thiserror::Error;

/// Result type alias using polymat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in polymat operations
///
/// Every variant is a precondition violation detected before any work is done,
/// so operands stay valid and usable after a failed call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A dimension was zero
    #[error("Invalid shape {rows}x{columns}: dimensions must be positive")]
    InvalidShape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        columns: usize,
    },

    /// A coordinate lies outside the matrix
    #[error("Index ({row}, {column}) out of bounds for shape {shape}")]
    IndexOutOfBounds {
        /// The offending row
        row: usize,
        /// The offending column
        column: usize,
        /// Shape the coordinate was checked against
        shape: Shape,
    },

    /// Operand shapes are incompatible for an operation
    #[error("Shape mismatch in '{op}': {lhs} vs {rhs}")]
    ShapeMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape
        lhs: Shape,
        /// Right-hand side shape
        rhs: Shape,
    },

    /// Dense input rows have differing lengths
    #[error("Ragged input: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// Invalid argument provided to a constructor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        Self::ShapeMismatch { op, lhs, rhs }
    }

    /// Create an out-of-bounds error
    pub fn out_of_bounds(row: usize, column: usize, shape: Shape) -> Self {
        Self::IndexOutOfBounds { row, column, shape }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let lhs = Shape::new(2, 3).unwrap();
        let rhs = Shape::new(4, 5).unwrap();
        let err = Error::shape_mismatch("times", lhs, rhs);
        assert_eq!(err.to_string(), "Shape mismatch in 'times': 2x3 vs 4x5");

        let err = Error::out_of_bounds(7, 1, lhs);
        assert_eq!(err.to_string(), "Index (7, 1) out of bounds for shape 2x3");

        let err = Error::invalid_argument("rows", "empty");
        assert_eq!(err.to_string(), "Invalid argument 'rows': empty");
    }
}

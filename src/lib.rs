//! # polymat
//!
//! **Polymorphic matrix algebra over `f64` with structure-aware dispatch.**
//!
//! A [`Matrix`](matrix::Matrix) is one of nine internal encodings: Zero,
//! Identity, Diagonal, AntiDiagonal, RowMatrix, ColumnMatrix, sparse Vector,
//! Full (dense) and CSR. Binary operators pick their algorithm from the pair of
//! encodings, and every computed result is narrowed to the cheapest encoding
//! that represents it exactly.
//!
//! ## Features
//!
//! - **Structured kinds**: identity, diagonal, anti-diagonal and uniform
//!   row/column matrices in O(n) storage
//! - **Sparse**: column vectors and Compressed Sparse Row over non-empty rows
//! - **Arithmetic**: `plus`, `minus`, `times`, scalar operators, element
//!   access, 1-norm, infinity-norm and Frobenius norm
//! - **Narrowing**: `diag(2, 4) x diag(0.5, 0.25)` comes back as `Identity`
//!
//! ## Quick Start
//!
//! ```rust
//! use polymat::prelude::*;
//!
//! let a = Matrix::sparse(Shape::square(3)?, [(0, 0, 7.0), (1, 2, 11.0), (2, 1, 2.0)])?;
//! let i = Matrix::identity(3)?;
//!
//! let sum = a.plus(&i)?;
//! assert_eq!(sum.get(0, 0)?, 8.0);
//! assert_eq!(i.times(&a)?, a);
//! # Ok::<(), polymat::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `validate`: check CSR and sparse vector invariants on construction in
//!   release builds too (always on with debug assertions)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;
pub mod matrix;
mod ops;
pub mod shape;
pub mod sparse;
pub mod storage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{MatrixKind, Storage};
    pub use crate::matrix::Matrix;
    pub use crate::shape::{Cell, Order, Shape};
    pub use crate::sparse::{CsrMatrix, SparseVector};
    pub use crate::storage::{Axis, FullMatrix, LineMatrix, Orientation, UniformMatrix};
}

//! Dense and structured storage types
//!
//! - [`LineMatrix`]: Diagonal and AntiDiagonal, one value per row
//! - [`UniformMatrix`]: RowMatrix and ColumnMatrix, one representative line
//! - [`FullMatrix`]: dense row-major, the fallback for unstructured results
//!
//! Sparse storage lives in [`crate::sparse`].

mod full;
mod line;
mod uniform;

pub use full::FullMatrix;
pub use line::{LineMatrix, Orientation};
pub use uniform::{Axis, UniformMatrix};

//! Conversions between CSR and the other sparse-friendly representations

use super::CsrMatrix;
use super::core::CsrBuilder;
use crate::format::Storage;
use crate::shape::Shape;
use crate::sparse::SparseVector;
use crate::storage::LineMatrix;

impl CsrMatrix {
    /// `rows x 1` CSR holding the vector's entries
    pub fn from_vector(vector: &SparseVector) -> CsrMatrix {
        let mut builder = CsrBuilder::with_capacity(vector.shape(), vector.nnz());
        for (row, value) in vector.iter() {
            builder.push(row, 0, value);
        }
        builder.finish()
    }

    /// Read a single-column CSR matrix as a sparse vector
    pub(crate) fn to_vector(&self) -> SparseVector {
        debug_assert_eq!(self.ncols(), 1);
        SparseVector::from_entries(
            self.nrows(),
            self.rows().map(|(row, _, values)| (row, values[0])),
        )
    }

    /// Sum of several line matrices of the same size, as CSR.
    ///
    /// Each row collects one cell per line; cells falling on the same column
    /// (e.g. the centre of crossed odd-sized lines) are summed.
    pub(crate) fn from_lines(lines: &[&LineMatrix]) -> CsrMatrix {
        debug_assert!(!lines.is_empty());
        let size = lines[0].size();
        debug_assert!(lines.iter().all(|line| line.size() == size));

        let mut builder = CsrBuilder::with_capacity(Shape::of(size, size), size * lines.len());
        let mut cells: Vec<(usize, f64)> = Vec::with_capacity(lines.len());
        for row in 0..size {
            cells.extend(lines.iter().map(|line| (line.column_of(row), line.values()[row])));
            cells.sort_unstable_by_key(|&(column, _)| column);

            let mut cells_iter = cells.drain(..).peekable();
            while let Some((column, mut value)) = cells_iter.next() {
                while let Some((_, next)) = cells_iter.next_if(|&(c, _)| c == column) {
                    value += next;
                }
                builder.push(row, column, value);
            }
        }
        builder.finish()
    }
}

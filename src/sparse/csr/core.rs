//! Core CSR implementation: struct, builder, construction, lookup, norms

use std::collections::HashMap;

use crate::error::Result;
use crate::format::Storage;
use crate::shape::{Cell, Shape};

/// CSR (Compressed Sparse Row) matrix over its non-empty rows
///
/// Rows without entries are not represented: `row_numbers[k]` is the id of the
/// k-th non-empty row and `row_ptrs[k]..row_ptrs[k + 1]` its range in
/// `col_indices` and `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub(crate) shape: Shape,
    pub(crate) values: Vec<f64>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) row_numbers: Vec<usize>,
    pub(crate) row_ptrs: Vec<usize>,
}

/// Row-major CSR assembler
///
/// Entries must be pushed in strictly increasing `(row, column)` order. Zeros
/// are skipped, so callers can push computed values directly.
#[derive(Debug)]
pub(crate) struct CsrBuilder {
    shape: Shape,
    values: Vec<f64>,
    col_indices: Vec<usize>,
    row_numbers: Vec<usize>,
    row_ptrs: Vec<usize>,
}

impl CsrBuilder {
    pub(crate) fn new(shape: Shape) -> Self {
        Self::with_capacity(shape, 0)
    }

    pub(crate) fn with_capacity(shape: Shape, nnz: usize) -> Self {
        Self {
            shape,
            values: Vec::with_capacity(nnz),
            col_indices: Vec::with_capacity(nnz),
            row_numbers: Vec::new(),
            row_ptrs: Vec::new(),
        }
    }

    /// Append one entry
    pub(crate) fn push(&mut self, row: usize, column: usize, value: f64) {
        if value == 0.0 {
            return;
        }
        debug_assert!(self.shape.contains(row, column));
        if self.row_numbers.last() != Some(&row) {
            debug_assert!(self.row_numbers.last().is_none_or(|&last| last < row));
            self.row_numbers.push(row);
            self.row_ptrs.push(self.values.len());
        } else {
            debug_assert!(self.col_indices.last().is_none_or(|&last| last < column));
        }
        self.col_indices.push(column);
        self.values.push(value);
    }

    pub(crate) fn finish(mut self) -> CsrMatrix {
        self.row_ptrs.push(self.values.len());
        validated!(CsrMatrix {
            shape: self.shape,
            values: self.values,
            col_indices: self.col_indices,
            row_numbers: self.row_numbers,
            row_ptrs: self.row_ptrs,
        })
    }
}

impl CsrMatrix {
    /// Build a CSR matrix from unordered cells.
    ///
    /// Cells are sorted row-major; zero values are dropped and duplicate
    /// coordinates are summed.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for the first cell outside `shape`.
    pub fn from_cells<I, C>(shape: Shape, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        for cell in &cells {
            shape.check_index(cell.row, cell.column)?;
        }
        cells.sort_by_key(Cell::position);

        let mut builder = CsrBuilder::with_capacity(shape, cells.len());
        let mut cells = cells.into_iter().peekable();
        while let Some(cell) = cells.next() {
            let mut value = cell.value;
            while let Some(next) = cells.next_if(|next| next.position() == cell.position()) {
                value += next.value;
            }
            builder.push(cell.row, cell.column, value);
        }
        Ok(builder.finish())
    }

    /// Stored values in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column of each stored value
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Ids of the non-empty rows, increasing
    pub fn row_numbers(&self) -> &[usize] {
        &self.row_numbers
    }

    /// Entry ranges of the non-empty rows (length `ner + 1`)
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Number of non-empty rows
    #[inline]
    pub fn ner(&self) -> usize {
        self.row_numbers.len()
    }

    /// Columns and values of the k-th non-empty row
    #[inline]
    pub(crate) fn compressed_row(&self, k: usize) -> (&[usize], &[f64]) {
        let range = self.row_ptrs[k]..self.row_ptrs[k + 1];
        (&self.col_indices[range.clone()], &self.values[range])
    }

    /// Iterate the non-empty rows as `(row, columns, values)`
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = (usize, &[usize], &[f64])> + '_ {
        self.row_numbers.iter().enumerate().map(|(k, &row)| {
            let (columns, values) = self.compressed_row(k);
            (row, columns, values)
        })
    }

    /// Columns and values of `row`, or `None` when the row is empty.
    ///
    /// O(log ner).
    pub fn row(&self, row: usize) -> Option<(&[usize], &[f64])> {
        self.row_numbers
            .binary_search(&row)
            .ok()
            .map(|k| self.compressed_row(k))
    }

    /// Value at `(row, column)`, 0 when absent.
    ///
    /// O(log ner + log row_nnz).
    pub fn get(&self, row: usize, column: usize) -> f64 {
        let Some((columns, values)) = self.row(row) else {
            return 0.0;
        };
        match columns.binary_search(&column) {
            Ok(i) => values[i],
            Err(_) => 0.0,
        }
    }

    /// Multiply every value, dropping any that become zero
    pub(crate) fn scaled(&self, scalar: f64) -> CsrMatrix {
        let mut builder = CsrBuilder::with_capacity(self.shape, self.nnz());
        for (row, column, value) in self.entries() {
            builder.push(row, column, value * scalar);
        }
        builder.finish()
    }

    #[cfg(any(debug_assertions, feature = "validate"))]
    pub(crate) fn validate(&self) {
        use super::super::is_strictly_sorted;

        let ner = self.row_numbers.len();
        assert_eq!(self.row_ptrs.len(), ner + 1);
        assert_eq!(self.row_ptrs[0], 0);
        assert_eq!(self.row_ptrs[ner], self.values.len());
        assert_eq!(self.col_indices.len(), self.values.len());
        assert!(is_strictly_sorted(&self.row_numbers));
        assert!(self.row_numbers.last().is_none_or(|&r| r < self.shape.rows()));
        for k in 0..ner {
            let (columns, values) = self.compressed_row(k);
            assert!(!columns.is_empty(), "row {} is listed but empty", self.row_numbers[k]);
            assert!(is_strictly_sorted(columns));
            assert!(columns.iter().all(|&c| c < self.shape.columns()));
            assert!(values.iter().all(|&v| v != 0.0));
        }
    }
}

impl Storage for CsrMatrix {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn value_at(&self, row: usize, column: usize) -> f64 {
        self.get(row, column)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows().flat_map(|(row, columns, values)| {
            columns
                .iter()
                .zip(values)
                .map(move |(&column, &value)| (row, column, value))
        })
    }

    fn norm_one(&self) -> f64 {
        let mut sums: HashMap<usize, f64> = HashMap::with_capacity(self.nnz());
        for (&column, value) in self.col_indices.iter().zip(&self.values) {
            *sums.entry(column).or_insert(0.0) += value.abs();
        }
        sums.into_values().fold(0.0, f64::max)
    }

    fn norm_infinity(&self) -> f64 {
        self.rows()
            .map(|(_, _, values)| values.iter().map(|v| v.abs()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    fn frobenius_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

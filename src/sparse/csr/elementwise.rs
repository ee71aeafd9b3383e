//! CSR element-wise addition: CSR + CSR and CSR + Line
//!
//! Both walk the compressed rows in order and emit through [`CsrBuilder`], so
//! results come out sorted with cancelled entries already dropped.

use std::slice;

use super::CsrMatrix;
use super::core::CsrBuilder;
use crate::format::Storage;
use crate::storage::LineMatrix;

/// Merge two sorted rows into `builder`, summing equal columns.
fn merge_rows(
    builder: &mut CsrBuilder,
    row: usize,
    (a_cols, a_vals): (&[usize], &[f64]),
    (b_cols, b_vals): (&[usize], &[f64]),
) {
    let (mut i, mut j) = (0, 0);
    while i < a_cols.len() || j < b_cols.len() {
        let a_col = a_cols.get(i).copied().unwrap_or(usize::MAX);
        let b_col = b_cols.get(j).copied().unwrap_or(usize::MAX);

        if a_col < b_col {
            builder.push(row, a_col, a_vals[i]);
            i += 1;
        } else if b_col < a_col {
            builder.push(row, b_col, b_vals[j]);
            j += 1;
        } else {
            builder.push(row, a_col, a_vals[i] + b_vals[j]);
            i += 1;
            j += 1;
        }
    }
}

fn copy_row(builder: &mut CsrBuilder, row: usize, (cols, vals): (&[usize], &[f64])) {
    for (&column, &value) in cols.iter().zip(vals) {
        builder.push(row, column, value);
    }
}

impl CsrMatrix {
    /// Element-wise sum `self + other`.
    ///
    /// The non-empty row lists are walked in lockstep; matching rows are merged
    /// column by column and unmatched rows are copied through.
    /// O(nnz_a + nnz_b).
    pub(crate) fn merge_add(&self, other: &CsrMatrix) -> CsrMatrix {
        debug_assert_eq!(self.shape, other.shape);
        let mut builder = CsrBuilder::with_capacity(self.shape, self.nnz() + other.nnz());

        let (mut p, mut q) = (0, 0);
        while p < self.ner() || q < other.ner() {
            let a_row = self.row_numbers.get(p).copied().unwrap_or(usize::MAX);
            let b_row = other.row_numbers.get(q).copied().unwrap_or(usize::MAX);

            if a_row < b_row {
                copy_row(&mut builder, a_row, self.compressed_row(p));
                p += 1;
            } else if b_row < a_row {
                copy_row(&mut builder, b_row, other.compressed_row(q));
                q += 1;
            } else {
                merge_rows(
                    &mut builder,
                    a_row,
                    self.compressed_row(p),
                    other.compressed_row(q),
                );
                p += 1;
                q += 1;
            }
        }

        builder.finish()
    }

    /// Element-wise sum `self + line` for a square CSR matrix.
    ///
    /// Every row receives exactly one line cell, merged into its stored
    /// entries. O(n + nnz).
    pub(crate) fn add_line(&self, line: &LineMatrix) -> CsrMatrix {
        debug_assert_eq!(self.shape, line.shape());
        let mut builder = CsrBuilder::with_capacity(self.shape, self.nnz() + line.size());

        let mut p = 0;
        for (row, &value) in line.values().iter().enumerate() {
            let column = line.column_of(row);
            if self.row_numbers.get(p) == Some(&row) {
                let cell = (slice::from_ref(&column), slice::from_ref(&value));
                merge_rows(&mut builder, row, self.compressed_row(p), cell);
                p += 1;
            } else {
                builder.push(row, column, value);
            }
        }

        builder.finish()
    }
}

//! CSR products
//!
//! # Algorithm (CSR x CSR)
//!
//! Row accumulation (Gustavson):
//! ```text
//! For each non-empty row i of A:
//!   For each non-zero A[i,k]:
//!     For each non-zero B[k,j]:
//!       acc[j] += A[i,k] * B[k,j]   (record j the first time it is touched)
//!   Sort touched columns, emit non-zeros, reset them in acc
//! ```
//!
//! Every other product here is linear in the stored entries of the sparse
//! operand plus the size of the output.

use super::CsrMatrix;
use super::core::CsrBuilder;
use crate::format::Storage;
use crate::shape::Shape;
use crate::sparse::SparseVector;
use crate::storage::{FullMatrix, LineMatrix, Orientation};

impl CsrMatrix {
    /// Sparse x sparse product `self x other`
    pub(crate) fn matmul_csr(&self, other: &CsrMatrix) -> CsrMatrix {
        debug_assert_eq!(self.ncols(), other.nrows());
        let shape = Shape::of(self.nrows(), other.ncols());
        let mut builder = CsrBuilder::new(shape);

        let mut acc = vec![0.0; shape.columns()];
        let mut occupied = vec![false; shape.columns()];
        let mut touched: Vec<usize> = Vec::new();

        for (i, a_cols, a_vals) in self.rows() {
            for (&k, &a) in a_cols.iter().zip(a_vals) {
                let Some((b_cols, b_vals)) = other.row(k) else {
                    continue;
                };
                for (&j, &b) in b_cols.iter().zip(b_vals) {
                    if !occupied[j] {
                        occupied[j] = true;
                        touched.push(j);
                    }
                    acc[j] += a * b;
                }
            }

            touched.sort_unstable();
            for &j in &touched {
                builder.push(i, j, acc[j]);
                acc[j] = 0.0;
                occupied[j] = false;
            }
            touched.clear();
        }

        builder.finish()
    }

    /// Sparse x dense product, dense result
    pub(crate) fn times_full(&self, full: &FullMatrix) -> FullMatrix {
        debug_assert_eq!(self.ncols(), full.nrows());
        let mut out = FullMatrix::zeros(Shape::of(self.nrows(), full.ncols()));
        for (i, cols, vals) in self.rows() {
            let out_row = out.row_mut(i);
            for (&k, &a) in cols.iter().zip(vals) {
                for (o, b) in out_row.iter_mut().zip(full.row(k)) {
                    *o += a * b;
                }
            }
        }
        out
    }

    /// Dense x sparse product, dense result
    pub(crate) fn full_times(full: &FullMatrix, csr: &CsrMatrix) -> FullMatrix {
        debug_assert_eq!(full.ncols(), csr.nrows());
        let mut out = FullMatrix::zeros(Shape::of(full.nrows(), csr.ncols()));
        for i in 0..full.nrows() {
            let lhs = full.row(i);
            let out_row = out.row_mut(i);
            for (k, cols, vals) in csr.rows() {
                let a = lhs[k];
                if a == 0.0 {
                    continue;
                }
                for (&j, &b) in cols.iter().zip(vals) {
                    out_row[j] += a * b;
                }
            }
        }
        out
    }

    /// Sparse matrix-vector product.
    ///
    /// The vector is scattered into a dense buffer, then each non-empty row
    /// takes one dot product.
    pub(crate) fn times_vector(&self, vector: &SparseVector) -> SparseVector {
        debug_assert_eq!(self.ncols(), vector.len());
        let mut x = vec![0.0; vector.len()];
        for (k, v) in vector.iter() {
            x[k] = v;
        }

        let entries = self.rows().map(|(i, cols, vals)| {
            let dot = cols.iter().zip(vals).map(|(&k, a)| a * x[k]).sum::<f64>();
            (i, dot)
        });
        SparseVector::from_entries(self.nrows(), entries)
    }

    /// `line x self`: row `i` of the result is `a_i` times row `column_of(i)`.
    ///
    /// Source row `k` lands on row `column_of(k)`, so an anti line walks the
    /// source rows backwards to keep the output row-major.
    pub(crate) fn line_times(line: &LineMatrix, csr: &CsrMatrix) -> CsrMatrix {
        debug_assert_eq!(line.size(), csr.nrows());
        let mut builder = CsrBuilder::with_capacity(csr.shape, csr.nnz());
        let mut emit = |(k, cols, vals): (usize, &[usize], &[f64])| {
            let row = line.row_of(k);
            let scale = line.values()[row];
            for (&j, &v) in cols.iter().zip(vals) {
                builder.push(row, j, scale * v);
            }
        };
        match line.orientation() {
            Orientation::Main => csr.rows().for_each(&mut emit),
            Orientation::Anti => csr.rows().rev().for_each(&mut emit),
        }
        builder.finish()
    }

    /// `self x line`: entry `(i, c)` moves to column `row_of(c)` scaled by `b_c`.
    ///
    /// An anti line reverses the column order within each row.
    pub(crate) fn times_line(&self, line: &LineMatrix) -> CsrMatrix {
        debug_assert_eq!(self.ncols(), line.size());
        let mut builder = CsrBuilder::with_capacity(self.shape, self.nnz());
        let b = line.values();
        for (i, cols, vals) in self.rows() {
            let entries = cols.iter().zip(vals);
            match line.orientation() {
                Orientation::Main => {
                    for (&c, &v) in entries {
                        builder.push(i, c, v * b[c]);
                    }
                }
                Orientation::Anti => {
                    for (&c, &v) in entries.rev() {
                        builder.push(i, line.column_of(c), v * b[c]);
                    }
                }
            }
        }
        builder.finish()
    }

    /// `rᵀ x self`, the row vector `r` (length `nrows`) times the matrix
    pub(crate) fn row_times(row: &[f64], csr: &CsrMatrix) -> Vec<f64> {
        debug_assert_eq!(row.len(), csr.nrows());
        let mut out = vec![0.0; csr.ncols()];
        for (i, cols, vals) in csr.rows() {
            let r = row[i];
            for (&j, &v) in cols.iter().zip(vals) {
                out[j] += r * v;
            }
        }
        out
    }

    /// `self x c`, the matrix times the dense column `c` (length `ncols`)
    pub(crate) fn times_column(&self, column: &[f64]) -> Vec<f64> {
        debug_assert_eq!(column.len(), self.ncols());
        let mut out = vec![0.0; self.nrows()];
        for (i, cols, vals) in self.rows() {
            out[i] = cols.iter().zip(vals).map(|(&k, v)| v * column[k]).sum();
        }
        out
    }
}

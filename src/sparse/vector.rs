//! Single-column sparse vector with a trailing sentinel

use crate::error::{Error, Result};
use crate::format::Storage;
use crate::shape::Shape;

/// Sparse `rows x 1` column.
///
/// `index` and `values` are parallel. The last slot is a sentinel with
/// `index == rows` and value 0, so `rows` is recovered from it and merges
/// can run without bounds checks on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    index: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from a dense column, dropping zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` for an empty slice.
    pub fn from_dense(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidShape {
                rows: 0,
                columns: 1,
            });
        }
        let entries = values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v));
        Ok(Self::from_entries(values.len(), entries))
    }

    /// Build from `(row, value)` pairs with strictly increasing rows.
    ///
    /// Zero values are dropped.
    pub(crate) fn from_entries<I>(rows: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let entries = entries.into_iter();
        let capacity = entries.size_hint().0 + 1;
        let mut index = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);
        for (row, value) in entries {
            if value != 0.0 {
                index.push(row);
                values.push(value);
            }
        }
        index.push(rows);
        values.push(0.0);
        validated!(Self { index, values })
    }

    /// Number of rows
    #[inline]
    pub fn len(&self) -> usize {
        // The sentinel is always present.
        self.index[self.index.len() - 1]
    }

    /// A vector always has at least one row
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row indices of stored values, without the sentinel
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.index[..self.index.len() - 1]
    }

    /// Stored values, without the sentinel
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values[..self.values.len() - 1]
    }

    /// Iterate `(row, value)` over stored values
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices().iter().copied().zip(self.values().iter().copied())
    }

    /// Value at `row`, 0 when absent
    pub fn get(&self, row: usize) -> f64 {
        match self.indices().binary_search(&row) {
            Ok(k) => self.values[k],
            Err(_) => 0.0,
        }
    }

    /// Whether every row holds a stored value, all equal
    pub(crate) fn is_constant(&self) -> bool {
        let values = self.values();
        values.len() == self.len() && values.windows(2).all(|w| w[0] == w[1])
    }

    /// Multiply every stored value, dropping any that become zero
    pub(crate) fn scaled(&self, scalar: f64) -> Self {
        Self::from_entries(self.len(), self.iter().map(|(i, v)| (i, v * scalar)))
    }

    /// Sentinel-terminated merge of two vectors of equal length
    pub(crate) fn merge_add(&self, other: &SparseVector) -> SparseVector {
        debug_assert_eq!(self.len(), other.len());
        let rows = self.len();
        let mut merged = Vec::with_capacity(self.nnz() + other.nnz());

        let (mut i, mut j) = (0, 0);
        loop {
            let (a, b) = (self.index[i], other.index[j]);
            if a == rows && b == rows {
                break;
            }
            if a < b {
                merged.push((a, self.values[i]));
                i += 1;
            } else if b < a {
                merged.push((b, other.values[j]));
                j += 1;
            } else {
                merged.push((a, self.values[i] + other.values[j]));
                i += 1;
                j += 1;
            }
        }

        Self::from_entries(rows, merged)
    }

    #[cfg(any(debug_assertions, feature = "validate"))]
    pub(crate) fn validate(&self) {
        assert_eq!(self.index.len(), self.values.len());
        assert!(self.len() > 0, "vector must have at least one row");
        assert_eq!(self.values[self.values.len() - 1], 0.0);
        assert!(super::is_strictly_sorted(&self.index));
        assert!(self.values().iter().all(|&v| v != 0.0));
    }
}

impl Storage for SparseVector {
    fn shape(&self) -> Shape {
        Shape::of(self.len(), 1)
    }

    fn value_at(&self, row: usize, _column: usize) -> f64 {
        self.get(row)
    }

    fn nnz(&self) -> usize {
        self.index.len() - 1
    }

    fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.iter().map(|(row, value)| (row, 0, value))
    }

    fn norm_one(&self) -> f64 {
        self.values().iter().map(|v| v.abs()).sum()
    }

    fn norm_infinity(&self) -> f64 {
        self.values().iter().fold(0.0, |max, v| v.abs().max(max))
    }

    fn frobenius_norm(&self) -> f64 {
        self.values().iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

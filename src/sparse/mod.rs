//! Sparse storage: CSR matrices and single-column vectors
//!
//! - **CSR** ([`CsrMatrix`]): row-major compressed format that only records
//!   non-empty rows. O(nnz + ner) storage, O(log ner + log row_nnz) lookup.
//!
//! - **Vector** ([`SparseVector`]): one column of `(index, value)` pairs
//!   closed by a sentinel. O(nnz) storage.
//!
//! Both drop zero values on construction. Their structural invariants are
//! checked on every construction in debug builds, and in release builds with
//! the `validate` feature.

/// Run `validate()` on a freshly built value when validation is enabled.
macro_rules! validated {
    ($value:expr) => {{
        let value = $value;
        #[cfg(any(debug_assertions, feature = "validate"))]
        value.validate();
        value
    }};
}

mod csr;
mod vector;

pub use csr::CsrMatrix;
pub(crate) use csr::CsrBuilder;
pub use vector::SparseVector;

#[cfg(any(debug_assertions, feature = "validate"))]
fn is_strictly_sorted(values: &[usize]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

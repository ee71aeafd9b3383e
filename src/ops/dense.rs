//! Dense fallback kernels
//!
//! Used only for pairs with no structural algorithm: cell-by-cell addition for
//! tiny mixed pairs and the naive product of two dense matrices.

use crate::format::Storage;
use crate::shape::Shape;
use crate::storage::FullMatrix;

/// Cell-by-cell sum through `value_at`
pub(super) fn add<A: Storage, B: Storage>(lhs: &A, rhs: &B) -> FullMatrix {
    let shape = lhs.shape();
    debug_assert_eq!(shape, rhs.shape());
    let data = (0..shape.rows())
        .flat_map(|r| (0..shape.columns()).map(move |c| (r, c)))
        .map(|(r, c)| lhs.value_at(r, c) + rhs.value_at(r, c))
        .collect();
    FullMatrix::from_parts(shape, data)
}

/// Dense x dense product (i-k-j loop order)
pub(super) fn matmul(lhs: &FullMatrix, rhs: &FullMatrix) -> FullMatrix {
    debug_assert_eq!(lhs.ncols(), rhs.nrows());
    let mut out = FullMatrix::zeros(Shape::of(lhs.nrows(), rhs.ncols()));
    for i in 0..lhs.nrows() {
        let out_row = out.row_mut(i);
        for (k, &a) in lhs.row(i).iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            for (o, b) in out_row.iter_mut().zip(rhs.row(k)) {
                *o += a * b;
            }
        }
    }
    out
}

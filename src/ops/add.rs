//! Pairwise addition table
//!
//! Addition is commutative, so every arm is a symmetric or-pattern and
//! `A + B` runs the same routine as `B + A`. Shapes are checked by the caller.

use std::borrow::Cow;

use super::dense;
use crate::format::Storage;
use crate::matrix::Matrix;
use crate::sparse::CsrMatrix;
use crate::storage::{FullMatrix, LineMatrix, UniformMatrix};

/// Sum of two matrices of equal shape.
///
/// `Borrowed` results are an operand passed through unchanged.
pub(super) fn add<'a>(lhs: &'a Matrix, rhs: &'a Matrix) -> Cow<'a, Matrix> {
    use Matrix::*;

    match (lhs, rhs) {
        (Zero(_), x) | (x, Zero(_)) => Cow::Borrowed(x),

        (Identity(n), Identity(_)) => Cow::Owned(Line(LineMatrix::filled(n.get(), 2.0))),
        (Identity(n), x) | (x, Identity(n)) => Cow::Owned(add_line(&LineMatrix::ones(n.get()), x)),

        (Line(a), x) | (x, Line(a)) => Cow::Owned(add_line(a, x)),

        (Uniform(a), Uniform(b)) => Cow::Owned(add_uniforms(a, b)),
        (Uniform(u), Vector(v)) | (Vector(v), Uniform(u)) => Cow::Owned(Full(dense::add(u, v))),
        (Uniform(u), Full(f)) | (Full(f), Uniform(u)) => {
            Cow::Owned(Full(f.add(&FullMatrix::from_storage(u))))
        }
        (Uniform(u), Csr(s)) | (Csr(s), Uniform(u)) => {
            let mut full = FullMatrix::from_storage(u);
            full.scatter_add(s.entries());
            Cow::Owned(Full(full))
        }

        (Vector(a), Vector(b)) => Cow::Owned(Vector(a.merge_add(b))),
        (Vector(v), Csr(s)) | (Csr(s), Vector(v)) => Cow::Owned(Vector(v.merge_add(&s.to_vector()))),
        (Vector(v), Full(f)) | (Full(f), Vector(v)) => {
            let mut full = f.clone();
            full.scatter_add(v.entries());
            Cow::Owned(Full(full))
        }

        (Full(a), Full(b)) => Cow::Owned(Full(a.add(b))),
        (Full(f), Csr(s)) | (Csr(s), Full(f)) => {
            let mut full = f.clone();
            full.scatter_add(s.entries());
            Cow::Owned(Full(full))
        }

        (Csr(a), Csr(b)) => Cow::Owned(Csr(a.merge_add(b))),
    }
}

/// `line + other`, shared by Line and Identity operands
fn add_line(line: &LineMatrix, other: &Matrix) -> Matrix {
    match other {
        Matrix::Zero(_) => Matrix::Line(line.clone()),
        Matrix::Identity(n) => add_lines(line, &LineMatrix::ones(n.get())),
        Matrix::Line(b) => add_lines(line, b),
        Matrix::Uniform(u) => {
            let mut full = FullMatrix::from_storage(u);
            full.scatter_add(line.entries());
            Matrix::Full(full)
        }
        // Only 1x1 matches a line's shape here.
        Matrix::Vector(v) => Matrix::Full(dense::add(line, v)),
        Matrix::Full(f) => {
            let mut full = f.clone();
            full.scatter_add(line.entries());
            Matrix::Full(full)
        }
        Matrix::Csr(s) => Matrix::Csr(s.add_line(line)),
    }
}

fn add_lines(a: &LineMatrix, b: &LineMatrix) -> Matrix {
    if a.orientation() == b.orientation() {
        Matrix::Line(a.add_aligned(b))
    } else {
        Matrix::Csr(CsrMatrix::from_lines(&[a, b]))
    }
}

fn add_uniforms(a: &UniformMatrix, b: &UniformMatrix) -> Matrix {
    if a.axis() == b.axis() {
        Matrix::Uniform(a.add_aligned(b))
    } else {
        let mut full = FullMatrix::from_storage(a);
        full.scatter_add(b.entries());
        Matrix::Full(full)
    }
}

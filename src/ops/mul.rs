//! Pairwise multiplication table
//!
//! One arm per ordered pair class; products are not commutative, so the
//! left and right placements of each representation have their own routines.
//! Only `Full x Full` runs the naive triple loop.

use std::borrow::Cow;

use super::dense;
use crate::format::Storage;
use crate::matrix::Matrix;
use crate::shape::Shape;
use crate::sparse::{CsrBuilder, CsrMatrix, SparseVector};
use crate::storage::{Axis, FullMatrix, LineMatrix, Orientation, UniformMatrix};

/// Product `lhs x rhs` with result shape `shape`.
///
/// `Borrowed` results are an operand passed through unchanged.
pub(super) fn multiply<'a>(lhs: &'a Matrix, rhs: &'a Matrix, shape: Shape) -> Cow<'a, Matrix> {
    use Matrix::*;

    match (lhs, rhs) {
        (Zero(_), _) | (_, Zero(_)) => Cow::Owned(Zero(shape)),
        (Identity(_), x) | (x, Identity(_)) => Cow::Borrowed(x),

        (Uniform(u), Line(_) | Uniform(_) | Vector(_) | Full(_) | Csr(_)) => {
            Cow::Owned(uniform_times(u, rhs, shape))
        }
        (Line(_) | Vector(_) | Full(_) | Csr(_), Uniform(u)) => {
            Cow::Owned(times_uniform(lhs, u, shape))
        }

        (Line(a), Line(b)) => Cow::Owned(Line(a.compose(b))),
        (Line(a), Vector(v)) => Cow::Owned(Vector(line_times_vector(a, v))),
        (Line(a), Full(f)) => Cow::Owned(Full(line_times_full(a, f))),
        (Line(a), Csr(s)) => Cow::Owned(Csr(CsrMatrix::line_times(a, s))),

        (Vector(v), Line(_) | Vector(_) | Full(_) | Csr(_)) => {
            Cow::Owned(vector_times(v, rhs, shape))
        }

        (Full(f), Line(b)) => Cow::Owned(Full(full_times_line(f, b))),
        (Full(f), Vector(v)) => Cow::Owned(Vector(full_times_vector(f, v))),
        (Full(a), Full(b)) => Cow::Owned(Full(dense::matmul(a, b))),
        (Full(f), Csr(s)) => Cow::Owned(Full(CsrMatrix::full_times(f, s))),

        (Csr(s), Line(b)) => Cow::Owned(Csr(s.times_line(b))),
        (Csr(s), Vector(v)) => Cow::Owned(Vector(s.times_vector(v))),
        (Csr(s), Full(f)) => Cow::Owned(Full(s.times_full(f))),
        (Csr(a), Csr(b)) => Cow::Owned(Csr(a.matmul_csr(b))),
    }
}

/// `rᵀ x m` for a dense row `r` of length `m.rows()`
fn row_times(row: &[f64], m: &Matrix) -> Vec<f64> {
    let columns = m.shape().columns();
    match m {
        Matrix::Zero(_) => vec![0.0; columns],
        Matrix::Identity(_) => row.to_vec(),
        Matrix::Line(line) => {
            let mut out = vec![0.0; columns];
            for (i, (&r, &a)) in row.iter().zip(line.values()).enumerate() {
                out[line.column_of(i)] = r * a;
            }
            out
        }
        Matrix::Uniform(u) => match u.axis() {
            Axis::Row => {
                let weight: f64 = row.iter().sum();
                u.values().iter().map(|w| weight * w).collect()
            }
            Axis::Column => {
                let dot: f64 = row.iter().zip(u.values()).map(|(r, c)| r * c).sum();
                vec![dot; columns]
            }
        },
        Matrix::Vector(v) => vec![v.iter().map(|(k, x)| row[k] * x).sum()],
        Matrix::Full(f) => {
            let mut out = vec![0.0; columns];
            for (&r, f_row) in row.iter().zip(f.rows()) {
                if r == 0.0 {
                    continue;
                }
                for (o, x) in out.iter_mut().zip(f_row) {
                    *o += r * x;
                }
            }
            out
        }
        Matrix::Csr(s) => CsrMatrix::row_times(row, s),
    }
}

/// `m x c` for a dense column `c` of length `m.columns()`
fn times_column(m: &Matrix, column: &[f64]) -> Vec<f64> {
    let rows = m.shape().rows();
    match m {
        Matrix::Zero(_) => vec![0.0; rows],
        Matrix::Identity(_) => column.to_vec(),
        Matrix::Line(line) => line
            .values()
            .iter()
            .enumerate()
            .map(|(i, a)| a * column[line.column_of(i)])
            .collect(),
        Matrix::Uniform(u) => match u.axis() {
            Axis::Row => {
                let dot: f64 = u.values().iter().zip(column).map(|(r, c)| r * c).sum();
                vec![dot; rows]
            }
            Axis::Column => {
                let weight: f64 = column.iter().sum();
                u.values().iter().map(|c| c * weight).collect()
            }
        },
        Matrix::Vector(v) => {
            let mut out = vec![0.0; rows];
            for (k, x) in v.iter() {
                out[k] = x * column[0];
            }
            out
        }
        Matrix::Full(f) => f
            .rows()
            .map(|f_row| f_row.iter().zip(column).map(|(a, c)| a * c).sum())
            .collect(),
        Matrix::Csr(s) => s.times_column(column),
    }
}

/// `U x rhs` for a uniform left operand.
///
/// A RowMatrix repeats `rᵀ` so every result row is `rᵀ x rhs`. A
/// ColumnMatrix is `c ⊗ 1ᵀ`, giving the outer product `c ⊗ (1ᵀ x rhs)`.
fn uniform_times(u: &UniformMatrix, rhs: &Matrix, shape: Shape) -> Matrix {
    match u.axis() {
        Axis::Row => {
            let values = row_times(u.values(), rhs);
            Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Row, values))
        }
        Axis::Column => {
            let ones = vec![1.0; u.ncols()];
            Matrix::Full(FullMatrix::outer(u.values(), &row_times(&ones, rhs)))
        }
    }
}

/// `lhs x U` for a uniform right operand.
///
/// A ColumnMatrix repeats `c` so every result column is `lhs x c`. A
/// RowMatrix is `1 ⊗ rᵀ`, giving the outer product `(lhs x 1) ⊗ r`.
fn times_uniform(lhs: &Matrix, u: &UniformMatrix, shape: Shape) -> Matrix {
    match u.axis() {
        Axis::Column => {
            let values = times_column(lhs, u.values());
            Matrix::Uniform(UniformMatrix::from_parts(shape, Axis::Column, values))
        }
        Axis::Row => {
            let ones = vec![1.0; u.nrows()];
            Matrix::Full(FullMatrix::outer(&times_column(lhs, &ones), u.values()))
        }
    }
}

/// Outer product of a column vector with a single-row right operand.
///
/// Only the vector's stored rows and the operand's non-zero columns are
/// touched.
fn vector_times(v: &SparseVector, rhs: &Matrix, shape: Shape) -> Matrix {
    if shape.columns() == 1 {
        return Matrix::Vector(v.scaled(rhs.value_at(0, 0)));
    }
    let row = rhs.row_entries(0);
    let mut builder = CsrBuilder::with_capacity(shape, v.nnz() * row.len());
    for (i, x) in v.iter() {
        for &(j, y) in &row {
            builder.push(i, j, x * y);
        }
    }
    Matrix::Csr(builder.finish())
}

/// `line x v`: entry `k` lands on row `row_of(k)` scaled by that row's value
fn line_times_vector(line: &LineMatrix, v: &SparseVector) -> SparseVector {
    let a = line.values();
    let moved = |(k, x): (usize, f64)| {
        let row = line.row_of(k);
        (row, a[row] * x)
    };
    match line.orientation() {
        Orientation::Main => SparseVector::from_entries(v.len(), v.iter().map(moved)),
        Orientation::Anti => {
            let entries: Vec<_> = v.iter().map(moved).collect();
            SparseVector::from_entries(v.len(), entries.into_iter().rev())
        }
    }
}

/// `line x F`: row `i` is `a_i` times row `column_of(i)` of `F`
fn line_times_full(line: &LineMatrix, f: &FullMatrix) -> FullMatrix {
    let mut out = FullMatrix::zeros(f.shape());
    for (i, &a) in line.values().iter().enumerate() {
        let source = f.row(line.column_of(i));
        for (o, x) in out.row_mut(i).iter_mut().zip(source) {
            *o = a * x;
        }
    }
    out
}

/// `F x line`: column `c` of `F` moves to column `column_of(c)`, scaled by `b_c`
fn full_times_line(f: &FullMatrix, line: &LineMatrix) -> FullMatrix {
    let mut out = FullMatrix::zeros(f.shape());
    let b = line.values();
    for i in 0..f.nrows() {
        let source = f.row(i);
        let target = out.row_mut(i);
        for (c, &x) in source.iter().enumerate() {
            target[line.column_of(c)] = x * b[c];
        }
    }
    out
}

/// `F x v`, touching only the vector's stored rows
fn full_times_vector(f: &FullMatrix, v: &SparseVector) -> SparseVector {
    let entries = f
        .rows()
        .map(|f_row| v.iter().map(|(k, x)| f_row[k] * x).sum::<f64>())
        .enumerate();
    SparseVector::from_entries(f.nrows(), entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::MatrixKind;

    fn product(a: &Matrix, b: &Matrix) -> Matrix {
        let shape = a.shape().product_shape(b.shape()).unwrap();
        multiply(a, b, shape).into_owned()
    }

    #[test]
    fn test_identity_passes_operand_through() {
        let f = Matrix::dense(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let i = Matrix::identity(2).unwrap();
        let shape = Shape::square(2).unwrap();
        assert!(matches!(multiply(&i, &f, shape), Cow::Borrowed(m) if *m == f));
        assert!(matches!(multiply(&f, &i, shape), Cow::Borrowed(m) if *m == f));
    }

    #[test]
    fn test_zero_product_shape() {
        let z = Matrix::zero(Shape::new(2, 3).unwrap());
        let f = Matrix::dense(vec![vec![1.0; 4]; 3]).unwrap();
        assert_eq!(product(&z, &f), Matrix::zero(Shape::new(2, 4).unwrap()));
    }

    #[test]
    fn test_line_times_vector_anti() {
        let anti = Matrix::anti_diagonal(&[1.0, 2.0, 3.0]).unwrap();
        let v = Matrix::vector(&[4.0, 0.0, 5.0]).unwrap();
        let r = product(&anti, &v);
        assert_eq!(r.kind(), MatrixKind::Vector);
        assert_eq!(r.data(), vec![vec![5.0], vec![0.0], vec![12.0]]);
    }

    #[test]
    fn test_vector_outer_product() {
        let v = Matrix::vector(&[1.0, 0.0, 2.0]).unwrap();
        let row = Matrix::dense(vec![vec![3.0, 0.0, 4.0]]).unwrap();
        let r = product(&v, &row);
        assert_eq!(r.kind(), MatrixKind::Csr);
        assert_eq!(r.nnz(), 4);
        assert_eq!(
            r.data(),
            vec![
                vec![3.0, 0.0, 4.0],
                vec![0.0, 0.0, 0.0],
                vec![6.0, 0.0, 8.0]
            ]
        );

        let scalar = Matrix::dense(vec![vec![-1.0]]).unwrap();
        assert_eq!(
            product(&v, &scalar).data(),
            vec![vec![-1.0], vec![0.0], vec![-2.0]]
        );
    }

    #[test]
    fn test_uniform_products() {
        let s = Matrix::sparse(
            Shape::new(3, 3).unwrap(),
            [
                (0, 0, 7.0),
                (0, 1, 5.0),
                (1, 1, 3.0),
                (1, 2, 11.0),
                (2, 1, 2.0),
            ],
        )
        .unwrap();

        let row = Matrix::row_matrix(Shape::new(2, 3).unwrap(), vec![1.0, 1.0, 1.0]).unwrap();
        let r = product(&row, &s);
        assert_eq!(r.kind(), MatrixKind::RowMatrix);
        assert_eq!(r.data(), vec![vec![7.0, 10.0, 11.0]; 2]);

        let column = Matrix::column_matrix(Shape::new(3, 2).unwrap(), vec![1.0, 0.0, 2.0]).unwrap();
        let r = product(&s, &column);
        assert_eq!(r.kind(), MatrixKind::ColumnMatrix);
        assert_eq!(
            r.data(),
            vec![vec![7.0, 7.0], vec![22.0, 22.0], vec![0.0, 0.0]]
        );

        let left_column =
            Matrix::column_matrix(Shape::new(2, 3).unwrap(), vec![1.0, -1.0]).unwrap();
        assert_eq!(
            product(&left_column, &s).data(),
            vec![vec![7.0, 10.0, 11.0], vec![-7.0, -10.0, -11.0]]
        );

        let right_row = Matrix::row_matrix(Shape::new(3, 2).unwrap(), vec![1.0, 2.0]).unwrap();
        assert_eq!(
            product(&s, &right_row).data(),
            vec![vec![12.0, 24.0], vec![14.0, 28.0], vec![2.0, 4.0]]
        );
    }

    #[test]
    fn test_full_times_anti_line() {
        let f = Matrix::dense(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let anti = Matrix::anti_diagonal(&[10.0, 100.0]).unwrap();
        assert_eq!(
            product(&f, &anti).data(),
            vec![vec![200.0, 10.0], vec![400.0, 30.0]]
        );
        assert_eq!(
            product(&anti, &f).data(),
            vec![vec![30.0, 40.0], vec![100.0, 200.0]]
        );
    }
}

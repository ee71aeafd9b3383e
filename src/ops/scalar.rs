//! Scalar operators, defined per representation

use std::ops::{Mul, Neg};

use crate::matrix::Matrix;
use crate::storage::{Axis, LineMatrix, UniformMatrix};

impl Matrix {
    /// Multiply every cell by `scalar`.
    ///
    /// Scaling by 0 gives `Zero`; scaling by 1 returns a copy of `self`.
    pub fn times_scalar(&self, scalar: f64) -> Matrix {
        if scalar == 1.0 {
            return self.clone();
        }
        if scalar == 0.0 {
            return Matrix::Zero(self.shape());
        }
        self.clone().into_scaled(scalar)
    }

    /// Add `scalar` to every cell.
    ///
    /// Adding 0 returns a copy of `self`. Row and column matrices stay uniform;
    /// sparse and line kinds are materialized first.
    pub fn plus_scalar(&self, scalar: f64) -> Matrix {
        if scalar == 0.0 {
            return self.clone();
        }
        let shifted = match self {
            Matrix::Zero(shape) => Matrix::Uniform(UniformMatrix::from_parts(
                *shape,
                Axis::Row,
                vec![scalar; shape.columns()],
            )),
            Matrix::Uniform(u) => Matrix::Uniform(u.clone().shifted(scalar)),
            other => Matrix::Full(other.to_full().shifted(scalar)),
        };
        shifted.narrow()
    }

    /// Subtract `scalar` from every cell
    pub fn minus_scalar(&self, scalar: f64) -> Matrix {
        self.plus_scalar(-scalar)
    }

    pub(crate) fn into_scaled(self, scalar: f64) -> Matrix {
        if scalar == 1.0 {
            return self;
        }
        if scalar == 0.0 {
            return Matrix::Zero(self.shape());
        }
        let scaled = match self {
            Matrix::Zero(shape) => return Matrix::Zero(shape),
            Matrix::Identity(n) => Matrix::Line(LineMatrix::filled(n.get(), scalar)),
            Matrix::Line(line) => Matrix::Line(line.scaled(scalar)),
            Matrix::Uniform(u) => Matrix::Uniform(u.scaled(scalar)),
            Matrix::Vector(v) => Matrix::Vector(v.scaled(scalar)),
            Matrix::Full(f) => Matrix::Full(f.scaled(scalar)),
            Matrix::Csr(s) => Matrix::Csr(s.scaled(scalar)),
        };
        scaled.narrow()
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.into_scaled(scalar)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.times_scalar(scalar)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0
    }
}

//! Matrix arithmetic
//!
//! Every binary operator chooses its algorithm from the representations of
//! both operands (double dispatch over the closed [`Matrix`] enum).
//!
//! # Design
//!
//! ```text
//! Matrix::plus / minus / times
//!   ├── shape check (Error::ShapeMismatch before any work)
//!   ├── add::add / mul::multiply      exhaustive match on (lhs, rhs)
//!   │     ├── structural algorithm    (line, uniform, vector, CSR kernels)
//!   │     └── dense fallback          (only where no structure applies)
//!   └── settle
//!         ├── Cow::Borrowed  operand passed through (Zero + X, I x X): cloned
//!         └── Cow::Owned     computed result: narrowed
//! ```
//!
//! Subtraction is addition of the right operand scaled by -1. Scalar
//! operators are defined per representation in [`scalar`].

mod add;
mod dense;
mod mul;
mod scalar;

use std::borrow::Cow;

use log::trace;

use crate::error::Result;
use crate::matrix::Matrix;

/// Turn a dispatch result into an owned matrix
fn settle(result: Cow<'_, Matrix>) -> Matrix {
    match result {
        Cow::Borrowed(operand) => operand.clone(),
        Cow::Owned(computed) => computed.narrow(),
    }
}

impl Matrix {
    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.shape().check_same(other.shape(), "plus")?;
        trace!("plus: {} + {}", self.kind(), other.kind());
        Ok(settle(add::add(self, other)))
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.shape().check_same(other.shape(), "minus")?;
        trace!("minus: {} - {}", self.kind(), other.kind());
        let negated = other.times_scalar(-1.0);
        Ok(settle(add::add(self, &negated)))
    }

    /// Matrix product `self x other`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `self.columns != other.rows`.
    ///
    /// # Example
    ///
    /// ```
    /// # use polymat::prelude::*;
    /// let a = Matrix::diagonal(&[2.0, 4.0])?;
    /// let b = Matrix::diagonal(&[0.5, 0.25])?;
    /// let c = a.times(&b)?;
    /// assert_eq!(c.kind(), MatrixKind::Identity);
    /// # Ok::<(), polymat::error::Error>(())
    /// ```
    pub fn times(&self, other: &Matrix) -> Result<Matrix> {
        let shape = self.shape().product_shape(other.shape())?;
        trace!("times: {} x {}", self.kind(), other.kind());
        Ok(settle(mul::multiply(self, other, shape)))
    }
}

//! Matrix algebra on row lists.
//!
//! Each function validates its inputs with [`Matrix::from_rows`], so an empty
//! or ragged row list fails with `InvalidDimension` before any arithmetic.

use nc_core::Result;
use nc_math::{Matrix, Vector};

fn m(rows: &[Vec<f64>]) -> Result<Matrix> {
    Matrix::from_rows(rows)
}

/// Validated copy of `rows`.
pub fn create(rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    m(rows).map(Vec::from)
}

/// `n × n` identity; `n = 0` fails with `InvalidDimension`.
pub fn identity(n: usize) -> Result<Vec<Vec<f64>>> {
    Matrix::identity(n).map(Vec::from)
}

/// `rows × cols` zeros.
pub fn zeros(rows: usize, cols: usize) -> Result<Vec<Vec<f64>>> {
    Matrix::zeros(rows, cols).map(Vec::from)
}

/// `rows × cols` ones.
pub fn ones(rows: usize, cols: usize) -> Result<Vec<Vec<f64>>> {
    Matrix::ones(rows, cols).map(Vec::from)
}

/// Transpose.
pub fn transpose(a: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    Ok(m(a)?.transpose().into())
}

/// Element-wise sum.
pub fn add(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    m(a)?.checked_add(&m(b)?).map(Vec::from)
}

/// Element-wise difference.
pub fn subtract(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    m(a)?.checked_sub(&m(b)?).map(Vec::from)
}

/// Matrix product `a · b`.
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    m(a)?.checked_mul(&m(b)?).map(Vec::from)
}

/// `scalar · a`.
pub fn scalar_multiply(a: &[Vec<f64>], scalar: f64) -> Result<Vec<Vec<f64>>> {
    Ok(m(a)?.scale(scalar).into())
}

/// Determinant of a square matrix.
pub fn determinant(a: &[Vec<f64>]) -> Result<f64> {
    m(a)?.determinant()
}

/// Inverse of a square, non-singular matrix.
pub fn inverse(a: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    m(a)?.inverse().map(Vec::from)
}

/// Trace of a square matrix.
pub fn trace(a: &[Vec<f64>]) -> Result<f64> {
    m(a)?.trace()
}

/// Solve `a · x = b`.
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    m(a)?.solve(&Vector::from_slice(b)).map(Vec::from)
}

/// `true` if `a` is a valid matrix with as many rows as columns.
pub fn is_square(a: &[Vec<f64>]) -> bool {
    m(a).map(|a| a.is_square()).unwrap_or(false)
}

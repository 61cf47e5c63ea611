//! Vector algebra on `&[f64]`.

use nc_core::Result;
use nc_math::vector::{DEFAULT_NORM_ORDER, DEFAULT_POPULATION};
use nc_math::Vector;

fn v(data: &[f64]) -> Vector {
    Vector::from_slice(data)
}

/// Copy of `elements`; every finite or non-finite sequence is a valid vector.
pub fn create(elements: &[f64]) -> Vec<f64> {
    elements.to_vec()
}

/// Dot product.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    v(a).dot(&v(b))
}

/// Cross product of two 3-vectors.
pub fn cross(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    v(a).cross(&v(b)).map(Vec::from)
}

/// p-norm, Euclidean by default.
pub fn norm(a: &[f64], p: Option<f64>) -> Result<f64> {
    v(a).norm_p(p.unwrap_or(DEFAULT_NORM_ORDER))
}

/// Unit vector in the direction of `a`.
pub fn normalize(a: &[f64]) -> Result<Vec<f64>> {
    v(a).normalize().map(Vec::from)
}

/// Element-wise sum.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    v(a).checked_add(&v(b)).map(Vec::from)
}

/// Element-wise difference.
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    v(a).checked_sub(&v(b)).map(Vec::from)
}

/// `scalar · a`.
pub fn scale(a: &[f64], scalar: f64) -> Vec<f64> {
    v(a).scale(scalar).into_vec()
}

/// Sum of the elements.
pub fn sum(a: &[f64]) -> f64 {
    v(a).sum()
}

/// Arithmetic mean.
pub fn mean(a: &[f64]) -> Result<f64> {
    v(a).mean()
}

/// Variance, sample by default.
pub fn variance(a: &[f64], population: Option<bool>) -> Result<f64> {
    v(a).variance(population.unwrap_or(DEFAULT_POPULATION))
}

/// Standard deviation, sample by default.
pub fn std_dev(a: &[f64], population: Option<bool>) -> Result<f64> {
    v(a).std_dev(population.unwrap_or(DEFAULT_POPULATION))
}

/// Smallest element.
pub fn min(a: &[f64]) -> Result<f64> {
    v(a).min()
}

/// Largest element.
pub fn max(a: &[f64]) -> Result<f64> {
    v(a).max()
}

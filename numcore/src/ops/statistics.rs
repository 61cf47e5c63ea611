//! Descriptive statistics on `&[f64]` samples.

use nc_core::Result;
use nc_math::statistics as stats;
use nc_math::vector::DEFAULT_POPULATION;
use nc_math::Vector;

fn v(data: &[f64]) -> Vector {
    Vector::from_slice(data)
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    stats::mean(&v(data))
}

/// Median.
pub fn median(data: &[f64]) -> Result<f64> {
    stats::median(&v(data))
}

/// Variance, sample by default.
pub fn variance(data: &[f64], population: Option<bool>) -> Result<f64> {
    stats::variance(&v(data), population.unwrap_or(DEFAULT_POPULATION))
}

/// Standard deviation, sample by default.
pub fn std_dev(data: &[f64], population: Option<bool>) -> Result<f64> {
    stats::std_dev(&v(data), population.unwrap_or(DEFAULT_POPULATION))
}

/// Sample covariance.
pub fn covariance(a: &[f64], b: &[f64]) -> Result<f64> {
    stats::covariance(&v(a), &v(b))
}

/// Pearson correlation.
pub fn correlation(a: &[f64], b: &[f64]) -> Result<f64> {
    stats::correlation(&v(a), &v(b))
}

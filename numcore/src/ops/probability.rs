//! Normal density and distribution function.

use nc_core::Result;
use nc_math::distributions::{self, DEFAULT_MEAN, DEFAULT_STD_DEV};

/// Normal density at `x`; `N(0, 1)` unless `mean` / `std_dev` are given.
pub fn normal_pdf(x: f64, mean: Option<f64>, std_dev: Option<f64>) -> Result<f64> {
    distributions::normal_pdf(
        x,
        mean.unwrap_or(DEFAULT_MEAN),
        std_dev.unwrap_or(DEFAULT_STD_DEV),
    )
}

/// Normal cumulative probability at `x`; `N(0, 1)` unless `mean` /
/// `std_dev` are given.
pub fn normal_cdf(x: f64, mean: Option<f64>, std_dev: Option<f64>) -> Result<f64> {
    distributions::normal_cdf(
        x,
        mean.unwrap_or(DEFAULT_MEAN),
        std_dev.unwrap_or(DEFAULT_STD_DEV),
    )
}

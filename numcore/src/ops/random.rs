//! Random sampling.
//!
//! The unseeded functions take their seed from
//! [`Settings`](crate::Settings) when one is set, otherwise from entropy.

use nc_core::Result;
use nc_math::distributions::{DEFAULT_MEAN, DEFAULT_STD_DEV};
use nc_math::random_numbers::{self as rn, DEFAULT_UNIFORM_MAX, DEFAULT_UNIFORM_MIN};

/// `count` draws from `U[min, max)`, `U[0, 1)` by default.
pub fn uniform(count: i64, min: Option<f64>, max: Option<f64>) -> Result<Vec<f64>> {
    rn::random_uniform(
        count,
        min.unwrap_or(DEFAULT_UNIFORM_MIN),
        max.unwrap_or(DEFAULT_UNIFORM_MAX),
    )
    .map(Vec::from)
}

/// `count` draws from `N(mean, std_dev²)`, `N(0, 1)` by default.
pub fn normal(count: i64, mean: Option<f64>, std_dev: Option<f64>) -> Result<Vec<f64>> {
    rn::random_normal(
        count,
        mean.unwrap_or(DEFAULT_MEAN),
        std_dev.unwrap_or(DEFAULT_STD_DEV),
    )
    .map(Vec::from)
}

/// Reproducible variant of [`uniform`].
pub fn uniform_seeded(
    count: i64,
    min: Option<f64>,
    max: Option<f64>,
    seed: u64,
) -> Result<Vec<f64>> {
    rn::random_uniform_seeded(
        count,
        min.unwrap_or(DEFAULT_UNIFORM_MIN),
        max.unwrap_or(DEFAULT_UNIFORM_MAX),
        seed,
    )
    .map(Vec::from)
}

/// Reproducible variant of [`normal`].
pub fn normal_seeded(
    count: i64,
    mean: Option<f64>,
    std_dev: Option<f64>,
    seed: u64,
) -> Result<Vec<f64>> {
    rn::random_normal_seeded(
        count,
        mean.unwrap_or(DEFAULT_MEAN),
        std_dev.unwrap_or(DEFAULT_STD_DEV),
        seed,
    )
    .map(Vec::from)
}

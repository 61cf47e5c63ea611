//! Pseudo-random sampling.
//!
//! Every sampler owns its own MT19937-64 engine (`rand_mt::Mt64`); nothing
//! is shared between calls. The seed comes from, in order of precedence:
//! the explicit argument, the process default in
//! [`Settings`](nc_core::Settings), or fresh entropy. The same seed always
//! reproduces the same sequence.

use crate::vector::Vector;
use nc_core::{
    ensure,
    errors::{Error, Result},
    Real, Settings,
};
use rand::distributions::Uniform;
use rand::prelude::*;
use rand_distr::Normal;
use rand_mt::Mt64;

/// Default lower bound of [`random_uniform`].
pub const DEFAULT_UNIFORM_MIN: Real = 0.0;

/// Default upper bound of [`random_uniform`].
pub const DEFAULT_UNIFORM_MAX: Real = 1.0;

/// A seeded source of uniform and normal deviates.
pub struct Sampler {
    rng: Mt64,
    seed: u64,
}

impl Sampler {
    /// Create a sampler with an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt64::new(seed),
            seed,
        }
    }

    /// Create a sampler seeded from [`Settings`], or from entropy when no
    /// default seed is set.
    pub fn from_settings() -> Self {
        let seed = match Settings::instance().random_seed() {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::trace!("sampler seeded from entropy: {seed}");
                seed
            }
        };
        Self::new(seed)
    }

    /// The seed this sampler started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        self.rng.gen::<Real>()
    }

    /// `count` independent draws from `U[min, max)`.
    pub fn uniform(&mut self, count: i64, min: Real, max: Real) -> Result<Vector> {
        let n = sample_count(count)?;
        ensure!(
            min.is_finite() && max.is_finite() && min < max && (max - min).is_finite(),
            InvalidParameter,
            "uniform range requires finite min < max, got [{min}, {max})"
        );
        let dist = Uniform::new(min, max);
        Ok((&mut self.rng).sample_iter(dist).take(n).collect())
    }

    /// `count` independent draws from `N(mean, std_dev²)`.
    pub fn normal(&mut self, count: i64, mean: Real, std_dev: Real) -> Result<Vector> {
        let n = sample_count(count)?;
        ensure!(
            mean.is_finite(),
            InvalidParameter,
            "normal mean must be finite, got {mean}"
        );
        ensure!(
            std_dev > 0.0 && std_dev.is_finite(),
            InvalidParameter,
            "standard deviation must be positive and finite, got {std_dev}"
        );
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| Error::InvalidParameter(format!("normal distribution: {e}")))?;
        Ok((&mut self.rng).sample_iter(dist).take(n).collect())
    }
}

fn sample_count(count: i64) -> Result<usize> {
    usize::try_from(count)
        .map_err(|_| Error::InvalidParameter(format!("sample count must be non-negative, got {count}")))
}

fn sampler(seed: Option<u64>) -> Sampler {
    seed.map_or_else(Sampler::from_settings, Sampler::new)
}

/// `count` draws from `U[min, max)` using the default seed policy.
pub fn random_uniform(count: i64, min: Real, max: Real) -> Result<Vector> {
    sampler(None).uniform(count, min, max)
}

/// `count` draws from `U[min, max)` with an explicit seed.
pub fn random_uniform_seeded(count: i64, min: Real, max: Real, seed: u64) -> Result<Vector> {
    sampler(Some(seed)).uniform(count, min, max)
}

/// `count` draws from `N(mean, std_dev²)` using the default seed policy.
pub fn random_normal(count: i64, mean: Real, std_dev: Real) -> Result<Vector> {
    sampler(None).normal(count, mean, std_dev)
}

/// `count` draws from `N(mean, std_dev²)` with an explicit seed.
pub fn random_normal_seeded(count: i64, mean: Real, std_dev: Real, seed: u64) -> Result<Vector> {
    sampler(Some(seed)).normal(count, mean, std_dev)
}

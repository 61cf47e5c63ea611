//! Normal (Gaussian) distribution.

use crate::scalar::erfc;
use nc_core::{ensure, errors::Result, Real};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Default mean of [`normal_pdf`] / [`normal_cdf`].
pub const DEFAULT_MEAN: Real = 0.0;

/// Default standard deviation of [`normal_pdf`] / [`normal_cdf`].
pub const DEFAULT_STD_DEV: Real = 1.0;

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn standard_normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = ½ (1 + erf(x/√2))`, evaluated as `½ erfc(-x/√2)` so the lower
/// tail keeps its relative accuracy.
#[inline]
pub fn standard_normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// A normal distribution `N(mean, std_dev²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDistribution {
    mean: Real,
    std_dev: Real,
}

impl NormalDistribution {
    /// Create `N(mean, std_dev²)`.
    ///
    /// Fails with [`Error::InvalidParameter`](nc_core::Error::InvalidParameter)
    /// unless `std_dev` is positive and finite.
    pub fn new(mean: Real, std_dev: Real) -> Result<Self> {
        ensure!(
            std_dev > 0.0 && std_dev.is_finite(),
            InvalidParameter,
            "standard deviation must be positive and finite, got {std_dev}"
        );
        Ok(Self { mean, std_dev })
    }

    /// `N(0, 1)`.
    pub fn standard() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
        }
    }

    /// Mean.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Standard deviation.
    pub fn std_dev(&self) -> Real {
        self.std_dev
    }

    /// Density at `x`.
    pub fn pdf(&self, x: Real) -> Real {
        standard_normal_pdf((x - self.mean) / self.std_dev) / self.std_dev
    }

    /// `P(X ≤ x)`.
    pub fn cdf(&self, x: Real) -> Real {
        standard_normal_cdf((x - self.mean) / self.std_dev)
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

/// Density of `N(mean, std_dev²)` at `x`.
pub fn normal_pdf(x: Real, mean: Real, std_dev: Real) -> Result<Real> {
    Ok(NormalDistribution::new(mean, std_dev)?.pdf(x))
}

/// Cumulative probability of `N(mean, std_dev²)` at `x`.
pub fn normal_cdf(x: Real, mean: Real, std_dev: Real) -> Result<Real> {
    Ok(NormalDistribution::new(mean, std_dev)?.cdf(x))
}

//! # nc-math
//!
//! The numeric engine of numcore: scalar functions, complex numbers,
//! vector and matrix newtypes (over nalgebra), descriptive statistics, the
//! normal distribution (via statrs), seeded sampling (MT19937-64),
//! FFT/convolution, least-squares regression and combinatorics.
//!
//! Every operation is a pure function of its inputs. Shape and domain
//! violations are reported as [`nc_core::Error`]; out-of-domain arguments to
//! scalar transcendental functions follow IEEE-754 and come back as NaN/∞.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Combinatorial functions.
pub mod combinatorics;

/// Floating-point tolerances.
pub mod comparison;

/// Complex numbers.
pub mod complex;

/// Probability distributions.
pub mod distributions;

/// Dense matrices.
pub mod matrix;

/// Matrix decompositions.
pub mod matrix_utilities;

/// Random samplers.
pub mod random_numbers;

/// Linear regression.
pub mod regression;

/// Elementary and special scalar functions.
pub mod scalar;

/// FFT and convolution.
pub mod signal;

/// Descriptive statistics.
pub mod statistics;

/// Dense vectors.
pub mod vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use combinatorics::{combinations, factorial, gcd, lcm};
pub use complex::Complex;
pub use distributions::{normal_cdf, normal_pdf, NormalDistribution};
pub use matrix::Matrix;
pub use matrix_utilities::LuDecomposition;
pub use random_numbers::{random_normal, random_uniform, Sampler};
pub use regression::{linear_regression, LinearRegression};
pub use signal::{convolve, fft, ifft};
pub use vector::Vector;

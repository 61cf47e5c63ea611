//! # numcore
//!
//! A self-contained numeric computation core: scalar and special functions,
//! complex arithmetic, vector and matrix algebra, descriptive statistics,
//! the normal distribution, seeded random sampling, FFT/convolution, linear
//! regression and combinatorics.
//!
//! This crate is a **façade**. It re-exports the typed API of the workspace
//! crates and adds [`ops`], a flat set of functions over plain `Vec<f64>` /
//! `Vec<Vec<f64>>` / `(f64, f64)` values for hosts that do not want to deal
//! with the newtypes.
//!
//! ## Quick start
//!
//! ```rust
//! use numcore::ops;
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let y = [5.0, 7.0, 9.0, 11.0];
//! let coefficients = ops::ml::linear_regression(&x, &y).unwrap();
//! assert!((coefficients[0] - 2.0).abs() < 1e-12); // slope
//! assert!((coefficients[1] - 3.0).abs() < 1e-12); // intercept
//!
//! assert_eq!(ops::vector::norm(&[3.0, 4.0], None).unwrap(), 5.0);
//! ```
//!
//! Every fallible operation returns [`core::Result`]; match on
//! [`core::Error`] (or its [`kind`](core::Error::kind)) to tell failures
//! apart.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and settings.
pub use nc_core as core;

/// The numeric engine: typed vectors, matrices and algorithms.
pub use nc_math as math;

pub mod ops;

pub use nc_core::{Error, ErrorKind, Result, Settings};
pub use nc_math::{Complex, LinearRegression, Matrix, Vector};

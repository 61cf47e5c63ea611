//! Scalar arithmetic, transcendental and special functions.
//!
//! Infallible: domain errors come back as NaN or ±∞.

pub use nc_math::scalar::{
    abs, acos, add, asin, atan, atan2, beta, cos, cosh, divide, erf, erfc, exp, gamma, ln,
    ln_gamma, log10, log2, multiply, power, sin, sinh, sqrt, subtract, tan, tanh,
};

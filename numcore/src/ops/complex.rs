//! Complex arithmetic on `(re, im)` pairs.

use nc_core::Result;
use nc_math::Complex;

/// The complex number `re + im·i`.
pub fn create(re: f64, im: f64) -> (f64, f64) {
    (re, im)
}

/// `a + b`.
pub fn add(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (Complex::from(a) + Complex::from(b)).into()
}

/// `a − b`.
pub fn subtract(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (Complex::from(a) - Complex::from(b)).into()
}

/// `a · b`.
pub fn multiply(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (Complex::from(a) * Complex::from(b)).into()
}

/// `a / b`; fails with `DivisionByZero` when `b = 0 + 0i`.
pub fn divide(a: (f64, f64), b: (f64, f64)) -> Result<(f64, f64)> {
    Complex::from(a).checked_div(&Complex::from(b)).map(Into::into)
}

/// Magnitude `|a|`.
pub fn abs(a: (f64, f64)) -> f64 {
    Complex::from(a).abs()
}

//! `Complex` — an immutable (real, imaginary) pair.
//!
//! A thin `Copy` newtype around `num_complex::Complex64`. Addition,
//! subtraction and multiplication are total and exposed as operators;
//! division signals [`Error::DivisionByZero`] for a zero divisor instead of
//! producing NaN components.

use nc_core::{ensure, errors::Result, Real};
use num_complex::Complex64;
use std::ops::{Add, Mul, Neg, Sub};

/// A complex number with `Real` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex(Complex64);

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Complex = Complex(Complex64::new(0.0, 0.0));

    /// `1 + 0i`.
    pub const ONE: Complex = Complex(Complex64::new(1.0, 0.0));

    /// Create `re + im·i`.
    pub const fn new(re: Real, im: Real) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Create `r·e^{iθ}`.
    pub fn from_polar(r: Real, theta: Real) -> Self {
        Self(Complex64::from_polar(r, theta))
    }

    /// Real part.
    pub fn re(&self) -> Real {
        self.0.re
    }

    /// Imaginary part.
    pub fn im(&self) -> Real {
        self.0.im
    }

    /// Magnitude `√(re² + im²)`.
    ///
    /// Computed with `hypot`, so it does not overflow for large components.
    pub fn abs(&self) -> Real {
        self.0.re.hypot(self.0.im)
    }

    /// Squared magnitude `re² + im²`.
    pub fn norm_sqr(&self) -> Real {
        self.0.norm_sqr()
    }

    /// Argument (phase angle) in `(-π, π]`.
    pub fn arg(&self) -> Real {
        self.0.arg()
    }

    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self(self.0.conj())
    }

    /// `self / rhs`.
    ///
    /// Fails with [`Error::DivisionByZero`](nc_core::Error::DivisionByZero)
    /// when both components of `rhs` are zero.
    pub fn checked_div(&self, rhs: &Complex) -> Result<Complex> {
        let (a, b) = (self.0.re, self.0.im);
        let (c, d) = (rhs.0.re, rhs.0.im);
        ensure!(
            !(c == 0.0 && d == 0.0),
            DivisionByZero,
            "complex divisor {rhs} has zero magnitude"
        );
        // Smith's algorithm: scale by the larger component so |c|² + |d|²
        // is never formed.
        let quotient = if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Complex::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Complex::new((a * r + b) / den, (b * r - a) / den)
        };
        Ok(quotient)
    }

    /// Borrow the inner `Complex64`.
    pub fn inner(&self) -> &Complex64 {
        &self.0
    }
}

// ── From / Into ───────────────────────────────────────────────────────────────

impl From<Complex64> for Complex {
    fn from(c: Complex64) -> Self {
        Self(c)
    }
}

impl From<Complex> for Complex64 {
    fn from(c: Complex) -> Self {
        c.0
    }
}

impl From<(Real, Real)> for Complex {
    fn from((re, im): (Real, Real)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for (Real, Real) {
    fn from(c: Complex) -> Self {
        (c.0.re, c.0.im)
    }
}

impl From<Real> for Complex {
    fn from(re: Real) -> Self {
        Self::new(re, 0.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Complex;
    /// `(a + bi)(c + di) = (ac − bd) + (ad + bc)i`.
    fn mul(self, rhs: Complex) -> Complex {
        Complex(self.0 * rhs.0)
    }
}

impl Mul<Real> for Complex {
    type Output = Complex;
    fn mul(self, rhs: Real) -> Complex {
        Complex(self.0 * rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.im.is_sign_negative() {
            write!(f, "{}-{}i", self.0.re, -self.0.im)
        } else {
            write!(f, "{}+{}i", self.0.re, self.0.im)
        }
    }
}

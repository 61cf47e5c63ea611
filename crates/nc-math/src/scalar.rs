//! Elementary and special scalar functions.
//!
//! Every function follows IEEE-754: out-of-domain arguments (square root of a
//! negative number, logarithm of a non-positive number, inverse sine outside
//! `[-1, 1]`, …) produce NaN or ±∞ instead of an error. Callers that need a
//! hard failure validate the domain themselves.
//!
//! The gamma family and the error functions delegate to `statrs`.

use nc_core::Real;

// ── Basic arithmetic ──────────────────────────────────────────────────────────

/// `a + b`.
#[inline]
pub fn add(a: Real, b: Real) -> Real {
    a + b
}

/// `a - b`.
#[inline]
pub fn subtract(a: Real, b: Real) -> Real {
    a - b
}

/// `a * b`.
#[inline]
pub fn multiply(a: Real, b: Real) -> Real {
    a * b
}

/// `a / b`; a zero divisor gives ±∞ (or NaN for `0 / 0`).
#[inline]
pub fn divide(a: Real, b: Real) -> Real {
    a / b
}

// ── Powers, roots, exponentials ───────────────────────────────────────────────

/// `base` raised to `exponent`.
#[inline]
pub fn power(base: Real, exponent: Real) -> Real {
    base.powf(exponent)
}

/// Square root; NaN for negative input.
#[inline]
pub fn sqrt(x: Real) -> Real {
    x.sqrt()
}

/// Absolute value.
#[inline]
pub fn abs(x: Real) -> Real {
    x.abs()
}

/// `e^x`.
#[inline]
pub fn exp(x: Real) -> Real {
    x.exp()
}

/// Natural logarithm; `-∞` at zero, NaN for negative input.
#[inline]
pub fn ln(x: Real) -> Real {
    x.ln()
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: Real) -> Real {
    x.log10()
}

/// Base-2 logarithm.
#[inline]
pub fn log2(x: Real) -> Real {
    x.log2()
}

// ── Trigonometry ──────────────────────────────────────────────────────────────

/// Sine (radians).
#[inline]
pub fn sin(x: Real) -> Real {
    x.sin()
}

/// Cosine (radians).
#[inline]
pub fn cos(x: Real) -> Real {
    x.cos()
}

/// Tangent (radians).
#[inline]
pub fn tan(x: Real) -> Real {
    x.tan()
}

/// Inverse sine; NaN outside `[-1, 1]`.
#[inline]
pub fn asin(x: Real) -> Real {
    x.asin()
}

/// Inverse cosine; NaN outside `[-1, 1]`.
#[inline]
pub fn acos(x: Real) -> Real {
    x.acos()
}

/// Inverse tangent.
#[inline]
pub fn atan(x: Real) -> Real {
    x.atan()
}

/// Four-quadrant inverse tangent of `y / x`.
#[inline]
pub fn atan2(y: Real, x: Real) -> Real {
    y.atan2(x)
}

// ── Hyperbolic ────────────────────────────────────────────────────────────────

/// Hyperbolic sine.
#[inline]
pub fn sinh(x: Real) -> Real {
    x.sinh()
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh(x: Real) -> Real {
    x.cosh()
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh(x: Real) -> Real {
    x.tanh()
}

// ── Special functions ─────────────────────────────────────────────────────────

/// The Gamma function Γ(x).
///
/// Uses the Lanczos approximation via `statrs`. Γ(±0) is ±∞ and the poles
/// at the negative integers give NaN.
pub fn gamma(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    if x == 0.0 {
        return Real::INFINITY.copysign(x);
    }
    // the reflection formula yields huge finite values at the poles
    if x < 0.0 && x.fract() == 0.0 {
        return Real::NAN;
    }
    statrs::function::gamma::gamma(x)
}

/// The natural logarithm of the Gamma function, ln Γ(x), for `x > 0`.
///
/// NaN for `x <= 0`.
pub fn ln_gamma(x: Real) -> Real {
    if x.is_nan() || x <= 0.0 {
        return Real::NAN;
    }
    statrs::function::gamma::ln_gamma(x)
}

/// The Beta function B(a, b) = Γ(a)Γ(b) / Γ(a + b).
///
/// For positive arguments the ratio is taken in log space so that large
/// arguments do not overflow the individual gamma values.
pub fn beta(a: Real, b: Real) -> Real {
    if a > 0.0 && b > 0.0 {
        (ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)).exp()
    } else {
        gamma(a) * gamma(b) / gamma(a + b)
    }
}

/// The error function erf(x) = 2/√π ∫₀ˣ e^{-t²} dt.
///
/// Evaluated by `statrs`; absolute error stays below about 1e-11.
pub fn erf(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    statrs::function::erf::erf(x)
}

/// The complementary error function erfc(x) = 1 − erf(x).
///
/// Accurate in the upper tail where `1 - erf(x)` would cancel.
pub fn erfc(x: Real) -> Real {
    if x.is_nan() {
        return Real::NAN;
    }
    statrs::function::erf::erfc(x)
}

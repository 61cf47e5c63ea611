//! Factorials, binomial coefficients, gcd and lcm.

use nc_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use num_traits::ToPrimitive;

/// Largest `n` whose factorial is finite in `f64` (170! ≈ 7.26e306).
pub const MAX_FACTORIAL: u32 = 170;

/// Validate that `x` is a non-negative integer and convert it.
fn non_negative_integer(x: Real, what: &str) -> Result<u64> {
    ensure!(
        x.is_finite() && x >= 0.0 && x.fract() == 0.0,
        InvalidParameter,
        "{what} must be a non-negative integer, got {x}"
    );
    x.to_u64()
        .ok_or_else(|| Error::InvalidParameter(format!("{what} is too large: {x}")))
}

/// `n!` for a non-negative integer `n ≤ 170`.
///
/// The product is accumulated in floating point; every value up to 22! is
/// exact.
pub fn factorial(n: Real) -> Result<Real> {
    let n = non_negative_integer(n, "factorial argument")?;
    ensure!(
        n <= u64::from(MAX_FACTORIAL),
        InvalidParameter,
        "{n}! overflows a double (limit {MAX_FACTORIAL})"
    );
    Ok((2..=n).fold(1.0, |acc, k| acc * k as Real))
}

/// Binomial coefficient `C(n, k)`.
///
/// Uses the multiplicative formula over `min(k, n − k)` terms with each
/// partial product rounded to the nearest integer, so results stay exact
/// while they fit in the 53-bit mantissa.
pub fn combinations(n: Real, k: Real) -> Result<Real> {
    let n = non_negative_integer(n, "n")?;
    let k = non_negative_integer(k, "k")?;
    ensure!(k <= n, InvalidParameter, "k = {k} exceeds n = {n}");
    let k = k.min(n - k);
    let mut result: Real = 1.0;
    for i in 1..=k {
        result = (result * (n - k + i) as Real / i as Real).round();
        if result.is_infinite() {
            break;
        }
    }
    ensure!(
        result.is_finite(),
        InvalidParameter,
        "C({n}, {k}) overflows a double"
    );
    Ok(result)
}

/// Greatest common divisor; `gcd(0, 0) = 0` and the result is never
/// negative.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; 0 when either argument is 0.
///
/// Fails with [`Error::InvalidParameter`] if the result does not fit in a
/// `u64`.
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd(a, b);
    (a.unsigned_abs() / g)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| Error::InvalidParameter(format!("lcm({a}, {b}) overflows u64")))
}

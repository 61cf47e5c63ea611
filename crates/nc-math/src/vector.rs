//! `Vector` — a fixed-length, immutable sequence of reals.
//!
//! This is a thin newtype around `nalgebra::DVector<f64>`. Every transforming
//! operation returns a fresh `Vector`; the receiver is never modified.
//!
//! The empty vector is a valid value. Element-wise operations (`checked_add`,
//! `checked_sub`, `scale`) and `sum` accept it; every reduction that has no
//! meaningful value on zero elements (dot, cross, norms, mean, variance,
//! min/max) fails with [`Error::EmptyInput`].

use nalgebra::DVector;
use nc_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use std::ops::{Index, Mul, Neg};

/// Norm order used when the caller does not pick one (Euclidean).
pub const DEFAULT_NORM_ORDER: Real = 2.0;

/// Variance flavour used when the caller does not pick one (sample, n − 1).
pub const DEFAULT_POPULATION: bool = false;

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(DVector<Real>);

impl Vector {
    /// Create a vector that owns `data`.
    pub fn new(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Create a vector by copying a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create a zero-filled vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create a vector of length `n` filled with `value`.
    pub fn from_element(n: usize, value: Real) -> Self {
        Self(DVector::from_element(n, value))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<Real> {
        self.0.as_slice().to_vec()
    }

    /// Consume the vector and return its elements.
    pub fn into_vec(self) -> Vec<Real> {
        self.0.as_slice().to_vec()
    }

    /// Borrow the inner `DVector`.
    pub fn inner(&self) -> &DVector<Real> {
        &self.0
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Apply a function element-wise, returning a new vector.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    fn require_non_empty(&self, op: &str) -> Result<()> {
        ensure!(!self.is_empty(), EmptyInput, "{op} requires a non-empty vector");
        Ok(())
    }

    fn require_same_len(&self, other: &Vector, op: &str) -> Result<()> {
        ensure!(
            self.len() == other.len(),
            DimensionMismatch,
            "{op} requires vectors of equal length, got {} and {}",
            self.len(),
            other.len()
        );
        Ok(())
    }

    // ── Products ──────────────────────────────────────────────────────────────

    /// Dot product `Σ aᵢbᵢ`.
    pub fn dot(&self, other: &Vector) -> Result<Real> {
        self.require_same_len(other, "dot product")?;
        self.require_non_empty("dot product")?;
        Ok(self.0.dot(&other.0))
    }

    /// Cross product; defined only for two 3-vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        ensure!(
            self.len() == 3 && other.len() == 3,
            DimensionMismatch,
            "cross product requires two 3-vectors, got lengths {} and {}",
            self.len(),
            other.len()
        );
        let (a, b) = (&self.0, &other.0);
        Ok(Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    // ── Norms ─────────────────────────────────────────────────────────────────

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> Result<Real> {
        self.norm_p(DEFAULT_NORM_ORDER)
    }

    /// Generalised p-norm `(Σ|vᵢ|ᵖ)^(1/p)`.
    ///
    /// `p = +∞` gives the largest absolute element. Orders below 1 are not
    /// norms and fail with [`Error::InvalidParameter`], as do NaN and `-∞`.
    pub fn norm_p(&self, p: Real) -> Result<Real> {
        ensure!(
            p >= 1.0,
            InvalidParameter,
            "norm order must be >= 1 or +inf, got {p}"
        );
        self.require_non_empty("norm")?;
        let largest = nan_propagating_fold(self.0.iter().map(|x| x.abs()), 0.0, Real::max);
        if p == Real::INFINITY || largest == 0.0 || !largest.is_finite() {
            return Ok(largest);
        }
        if p == 1.0 {
            return Ok(self.0.iter().map(|x| x.abs()).sum());
        }
        // scaled by the largest element so the powers neither overflow nor
        // underflow
        let scaled = self.0.iter().map(|x| x.abs() / largest);
        let norm = if p == 2.0 {
            scaled.map(|x| x * x).sum::<Real>().sqrt()
        } else {
            scaled.map(|x| x.powf(p)).sum::<Real>().powf(1.0 / p)
        };
        Ok(largest * norm)
    }

    /// Unit vector in the direction of `self`.
    ///
    /// Fails with [`Error::DivisionByZero`] for the zero vector.
    pub fn normalize(&self) -> Result<Vector> {
        let norm = self.norm()?;
        ensure!(
            norm != 0.0,
            DivisionByZero,
            "cannot normalize a vector with zero norm"
        );
        Ok(Self(&self.0 / norm))
    }

    // ── Element-wise arithmetic ───────────────────────────────────────────────

    /// Element-wise sum.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.require_same_len(other, "vector addition")?;
        Ok(Self(&self.0 + &other.0))
    }

    /// Element-wise difference `self − other`.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.require_same_len(other, "vector subtraction")?;
        Ok(Self(&self.0 - &other.0))
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self(&self.0 * scalar)
    }

    // ── Reductions ────────────────────────────────────────────────────────────

    /// Sum of all elements (0 for the empty vector).
    pub fn sum(&self) -> Real {
        self.0.sum()
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> Result<Real> {
        self.require_non_empty("mean")?;
        Ok(self.sum() / self.len() as Real)
    }

    /// Variance with divisor `n` (`population = true`) or `n − 1`.
    ///
    /// A sample variance needs at least two elements and fails with
    /// [`Error::InsufficientData`] otherwise; a population variance of the
    /// empty vector fails with [`Error::EmptyInput`].
    pub fn variance(&self, population: bool) -> Result<Real> {
        let n = self.len();
        if !population && n < 2 {
            return Err(Error::InsufficientData {
                required: 2,
                found: n,
            });
        }
        let mean = self.mean()?;
        let sum_sq: Real = self.0.iter().map(|x| (x - mean) * (x - mean)).sum();
        let divisor = if population { n } else { n - 1 };
        Ok(sum_sq / divisor as Real)
    }

    /// Standard deviation, the square root of [`variance`](Self::variance).
    pub fn std_dev(&self, population: bool) -> Result<Real> {
        self.variance(population).map(Real::sqrt)
    }

    /// Smallest element; NaN if any element is NaN.
    pub fn min(&self) -> Result<Real> {
        self.require_non_empty("min")?;
        Ok(nan_propagating_fold(
            self.0.iter().copied(),
            Real::INFINITY,
            Real::min,
        ))
    }

    /// Largest element; NaN if any element is NaN.
    pub fn max(&self) -> Result<Real> {
        self.require_non_empty("max")?;
        Ok(nan_propagating_fold(
            self.0.iter().copied(),
            Real::NEG_INFINITY,
            Real::max,
        ))
    }
}

/// `Real::min`/`Real::max` silently drop NaN; this keeps it.
fn nan_propagating_fold<I, F>(iter: I, init: Real, f: F) -> Real
where
    I: Iterator<Item = Real>,
    F: Fn(Real, Real) -> Real,
{
    iter.fold(init, |acc, x| {
        if acc.is_nan() || x.is_nan() {
            Real::NAN
        } else {
            f(acc, x)
        }
    })
}

impl Default for Vector {
    /// The empty vector.
    fn default() -> Self {
        Self::zeros(0)
    }
}

// ── From / Into conversions ───────────────────────────────────────────────────

impl From<DVector<Real>> for Vector {
    fn from(v: DVector<Real>) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVector<Real> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<Vec<Real>> for Vector {
    fn from(v: Vec<Real>) -> Self {
        Self::new(v)
    }
}

impl From<&[Real]> for Vector {
    fn from(s: &[Real]) -> Self {
        Self::from_slice(s)
    }
}

impl From<Vector> for Vec<Real> {
    fn from(v: Vector) -> Self {
        v.into_vec()
    }
}

impl FromIterator<Real> for Vector {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Index ─────────────────────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

// ── Scalar arithmetic ─────────────────────────────────────────────────────────

impl Mul<Real> for &Vector {
    type Output = Vector;
    fn mul(self, rhs: Real) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Real> for Vector {
    type Output = Vector;
    fn mul(self, rhs: Real) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl Mul<&Vector> for Real {
    type Output = Vector;
    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector(-&self.0)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

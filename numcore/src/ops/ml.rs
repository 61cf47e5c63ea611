//! Linear regression.

use nc_core::{ensure, Result};
use nc_math::{regression, Matrix, Vector};

/// Least-squares fit of `y` on the feature rows `x`.
///
/// An intercept is always fitted; the result is `[β₁, …, β_p, intercept]`,
/// so one feature gives `[slope, intercept]`.
///
/// A sample-count mismatch is reported as
/// [`Error::DimensionMismatch`](nc_core::Error::DimensionMismatch) even when
/// `x` is empty.
pub fn linear_regression(x: &[Vec<f64>], y: &[f64]) -> Result<Vec<f64>> {
    ensure!(
        x.len() == y.len(),
        DimensionMismatch,
        "{} feature rows but {} targets",
        x.len(),
        y.len()
    );
    regression::linear_regression(&Matrix::from_rows(x)?, &Vector::from_slice(y)).map(Vec::from)
}

//! Descriptive statistics over samples.
//!
//! Thin layer on top of [`Vector`]: the moments delegate to the vector
//! operations, so the empty-input and sample-size rules are shared.

use crate::vector::Vector;
use nc_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

/// Arithmetic mean. Fails with [`Error::EmptyInput`] on an empty sample.
pub fn mean(data: &Vector) -> Result<Real> {
    data.mean()
}

/// Median of the sample.
///
/// Sorts a copy using IEEE total ordering; for an even count the two middle
/// values are averaged.
pub fn median(data: &Vector) -> Result<Real> {
    ensure!(!data.is_empty(), EmptyInput, "median of an empty sample");
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok(0.5 * (sorted[mid - 1] + sorted[mid]))
    } else {
        Ok(sorted[mid])
    }
}

/// Variance with divisor `n` (`population`) or `n − 1`.
pub fn variance(data: &Vector, population: bool) -> Result<Real> {
    data.variance(population)
}

/// Square root of [`variance`].
pub fn std_dev(data: &Vector, population: bool) -> Result<Real> {
    data.std_dev(population)
}

/// Sample covariance `Σ (xᵢ − x̄)(yᵢ − ȳ) / (n − 1)`.
pub fn covariance(x: &Vector, y: &Vector) -> Result<Real> {
    ensure!(
        x.len() == y.len(),
        DimensionMismatch,
        "covariance of samples with lengths {} and {}",
        x.len(),
        y.len()
    );
    ensure!(!x.is_empty(), EmptyInput, "covariance of empty samples");
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            required: 2,
            found: x.len(),
        });
    }
    let mx = x.mean()?;
    let my = y.mean()?;
    let sxy: Real = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mx) * (b - my))
        .sum();
    Ok(sxy / (x.len() - 1) as Real)
}

/// Pearson correlation coefficient, clamped to `[-1, 1]`.
///
/// Fails with [`Error::DivisionByZero`] when either sample is constant.
pub fn correlation(x: &Vector, y: &Vector) -> Result<Real> {
    let cov = covariance(x, y)?;
    let sx = x.std_dev(false)?;
    let sy = y.std_dev(false)?;
    ensure!(
        sx != 0.0 && sy != 0.0,
        DivisionByZero,
        "correlation undefined for a constant sample"
    );
    Ok((cov / (sx * sy)).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(data: &[Real]) -> Vector {
        Vector::from_slice(data)
    }

    #[test]
    fn basic_statistics() {
        let s = v(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_abs_diff_eq!(mean(&s).unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(variance(&s, false).unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(variance(&s, true).unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(std_dev(&s, false).unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn median_odd_even_unsorted() {
        assert_eq!(median(&v(&[3.0, 1.0, 2.0])).unwrap(), 2.0);
        assert_eq!(median(&v(&[4.0, 1.0, 3.0, 2.0])).unwrap(), 2.5);
        assert_eq!(median(&v(&[-7.0])).unwrap(), -7.0);
        assert!(matches!(median(&Vector::zeros(0)), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn sample_size_errors() {
        let empty = Vector::zeros(0);
        assert!(matches!(mean(&empty), Err(Error::EmptyInput(_))));
        assert!(matches!(
            variance(&v(&[1.0]), false),
            Err(Error::InsufficientData { required: 2, found: 1 })
        ));
        assert_eq!(variance(&v(&[1.0]), true).unwrap(), 0.0);
    }

    #[test]
    fn covariance_and_correlation() {
        let x = v(&[1.0, 2.0, 3.0, 4.0]);
        let y = v(&[2.0, 4.0, 6.0, 8.0]);
        assert_abs_diff_eq!(covariance(&x, &y).unwrap(), 10.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
        let z = v(&[4.0, 3.0, 2.0, 1.0]);
        assert_abs_diff_eq!(correlation(&x, &z).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn covariance_errors() {
        let x = v(&[1.0, 2.0]);
        assert!(matches!(
            covariance(&x, &v(&[1.0])),
            Err(Error::DimensionMismatch(_))
        ));
        assert!(matches!(
            covariance(&Vector::zeros(0), &Vector::zeros(0)),
            Err(Error::EmptyInput(_))
        ));
        assert!(matches!(
            covariance(&v(&[1.0]), &v(&[2.0])),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            correlation(&x, &v(&[5.0, 5.0])),
            Err(Error::DivisionByZero(_))
        ));
    }
}

//! Ordinary least-squares linear regression.
//!
//! Fits `y ≈ X·β + c` where `X` is an `n × p` design matrix of features and
//! `c` an intercept. The intercept column is always added implicitly, and the
//! coefficient vector is laid out as `[β₁, …, β_p, c]`: feature slopes in
//! column order, intercept last. A single feature therefore yields
//! `[slope, intercept]`.
//!
//! One feature uses the centred closed form `slope = Sxy / Sxx`. More
//! features solve the normal equations `(Aᵀ A) β = Aᵀ y` on the augmented
//! design `A = [X | 1]` by LU decomposition.

use crate::matrix::Matrix;
use crate::vector::Vector;
use nalgebra::DMatrix;
use nc_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

/// A fitted linear model.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// `[β₁, …, β_p, intercept]`.
    coefficients: Vector,
    /// Residuals `y − ŷ`.
    residuals: Vector,
    r_squared: Real,
}

impl LinearRegression {
    /// Fit the model on features `x` (`n × p`) and targets `y` (length `n`).
    ///
    /// Fails with [`Error::DimensionMismatch`] when `y.len() != x.rows()`
    /// and with [`Error::SingularMatrix`] when the features are collinear
    /// (including constant features, or fewer than `p + 1` observations).
    pub fn fit(x: &Matrix, y: &Vector) -> Result<Self> {
        ensure!(
            y.len() == x.rows(),
            DimensionMismatch,
            "design matrix has {} rows but target has {} values",
            x.rows(),
            y.len()
        );
        let coefficients = if x.cols() == 1 {
            fit_single(&x.column(0), y)?
        } else {
            log::trace!("regression on {} features via normal equations", x.cols());
            fit_normal_equations(x, y)?
        };

        let fitted = predict_with(&coefficients, x);
        let residuals: Vector = y
            .iter()
            .zip(fitted.iter())
            .map(|(obs, fit)| obs - fit)
            .collect();
        let r_squared = r_squared(y, &residuals);
        Ok(Self {
            coefficients,
            residuals,
            r_squared,
        })
    }

    /// `[β₁, …, β_p, intercept]`.
    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    /// Feature slopes `β₁ … β_p`.
    pub fn slopes(&self) -> &[Real] {
        let s = self.coefficients.as_slice();
        &s[..s.len() - 1]
    }

    /// The intercept term.
    pub fn intercept(&self) -> Real {
        self.coefficients[self.coefficients.len() - 1]
    }

    /// Residuals `y − ŷ` on the training data.
    pub fn residuals(&self) -> &Vector {
        &self.residuals
    }

    /// Coefficient of determination R².
    ///
    /// 1 for a constant target that is fitted exactly.
    pub fn r_squared(&self) -> Real {
        self.r_squared
    }

    /// Predict targets for new feature rows.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let p = self.coefficients.len() - 1;
        ensure!(
            x.cols() == p,
            DimensionMismatch,
            "model has {p} features, got a matrix with {} columns",
            x.cols()
        );
        Ok(predict_with(&self.coefficients, x))
    }
}

fn predict_with(coefficients: &Vector, x: &Matrix) -> Vector {
    let beta = coefficients.as_slice();
    let (slopes, intercept) = beta.split_at(beta.len() - 1);
    (0..x.rows())
        .map(|i| {
            slopes
                .iter()
                .enumerate()
                .fold(intercept[0], |acc, (j, b)| acc + b * x[(i, j)])
        })
        .collect()
}

fn fit_single(x: &Vector, y: &Vector) -> Result<Vector> {
    let n = x.len() as Real;
    let x_mean = x.mean()?;
    let y_mean = y.mean()?;
    let (sxx, sxy, sum_sq) = x.iter().zip(y.iter()).fold(
        (0.0, 0.0, 0.0),
        |(sxx, sxy, sum_sq), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean), sum_sq + xi * xi)
        },
    );
    ensure!(
        sxx > n * Real::EPSILON * sum_sq,
        SingularMatrix,
        "collinear data: feature has no spread (Sxx = {sxx:e})"
    );
    let slope = sxy / sxx;
    Ok(Vector::new(vec![slope, y_mean - slope * x_mean]))
}

fn fit_normal_equations(x: &Matrix, y: &Vector) -> Result<Vector> {
    let (n, p) = x.shape();
    ensure!(
        n > p,
        SingularMatrix,
        "collinear data: {n} observations cannot determine {p} slopes and an intercept"
    );
    let design = DMatrix::from_fn(n, p + 1, |i, j| if j < p { x[(i, j)] } else { 1.0 });
    let at = design.transpose();
    let ata = Matrix::try_from(&at * &design)?;
    let aty = Vector::from(&at * y.inner());
    ata.solve(&aty).map_err(|e| match e {
        Error::SingularMatrix(msg) => {
            Error::SingularMatrix(format!("collinear features: {msg}"))
        }
        other => other,
    })
}

fn r_squared(y: &Vector, residuals: &Vector) -> Real {
    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: Real = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_res: Real = residuals.iter().map(|r| r * r).sum();
    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}

/// Fit `y ≈ X·β + c` and return `[β₁, …, β_p, c]`.
pub fn linear_regression(x: &Matrix, y: &Vector) -> Result<Vector> {
    LinearRegression::fit(x, y).map(|m| m.coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn column(xs: &[Real]) -> Matrix {
        Matrix::from_row_slice(xs.len(), 1, xs).unwrap()
    }

    #[test]
    fn exact_line() {
        // y = 2x + 3
        let x = column(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = Vector::from_slice(&[5.0, 7.0, 9.0, 11.0, 13.0]);
        let c = linear_regression(&x, &y).unwrap();
        assert_eq!(c.len(), 2);
        assert_abs_diff_eq!(c[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c[1], 3.0, epsilon = 1e-12);

        let model = LinearRegression::fit(&x, &y).unwrap();
        assert_abs_diff_eq!(model.r_squared(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 3.0, epsilon = 1e-12);
        assert_eq!(model.slopes().len(), 1);
        let pred = model.predict(&column(&[10.0])).unwrap();
        assert_abs_diff_eq!(pred[0], 23.0, epsilon = 1e-10);
    }

    #[test]
    fn noisy_line() {
        // y ≈ 1 + 2x with small noise
        let xs: Vec<Real> = (0..100).map(|i| i as Real * 0.1).collect();
        let noise = [0.01, -0.02, 0.015, -0.005, 0.03, -0.01, 0.02, -0.03, 0.005, 0.01];
        let ys: Vec<Real> = xs
            .iter()
            .enumerate()
            .map(|(i, &xi)| 1.0 + 2.0 * xi + noise[i % noise.len()])
            .collect();
        let model = LinearRegression::fit(&column(&xs), &Vector::new(ys)).unwrap();
        assert!((model.intercept() - 1.0).abs() < 0.1);
        assert!((model.slopes()[0] - 2.0).abs() < 0.01);
        assert!(model.r_squared() > 0.99 && model.r_squared() < 1.0);
    }

    #[test]
    fn two_features() {
        // y = 1.5 x1 - 2 x2 + 0.5
        let rows = vec![
            vec![1.0, 2.0],
            vec![2.0, 1.0],
            vec![3.0, 4.0],
            vec![4.0, 3.0],
            vec![5.0, 6.0],
            vec![6.0, 5.0],
        ];
        let x = Matrix::from_rows(&rows).unwrap();
        let y: Vector = rows.iter().map(|r| 1.5 * r[0] - 2.0 * r[1] + 0.5).collect();
        let model = LinearRegression::fit(&x, &y).unwrap();
        let c = model.coefficients();
        assert_abs_diff_eq!(c[0], 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(c[1], -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c[2], 0.5, epsilon = 1e-9);
        assert!(model.residuals().iter().all(|r| r.abs() < 1e-9));
        assert!(matches!(
            model.predict(&column(&[1.0])),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn collinear_features_are_singular() {
        let x = Matrix::from_rows(&[
            vec![1.0, 2.0],
            vec![2.0, 4.0],
            vec![3.0, 6.0],
            vec![4.0, 8.0],
            vec![5.0, 10.0],
        ])
        .unwrap();
        let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(matches!(
            linear_regression(&x, &y),
            Err(Error::SingularMatrix(_))
        ));
    }

    #[test]
    fn constant_feature_is_singular() {
        let x = column(&[3.0, 3.0, 3.0]);
        let y = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            linear_regression(&x, &y),
            Err(Error::SingularMatrix(_))
        ));
        assert!(matches!(
            linear_regression(&column(&[1.0]), &Vector::from_slice(&[1.0])),
            Err(Error::SingularMatrix(_))
        ));
    }

    #[test]
    fn too_few_observations_for_features() {
        let x = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        let y = Vector::from_slice(&[1.0, 2.0]);
        assert!(matches!(
            linear_regression(&x, &y),
            Err(Error::SingularMatrix(_))
        ));
    }

    #[test]
    fn length_mismatch() {
        let x = column(&[1.0, 2.0, 3.0]);
        let y = Vector::from_slice(&[1.0, 2.0]);
        assert!(matches!(
            linear_regression(&x, &y),
            Err(Error::DimensionMismatch(_))
        ));
    }
}

//! LU decomposition with a scale-aware singularity test.
//!
//! Wraps nalgebra's partially pivoted `LU` and decides numerical singularity
//! with [`singular_tolerance`]: the factorisation is singular when its
//! smallest pivot satisfies `|uᵢᵢ| ≤ n · ε · max|aᵢⱼ|`. Exact-zero tests are
//! unreliable on floating point, and a fixed absolute threshold would
//! misjudge matrices whose entries are all very large or very small.

use crate::comparison::singular_tolerance;
use crate::matrix::Matrix;
use crate::vector::Vector;
use nalgebra::{Dyn, LU};
use nc_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

/// LU decomposition `P · A = L · U` of a square matrix.
pub struct LuDecomposition {
    lu: LU<Real, Dyn, Dyn>,
    n: usize,
    min_pivot: Real,
    tolerance: Real,
}

impl LuDecomposition {
    /// Factorise `m`.
    ///
    /// Fails with [`Error::NotSquare`] for a rectangular matrix. A singular
    /// matrix still factorises; check [`is_singular`](Self::is_singular).
    pub fn new(m: &Matrix) -> Result<Self> {
        if !m.is_square() {
            return Err(Error::NotSquare {
                rows: m.rows(),
                cols: m.cols(),
            });
        }
        let n = m.rows();
        let max_abs = m.inner().iter().fold(0.0, |acc: Real, x| acc.max(x.abs()));
        let lu = m.inner().clone().lu();
        let min_pivot = lu
            .u()
            .diagonal()
            .iter()
            .fold(Real::INFINITY, |acc, d| acc.min(d.abs()));
        Ok(Self {
            lu,
            n,
            min_pivot,
            tolerance: singular_tolerance(n, max_abs),
        })
    }

    /// Dimension of the factorised matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// `true` if some pivot is zero within tolerance.
    pub fn is_singular(&self) -> bool {
        self.min_pivot <= self.tolerance
    }

    /// Smallest absolute pivot on the diagonal of `U`.
    pub fn min_pivot(&self) -> Real {
        self.min_pivot
    }

    /// Determinant `±Π uᵢᵢ`.
    ///
    /// Returned even when the matrix is numerically singular, in which case
    /// it is close to zero.
    pub fn determinant(&self) -> Real {
        self.lu.determinant()
    }

    /// Lower-triangular factor with unit diagonal.
    pub fn l(&self) -> Matrix {
        Matrix::from_inner(self.lu.l())
    }

    /// Upper-triangular factor.
    pub fn u(&self) -> Matrix {
        Matrix::from_inner(self.lu.u())
    }

    fn require_regular(&self) -> Result<()> {
        ensure!(
            !self.is_singular(),
            SingularMatrix,
            "smallest pivot {:e} is within tolerance {:e}",
            self.min_pivot,
            self.tolerance
        );
        Ok(())
    }

    /// Solve `A · x = b`.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        ensure!(
            b.len() == self.n,
            DimensionMismatch,
            "right-hand side has length {}, expected {}",
            b.len(),
            self.n
        );
        self.require_regular()?;
        self.lu
            .solve(b.inner())
            .map(Vector::from)
            .ok_or_else(|| Error::SingularMatrix("zero pivot during substitution".into()))
    }

    /// Inverse `A⁻¹`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.require_regular()?;
        self.lu
            .try_inverse()
            .map(Matrix::from_inner)
            .ok_or_else(|| Error::SingularMatrix("zero pivot during inversion".into()))
    }
}

/// Convenience wrapper returning `(L, U)` without the permutation.
pub fn lu_decomposition(m: &Matrix) -> Result<(Matrix, Matrix)> {
    let lu = LuDecomposition::new(m)?;
    Ok((lu.l(), lu.u()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::DMatrix;

    /// `P⁻¹ · L · U`
    fn reconstruct(lu: &LuDecomposition) -> DMatrix<Real> {
        let mut product = lu.lu.l() * lu.lu.u();
        lu.lu.p().inv_permute_rows(&mut product);
        product
    }

    fn m(rows: &[Vec<Real>]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn factors_reconstruct_input() {
        let a = m(&[
            vec![2.0, 1.0, 1.0],
            vec![4.0, -6.0, 0.0],
            vec![-2.0, 7.0, 2.0],
        ]);
        let lu = LuDecomposition::new(&a).unwrap();
        let back = reconstruct(&lu);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(back[(i, j)], a[(i, j)], epsilon = 1e-12);
            }
        }
        assert_abs_diff_eq!(lu.determinant(), -16.0, epsilon = 1e-12);
        let (l, u) = lu_decomposition(&a).unwrap();
        assert_eq!(l[(0, 0)], 1.0);
        assert_eq!(u[(2, 0)], 0.0);
    }

    #[test]
    fn solve_linear_system() {
        let a = m(&[vec![3.0, 2.0], vec![1.0, 2.0]]);
        let b = Vector::from_slice(&[5.0, 5.0]);
        let x = LuDecomposition::new(&a).unwrap().solve(&b).unwrap();
        assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn singular_detection_is_scale_invariant() {
        for scale in [1e-150, 1.0, 1e150] {
            let a = m(&[vec![1.0, 2.0], vec![2.0, 4.0]]).scale(scale);
            let lu = LuDecomposition::new(&a).unwrap();
            assert!(lu.is_singular(), "scale {scale}");
            assert!(matches!(lu.inverse(), Err(Error::SingularMatrix(_))));

            let b = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]).scale(scale);
            assert!(!LuDecomposition::new(&b).unwrap().is_singular(), "scale {scale}");
        }
    }

    #[test]
    fn nearly_singular_three_by_three() {
        let a = m(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let lu = LuDecomposition::new(&a).unwrap();
        assert!(lu.is_singular());
        assert!(lu.determinant().abs() < 1e-12);
    }

    #[test]
    fn zero_matrix_is_singular() {
        let z = Matrix::zeros(3, 3).unwrap();
        assert!(LuDecomposition::new(&z).unwrap().is_singular());
    }

    #[test]
    fn rejects_rectangular_and_mismatched_rhs() {
        let a = Matrix::ones(2, 3).unwrap();
        assert_eq!(
            LuDecomposition::new(&a).err(),
            Some(Error::NotSquare { rows: 2, cols: 3 })
        );
        let lu = LuDecomposition::new(&Matrix::identity(2).unwrap()).unwrap();
        assert!(matches!(
            lu.solve(&Vector::zeros(3)),
            Err(Error::DimensionMismatch(_))
        ));
    }
}

//! `Matrix` — a dense, rectangular, row-indexed matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`. Every public constructor
//! validates its shape, so a `Matrix` always has at least one row and one
//! column. Shape-dependent operations return [`Result`] instead of panicking
//! on mismatched operands; there are deliberately no `Add`/`Sub`/`Mul`
//! operator impls between two matrices.

use crate::matrix_utilities::LuDecomposition;
use crate::vector::Vector;
use nalgebra::DMatrix;
use nc_core::{
    ensure,
    errors::{Error, Result},
    fail,
    Real,
};
use std::ops::{Index, Mul, Neg};

/// A dynamically-sized 2D matrix of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Build from a sequence of equal-length rows.
    ///
    /// Fails with [`Error::InvalidDimension`] when there are no rows, the
    /// rows are empty, or the rows have different lengths.
    pub fn from_rows(rows: &[Vec<Real>]) -> Result<Self> {
        ensure!(!rows.is_empty(), InvalidDimension, "matrix needs at least one row");
        let cols = rows[0].len();
        ensure!(cols > 0, InvalidDimension, "matrix needs at least one column");
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            fail!(
                InvalidDimension,
                "row {i} has {} entries, expected {cols}",
                row.len()
            );
        }
        Ok(Self(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j])))
    }

    /// Build a `rows × cols` matrix from row-major data.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[Real]) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        ensure!(
            data.len() == rows * cols,
            InvalidDimension,
            "{} values cannot fill a {rows}x{cols} matrix",
            data.len()
        );
        Ok(Self(DMatrix::from_row_slice(rows, cols, data)))
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        Self::check_shape(n, n)?;
        Ok(Self(DMatrix::identity(n, n)))
    }

    /// `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_element(rows, cols, 0.0)
    }

    /// `rows × cols` matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::from_element(rows, cols, 1.0)
    }

    /// `rows × cols` matrix with every entry equal to `value`.
    pub fn from_element(rows: usize, cols: usize, value: Real) -> Result<Self> {
        Self::check_shape(rows, cols)?;
        Ok(Self(DMatrix::from_element(rows, cols, value)))
    }

    fn check_shape(rows: usize, cols: usize) -> Result<()> {
        ensure!(
            rows > 0 && cols > 0,
            InvalidDimension,
            "matrix dimensions must be positive, got {rows}x{cols}"
        );
        Ok(())
    }

    /// Wrap a `DMatrix` already known to be non-empty.
    pub(crate) fn from_inner(m: DMatrix<Real>) -> Self {
        debug_assert!(m.nrows() > 0 && m.ncols() > 0);
        Self(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Return `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.0.nrows() == self.0.ncols()
    }

    /// Entry at `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<Real> {
        self.0.get((i, j)).copied()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }

    /// Consume and return the inner `DMatrix`.
    pub fn into_inner(self) -> DMatrix<Real> {
        self.0
    }

    /// Copy out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<Real>> {
        self.0
            .row_iter()
            .map(|r| r.iter().copied().collect())
            .collect()
    }

    /// Row `i` as a `Vector`. Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> Vector {
        self.0.row(i).iter().copied().collect()
    }

    /// Column `j` as a `Vector`. Panics if `j` is out of range.
    pub fn column(&self, j: usize) -> Vector {
        self.0.column(j).iter().copied().collect()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    fn require_same_shape(&self, other: &Matrix, op: &str) -> Result<()> {
        ensure!(
            self.shape() == other.shape(),
            DimensionMismatch,
            "cannot {op} {}x{} and {}x{} matrices",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );
        Ok(())
    }

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Element-wise sum.
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        self.require_same_shape(other, "add")?;
        Ok(Self(&self.0 + &other.0))
    }

    /// Element-wise difference.
    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.require_same_shape(other, "subtract")?;
        Ok(Self(&self.0 - &other.0))
    }

    /// Matrix product `self · other`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix> {
        ensure!(
            self.cols() == other.rows(),
            DimensionMismatch,
            "cannot multiply {}x{} by {}x{}",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols()
        );
        Ok(Self(&self.0 * &other.0))
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        ensure!(
            self.cols() == v.len(),
            DimensionMismatch,
            "cannot multiply {}x{} matrix by vector of length {}",
            self.rows(),
            self.cols(),
            v.len()
        );
        Ok(Vector::from(&self.0 * v.inner()))
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Real) -> Self {
        Self(&self.0 * scalar)
    }

    /// Element-wise apply.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Result<Real> {
        self.require_square()?;
        Ok(self.0.trace())
    }

    /// Determinant.
    ///
    /// Closed-form cofactor expansion up to 3×3, LU with partial pivoting
    /// above that.
    pub fn determinant(&self) -> Result<Real> {
        self.require_square()?;
        let a = &self.0;
        let det = match self.rows() {
            1 => a[(0, 0)],
            2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
            3 => {
                a[(0, 0)] * (a[(1, 1)] * a[(2, 2)] - a[(1, 2)] * a[(2, 1)])
                    - a[(0, 1)] * (a[(1, 0)] * a[(2, 2)] - a[(1, 2)] * a[(2, 0)])
                    + a[(0, 2)] * (a[(1, 0)] * a[(2, 1)] - a[(1, 1)] * a[(2, 0)])
            }
            n => {
                log::trace!("determinant of {n}x{n} matrix via LU");
                LuDecomposition::new(self)?.determinant()
            }
        };
        Ok(det)
    }

    /// Inverse.
    ///
    /// Fails with [`Error::NotSquare`] or, when the LU factorisation has a
    /// pivot within tolerance of zero, [`Error::SingularMatrix`].
    pub fn inverse(&self) -> Result<Matrix> {
        LuDecomposition::new(self)?.inverse()
    }

    /// Solve `self · x = b`.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        LuDecomposition::new(self)?.solve(b)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<DMatrix<Real>> for Matrix {
    type Error = Error;
    fn try_from(m: DMatrix<Real>) -> Result<Self> {
        Self::check_shape(m.nrows(), m.ncols())?;
        Ok(Self(m))
    }
}

impl TryFrom<Vec<Vec<Real>>> for Matrix {
    type Error = Error;
    fn try_from(rows: Vec<Vec<Real>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl From<Matrix> for Vec<Vec<Real>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

// ── Indexing and scalar arithmetic ────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Real;
    fn index(&self, (i, j): (usize, usize)) -> &Real {
        &self.0[(i, j)]
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Real) -> Matrix {
        self.scale(rhs)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        Matrix(-&self.0)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.0.nrows() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..self.0.ncols() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.0[(i, j)])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m(rows: &[Vec<Real>]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn from_rows_validates_shape() {
        assert!(matches!(
            Matrix::from_rows(&[]),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            Matrix::from_rows(&[vec![]]),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]),
            Err(Error::InvalidDimension(_))
        ));
        let a = m(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a[(1, 0)], 4.0);
        assert_eq!(a.get(5, 5), None);
        assert_eq!(a.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn constructors() {
        let i = Matrix::identity(3).unwrap();
        assert_eq!(i[(0, 0)], 1.0);
        assert_eq!(i[(0, 1)], 0.0);
        assert_eq!(Matrix::ones(2, 3).unwrap().inner().sum(), 6.0);
        assert_eq!(Matrix::zeros(2, 2).unwrap().inner().sum(), 0.0);
        assert!(matches!(Matrix::identity(0), Err(Error::InvalidDimension(_))));
        assert!(matches!(Matrix::zeros(0, 3), Err(Error::InvalidDimension(_))));
        assert!(matches!(
            Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0]),
            Err(Error::InvalidDimension(_))
        ));
        assert!(Matrix::try_from(DMatrix::<Real>::zeros(0, 0)).is_err());
    }

    #[test]
    fn transpose() {
        let a = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn multiply() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a.checked_mul(&b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);

        let i = Matrix::identity(2).unwrap();
        assert_eq!(a.checked_mul(&i).unwrap(), a);
        assert_eq!(i.checked_mul(&a).unwrap(), a);

        let r = Matrix::ones(2, 3).unwrap();
        assert_eq!(a.checked_mul(&r).unwrap().shape(), (2, 3));
        assert!(matches!(r.checked_mul(&a), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn add_sub_scale() {
        let a = m(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(&[vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(a.checked_add(&b).unwrap()[(0, 0)], 6.0);
        assert_eq!(b.checked_sub(&a).unwrap()[(1, 1)], 4.0);
        assert_eq!(a.scale(2.0)[(1, 1)], 8.0);
        assert_eq!((&a * -1.0), -&a);
        let c = Matrix::ones(2, 3).unwrap();
        assert!(matches!(a.checked_add(&c), Err(Error::DimensionMismatch(_))));
        assert!(matches!(a.checked_sub(&c), Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn determinant_small_and_large() {
        assert_eq!(m(&[vec![7.0]]).determinant().unwrap(), 7.0);
        assert_abs_diff_eq!(
            m(&[vec![1.0, 2.0], vec![3.0, 4.0]]).determinant().unwrap(),
            -2.0,
            epsilon = 1e-12
        );
        let a3 = m(&[
            vec![6.0, 1.0, 1.0],
            vec![4.0, -2.0, 5.0],
            vec![2.0, 8.0, 7.0],
        ]);
        assert_abs_diff_eq!(a3.determinant().unwrap(), -306.0, epsilon = 1e-10);

        let a4 = m(&[
            vec![1.0, 0.0, 2.0, -1.0],
            vec![3.0, 0.0, 0.0, 5.0],
            vec![2.0, 1.0, 4.0, -3.0],
            vec![1.0, 0.0, 5.0, 0.0],
        ]);
        assert_abs_diff_eq!(a4.determinant().unwrap(), 30.0, epsilon = 1e-10);
        assert_abs_diff_eq!(
            Matrix::identity(6).unwrap().determinant().unwrap(),
            1.0,
            epsilon = 1e-15
        );
        assert_eq!(
            Matrix::ones(2, 3).unwrap().determinant(),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn inverse_round_trip() {
        let a = m(&[
            vec![4.0, 7.0, 2.0, 0.0],
            vec![3.0, 6.0, 1.0, 1.0],
            vec![2.0, 5.0, 3.0, 2.0],
            vec![1.0, 0.0, 1.0, 5.0],
        ]);
        let prod = a.checked_mul(&a.inverse().unwrap()).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(prod[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn singular_matrix() {
        let a = m(&[vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_abs_diff_eq!(a.determinant().unwrap(), 0.0, epsilon = 1e-12);
        assert!(matches!(a.inverse(), Err(Error::SingularMatrix(_))));
        assert!(matches!(
            Matrix::ones(2, 3).unwrap().inverse(),
            Err(Error::NotSquare { .. })
        ));
    }

    #[test]
    fn trace_and_products_with_vectors() {
        let a = Matrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 9.0])
            .unwrap();
        assert_eq!(a.trace().unwrap(), 15.0);
        assert!(matches!(
            Matrix::ones(1, 2).unwrap().trace(),
            Err(Error::NotSquare { .. })
        ));

        let b = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let v = b.mul_vector(&Vector::from_slice(&[1.0, 1.0, 1.0])).unwrap();
        assert_eq!(v.to_vec(), vec![6.0, 15.0]);
        assert!(b.mul_vector(&Vector::zeros(2)).is_err());
        assert_eq!(b.row(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(b.column(2).to_vec(), vec![3.0, 6.0]);
    }

    #[test]
    fn solve_system() {
        let a = m(&[vec![2.0, 1.0], vec![1.0, 3.0]]);
        let x = a.solve(&Vector::from_slice(&[3.0, 5.0])).unwrap();
        assert_abs_diff_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        let a = m(&[vec![1.0, 2.5], vec![-3.0, 4.0]]);
        assert_eq!(a.to_string(), "[1, 2.5]\n[-3, 4]");
    }
}

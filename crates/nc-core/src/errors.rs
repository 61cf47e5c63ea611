//! Error types for numcore.
//!
//! Every signaled failure in the workspace is one variant of [`Error`].
//! Domain errors of the scalar transcendental functions are *not* represented
//! here: they propagate as NaN/∞ following IEEE-754.
//!
//! The [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros build the
//! message-carrying variants from a format string.

use thiserror::Error;

/// The top-level error type used throughout numcore.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Operand sizes are incompatible.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A square-only operation was given a non-square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// The matrix is numerically singular.
    #[error("singular matrix: {0}")]
    SingularMatrix(String),

    /// The operation needs at least one element.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A sample statistic was requested with too few observations.
    #[error("insufficient data: need at least {required} observations, got {found}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        found: usize,
    },

    /// A constructor was given an out-of-domain size.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// An argument lies outside the operation's domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An explicit zero denominator.
    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

/// Payload-free discriminant of [`Error`], for hosts that only branch on the
/// failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::DimensionMismatch`].
    DimensionMismatch,
    /// See [`Error::NotSquare`].
    NotSquare,
    /// See [`Error::SingularMatrix`].
    SingularMatrix,
    /// See [`Error::EmptyInput`].
    EmptyInput,
    /// See [`Error::InsufficientData`].
    InsufficientData,
    /// See [`Error::InvalidDimension`].
    InvalidDimension,
    /// See [`Error::InvalidParameter`].
    InvalidParameter,
    /// See [`Error::DivisionByZero`].
    DivisionByZero,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DimensionMismatch(_) => ErrorKind::DimensionMismatch,
            Error::NotSquare { .. } => ErrorKind::NotSquare,
            Error::SingularMatrix(_) => ErrorKind::SingularMatrix,
            Error::EmptyInput(_) => ErrorKind::EmptyInput,
            Error::InsufficientData { .. } => ErrorKind::InsufficientData,
            Error::InvalidDimension(_) => ErrorKind::InvalidDimension,
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::DivisionByZero(_) => ErrorKind::DivisionByZero,
        }
    }
}

/// Shorthand `Result` type used throughout numcore.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with a message-carrying [`Error`] variant if `$cond` is false.
///
/// # Example
/// ```
/// use nc_core::{ensure, errors::{Error, Result}};
/// fn positive(x: f64) -> Result<f64> {
///     ensure!(x > 0.0, InvalidParameter, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}

/// Return a message-carrying [`Error`] variant immediately.
///
/// # Example
/// ```
/// use nc_core::{fail, errors::{Error, Result}};
/// fn always_err() -> Result<()> {
///     fail!(EmptyInput, "nothing to do");
/// }
/// assert_eq!(always_err(), Err(Error::EmptyInput("nothing to do".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}

//! Error type shared by the matrix engine and the analysis crates.

use core::fmt;

/// Result alias for matrix operations.
pub type Result<T> = core::result::Result<T, MatrixError>;

/// Failures reported by GF(2) matrix operations and searches.
///
/// Every variant describes a deterministic input-validation failure or an
/// exhausted attempt budget; none of them is retried internally.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatrixError {
    /// Operand shapes are incompatible for the named operation.
    DimensionMismatch {
        /// Operation that rejected its operands.
        op: &'static str,
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },
    /// The operation needs a square matrix.
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },
    /// Elimination found a column without a pivot.
    SingularMatrix,
    /// A row does not match the matrix width.
    InvalidRowLength {
        /// Width the row must have.
        expected: usize,
        /// Width the row actually has.
        actual: usize,
    },
    /// A matrix needs at least one row and one column.
    EmptyMatrix,
    /// Sampling probability outside `[0, 1]`.
    InvalidDensity(f64),
    /// A sampling or search loop used up its attempt budget.
    SearchExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
    /// `2^size - 1` does not fit the order type.
    UnsupportedSize {
        /// Requested matrix dimension.
        size: usize,
    },
    /// Malformed binary encoding.
    Encoding(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { op, left, right } => write!(
                f,
                "cannot {} a {}x{} matrix with a {}x{} matrix",
                op, left.0, left.1, right.0, right.1
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "operation needs a square matrix, got {}x{}", rows, cols)
            }
            Self::SingularMatrix => write!(f, "matrix is singular"),
            Self::InvalidRowLength { expected, actual } => write!(
                f,
                "row has {} columns but the matrix has {}",
                actual, expected
            ),
            Self::EmptyMatrix => write!(f, "matrix must have at least one row and column"),
            Self::InvalidDensity(density) => {
                write!(f, "density {} is not a probability", density)
            }
            Self::SearchExhausted { attempts } => {
                write!(f, "search gave up after {} attempts", attempts)
            }
            Self::UnsupportedSize { size } => {
                write!(f, "maximum order of a {}x{} matrix does not fit in u64", size, size)
            }
            Self::Encoding(msg) => write!(f, "invalid matrix encoding: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<bincode::Error> for MatrixError {
    fn from(err: bincode::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_shapes() {
        let err = MatrixError::DimensionMismatch {
            op: "add",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(err.to_string(), "cannot add a 2x3 matrix with a 3x2 matrix");
    }

    #[test]
    fn display_row_length() {
        let err = MatrixError::InvalidRowLength {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "row has 2 columns but the matrix has 3");
    }
}

use std::fmt;

use crate::core::linalg::SCHUR_MAX_ITER;
use crate::core::session::MAX_SIZE;

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    SizeOutOfRange(usize),
    SizeNotSet,
    NotGenerated,
    NoProduct,
    DimensionMismatch(usize, usize),
    Singular,
    NonConvergent,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::SizeOutOfRange(n) => {
                write!(f, "matrix size must be in [1, {}], got {}", MAX_SIZE, n)
            }
            SessionError::SizeNotSet => write!(f, "no matrix size set; choose a size first"),
            SessionError::NotGenerated => {
                write!(f, "matrices A and B have not been generated yet")
            }
            SessionError::NoProduct => {
                write!(f, "no product available; run a multiplication first")
            }
            SessionError::DimensionMismatch(cols, rows) => write!(
                f,
                "matrix dimensions are incompatible for multiplication ({} columns vs {} rows)",
                cols, rows
            ),
            SessionError::Singular => {
                write!(f, "matrix is singular or ill-conditioned; no inverse exists")
            }
            SessionError::NonConvergent => write!(
                f,
                "eigenvalue decomposition did not converge within {} iterations; the matrix may be defective",
                SCHUR_MAX_ITER
            ),
        }
    }
}

impl std::error::Error for SessionError {}

//! Thin wrappers over the nalgebra backend. Every numerically significant
//! routine lives in the library; these translate its `Option`-shaped
//! failures into session errors.

use nalgebra::linalg::Schur;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::core::error::SessionError;

/// Iteration cap handed to the Schur decomposition; past this the matrix is
/// reported as defective instead of spinning forever.
pub const SCHUR_MAX_ITER: usize = 10_000;
const SCHUR_EPS: f64 = 1.0e-12;

pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, SessionError> {
    if a.ncols() != b.nrows() {
        return Err(SessionError::DimensionMismatch(a.ncols(), b.nrows()));
    }
    Ok(a * b)
}

pub fn invert(m: &DMatrix<f64>) -> Result<DMatrix<f64>, SessionError> {
    m.clone().try_inverse().ok_or(SessionError::Singular)
}

/// Complex eigenvalues via the real Schur form.
pub fn eigenvalues(m: &DMatrix<f64>) -> Result<DVector<Complex64>, SessionError> {
    let schur = Schur::try_new(m.clone(), SCHUR_EPS, SCHUR_MAX_ITER)
        .ok_or(SessionError::NonConvergent)?;
    Ok(schur.complex_eigenvalues())
}

/// Same dimensions, same diagonal, zero everywhere else.
pub fn diagonal_only(m: &DMatrix<f64>) -> DMatrix<f64> {
    DMatrix::from_diagonal(&m.diagonal())
}

//! Session state machine: Empty → SizeSet → Generated → Multiplied →
//! (Inverted | Diagonalized), with `set_size` resetting from any stage.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::core::error::SessionError;
use crate::core::{linalg, matgen};

/// Largest accepted matrix edge length.
pub const MAX_SIZE: usize = 500;
/// Above this edge length the console asks before starting an EVD.
pub const EIG_CONFIRM_SIZE: usize = 50;

/// At most three matrices live at a time: the generated pair and the
/// current result. Presence of `result` always agrees with `multiplied`.
#[derive(Debug, Default)]
pub struct Session {
    size: Option<usize>,
    a: Option<DMatrix<f64>>,
    b: Option<DMatrix<f64>>,
    result: Option<DMatrix<f64>>,
    multiplied: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn generated(&self) -> bool {
        self.a.is_some() && self.b.is_some()
    }

    pub fn multiplied(&self) -> bool {
        self.multiplied
    }

    pub fn matrix_a(&self) -> Option<&DMatrix<f64>> {
        self.a.as_ref()
    }

    pub fn matrix_b(&self) -> Option<&DMatrix<f64>> {
        self.b.as_ref()
    }

    pub fn result(&self) -> Option<&DMatrix<f64>> {
        self.result.as_ref()
    }

    /// Accepts an edge length in [1, `MAX_SIZE`]. Success invalidates every
    /// matrix and flag; failure leaves the session untouched.
    pub fn set_size(&mut self, n: usize) -> Result<(), SessionError> {
        if n == 0 || n > MAX_SIZE {
            return Err(SessionError::SizeOutOfRange(n));
        }
        self.size = Some(n);
        self.a = None;
        self.b = None;
        self.result = None;
        self.multiplied = false;
        Ok(())
    }

    /// Fills A and B with fresh random entries and drops any prior result.
    pub fn generate(&mut self) -> Result<(), SessionError> {
        let n = self.size.ok_or(SessionError::SizeNotSet)?;
        self.a = Some(matgen::random_square(n));
        self.b = Some(matgen::random_square(n));
        self.result = None;
        self.multiplied = false;
        Ok(())
    }

    /// result = A × B.
    pub fn multiply(&mut self) -> Result<&DMatrix<f64>, SessionError> {
        let (a, b) = match (&self.a, &self.b) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(SessionError::NotGenerated),
        };
        let product = linalg::multiply(a, b)?;
        self.multiplied = true;
        Ok(self.result.insert(product))
    }

    /// Replaces the result with its inverse.
    pub fn invert(&mut self) -> Result<&DMatrix<f64>, SessionError> {
        let current = self.result.as_ref().ok_or(SessionError::NoProduct)?;
        let inverse = linalg::invert(current)?;
        Ok(self.result.insert(inverse))
    }

    /// Determinant of the result. No state mutation.
    pub fn determinant(&self) -> Result<f64, SessionError> {
        let current = self.result.as_ref().ok_or(SessionError::NoProduct)?;
        Ok(current.determinant())
    }

    /// Complex eigenvalues of the result. No state mutation.
    pub fn eigenvalues(&self) -> Result<DVector<Complex64>, SessionError> {
        let current = self.result.as_ref().ok_or(SessionError::NoProduct)?;
        linalg::eigenvalues(current)
    }

    /// Replaces the result with its diagonal, off-diagonal entries zeroed.
    pub fn diagonalize(&mut self) -> Result<&DMatrix<f64>, SessionError> {
        let current = self.result.as_ref().ok_or(SessionError::NoProduct)?;
        let diagonal = linalg::diagonal_only(current);
        self.multiplied = true;
        Ok(self.result.insert(diagonal))
    }
}

use nalgebra::DMatrix;
use rand::distributions::{Distribution, Uniform};

pub const ENTRY_MIN: f64 = -10.0;
pub const ENTRY_MAX: f64 = 10.0;

/// Square matrix with independent uniform entries in [-10, 10], rounded to
/// two decimal places to match the on-screen entry format.
pub fn random_square(n: usize) -> DMatrix<f64> {
    let mut rng = rand::thread_rng();
    let entries = Uniform::new_inclusive(ENTRY_MIN, ENTRY_MAX);
    DMatrix::from_fn(n, n, |_, _| round2(entries.sample(&mut rng)))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

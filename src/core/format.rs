use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

/// Edge length of the preview corner.
pub const PREVIEW_DIM: usize = 5;
/// How many eigenvalues the console lists.
pub const EIG_DISPLAY_LIMIT: usize = 10;
/// Imaginary parts below this are treated as real-axis noise.
pub const IMAG_TOL: f64 = 1e-10;

/// Top-left min(5, n) × min(5, n) block, entries to two decimals,
/// right-aligned.
pub fn preview_block(m: &DMatrix<f64>) -> String {
    let k = PREVIEW_DIM.min(m.nrows());
    let mut out = String::new();
    for i in 0..k {
        for j in 0..k {
            out.push_str(&format!("{:>10.2}", m[(i, j)]));
        }
        out.push('\n');
    }
    out
}

/// One line per eigenvalue, first 10 by index. The imaginary component is
/// shown only when its magnitude clears `IMAG_TOL`.
pub fn eigenvalue_lines(vals: &DVector<Complex64>) -> Vec<String> {
    vals.iter()
        .take(EIG_DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, z)| {
            if z.im.abs() > IMAG_TOL {
                let sign = if z.im < 0.0 { '-' } else { '+' };
                format!("λ{:<2} = {:>14.6} {} {:.6}i", i + 1, z.re, sign, z.im.abs())
            } else {
                format!("λ{:<2} = {:>14.6}", i + 1, z.re)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_clamps_to_matrix_size() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.5, -3.0, 4.125]);
        let text = preview_block(&m);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("1.00"));
        assert!(text.contains("4.13"));
        assert!(!text.contains("4.125"));
    }

    #[test]
    fn preview_of_large_matrix_is_five_rows() {
        let m = DMatrix::from_element(9, 9, 0.5);
        assert_eq!(preview_block(&m).lines().count(), 5);
    }

    #[test]
    fn real_eigenvalues_hide_the_imaginary_part() {
        let vals = DVector::from_vec(vec![Complex64::new(2.0, 1e-14)]);
        let lines = eigenvalue_lines(&vals);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains('i'));
    }

    #[test]
    fn complex_eigenvalues_show_signed_imaginary_part() {
        let vals = DVector::from_vec(vec![
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, -1.0),
        ]);
        let lines = eigenvalue_lines(&vals);
        assert!(lines[0].contains("+ 1.000000i"));
        assert!(lines[1].contains("- 1.000000i"));
    }

    #[test]
    fn listing_stops_at_ten() {
        let vals = DVector::from_element(16, Complex64::new(1.0, 0.0));
        assert_eq!(eigenvalue_lines(&vals).len(), 10);
    }
}

//! Text rendering.
//!
//! `Display` prints the magnitudes in dimension order, space separated and
//! bracketed: `[1 2 3]`, or `[]` for an empty vector.
//!
//! Without a precision flag each magnitude is printed in `%g` style with six
//! significant digits: trailing zeros trimmed, an exponent once the decimal
//! exponent is below -4 or at least 6, and `nan`/`inf`/`-inf` for non-finite
//! values (`[0.3 0.333333 1e+20 nan]`). A precision flag switches every
//! magnitude to fixed notation instead (`{:.2}` gives `[1.00 2.00 3.00]`).

use std::fmt;

use log::debug;

use crate::vector::Vector;

const SIGNIFICANT_DIGITS: usize = 6;

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Shortest `%g` rendering of `magnitude` with six significant digits.
fn general(magnitude: f64) -> String {
    if magnitude.is_nan() {
        return "nan".to_string();
    }
    if magnitude.is_infinite() {
        return if magnitude > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if magnitude == 0.0 {
        return if magnitude.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent after rounding to six significant digits picks the notation.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, magnitude);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, magnitude)).to_string()
    }
}

fn write_magnitude(f: &mut fmt::Formatter<'_>, magnitude: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, magnitude),
        None => f.write_str(&general(magnitude)),
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &magnitude) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_magnitude(f, magnitude)?;
        }
        f.write_str("]")
    }
}

/// Snapshot of a vector's state for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorInfo {
    pub dimension: usize,
    pub magnitudes: Vec<f64>,
    /// The memoized norm at the time of the snapshot; never computed for it.
    pub cached_norm: Option<f64>,
}

impl fmt::Display for VectorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension == 0 {
            return f.write_str("Null");
        }
        writeln!(f, "Number of dimensions: {}", self.dimension)?;
        f.write_str("Magnitudes:")?;
        for magnitude in &self.magnitudes {
            write!(f, " {}", general(*magnitude))?;
        }
        f.write_str("\n")?;
        match self.cached_norm {
            Some(norm) => write!(f, "Euclidean norm = {}", general(norm)),
            None => f.write_str("Euclidean norm = undefined"),
        }
    }
}

impl Vector {
    pub fn info(&self) -> VectorInfo {
        VectorInfo {
            dimension: self.dimension(),
            magnitudes: self.to_vec(),
            cached_norm: self.cached_norm(),
        }
    }

    /// Emits [`Vector::info`] at `debug` level.
    pub fn log_info(&self) {
        debug!("{}", self.info());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Vector::from([1.0, 2.0, 3.0]).to_string(), "[1 2 3]");
        assert_eq!(Vector::from([0.5, -2.25]).to_string(), "[0.5 -2.25]");
        assert_eq!(Vector::default().to_string(), "[0]");
    }

    #[test]
    fn test_display_six_significant_digits() {
        let v = Vector::from([0.1 + 0.2, 1.0 / 3.0]);
        assert_eq!(v.to_string(), "[0.3 0.333333]");
        assert_eq!(Vector::from([2.0 / 3.0, 123456.7]).to_string(), "[0.666667 123457]");
    }

    #[test]
    fn test_display_exponent_form() {
        assert_eq!(Vector::from([1e20]).to_string(), "[1e+20]");
        assert_eq!(Vector::from([1e6, 999999.0]).to_string(), "[1e+06 999999]");
        assert_eq!(Vector::from([0.0001, 0.00001234]).to_string(), "[0.0001 1.234e-05]");
        assert_eq!(Vector::from([-2.5e-300]).to_string(), "[-2.5e-300]");
    }

    #[test]
    fn test_display_non_finite() {
        let v = Vector::from([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(v.to_string(), "[nan inf -inf]");
        assert_eq!(Vector::from([-0.0]).to_string(), "[-0]");
    }

    #[test]
    fn test_display_unit_vector() {
        let v = Vector::from([1.0, 1.0, 1.0]);
        assert_eq!(v.unit_vector().to_string(), "[0.57735 0.57735 0.57735]");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Vector::with_dimension(0).to_string(), "[]");
        assert_eq!(Vector::empty().to_string(), "[]");
    }

    #[test]
    fn test_display_precision() {
        let v = Vector::from([1.0, 2.5]);
        assert_eq!(format!("{:.2}", v), "[1.00 2.50]");
    }

    #[test]
    fn test_info_before_and_after_norm() {
        let v = Vector::from([3.0, 4.0]);
        assert_eq!(
            v.info().to_string(),
            "Number of dimensions: 2\nMagnitudes: 3 4\nEuclidean norm = undefined"
        );
        v.euclidean_norm();
        assert_eq!(v.info().cached_norm, Some(5.0));
        assert!(v.info().to_string().ends_with("Euclidean norm = 5"));
    }

    #[test]
    fn test_info_uses_six_significant_digits() {
        let v = Vector::from([1.0, 1.0, 1.0]);
        v.euclidean_norm();
        assert_eq!(
            v.info().to_string(),
            "Number of dimensions: 3\nMagnitudes: 1 1 1\nEuclidean norm = 1.73205"
        );
    }

    #[test]
    fn test_info_does_not_compute_norm() {
        let v = Vector::from([1.0]);
        let _ = v.info();
        assert_eq!(v.cached_norm(), None);
    }

    #[test]
    fn test_info_of_moved_from_vector() {
        let mut a = Vector::from([1.0, 2.0]);
        let _b = a.take();
        assert_eq!(a.info().to_string(), "Null");
    }
}

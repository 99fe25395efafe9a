//! Special functions not covered by statrs
//!
//! statrs provides the log-gamma function (re-exported here for convenience)
//! but no Gauss hypergeometric function, which the Kabe density needs.

use crate::{Error, Result};

pub use statrs::function::gamma::ln_gamma;

const MAX_SERIES_TERMS: usize = 2000;
const SERIES_EPS: f64 = 1e-15;

/// Gauss hypergeometric function ₂F₁(a, b; c; z)
///
/// Evaluated by its power series, which converges for |z| < 1. For z < 0 the
/// Pfaff transformation
///
/// ```text
/// ₂F₁(a, b; c; z) = (1 - z)^(-b) ₂F₁(c - a, b; c; z / (z - 1))
/// ```
///
/// maps the argument into [0, 1), where the series converges quickly.
///
/// Returns `Error::Domain` for z ≥ 1 or when c is a non-positive integer
/// (poles of the series coefficients), and `Error::Convergence` if the series
/// has not settled after the term budget.
pub fn gauss_2f1(a: f64, b: f64, c: f64, z: f64) -> Result<f64> {
    if !z.is_finite() {
        return Err(Error::non_finite("hypergeometric argument"));
    }
    if z >= 1.0 {
        return Err(Error::Domain(format!(
            "2F1 series diverges for z = {z} >= 1"
        )));
    }
    if c <= 0.0 && c.fract() == 0.0 {
        return Err(Error::Domain(format!(
            "2F1 undefined for non-positive integer c = {c}"
        )));
    }

    if z < 0.0 {
        let factor = (1.0 - z).powf(-b);
        return Ok(factor * gauss_2f1(c - a, b, c, z / (z - 1.0))?);
    }

    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 0..MAX_SERIES_TERMS {
        let kf = k as f64;
        term *= (a + kf) * (b + kf) / ((c + kf) * (kf + 1.0)) * z;
        sum += term;
        if term.abs() < SERIES_EPS * sum.abs() {
            return Ok(sum);
        }
    }

    Err(Error::Convergence {
        iterations: MAX_SERIES_TERMS,
        context: format!("2F1({a}, {b}; {c}; {z}) series"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_2f1_special_cases() {
        // 2F1(a, b; c; 0) = 1
        assert_relative_eq!(gauss_2f1(1.5, 2.5, 3.5, 0.0).unwrap(), 1.0);

        // 2F1(1, 1; 2; z) = -ln(1 - z) / z
        let z = 0.5;
        assert_relative_eq!(
            gauss_2f1(1.0, 1.0, 2.0, z).unwrap(),
            -(1.0 - z).ln() / z,
            epsilon = 1e-12
        );

        // 2F1(a, b; b; z) = (1 - z)^(-a)
        let (a, z) = (2.0, 0.3);
        assert_relative_eq!(
            gauss_2f1(a, 4.0, 4.0, z).unwrap(),
            (1.0 - z).powf(-a),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_2f1_negative_argument() {
        // Pfaff transformation path, checked against the closed form
        // 2F1(1, 1; 2; z) = -ln(1 - z) / z for z < 0.
        let z = -0.7;
        assert_relative_eq!(
            gauss_2f1(1.0, 1.0, 2.0, z).unwrap(),
            -(1.0 - z).ln() / z,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_2f1_domain_errors() {
        assert!(gauss_2f1(1.0, 1.0, 2.0, 1.0).is_err());
        assert!(gauss_2f1(1.0, 1.0, 2.0, 1.5).is_err());
        assert!(gauss_2f1(1.0, 1.0, -3.0, 0.5).is_err());
        assert!(gauss_2f1(1.0, 1.0, 2.0, f64::NAN).is_err());
    }

    #[test]
    fn test_ln_gamma_reexport() {
        // ln Γ(5) = ln 24
        assert_relative_eq!(ln_gamma(5.0), 24.0_f64.ln(), epsilon = 1e-12);
    }
}

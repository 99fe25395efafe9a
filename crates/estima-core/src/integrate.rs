//! Adaptive quadrature
//!
//! Adaptive Simpson integration over a finite interval. Sufficient for the
//! density normalization and tail-probability integrals in this workspace;
//! the integrands are smooth and unimodal.

use crate::{Error, Result};

/// Integrate `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// The interval is bisected until the local Simpson estimate is within the
/// (propagated) tolerance; `max_depth` bounds the recursion, after which the
/// local estimate is accepted as-is.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tol: f64, max_depth: usize) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::Domain(format!(
            "integration bounds must be finite, got [{a}, {b}]"
        )));
    }
    if tol <= 0.0 {
        return Err(Error::Configuration(format!(
            "tolerance must be positive, got {tol}"
        )));
    }
    if a == b {
        return Ok(0.0);
    }
    if a > b {
        return Ok(-adaptive_simpson(f, b, a, tol, max_depth)?);
    }

    let fa = f(a)?;
    let fb = f(b)?;
    let m = 0.5 * (a + b);
    let fm = f(m)?;
    let whole = simpson(fa, fm, fb, a, b);
    simpson_recurse(&f, a, b, fa, fm, fb, whole, tol, max_depth)
}

fn simpson(fa: f64, fm: f64, fb: f64, a: f64, b: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn simpson_recurse<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: usize,
) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm)?;
    let frm = f(rm)?;
    let left = simpson(fa, flm, fm, a, m);
    let right = simpson(fm, frm, fb, m, b);
    let delta = left + right - whole;

    // Richardson extrapolation once the halved estimates agree
    if depth == 0 || delta.abs() <= 15.0 * tol {
        return Ok(left + right + delta / 15.0);
    }

    let half_tol = 0.5 * tol;
    Ok(simpson_recurse(f, a, m, fa, flm, fm, left, half_tol, depth - 1)?
        + simpson_recurse(f, m, b, fm, frm, fb, right, half_tol, depth - 1)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polynomial_exact() {
        // Simpson is exact for cubics
        let result = adaptive_simpson(|x| Ok(x * x * x), 0.0, 2.0, 1e-12, 30).unwrap();
        assert_abs_diff_eq!(result, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_gaussian_mass() {
        use std::f64::consts::PI;
        let pdf = |x: f64| Ok((-0.5 * x * x).exp() / (2.0 * PI).sqrt());
        let result = adaptive_simpson(pdf, -8.0, 8.0, 1e-10, 40).unwrap();
        assert_abs_diff_eq!(result, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_reversed_bounds_negate() {
        let forward = adaptive_simpson(|x| Ok(x.exp()), 0.0, 1.0, 1e-10, 30).unwrap();
        let backward = adaptive_simpson(|x| Ok(x.exp()), 1.0, 0.0, 1e-10, 30).unwrap();
        assert_abs_diff_eq!(forward, -backward, epsilon = 1e-12);
        assert_abs_diff_eq!(forward, std::f64::consts::E - 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_degenerate_interval() {
        assert_eq!(adaptive_simpson(|x| Ok(x), 2.0, 2.0, 1e-8, 30).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(adaptive_simpson(|x| Ok(x), 0.0, f64::INFINITY, 1e-8, 30).is_err());
        assert!(adaptive_simpson(|x| Ok(x), 0.0, 1.0, 0.0, 30).is_err());
    }

    #[test]
    fn test_integrand_error_propagates() {
        let result = adaptive_simpson(
            |x| {
                if x > 0.5 {
                    Err(crate::Error::Domain("pole".to_string()))
                } else {
                    Ok(x)
                }
            },
            0.0,
            1.0,
            1e-8,
            30,
        );
        assert!(result.is_err());
    }
}

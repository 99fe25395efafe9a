//! Kabe's exact density for the Behrens-Fisher statistic
//!
//! When both population variances are treated as known, the Welch statistic
//! `(x̄1 - x̄2) / sqrt(s1²/n1 + s2²/n2)` has an exact density derived by Kabe
//! (1966) involving the Gauss hypergeometric function. The density lets us
//! compute exact critical values against which the pooled-t and Welch
//! approximations can be judged.

use estima_core::special::{gauss_2f1, ln_gamma};
use estima_core::{adaptive_simpson, golden_section_minimize, Error, Result};
use log::debug;

const INTEGRATION_TOL: f64 = 1e-10;
const INTEGRATION_MAX_DEPTH: usize = 50;
const CRITICAL_SEARCH_TOL: f64 = 1e-8;
const CRITICAL_SEARCH_MAX_ITER: usize = 200;
const CRITICAL_SEARCH_UPPER: f64 = 40.0;

/// Kabe's exact density, parameterized by the two sample sizes and the known
/// population standard deviations.
///
/// The derivation requires `n1 > n2`; swap the samples if needed.
#[derive(Debug, Clone, Copy)]
pub struct KabeDensity {
    alpha1: f64,
    alpha2: f64,
    p1: f64,
    p2: f64,
    log_c: f64,
}

impl KabeDensity {
    pub fn new(n1: usize, n2: usize, sigma1: f64, sigma2: f64) -> Result<Self> {
        if n2 < 2 || n1 <= n2 {
            return Err(Error::Configuration(format!(
                "Kabe's density requires n1 > n2 >= 2, got n1 = {n1}, n2 = {n2}"
            )));
        }
        if !(sigma1 > 0.0) || !(sigma2 > 0.0) {
            return Err(Error::Configuration(format!(
                "population standard deviations must be positive, got {sigma1} and {sigma2}"
            )));
        }

        let (n1f, n2f) = (n1 as f64, n2 as f64);
        let fac = sigma1 * sigma1 / n1f + sigma2 * sigma2 / n2f;
        let alpha1 = n1f * (n1f - 1.0) / (sigma1 * sigma1) * fac;
        let alpha2 = n2f * (n2f - 1.0) / (sigma2 * sigma2) * fac;
        let p1 = (n1f - 1.0) / 2.0;
        let p2 = (n2f - 1.0) / 2.0;

        // Normalizing constant in the log domain, the direct product
        // overflows for moderate sample sizes.
        let log_c = p1 * alpha1.ln() + p2 * alpha2.ln() + ln_gamma(p1 + p2 + 0.5)
            - std::f64::consts::PI.ln() / 2.0
            - ln_gamma(p1 + p2);

        Ok(Self {
            alpha1,
            alpha2,
            p1,
            p2,
            log_c,
        })
    }

    /// Density at `v`
    pub fn pdf(&self, v: f64) -> Result<f64> {
        if !v.is_finite() {
            return Err(Error::non_finite("density argument"));
        }
        let scale = self.alpha1 + v * v;
        let log_a = self.log_c - (self.p1 + self.p2 + 0.5) * scale.ln();
        let z = (self.alpha1 - self.alpha2) / scale;
        let hypergeometric = gauss_2f1(self.p2, self.p1 + self.p2 + 0.5, self.p1 + self.p2, z)?;
        Ok(log_a.exp() * hypergeometric)
    }

    /// Probability of the interval `[lower, upper]`, by adaptive quadrature
    pub fn interval_probability(&self, lower: f64, upper: f64) -> Result<f64> {
        adaptive_simpson(
            |v| self.pdf(v),
            lower,
            upper,
            INTEGRATION_TOL,
            INTEGRATION_MAX_DEPTH,
        )
    }

    /// Two-sided critical value at significance `level`: the `c` with
    /// `P(|V| <= c) = 1 - level`.
    ///
    /// Found by minimizing the squared residual of the interval probability
    /// over a bracket that comfortably covers any practical level.
    pub fn critical_value(&self, level: f64) -> Result<f64> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::Configuration(format!(
                "significance level must lie in (0, 1), got {level}"
            )));
        }

        let target = 1.0 - level;
        let critical = golden_section_minimize(
            |c| {
                let mass = self.interval_probability(-c, c)?;
                Ok((mass - target).powi(2))
            },
            0.2,
            CRITICAL_SEARCH_UPPER,
            CRITICAL_SEARCH_TOL,
            CRITICAL_SEARCH_MAX_ITER,
        )?;
        debug!("Kabe critical value at level {level}: {critical}");
        Ok(critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use statrs::distribution::{Continuous, StudentsT};

    // n1 = 10, n2 = 3, sigma1 = 5, sigma2 = 10 throughout
    fn density() -> KabeDensity {
        KabeDensity::new(10, 3, 5.0, 10.0).unwrap()
    }

    #[test]
    fn test_pdf_reference_values() {
        let kabe = density();
        assert_relative_eq!(kabe.pdf(0.0).unwrap(), 0.3618581431881934, epsilon = 1e-10);
        assert_relative_eq!(kabe.pdf(1.0).unwrap(), 0.20162222479758365, epsilon = 1e-10);
        assert_relative_eq!(kabe.pdf(2.5).unwrap(), 0.04261015563190944, epsilon = 1e-10);
    }

    #[test]
    fn test_pdf_symmetric() {
        let kabe = density();
        for v in [0.5, 1.0, 2.0, 3.5] {
            assert_relative_eq!(kabe.pdf(v).unwrap(), kabe.pdf(-v).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_density_integrates_to_one() {
        let kabe = density();
        let total = kabe.interval_probability(-30.0, 30.0).unwrap();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_heavier_tails_than_pooled_t() {
        // The exact density is flatter at the mode than t(n1 + n2 - 2),
        // which is what makes the pooled test anticonservative here.
        let kabe = density();
        let pooled = StudentsT::new(0.0, 1.0, 11.0).unwrap();
        assert!(kabe.pdf(0.0).unwrap() < pooled.pdf(0.0));
        assert!(kabe.pdf(4.0).unwrap() > pooled.pdf(4.0));
    }

    #[test]
    fn test_critical_value() {
        let kabe = density();
        let critical = kabe.critical_value(0.05).unwrap();
        assert_abs_diff_eq!(critical, 3.2997980263755577, epsilon = 1e-3);

        // By construction the interval mass at the critical value is 0.95
        let mass = kabe.interval_probability(-critical, critical).unwrap();
        assert_abs_diff_eq!(mass, 0.95, epsilon = 1e-5);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(KabeDensity::new(3, 10, 5.0, 10.0).is_err());
        assert!(KabeDensity::new(10, 10, 5.0, 10.0).is_err());
        assert!(KabeDensity::new(10, 1, 5.0, 10.0).is_err());
        assert!(KabeDensity::new(10, 3, 0.0, 10.0).is_err());
        assert!(KabeDensity::new(10, 3, 5.0, -1.0).is_err());
        assert!(density().critical_value(0.0).is_err());
        assert!(density().critical_value(1.0).is_err());
        assert!(density().pdf(f64::NAN).is_err());
    }
}

//! Variance and standard-deviation point estimators
//!
//! All estimators share the same sum of squared deviations about the sample
//! mean and differ only in the denominator `n - offset`. The offset choices
//! are the classical ones compared in estimation-theory courses: dividing by
//! n (maximum likelihood, biased), n - 1 (unbiased for the variance) and
//! n + 1 (minimum MSE under normality); for the standard deviation, n - 1.5
//! gives a nearly unbiased estimate under normality.

use estima_core::{Error, Result};

/// A point estimator of a distribution parameter
///
/// The trait carries the estimator's target as a function of the true
/// variance so a simulation study can measure bias and MSE against the right
/// quantity (σ² for variance estimators, σ for standard-deviation ones).
pub trait PointEstimator {
    /// Estimate the parameter from a sample
    fn estimate(&self, sample: &[f64]) -> Result<f64>;

    /// The estimand, given the data-generating process's true variance
    fn target(&self, true_variance: f64) -> f64;

    /// Short display name
    fn name(&self) -> &'static str;
}

fn sum_sq_dev(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    sample.iter().map(|x| (x - mean).powi(2)).sum()
}

fn check_denominator(sample: &[f64], offset: f64) -> Result<f64> {
    let denominator = sample.len() as f64 - offset;
    if sample.is_empty() || denominator <= 0.0 {
        return Err(Error::InsufficientData {
            expected: offset.max(0.0) as usize + 1,
            actual: sample.len(),
        });
    }
    Ok(denominator)
}

/// Variance estimator `Σ(x - x̄)² / (n - offset)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceEstimator {
    offset: f64,
    name: &'static str,
}

impl VarianceEstimator {
    /// Maximum-likelihood estimator, divides by n
    pub fn biased() -> Self {
        Self {
            offset: 0.0,
            name: "s²/n",
        }
    }

    /// Unbiased estimator, divides by n - 1
    pub fn unbiased() -> Self {
        Self {
            offset: 1.0,
            name: "s²/(n-1)",
        }
    }

    /// Minimum-MSE estimator under normality, divides by n + 1
    pub fn minimum_mse() -> Self {
        Self {
            offset: -1.0,
            name: "s²/(n+1)",
        }
    }

    /// Divide by n - offset for an arbitrary offset
    pub fn with_offset(offset: f64, name: &'static str) -> Self {
        Self { offset, name }
    }
}

impl PointEstimator for VarianceEstimator {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        let denominator = check_denominator(sample, self.offset)?;
        Ok(sum_sq_dev(sample) / denominator)
    }

    fn target(&self, true_variance: f64) -> f64 {
        true_variance
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Standard-deviation estimator `sqrt(Σ(x - x̄)² / (n - offset))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StdDevEstimator {
    offset: f64,
    name: &'static str,
}

impl StdDevEstimator {
    /// Square root of the maximum-likelihood variance, divides by n
    pub fn biased() -> Self {
        Self {
            offset: 0.0,
            name: "sqrt(s²/n)",
        }
    }

    /// Square root of the unbiased variance, divides by n - 1
    ///
    /// Still biased for σ itself (Jensen's inequality).
    pub fn unbiased_variance() -> Self {
        Self {
            offset: 1.0,
            name: "sqrt(s²/(n-1))",
        }
    }

    /// Brugger's nearly unbiased estimator under normality, divides by n - 1.5
    pub fn brugger() -> Self {
        Self {
            offset: 1.5,
            name: "sqrt(s²/(n-1.5))",
        }
    }

    /// Divide by n - offset for an arbitrary offset
    pub fn with_offset(offset: f64, name: &'static str) -> Self {
        Self { offset, name }
    }
}

impl PointEstimator for StdDevEstimator {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        let denominator = check_denominator(sample, self.offset)?;
        Ok((sum_sq_dev(sample) / denominator).sqrt())
    }

    fn target(&self, true_variance: f64) -> f64 {
        true_variance.sqrt()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variance_denominators() {
        // Σ(x - x̄)² = 10 for this sample (mean 3)
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(
            VarianceEstimator::biased().estimate(&sample).unwrap(),
            10.0 / 5.0
        );
        assert_relative_eq!(
            VarianceEstimator::unbiased().estimate(&sample).unwrap(),
            10.0 / 4.0
        );
        assert_relative_eq!(
            VarianceEstimator::minimum_mse().estimate(&sample).unwrap(),
            10.0 / 6.0
        );
    }

    #[test]
    fn test_std_dev_denominators() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(
            StdDevEstimator::biased().estimate(&sample).unwrap(),
            (10.0_f64 / 5.0).sqrt()
        );
        assert_relative_eq!(
            StdDevEstimator::unbiased_variance().estimate(&sample).unwrap(),
            (10.0_f64 / 4.0).sqrt()
        );
        assert_relative_eq!(
            StdDevEstimator::brugger().estimate(&sample).unwrap(),
            (10.0_f64 / 3.5).sqrt()
        );
    }

    #[test]
    fn test_targets() {
        assert_relative_eq!(VarianceEstimator::unbiased().target(10.0), 10.0);
        assert_relative_eq!(StdDevEstimator::brugger().target(10.0), 10.0_f64.sqrt());
    }

    #[test]
    fn test_insufficient_data() {
        assert!(VarianceEstimator::biased().estimate(&[]).is_err());
        // n = 1 with denominator n - 1 = 0
        assert!(VarianceEstimator::unbiased().estimate(&[4.2]).is_err());
        assert!(StdDevEstimator::brugger().estimate(&[4.2]).is_err());
        // n = 2 > 1.5 is fine
        assert!(StdDevEstimator::brugger().estimate(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_constant_sample() {
        let sample = [3.0; 8];
        assert_relative_eq!(
            VarianceEstimator::unbiased().estimate(&sample).unwrap(),
            0.0
        );
    }
}

//! Two-sample t statistics and the Welch-Satterthwaite approximation

use estima_core::{Error, Result};

pub(crate) fn mean(sample: &[f64]) -> f64 {
    sample.iter().sum::<f64>() / sample.len() as f64
}

pub(crate) fn sum_sq_dev(sample: &[f64]) -> f64 {
    let m = mean(sample);
    sample.iter().map(|x| (x - m).powi(2)).sum()
}

fn check_two_samples(x1: &[f64], x2: &[f64]) -> Result<()> {
    for sample in [x1, x2] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
    }
    Ok(())
}

/// Welch-Satterthwaite degrees of freedom
///
/// ```text
/// df = (s1²/n1 + s2²/n2)² / ( (s1²/n1)²/(n1-1) + (s2²/n2)²/(n2-1) )
/// ```
///
/// `s1` and `s2` are the sample standard deviations (n - 1 denominator).
pub fn welch_df(n1: usize, n2: usize, s1: f64, s2: f64) -> Result<f64> {
    if n1 < 2 || n2 < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n1.min(n2),
        });
    }
    if !(s1 > 0.0) || !(s2 > 0.0) {
        return Err(Error::Domain(format!(
            "sample standard deviations must be positive, got {s1} and {s2}"
        )));
    }

    let g1 = s1 * s1 / n1 as f64;
    let g2 = s2 * s2 / n2 as f64;
    Ok((g1 + g2).powi(2) / (g1 * g1 / (n1 as f64 - 1.0) + g2 * g2 / (n2 as f64 - 1.0)))
}

/// Welch-Satterthwaite degrees of freedom computed from the samples
pub fn welch_df_from_samples(x1: &[f64], x2: &[f64]) -> Result<f64> {
    check_two_samples(x1, x2)?;
    let s1 = (sum_sq_dev(x1) / (x1.len() as f64 - 1.0)).sqrt();
    let s2 = (sum_sq_dev(x2) / (x2.len() as f64 - 1.0)).sqrt();
    welch_df(x1.len(), x2.len(), s1, s2)
}

/// Pooled-variance two-sample t statistic
///
/// Assumes a common variance; the statistic follows t(n1 + n2 - 2) exactly
/// when that assumption holds.
pub fn pooled_t_statistic(x1: &[f64], x2: &[f64]) -> Result<f64> {
    check_two_samples(x1, x2)?;
    let (n1, n2) = (x1.len() as f64, x2.len() as f64);
    let pooled_variance = (sum_sq_dev(x1) + sum_sq_dev(x2)) / (n1 + n2 - 2.0);
    if !(pooled_variance > 0.0) {
        return Err(Error::Domain(
            "pooled variance must be positive".to_string(),
        ));
    }
    Ok((mean(x1) - mean(x2)) / (1.0 / n1 + 1.0 / n2).sqrt() / pooled_variance.sqrt())
}

/// Welch two-sample t statistic (no common-variance assumption)
pub fn welch_t_statistic(x1: &[f64], x2: &[f64]) -> Result<f64> {
    check_two_samples(x1, x2)?;
    let (n1, n2) = (x1.len() as f64, x2.len() as f64);
    let v1 = sum_sq_dev(x1) / (n1 - 1.0);
    let v2 = sum_sq_dev(x2) / (n2 - 1.0);
    let scale = v1 / n1 + v2 / n2;
    if !(scale > 0.0) {
        return Err(Error::Domain(
            "sample variances must not both be zero".to_string(),
        ));
    }
    Ok((mean(x1) - mean(x2)) / scale.sqrt())
}

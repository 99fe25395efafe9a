//! AIC scoring of histograms
//!
//! Treats a histogram with k bins as a multinomial density model with k - 1
//! free parameters (the probabilities sum to one) and scores it by the Akaike
//! information criterion.

use estima_core::{Error, Result};

/// Floor substituted for empty bins when the positivity correction is on.
///
/// Empty bins are treated as holding a residual 1/e observations rather than
/// zero (Sakamoto, Ishiguro & Kitagawa 1982), which keeps the log-likelihood
/// finite.
pub const POSITIVITY_FLOOR: f64 = 1.0 / std::f64::consts::E;

/// AIC of a binned sample.
///
/// With bin counts `h_i`, edges `e_0 < … < e_k` and n = Σ h_i:
///
/// ```text
/// llik = Σ_{h_i > 0} h_i · ln( h_i / (n · (e_{i+1} - e_i)) )
/// AIC  = -2·llik + 2·(k - 1)
/// ```
///
/// If `positivity_correction` is set, every count below [`POSITIVITY_FLOOR`]
/// is replaced by the floor before the likelihood is computed; n always uses
/// the uncorrected counts.
///
/// The ln n! normalizing constant of the multinomial likelihood is fixed at
/// zero: it depends on n alone, so it cancels when comparing bin counts for a
/// fixed sample. The returned value is therefore AIC only up to an additive
/// constant in n, and must not be compared across samples of different sizes.
pub fn aic_score(counts: &[usize], edges: &[f64], positivity_correction: bool) -> Result<f64> {
    let k = counts.len();
    if k == 0 {
        return Err(Error::empty_input());
    }
    if edges.len() != k + 1 {
        return Err(Error::InvalidInput(format!(
            "expected {} edges for {} bins, got {}",
            k + 1,
            k,
            edges.len()
        )));
    }
    for pair in edges.windows(2) {
        if !(pair[0] < pair[1]) {
            return Err(Error::InvalidInput(format!(
                "bin edges must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
    }

    let n: usize = counts.iter().sum();
    if n == 0 {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    let nf = n as f64;

    let mut llik = 0.0;
    for (i, &count) in counts.iter().enumerate() {
        let h = if positivity_correction {
            (count as f64).max(POSITIVITY_FLOOR)
        } else {
            count as f64
        };
        // Zero corrected counts (correction off only) contribute nothing.
        if h > 0.0 {
            let width = edges[i + 1] - edges[i];
            llik += h * (h / (nf * width)).ln();
        }
    }

    Ok(-2.0 * llik + 2.0 * (k as f64 - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hand_computed_reference() {
        // counts [3, 0, 5], unit-width bins, correction off:
        // n = 8, llik = 3·ln(3/8) + 5·ln(5/8), AIC = -2·llik + 2·2
        let aic = aic_score(&[3, 0, 5], &[0.0, 1.0, 2.0, 3.0], false).unwrap();
        let llik = 3.0 * (3.0_f64 / 8.0).ln() + 5.0 * (5.0_f64 / 8.0).ln();
        assert_relative_eq!(aic, -2.0 * llik + 4.0, epsilon = 1e-12);
        assert_relative_eq!(aic, 14.585011810527714, epsilon = 1e-10);
    }

    #[test]
    fn test_correction_noop_without_empty_bins() {
        // All counts >= 1 > 1/e, so the floor never triggers.
        let counts = [4, 1, 7, 2];
        let edges = [0.0, 0.5, 1.5, 2.0, 4.0];
        let off = aic_score(&counts, &edges, false).unwrap();
        let on = aic_score(&counts, &edges, true).unwrap();
        assert_relative_eq!(off, on);
    }

    #[test]
    fn test_correction_changes_empty_bins() {
        let counts = [3, 0, 5];
        let edges = [0.0, 1.0, 2.0, 3.0];
        let off = aic_score(&counts, &edges, false).unwrap();
        let on = aic_score(&counts, &edges, true).unwrap();
        // Floor adds a penalty term (1/e)·ln((1/e)/8) < 0 to llik
        assert!(on > off);
        let floor_term = POSITIVITY_FLOOR * (POSITIVITY_FLOOR / 8.0).ln();
        assert_relative_eq!(on, off - 2.0 * floor_term, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_bins_never_raise_domain_error() {
        // Even with many empty bins, the zero-count mask keeps ln() away
        // from zero arguments.
        let counts = [0, 0, 10, 0, 0];
        let edges = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let off = aic_score(&counts, &edges, false).unwrap();
        assert!(off.is_finite());
        let on = aic_score(&counts, &edges, true).unwrap();
        assert!(on.is_finite());
    }

    #[test]
    fn test_mirrored_histograms_score_identically() {
        // A histogram and its mirror image carry the same information, so
        // their scores must be bit-for-bit equal. This is what lets the
        // selector's first-minimum tie-break resolve symmetric ties to the
        // smaller bin count.
        let a = aic_score(&[3, 5], &[0.0, 1.0, 2.0], false).unwrap();
        let b = aic_score(&[5, 3], &[0.0, 1.0, 2.0], false).unwrap();
        assert_eq!(a, b);

        let a = aic_score(&[2, 7], &[0.0, 1.0, 2.0], true).unwrap();
        let b = aic_score(&[7, 2], &[0.0, 1.0, 2.0], true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unequal_widths() {
        // One wide bin and one narrow bin, equal counts: the narrow bin has
        // higher density and contributes a larger log-likelihood.
        let aic = aic_score(&[5, 5], &[0.0, 4.0, 5.0], false).unwrap();
        let llik = 5.0 * (5.0_f64 / (10.0 * 4.0)).ln() + 5.0 * (5.0_f64 / 10.0).ln();
        assert_relative_eq!(aic, -2.0 * llik + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(aic_score(&[], &[0.0], false).is_err());
        assert!(aic_score(&[1, 2], &[0.0, 1.0], false).is_err()); // edge count
        assert!(aic_score(&[1, 2], &[0.0, 1.0, 1.0], false).is_err()); // not increasing
        assert!(aic_score(&[0, 0], &[0.0, 1.0, 2.0], false).is_err()); // n = 0
    }
}

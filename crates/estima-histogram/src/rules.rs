//! Automatic bin-count rules
//!
//! The classical rule set for choosing the number of equal-width histogram
//! bins: `sqrt`, `sturges`, `rice`, `scott`, `doane`, `fd`
//! (Freedman-Diaconis), `stone` (cross-validation) and `auto` (the larger of
//! `fd` and `sturges`). Formulas follow numpy's `histogram_bin_edges`.
//!
//! When a fixed value range is given, observations outside it are ignored for
//! the rule computation and the resulting edges span the fixed range.

use crate::builder::FixedWidthBuilder;
use estima_core::{brute_minimize, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Bin-count selection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCountRule {
    /// Larger of `FreedmanDiaconis` and `Sturges`
    Auto,
    /// Bin width 2·IQR·n^(-1/3)
    FreedmanDiaconis,
    /// Sturges extended by a skewness term
    Doane,
    /// Bin width 3.49·σ·n^(-1/3) (normal-reference rule)
    Scott,
    /// Cross-validation estimate of integrated squared error
    Stone,
    /// ceil(2·n^(1/3)) bins
    Rice,
    /// ceil(log2 n) + 1 bins
    Sturges,
    /// ceil(sqrt n) bins
    Sqrt,
}

impl BinCountRule {
    /// All supported rules, in the conventional listing order
    pub const ALL: [BinCountRule; 8] = [
        BinCountRule::Auto,
        BinCountRule::FreedmanDiaconis,
        BinCountRule::Doane,
        BinCountRule::Scott,
        BinCountRule::Stone,
        BinCountRule::Rice,
        BinCountRule::Sturges,
        BinCountRule::Sqrt,
    ];

    /// Canonical lowercase name of the rule
    pub fn name(&self) -> &'static str {
        match self {
            BinCountRule::Auto => "auto",
            BinCountRule::FreedmanDiaconis => "fd",
            BinCountRule::Doane => "doane",
            BinCountRule::Scott => "scott",
            BinCountRule::Stone => "stone",
            BinCountRule::Rice => "rice",
            BinCountRule::Sturges => "sturges",
            BinCountRule::Sqrt => "sqrt",
        }
    }

    /// Compute the number of bins this rule suggests for a sample.
    ///
    /// With a fixed `range`, only observations inside it enter the
    /// computation. A degenerate range (zero spread) yields a single bin.
    pub fn num_bins(&self, sample: &[f64], range: Option<(f64, f64)>) -> Result<usize> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }

        let (lo, hi) = bounds(sample, range)?;
        let xs: Vec<f64> = sample
            .iter()
            .copied()
            .filter(|v| *v >= lo && *v <= hi)
            .collect();
        if xs.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }

        let ptp = hi - lo;
        if ptp == 0.0 {
            return Ok(1);
        }

        let n = xs.len();
        let width = match self {
            BinCountRule::Sqrt => ptp / (n as f64).sqrt(),
            BinCountRule::Sturges => sturges_width(ptp, n),
            BinCountRule::Rice => ptp / (2.0 * (n as f64).cbrt()),
            BinCountRule::Scott => scott_width(&xs),
            BinCountRule::Doane => doane_width(&xs, ptp),
            BinCountRule::FreedmanDiaconis => fd_width(&xs),
            BinCountRule::Auto => {
                let fd = fd_width(&xs);
                let sturges = sturges_width(ptp, n);
                if fd > 0.0 {
                    fd.min(sturges)
                } else {
                    sturges
                }
            }
            BinCountRule::Stone => return stone_bins(&xs, lo, hi),
        };

        Ok(bins_from_width(ptp, width))
    }
}

impl fmt::Display for BinCountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinCountRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        BinCountRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == lower)
            .ok_or_else(|| Error::unknown_method(s))
    }
}

fn bounds(sample: &[f64], range: Option<(f64, f64)>) -> Result<(f64, f64)> {
    match range {
        Some((lo, hi)) => {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::non_finite("histogram range"));
            }
            if lo > hi {
                return Err(Error::Configuration(format!(
                    "range lower bound {lo} exceeds upper bound {hi}"
                )));
            }
            Ok((lo, hi))
        }
        None => {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            for &value in sample {
                if !value.is_finite() {
                    return Err(Error::non_finite("sample"));
                }
                lo = lo.min(value);
                hi = hi.max(value);
            }
            Ok((lo, hi))
        }
    }
}

fn bins_from_width(ptp: f64, width: f64) -> usize {
    if width > 0.0 {
        ((ptp / width).ceil() as usize).max(1)
    } else {
        1
    }
}

fn sturges_width(ptp: f64, n: usize) -> f64 {
    ptp / ((n as f64).log2() + 1.0)
}

fn scott_width(xs: &[f64]) -> f64 {
    use std::f64::consts::PI;
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() * (24.0 * PI.sqrt() / n).cbrt()
}

fn doane_width(xs: &[f64], ptp: f64) -> f64 {
    let n = xs.len();
    if n <= 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = xs.iter().sum::<f64>() / nf;
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / nf;
    if m2 == 0.0 {
        return 0.0;
    }
    let m3 = xs.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / nf;
    let g1 = m3 / m2.powf(1.5);
    let sg1 = (6.0 * (nf - 2.0) / ((nf + 1.0) * (nf + 3.0))).sqrt();
    ptp / (1.0 + nf.log2() + (1.0 + g1.abs() / sg1).log2())
}

fn fd_width(xs: &[f64]) -> f64 {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let iqr = percentile_sorted(&sorted, 0.75) - percentile_sorted(&sorted, 0.25);
    2.0 * iqr * (xs.len() as f64).powf(-1.0 / 3.0)
}

/// Linear-interpolation percentile on sorted data (the numpy default)
fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Stone's rule: minimize the leave-one-out cross-validation estimate of the
/// integrated squared error over candidate bin counts.
fn stone_bins(xs: &[f64], lo: f64, hi: f64) -> Result<usize> {
    let n = xs.len();
    let nf = n as f64;
    let ptp = hi - lo;
    let upper = 100usize.max((nf.sqrt()) as usize);

    let result = brute_minimize(1, upper, |k| {
        let hist = FixedWidthBuilder::new(k).with_range(lo, hi).build(xs)?;
        let hh = ptp / k as f64;
        let p_sq: f64 = hist
            .counts()
            .iter()
            .map(|&c| (c as f64 / nf).powi(2))
            .sum();
        Ok((2.0 - (nf + 1.0) * p_sq) / hh)
    })?;

    Ok(result.argmin)
}

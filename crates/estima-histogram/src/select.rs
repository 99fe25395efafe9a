//! Bin-count selection
//!
//! Either delegates to one of the classical [`BinCountRule`]s or searches for
//! the AIC-minimizing bin count by exhaustive evaluation. Method and engine
//! strings are resolved to enums once at call entry; anything unrecognized is
//! a configuration error raised before any numeric work.

use crate::aic::aic_score;
use crate::builder::FixedWidthBuilder;
use crate::rules::BinCountRule;
use estima_core::{brute_minimize, BruteResult, Error, Result};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// How to choose the number of bins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinCountMethod {
    /// Delegate to a classical closed-form rule
    Rule(BinCountRule),
    /// Minimize the AIC over candidate bin counts
    Aic,
}

impl fmt::Display for BinCountMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinCountMethod::Rule(rule) => rule.fmt(f),
            BinCountMethod::Aic => f.write_str("aic"),
        }
    }
}

impl FromStr for BinCountMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("aic") {
            return Ok(BinCountMethod::Aic);
        }
        s.parse::<BinCountRule>().map(BinCountMethod::Rule)
    }
}

/// Search engine for the AIC method
///
/// Only exhaustive search is supported; the candidate space is small (bounded
/// by the sample size), so anything cleverer buys nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchEngine {
    #[default]
    Brute,
}

impl FromStr for SearchEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("brute") {
            Ok(SearchEngine::Brute)
        } else {
            Err(Error::Configuration(format!(
                "Unknown search engine {s:?}. Currently only \"brute\" is available."
            )))
        }
    }
}

/// Options for [`select_bin_count`]
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    /// Substitute 1/e for empty bins in the AIC score
    pub positivity_correction: bool,
    /// Upper bound on candidate bin counts (default 2·floor(sqrt n) - 1,
    /// always clamped to n)
    pub max_bins: Option<usize>,
    /// Fixed value range for histogram construction
    pub range: Option<(f64, f64)>,
    /// Search engine for the AIC method
    pub engine: SearchEngine,
}

/// Result of a bin-count selection
#[derive(Debug, Clone)]
pub struct BinCountSelection {
    /// Selected number of bins
    pub num_bins: usize,
    /// Bin edges for the selected count (length `num_bins + 1`)
    pub edges: Vec<f64>,
    /// Raw search output (AIC method only)
    pub trace: Option<BruteResult>,
}

/// Select a bin count for `sample` using the given method.
///
/// Rule methods are a pass-through: the rule computes the count and the edges
/// follow from it; no trace is produced. The AIC method evaluates every
/// candidate count in `[2, min(n, max_bins)]` in increasing order and keeps
/// the first minimum, so exact ties resolve to the smaller count. The full
/// objective profile is returned in `trace`.
pub fn select_bin_count(
    sample: &[f64],
    method: BinCountMethod,
    options: &SelectorOptions,
) -> Result<BinCountSelection> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }

    match method {
        BinCountMethod::Rule(rule) => {
            let num_bins = rule.num_bins(sample, options.range)?;
            let edges = edges_for(sample, num_bins, options.range)?;
            Ok(BinCountSelection {
                num_bins,
                edges,
                trace: None,
            })
        }
        BinCountMethod::Aic => {
            let SearchEngine::Brute = options.engine;

            let n = sample.len();
            let default_max = 2 * (n as f64).sqrt().floor() as usize;
            let default_max = default_max.saturating_sub(1);
            let upper = options.max_bins.unwrap_or(default_max).min(n);
            let lower = 2;
            if upper < lower {
                return Err(Error::InsufficientData {
                    expected: lower,
                    actual: n,
                });
            }

            debug!(
                "AIC bin search: n={n}, candidates=[{lower}, {upper}], \
                 positivity_correction={}",
                options.positivity_correction
            );

            let trace = brute_minimize(lower, upper, |bins| {
                let hist = FixedWidthBuilder::new(bins)
                    .with_optional_range(options.range)
                    .build(sample)?;
                aic_score(&hist.counts(), &hist.edges(), options.positivity_correction)
            })?;

            let num_bins = trace.argmin;
            let edges = edges_for(sample, num_bins, options.range)?;

            debug!("AIC bin search selected {num_bins} bins (AIC={})", trace.minimum);

            Ok(BinCountSelection {
                num_bins,
                edges,
                trace: Some(trace),
            })
        }
    }
}

fn edges_for(sample: &[f64], num_bins: usize, range: Option<(f64, f64)>) -> Result<Vec<f64>> {
    Ok(FixedWidthBuilder::new(num_bins)
        .with_optional_range(range)
        .build(sample)?
        .edges())
}

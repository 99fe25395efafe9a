//! 1-D minimization primitives
//!
//! Two deliberately simple searchers cover everything the workspace needs:
//! an exhaustive scan over a closed integer range (with the full evaluation
//! trace kept for introspection) and golden-section minimization of a scalar
//! function over a bracket.

use crate::{Error, Result};
use log::debug;

/// Outcome of an exhaustive integer search
///
/// `evaluations` holds every `(candidate, objective)` pair in evaluation
/// order, so callers can inspect the whole objective profile rather than
/// just the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteResult {
    /// Candidate with the smallest objective value
    pub argmin: usize,
    /// Objective value at `argmin`
    pub minimum: f64,
    /// All evaluated `(candidate, objective)` pairs, in increasing order
    pub evaluations: Vec<(usize, f64)>,
}

/// Minimize `f` over the closed integer range `[lo, hi]` by evaluating every
/// candidate.
///
/// Candidates are visited in increasing order and compared with a strict
/// less-than, so on an exact tie the smallest candidate wins.
pub fn brute_minimize<F>(lo: usize, hi: usize, mut f: F) -> Result<BruteResult>
where
    F: FnMut(usize) -> Result<f64>,
{
    if lo > hi {
        return Err(Error::Configuration(format!(
            "empty search range: [{lo}, {hi}]"
        )));
    }

    debug!("brute search over [{lo}, {hi}]");

    let mut evaluations = Vec::with_capacity(hi - lo + 1);
    let mut argmin = lo;
    let mut minimum = f64::INFINITY;
    for candidate in lo..=hi {
        let value = f(candidate)?;
        if value < minimum {
            argmin = candidate;
            minimum = value;
        }
        evaluations.push((candidate, value));
    }

    debug!("brute search done: argmin={argmin}, minimum={minimum}");

    Ok(BruteResult {
        argmin,
        minimum,
        evaluations,
    })
}

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_8;

/// Minimize `f` over the bracket `[a, b]` by golden-section search.
///
/// Assumes `f` is unimodal on the bracket. Returns the midpoint of the final
/// interval once its width drops below `tol`, or `Error::Convergence` if
/// `max_iter` iterations are exhausted first.
pub fn golden_section_minimize<F>(
    mut f: F,
    a: f64,
    b: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    if !(a < b) {
        return Err(Error::Configuration(format!(
            "invalid bracket: [{a}, {b}]"
        )));
    }
    if tol <= 0.0 {
        return Err(Error::Configuration(format!(
            "tolerance must be positive, got {tol}"
        )));
    }

    let (mut a, mut b) = (a, b);
    let mut c = b - GOLDEN_RATIO_CONJUGATE * (b - a);
    let mut d = a + GOLDEN_RATIO_CONJUGATE * (b - a);
    let mut fc = f(c)?;
    let mut fd = f(d)?;

    for _ in 0..max_iter {
        if b - a < tol {
            return Ok(0.5 * (a + b));
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - GOLDEN_RATIO_CONJUGATE * (b - a);
            fc = f(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + GOLDEN_RATIO_CONJUGATE * (b - a);
            fd = f(d)?;
        }
    }

    Err(Error::Convergence {
        iterations: max_iter,
        context: "golden section".to_string(),
    })
}

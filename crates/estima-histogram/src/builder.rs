//! Fixed-width histogram construction

use crate::types::{Histogram, HistogramBin};
use estima_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins. The value
/// range defaults to the sample's own min/max; a fixed range can be supplied
/// instead, in which case observations outside it are ignored.
#[derive(Debug, Clone)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<(f64, f64)>,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
            range: None,
        }
    }

    /// Fix the value range instead of deriving it from the sample
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Optionally fix the value range
    pub fn with_optional_range(mut self, range: Option<(f64, f64)>) -> Self {
        self.range = range;
        self
    }

    /// Resolve the binning range for a sample.
    ///
    /// A degenerate range (all values equal, or a zero-width fixed range) is
    /// widened by 0.5 on each side so equal-width bins remain well defined.
    pub(crate) fn resolve_range(&self, sample: &[f64]) -> Result<(f64, f64)> {
        let (min, max) = match self.range {
            Some((min, max)) => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(Error::non_finite("histogram range"));
                }
                if min > max {
                    return Err(Error::Configuration(format!(
                        "range lower bound {min} exceeds upper bound {max}"
                    )));
                }
                (min, max)
            }
            None => {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for &value in sample {
                    if !value.is_finite() {
                        return Err(Error::non_finite("sample"));
                    }
                    min = min.min(value);
                    max = max.max(value);
                }
                (min, max)
            }
        };

        if min == max {
            Ok((min - 0.5, max + 0.5))
        } else {
            Ok((min, max))
        }
    }

    /// Build a histogram from the given sample
    pub fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }

        let (min, max) = self.resolve_range(sample)?;
        let k = self.num_bins;
        let width = (max - min) / k as f64;

        let mut counts = vec![0usize; k];
        let mut total = 0usize;
        for &value in sample {
            if !value.is_finite() {
                return Err(Error::non_finite("sample"));
            }
            if value < min || value > max {
                continue;
            }
            let idx = if value == max {
                k - 1
            } else {
                (((value - min) / (max - min)) * k as f64) as usize
            };
            counts[idx.min(k - 1)] += 1;
            total += 1;
        }

        let mut bins = Vec::with_capacity(k);
        for (i, &count) in counts.iter().enumerate() {
            let left = min + i as f64 * width;
            let right = if i == k - 1 {
                max // last edge lands on max exactly
            } else {
                min + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, count, total));
        }

        Ok(Histogram::new(bins, total, min, max))
    }
}

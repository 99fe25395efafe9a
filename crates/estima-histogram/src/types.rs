//! Core types for histogram representation

use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A histogram over a contiguous value range
///
/// Bins partition `[min, max]` into `len()` equal-width intervals; the last
/// bin is closed on the right so that `max` itself is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    /// Number of observations that fell inside the range
    total_count: usize,
    /// Lower bound of the binned range
    min: f64,
    /// Upper bound of the binned range
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the number of observations that were binned
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the lower bound of the binned range
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the upper bound of the binned range
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return vec![];
        }

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        for bin in &self.bins {
            edges.push(bin.left);
        }
        edges.push(self.bins.last().unwrap().right);
        edges
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

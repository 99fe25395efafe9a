//! Histogram construction and bin-count selection
//!
//! This crate builds equal-width histograms and chooses how many bins they
//! should have, either by a classical closed-form rule or by minimizing the
//! Akaike information criterion over candidate bin counts.
//!
//! # Key Features
//!
//! - **Fixed-width histograms** with an optional fixed value range
//! - **Classical bin-count rules**: sqrt, Sturges, Rice, Scott, Doane,
//!   Freedman-Diaconis, Stone, auto
//! - **AIC-based selection**: exhaustive search with the full objective
//!   profile returned for inspection
//! - **Positivity correction**: empty bins can be treated as holding 1/e
//!   observations so the log-likelihood stays finite
//!
//! # Examples
//!
//! ## Choosing a bin count with a classical rule
//!
//! ```rust
//! use estima_histogram::{select_bin_count, BinCountMethod, SelectorOptions};
//!
//! let data: Vec<f64> = (0..100).map(|i| (i as f64).sqrt()).collect();
//! let method: BinCountMethod = "sturges".parse().unwrap();
//! let selection = select_bin_count(&data, method, &SelectorOptions::default()).unwrap();
//!
//! assert_eq!(selection.edges.len(), selection.num_bins + 1);
//! assert!(selection.trace.is_none()); // rules are a pass-through
//! ```
//!
//! ## AIC-minimizing bin count
//!
//! ```rust
//! use estima_histogram::{select_bin_count, BinCountMethod, SelectorOptions};
//!
//! let data: Vec<f64> = (0..80).map(|i| ((i * 7) % 23) as f64).collect();
//! let options = SelectorOptions {
//!     positivity_correction: true,
//!     ..Default::default()
//! };
//! let selection = select_bin_count(&data, BinCountMethod::Aic, &options).unwrap();
//!
//! // The trace holds every (bin count, AIC) pair the search evaluated.
//! let trace = selection.trace.unwrap();
//! assert_eq!(trace.argmin, selection.num_bins);
//! ```

pub mod aic;
pub mod builder;
pub mod rules;
pub mod select;
pub mod types;

pub use aic::{aic_score, POSITIVITY_FLOOR};
pub use builder::FixedWidthBuilder;
pub use rules::BinCountRule;
pub use select::{select_bin_count, BinCountMethod, BinCountSelection, SearchEngine, SelectorOptions};
pub use types::{Histogram, HistogramBin};

pub use estima_core::Result;

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

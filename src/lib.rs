//! Statistical estimation experiments
//!
//! A facade over the workspace crates:
//!
//! - [`estima_core`]: shared errors, 1-D minimization, quadrature and
//!   special functions
//! - [`estima_histogram`]: histogram construction, classical bin-count rules
//!   and AIC-based bin-count selection
//! - [`estima_spread`]: variance and standard-deviation estimators with a
//!   Monte Carlo comparison study
//! - [`estima_welch`]: the Behrens-Fisher problem, Kabe's exact density
//!   against the pooled and Welch t approximations
//!
//! # Examples
//!
//! ```rust
//! use estima::histogram::{select_bin_count, BinCountMethod, SelectorOptions};
//!
//! let sample: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin()).collect();
//! let selection = select_bin_count(
//!     &sample,
//!     BinCountMethod::Aic,
//!     &SelectorOptions::default(),
//! )
//! .unwrap();
//! assert!(selection.num_bins >= 2);
//! ```

pub use estima_core as core;
pub use estima_histogram as histogram;
pub use estima_spread as spread;
pub use estima_welch as welch;

pub use estima_core::{Error, Result};

//! Core building blocks for the estima workspace
//!
//! This crate provides what the statistical experiment crates share:
//!
//! - A unified [`Error`]/[`Result`] pair used across the workspace
//! - Special functions missing from statrs ([`special::gauss_2f1`])
//! - Exhaustive and golden-section 1-D minimization ([`minimize`])
//! - Adaptive Simpson quadrature ([`integrate`])
//!
//! # Examples
//!
//! ```rust
//! use estima_core::minimize::brute_minimize;
//!
//! let result = brute_minimize(2, 17, |k| Ok(((k as f64) - 7.2).powi(2))).unwrap();
//! assert_eq!(result.argmin, 7);
//! ```

pub mod error;
pub mod integrate;
pub mod minimize;
pub mod special;

pub use error::{Error, Result};
pub use integrate::adaptive_simpson;
pub use minimize::{brute_minimize, golden_section_minimize, BruteResult};

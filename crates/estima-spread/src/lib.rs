//! Spread estimation and estimator comparison
//!
//! Classical variance and standard-deviation estimators differing only in
//! their denominator, and a seeded Monte Carlo study that measures their MSE
//! and bias against the truth for a chosen data-generating process.
//!
//! # Examples
//!
//! ```rust
//! use estima_spread::{
//!     run_study, DgpFamily, PointEstimator, StudyConfig, VarianceEstimator,
//! };
//!
//! let config = StudyConfig {
//!     family: DgpFamily::Gauss,
//!     sample_size: 10,
//!     replications: 1000,
//!     true_variance: 10.0,
//!     seed: 123,
//! };
//!
//! let unbiased = VarianceEstimator::unbiased();
//! let minimum = VarianceEstimator::minimum_mse();
//! let results = run_study(&config, &[&unbiased, &minimum]).unwrap();
//!
//! for performance in &results {
//!     println!("{}: MSE={:.3}, bias={:.3}", performance.name, performance.mse, performance.bias);
//! }
//! ```

pub mod estimators;
pub mod simulation;

pub use estimators::{PointEstimator, StdDevEstimator, VarianceEstimator};
pub use simulation::{
    bias, mse, run_study, DgpFamily, EstimatorPerformance, StudyConfig,
};

pub use estima_core::Result;

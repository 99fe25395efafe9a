//! The Behrens-Fisher problem: exact and approximate two-sample tests
//!
//! Compares three procedures for testing equality of means when the two
//! population variances differ: Kabe's exact density for the studentized
//! mean difference (variances known), the pooled-variance t test, and the
//! Welch-Satterthwaite approximation. A seeded Monte Carlo study measures
//! each procedure's actual rejection rate under the null.
//!
//! # Examples
//!
//! ```rust
//! use estima_welch::KabeDensity;
//!
//! let kabe = KabeDensity::new(10, 3, 5.0, 10.0).unwrap();
//! let critical = kabe.critical_value(0.05).unwrap();
//! assert!(critical > 3.0 && critical < 3.6);
//! ```

pub mod kabe;
pub mod simulation;
pub mod welch;

pub use kabe::KabeDensity;
pub use simulation::{run_rejection_study, RejectionConfig, RejectionRates};
pub use welch::{
    pooled_t_statistic, welch_df, welch_df_from_samples, welch_t_statistic,
};

pub use estima_core::Result;

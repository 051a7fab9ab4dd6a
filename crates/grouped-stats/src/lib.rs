//! Descriptive statistics for grouped data, with step-by-step derivations.
//!
//! This crate turns a list of numeric observations into a grouped frequency
//! table and derives central tendency and dispersion measures from it. Every
//! measure comes with a [`DerivationTrail`](trail::DerivationTrail) recording
//! the intermediate quantities and substituted formulas, so a caller can show
//! how each value was obtained.
//!
//! # Modules
//!
//! - [`frequency`]: Class intervals via Sturges' rule and the frequency table
//! - [`central_tendency`]: Mean, median and mode of grouped data
//! - [`dispersion`]: Mean deviation, variance and standard deviation of grouped data
//! - [`analysis`]: Runs the whole pipeline and aggregates the results
//! - [`chart`]: Per-class series for plotting
//! - [`trail`]: Ordered derivation steps
//! - [`error`]: Error type shared by all stages
//!
//! # Examples
//!
//! ## Running the full analysis
//!
//! ```
//! use grouped_stats::analysis::analyze;
//!
//! let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
//! let result = analyze(values).unwrap();
//!
//! assert_eq!(result.preliminaries().class_count, 5);
//! assert_eq!(result.central_tendency.median.value, 24.5);
//! ```
//!
//! ## Reading a derivation trail
//!
//! ```
//! use grouped_stats::{analysis::analyze, trail::StepValue};
//!
//! let values = [12.0, 15.0, 18.0, 20.0, 22.0, 25.0, 28.0, 30.0, 32.0, 35.0];
//! let result = analyze(values).unwrap();
//!
//! let formula = result
//!     .central_tendency
//!     .mean
//!     .trail
//!     .get("final_formula")
//!     .and_then(StepValue::as_text);
//! assert_eq!(formula, Some("x̄ = Σ(xi × fi) / n = 245.0000 / 10 = 24.50"));
//! ```

use serde::Serialize;

use crate::trail::DerivationTrail;

pub mod analysis;
pub mod central_tendency;
pub mod chart;
pub mod dispersion;
pub mod error;
pub mod frequency;
pub mod trail;

/// A computed measure together with its derivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic {
    pub value: f64,
    pub trail: DerivationTrail,
}

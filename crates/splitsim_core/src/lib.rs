//! Reward split simulation library
//!
//! This crate models how a depositor's share of pool rewards changes as they
//! route a fraction of their position through a primary venue (which holds
//! voting power and charges a fee) instead of depositing directly at the
//! reference venue.
//!
//! It provides:
//! - A lazy, restartable split domain over [0, 1]
//! - The closed-form per-split reward formula with working-balance boosts
//! - A brute-force sweep over the split domain and a discrete arg-max summary
//! - Sensitivity analysis of the optimum against a single input
//!
//! # Example
//!
//! ```
//! use splitsim_core::{ScenarioInputs, summarize, sweep};
//!
//! let inputs = ScenarioInputs::default();
//! let result = sweep(&inputs);
//! let summary = summarize(&result, inputs.highlight_split).unwrap();
//! assert!(summary.max_reward >= summary.highlighted_reward);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod domain;
pub mod error;
pub mod reward;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SensitivityParameter, SensitivityPoint, sensitivity};
pub use domain::SplitDomain;
pub use error::InputError;
pub use model::{SampleBreakdown, ScenarioInputs, Summary, SweepResult};
pub use reward::evaluate_split;
pub use sweep::{summarize, sweep};

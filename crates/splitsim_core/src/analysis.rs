//! Sensitivity of the optimal split to a single input.
//!
//! Each value gets a full sweep and summary with every other input held
//! fixed. This is repeated grid search, nothing smarter.

use serde::{Deserialize, Serialize};

use crate::model::ScenarioInputs;
use crate::sweep::{summarize, sweep};

/// Input varied by a sensitivity run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityParameter {
    PoolDominance,
    VenueFee,
    PrimaryHoldings,
}

impl SensitivityParameter {
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityParameter::PoolDominance => "Pool dominance",
            SensitivityParameter::VenueFee => "Venue fee",
            SensitivityParameter::PrimaryHoldings => "Primary venue holdings",
        }
    }

    /// Copy of `inputs` with this parameter set to `value`
    pub fn apply(&self, inputs: &ScenarioInputs, value: f64) -> ScenarioInputs {
        let mut inputs = *inputs;
        match self {
            SensitivityParameter::PoolDominance => inputs.pool_dominance = value,
            SensitivityParameter::VenueFee => inputs.venue_fee = value,
            SensitivityParameter::PrimaryHoldings => inputs.primary_holdings = value,
        }
        inputs
    }

    /// `count` evenly spaced values across the parameter's valid range.
    ///
    /// Holdings have no upper bound; they are spread up to `total_supply`.
    pub fn default_values(&self, inputs: &ScenarioInputs, count: usize) -> Vec<f64> {
        let (min, max) = match self {
            SensitivityParameter::PoolDominance => crate::model::POOL_DOMINANCE_RANGE,
            SensitivityParameter::VenueFee => crate::model::VENUE_FEE_RANGE,
            SensitivityParameter::PrimaryHoldings => (0.0, inputs.total_supply),
        };

        match count {
            0 => Vec::new(),
            1 => vec![min],
            _ => (0..count)
                .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

/// Optimum found for one parameter value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub value: f64,
    pub optimal_split: f64,
    pub max_reward: f64,
}

/// Sweep and summarize once per value of `parameter`.
///
/// Values whose sweep is empty (resolution 0) are skipped.
pub fn sensitivity(
    base: &ScenarioInputs,
    parameter: SensitivityParameter,
    values: &[f64],
) -> Vec<SensitivityPoint> {
    values
        .iter()
        .filter_map(|&value| {
            let inputs = parameter.apply(base, value);
            let result = sweep(&inputs);
            let summary = summarize(&result, inputs.highlight_split)?;
            Some(SensitivityPoint {
                value,
                optimal_split: summary.optimal_split,
                max_reward: summary.max_reward,
            })
        })
        .collect()
}

//! Brute-force sweep over the split domain
//!
//! `sweep` evaluates the reward formula at every sample of the split domain;
//! `summarize` picks the highlighted sample and the discrete optimum. The
//! optimum is only as precise as the sample grid: no interpolation or
//! refinement is attempted.

use crate::domain::SplitDomain;
use crate::model::{ScenarioInputs, Summary, SweepResult};
use crate::reward::evaluate_split;

/// Evaluate reward shares at `inputs.resolution` evenly spaced splits.
///
/// Pure and deterministic: identical inputs give bit-identical results.
/// Inputs are not validated.
pub fn sweep(inputs: &ScenarioInputs) -> SweepResult {
    let domain = SplitDomain::new(inputs.resolution);
    let mut result = SweepResult::with_capacity(domain.len());

    for split in domain {
        result.push(&evaluate_split(inputs, split));
    }

    result
}

/// Locate the sample nearest `highlight_split` and the sample with the
/// highest total reward.
///
/// Both scans run in increasing split order and keep the first match on
/// ties. Returns `None` for an empty result.
pub fn summarize(result: &SweepResult, highlight_split: f64) -> Option<Summary> {
    let highlighted_index = nearest_index(&result.splits, highlight_split)?;
    let optimal_index = argmax(&result.total_reward)?;

    Some(Summary {
        highlighted_index,
        highlighted_split: result.splits[highlighted_index],
        highlighted_reward: result.total_reward[highlighted_index],
        optimal_index,
        optimal_split: result.splits[optimal_index],
        max_reward: result.total_reward[optimal_index],
    })
}

/// Index of the first value closest to `target`
fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            // NaN distances never displace an existing match
            Some(_) if distance.is_nan() => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}

/// Index of the first maximum
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, &value) in values.iter().enumerate() {
        match best {
            Some((_, best_value)) if value > best_value => best = Some((i, value)),
            Some(_) => {}
            None => best = Some((i, value)),
        }
    }

    best.map(|(i, _)| i)
}

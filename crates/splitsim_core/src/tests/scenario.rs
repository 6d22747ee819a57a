//! Reference scenario: 118 of 794 voting units at the venue, 93% pool
//! dominance, 17% fee, 2000 samples.
//!
//! The curve is not assumed to have any particular shape; the optimum is
//! whatever a direct linear scan finds.

use crate::model::ScenarioInputs;
use crate::sweep::{summarize, sweep};

fn reference_inputs() -> ScenarioInputs {
    ScenarioInputs {
        primary_holdings: 118.0,
        total_supply: 794.0,
        pool_dominance: 0.93,
        venue_fee: 0.17,
        highlight_split: 0.5,
        resolution: 2000,
    }
}

/// Index of the first maximum, by plain linear scan
fn scan_argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for i in 1..values.len() {
        if values[i] > values[best] {
            best = i;
        }
    }
    best
}

#[test]
fn test_summary_reports_literal_maximum() {
    let inputs = reference_inputs();
    let result = sweep(&inputs);
    let summary = summarize(&result, inputs.highlight_split).unwrap();

    let expected = scan_argmax(&result.total_reward);
    assert_eq!(summary.optimal_index, expected);
    assert_eq!(summary.optimal_split, result.splits[expected]);
    assert_eq!(summary.max_reward, result.total_reward[expected]);
    assert!(result.total_reward.iter().all(|&r| r <= summary.max_reward));
}

#[test]
fn test_empirical_optimum_is_interior() {
    let inputs = reference_inputs();
    let result = sweep(&inputs);
    let summary = summarize(&result, inputs.highlight_split).unwrap();

    assert_eq!(summary.optimal_index, 443);
    assert!((0.22..0.225).contains(&summary.optimal_split));
    assert!((summary.max_reward - 84.4762).abs() < 1e-3);

    // Both endpoints do worse: 37.2 / 44.2 at no split, 83% of the 93%
    // dominance at a full split.
    assert!(summary.max_reward > result.total_reward[0]);
    assert!((result.total_reward[0] - 3720.0 / 44.2).abs() < 1e-9);
    assert!((result.total_reward[result.len() - 1] - 77.19).abs() < 1e-9);
}

#[test]
fn test_curve_has_single_interior_peak() {
    let inputs = reference_inputs();
    let result = sweep(&inputs);
    let rewards = &result.total_reward;

    let interior_peaks: Vec<usize> = (1..rewards.len() - 1)
        .filter(|&i| rewards[i] > rewards[i - 1] && rewards[i] >= rewards[i + 1])
        .collect();

    assert_eq!(interior_peaks, vec![443]);
}

#[test]
fn test_highlighted_reward_at_half_split() {
    let inputs = reference_inputs();
    let result = sweep(&inputs);
    let summary = summarize(&result, 0.5).unwrap();

    // 2000 samples never land on 0.5 exactly; the nearer neighbour is taken.
    assert_eq!(summary.highlighted_index, 999);
    assert!((summary.highlighted_split - 0.5).abs() <= 0.5 / 1999.0);
    assert!((summary.highlighted_reward - 82.7359).abs() < 1e-3);
    assert_eq!(
        summary.highlighted_reward,
        result.total_reward[summary.highlighted_index]
    );
    assert!(summary.highlighted_reward < summary.max_reward);
}

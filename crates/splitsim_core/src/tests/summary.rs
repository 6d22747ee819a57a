//! Tests for highlight lookup and arg-max over full sweeps

use crate::model::ScenarioInputs;
use crate::sweep::{summarize, sweep};

#[test]
fn test_highlight_on_grid_point_returns_exact_sample() {
    let inputs = ScenarioInputs {
        resolution: 333,
        ..Default::default()
    };
    let result = sweep(&inputs);

    for i in [0, 1, 100, 166, 331, 332] {
        let summary = summarize(&result, result.splits[i]).unwrap();
        assert_eq!(summary.highlighted_index, i);
        assert_eq!(summary.highlighted_split, result.splits[i]);
        assert_eq!(summary.highlighted_reward, result.total_reward[i]);
    }
}

#[test]
fn test_highlight_outside_domain_snaps_to_endpoint() {
    let result = sweep(&ScenarioInputs::default());
    let last = result.len() - 1;

    assert_eq!(summarize(&result, -0.5).unwrap().highlighted_index, 0);
    assert_eq!(summarize(&result, 1.5).unwrap().highlighted_index, last);
}

#[test]
fn test_flat_curve_optimum_is_first_sample() {
    // Nothing can be routed when the user owns none of the pool, so every
    // split earns the same reward.
    let inputs = ScenarioInputs {
        pool_dominance: 0.0,
        resolution: 50,
        ..Default::default()
    };
    let result = sweep(&inputs);
    assert!(result.total_reward.windows(2).all(|w| w[0] == w[1]));

    let summary = summarize(&result, 0.7).unwrap();
    assert_eq!(summary.optimal_index, 0);
    assert_eq!(summary.optimal_split, 0.0);
}

#[test]
fn test_fee_free_venue_favours_full_split() {
    let inputs = ScenarioInputs {
        venue_fee: 0.0,
        resolution: 401,
        ..Default::default()
    };
    let result = sweep(&inputs);
    let summary = summarize(&result, 0.5).unwrap();

    assert_eq!(summary.optimal_split, result.splits[summary.optimal_index]);
    assert!(summary.optimal_split > 0.5);
    assert!(summary.max_reward >= result.total_reward[0]);
}

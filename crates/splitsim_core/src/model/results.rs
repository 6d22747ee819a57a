//! Sweep results and summaries
//!
//! A `SweepResult` is produced fresh by every sweep and never mutated
//! afterwards; all sequences are aligned on the same split index.

use serde::{Deserialize, Serialize};

/// Every intermediate of the reward formula for one split fraction.
///
/// Working balances are expressed as percent of the reference pool; rewards
/// as percent of the pool's total reward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleBreakdown {
    pub split: f64,
    /// User stake routed through the primary venue, as a pool fraction
    pub user_primary_frac: f64,
    /// Pool fraction aggregated under the primary venue
    pub primary_pool_frac: f64,
    /// User's pro-rata claim on what the primary venue distributes
    pub user_share_of_primary: f64,
    pub primary_working_balance: f64,
    pub reference_working_balance: f64,
    pub working_supply: f64,
    /// User reward from the direct reference deposit
    pub reference_reward: f64,
    /// Primary venue reward before fee and pro-rating
    pub gross_primary_reward: f64,
    /// User reward via the primary venue, after fee and pro-rating
    pub primary_reward: f64,
    pub total_reward: f64,
}

/// Reward shares sampled across the split domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Split fractions in increasing order, spanning [0, 1]
    pub splits: Vec<f64>,
    pub reference_reward: Vec<f64>,
    pub primary_reward: Vec<f64>,
    pub total_reward: Vec<f64>,
}

impl SweepResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            splits: Vec::with_capacity(capacity),
            reference_reward: Vec::with_capacity(capacity),
            primary_reward: Vec::with_capacity(capacity),
            total_reward: Vec::with_capacity(capacity),
        }
    }

    /// Append one evaluated sample
    pub fn push(&mut self, sample: &SampleBreakdown) {
        self.splits.push(sample.split);
        self.reference_reward.push(sample.reference_reward);
        self.primary_reward.push(sample.primary_reward);
        self.total_reward.push(sample.total_reward);
    }

    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Split fractions scaled to percent (0-100)
    pub fn split_percentages(&self) -> impl Iterator<Item = f64> + '_ {
        self.splits.iter().map(|s| s * 100.0)
    }

    /// `(split %, total reward %)` pairs in split order, ready for plotting
    pub fn curve(&self) -> Vec<(f64, f64)> {
        self.split_percentages()
            .zip(self.total_reward.iter().copied())
            .collect()
    }

    /// `(split, reference, primary, total)` at index `i`
    pub fn sample(&self, i: usize) -> Option<(f64, f64, f64, f64)> {
        Some((
            *self.splits.get(i)?,
            *self.reference_reward.get(i)?,
            *self.primary_reward.get(i)?,
            *self.total_reward.get(i)?,
        ))
    }
}

/// Highlighted point and discrete optimum of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub highlighted_index: usize,
    /// Grid split nearest to the requested highlight
    pub highlighted_split: f64,
    pub highlighted_reward: f64,
    pub optimal_index: usize,
    pub optimal_split: f64,
    pub max_reward: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(split: f64, reference: f64, primary: f64) -> SampleBreakdown {
        SampleBreakdown {
            split,
            user_primary_frac: 0.0,
            primary_pool_frac: 0.0,
            user_share_of_primary: 0.0,
            primary_working_balance: 0.0,
            reference_working_balance: 0.0,
            working_supply: 0.0,
            reference_reward: reference,
            gross_primary_reward: 0.0,
            primary_reward: primary,
            total_reward: reference + primary,
        }
    }

    #[test]
    fn test_curve_scales_splits_to_percent() {
        let mut result = SweepResult::with_capacity(2);
        result.push(&sample(0.0, 80.0, 0.0));
        result.push(&sample(1.0, 0.0, 70.0));

        assert_eq!(result.len(), 2);
        assert_eq!(result.curve(), vec![(0.0, 80.0), (100.0, 70.0)]);
        assert_eq!(result.sample(1), Some((1.0, 0.0, 70.0, 70.0)));
        assert_eq!(result.sample(2), None);
    }
}

//! Per-split reward formula
//!
//! Rewards follow a boosted working-balance scheme: every deposit counts for
//! a base 40% of its balance, plus a bonus proportional to the depositor's
//! share of the voting asset, capped at the raw balance. The primary venue
//! pools the other depositors' stake with the user's routed stake, keeps a
//! fee, and distributes the remainder pro rata. The user's direct deposit at
//! the reference venue carries no voting asset, so it only gets the base
//! weighting.

use crate::model::{SampleBreakdown, ScenarioInputs};

/// Fraction of a balance that always counts towards the working balance
pub const BASE_BOOST_WEIGHT: f64 = 0.4;

/// Weight of the voting-asset share in the working balance
pub const HOLDINGS_BOOST_WEIGHT: f64 = 0.6;

/// Highest fee the primary venue can charge
pub const MAX_VENUE_FEE: f64 = 0.17;

/// Evaluate the reward formula for a single split fraction.
///
/// A zero (or negative) pool fraction or working supply yields zero for the
/// quantities divided by it: no working capital, no reward.
pub fn evaluate_split(inputs: &ScenarioInputs, split: f64) -> SampleBreakdown {
    let dominance = inputs.pool_dominance;

    let user_primary_frac = dominance * split;
    let primary_pool_frac = (1.0 - dominance) + user_primary_frac;
    let user_share_of_primary = if primary_pool_frac > 0.0 {
        user_primary_frac / primary_pool_frac
    } else {
        0.0
    };

    let primary_balance = primary_pool_frac * 100.0;
    let primary_working_balance = (BASE_BOOST_WEIGHT * primary_balance
        + HOLDINGS_BOOST_WEIGHT * 100.0 * inputs.holdings_ratio())
        .min(primary_balance);
    let reference_working_balance = BASE_BOOST_WEIGHT * (100.0 - primary_balance);
    let working_supply = primary_working_balance + reference_working_balance;

    let (reference_reward, gross_primary_reward) = if working_supply > 0.0 {
        (
            100.0 * reference_working_balance / working_supply,
            100.0 * primary_working_balance / working_supply,
        )
    } else {
        (0.0, 0.0)
    };

    let primary_reward = gross_primary_reward * (1.0 - inputs.venue_fee) * user_share_of_primary;

    SampleBreakdown {
        split,
        user_primary_frac,
        primary_pool_frac,
        user_share_of_primary,
        primary_working_balance,
        reference_working_balance,
        working_supply,
        reference_reward,
        gross_primary_reward,
        primary_reward,
        total_reward: reference_reward + primary_reward,
    }
}

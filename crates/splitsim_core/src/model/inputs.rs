//! Scenario inputs and their valid ranges

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::reward::MAX_VENUE_FEE;

/// Default number of samples across the split domain
pub const DEFAULT_RESOLUTION: usize = 2000;

/// Fewest samples that still include both endpoints of the split domain
pub const MIN_RESOLUTION: usize = 2;

/// Smallest accepted total supply of the voting asset
pub const MIN_TOTAL_SUPPLY: f64 = 0.1;

/// Valid `(min, max)` pool dominance fractions
pub const POOL_DOMINANCE_RANGE: (f64, f64) = (0.01, 1.0);

/// Valid `(min, max)` venue fee fractions
pub const VENUE_FEE_RANGE: (f64, f64) = (0.0, MAX_VENUE_FEE);

/// Valid `(min, max)` highlighted split fractions
pub const HIGHLIGHT_SPLIT_RANGE: (f64, f64) = (0.0, 1.0);

/// The scalar inputs of a single what-if evaluation.
///
/// Amounts of the voting asset share a unit (e.g. millions); only their ratio
/// enters the reward formula. Fractions are in `[0, 1]`, not percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Voting asset held by the primary venue
    pub primary_holdings: f64,
    /// Total voting asset in existence
    pub total_supply: f64,
    /// Fraction of the reference pool held by the modeled user
    pub pool_dominance: f64,
    /// Fraction of gross reward the primary venue keeps
    pub venue_fee: f64,
    /// Split fraction reported explicitly in the summary
    pub highlight_split: f64,
    /// Number of samples across the split domain
    pub resolution: usize,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            primary_holdings: 118.0,
            total_supply: 794.0,
            pool_dominance: 0.93,
            venue_fee: MAX_VENUE_FEE,
            highlight_split: 0.5,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl ScenarioInputs {
    /// Share of the voting asset controlled by the primary venue
    pub fn holdings_ratio(&self) -> f64 {
        self.primary_holdings / self.total_supply
    }

    /// Every range violation in these inputs, in field order.
    pub fn violations(&self) -> Vec<InputError> {
        let mut errors = Vec::new();

        let checks: [(&'static str, f64, f64, f64); 5] = [
            ("primary_holdings", self.primary_holdings, 0.0, f64::INFINITY),
            ("total_supply", self.total_supply, MIN_TOTAL_SUPPLY, f64::INFINITY),
            (
                "pool_dominance",
                self.pool_dominance,
                POOL_DOMINANCE_RANGE.0,
                POOL_DOMINANCE_RANGE.1,
            ),
            ("venue_fee", self.venue_fee, VENUE_FEE_RANGE.0, VENUE_FEE_RANGE.1),
            (
                "highlight_split",
                self.highlight_split,
                HIGHLIGHT_SPLIT_RANGE.0,
                HIGHLIGHT_SPLIT_RANGE.1,
            ),
        ];

        for (field, value, min, max) in checks {
            if !value.is_finite() {
                errors.push(InputError::NotFinite { field, value });
            } else if value < min || value > max {
                errors.push(InputError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }

        if self.resolution < MIN_RESOLUTION {
            errors.push(InputError::ResolutionTooLow {
                resolution: self.resolution,
                min: MIN_RESOLUTION,
            });
        }

        errors
    }

    /// Check all inputs, returning the first violation found.
    pub fn validate(&self) -> Result<(), InputError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Copy of these inputs forced into their valid ranges.
    ///
    /// Non-finite values fall back to the corresponding default.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };

        Self {
            primary_holdings: finite_or(self.primary_holdings, defaults.primary_holdings).max(0.0),
            total_supply: finite_or(self.total_supply, defaults.total_supply)
                .max(MIN_TOTAL_SUPPLY),
            pool_dominance: finite_or(self.pool_dominance, defaults.pool_dominance)
                .clamp(POOL_DOMINANCE_RANGE.0, POOL_DOMINANCE_RANGE.1),
            venue_fee: finite_or(self.venue_fee, defaults.venue_fee)
                .clamp(VENUE_FEE_RANGE.0, VENUE_FEE_RANGE.1),
            highlight_split: finite_or(self.highlight_split, defaults.highlight_split)
                .clamp(HIGHLIGHT_SPLIT_RANGE.0, HIGHLIGHT_SPLIT_RANGE.1),
            resolution: self.resolution.max(MIN_RESOLUTION),
        }
    }
}

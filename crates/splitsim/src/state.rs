//! Application state: current inputs, the slider selection and the most
//! recent sweep.
//!
//! Every input change clamps the inputs and recomputes the sweep and its
//! summary before returning, so rendering never sees a stale or partial
//! result.

use splitsim_core::model::{
    HIGHLIGHT_SPLIT_RANGE, MIN_TOTAL_SUPPLY, POOL_DOMINANCE_RANGE, VENUE_FEE_RANGE,
};
use splitsim_core::{ScenarioInputs, Summary, SweepResult, summarize, sweep};

/// Input adjustable from the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    PrimaryHoldings,
    TotalSupply,
    PoolDominance,
    VenueFee,
    HighlightSplit,
}

impl Slider {
    pub const ALL: [Slider; 5] = [
        Slider::PrimaryHoldings,
        Slider::TotalSupply,
        Slider::PoolDominance,
        Slider::VenueFee,
        Slider::HighlightSplit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Slider::PrimaryHoldings => "Venue voting holdings",
            Slider::TotalSupply => "Total voting supply",
            Slider::PoolDominance => "Pool dominance (%)",
            Slider::VenueFee => "Venue fee (%)",
            Slider::HighlightSplit => "Highlighted split (%)",
        }
    }

    fn is_percent(&self) -> bool {
        matches!(
            self,
            Slider::PoolDominance | Slider::VenueFee | Slider::HighlightSplit
        )
    }

    /// Step per key press, in display units
    pub fn step(&self) -> f64 {
        match self {
            Slider::VenueFee => 0.1,
            _ => 1.0,
        }
    }

    /// `(min, max)` in display units
    pub fn bounds(&self) -> (f64, f64) {
        let pct = |(min, max): (f64, f64)| (min * 100.0, max * 100.0);
        match self {
            Slider::PrimaryHoldings => (0.0, f64::INFINITY),
            Slider::TotalSupply => (MIN_TOTAL_SUPPLY, f64::INFINITY),
            Slider::PoolDominance => pct(POOL_DOMINANCE_RANGE),
            Slider::VenueFee => pct(VENUE_FEE_RANGE),
            Slider::HighlightSplit => pct(HIGHLIGHT_SPLIT_RANGE),
        }
    }

    /// Current value in display units
    pub fn value(&self, inputs: &ScenarioInputs) -> f64 {
        let raw = match self {
            Slider::PrimaryHoldings => inputs.primary_holdings,
            Slider::TotalSupply => inputs.total_supply,
            Slider::PoolDominance => inputs.pool_dominance,
            Slider::VenueFee => inputs.venue_fee,
            Slider::HighlightSplit => inputs.highlight_split,
        };
        if self.is_percent() { raw * 100.0 } else { raw }
    }

    /// Set from a display-unit value, clamped to the slider bounds
    pub fn set(&self, inputs: &mut ScenarioInputs, value: f64) {
        let (min, max) = self.bounds();
        let value = value.clamp(min, max);
        let raw = if self.is_percent() { value / 100.0 } else { value };
        match self {
            Slider::PrimaryHoldings => inputs.primary_holdings = raw,
            Slider::TotalSupply => inputs.total_supply = raw,
            Slider::PoolDominance => inputs.pool_dominance = raw,
            Slider::VenueFee => inputs.venue_fee = raw,
            Slider::HighlightSplit => inputs.highlight_split = raw,
        }
    }

    pub fn next(&self) -> Slider {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Slider {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct AppState {
    pub inputs: ScenarioInputs,
    /// Values restored by a reset
    pub defaults: ScenarioInputs,
    pub selected: Slider,
    pub result: SweepResult,
    pub summary: Option<Summary>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScenarioInputs::default())
    }
}

impl AppState {
    /// Start from `inputs`, clamping anything out of range and reporting it.
    pub fn new(inputs: ScenarioInputs) -> Self {
        let violations = inputs.violations();
        let error_message = if violations.is_empty() {
            None
        } else {
            for err in &violations {
                tracing::warn!(field = err.field(), error = %err, "Clamping scenario input");
            }
            let messages: Vec<String> = violations.iter().map(|e| e.to_string()).collect();
            Some(format!("clamped: {}", messages.join("; ")))
        };

        let inputs = inputs.clamped();
        let mut state = Self {
            inputs,
            defaults: inputs,
            selected: Slider::PrimaryHoldings,
            result: SweepResult::default(),
            summary: None,
            error_message,
            exit: false,
        };
        state.recompute();
        state
    }

    /// Re-run the sweep and summary for the current inputs
    pub fn recompute(&mut self) {
        self.result = sweep(&self.inputs);
        self.summary = summarize(&self.result, self.inputs.highlight_split);

        if let Some(summary) = &self.summary {
            tracing::debug!(
                resolution = self.inputs.resolution,
                optimal_split = summary.optimal_split,
                max_reward = summary.max_reward,
                highlighted_reward = summary.highlighted_reward,
                "Recomputed sweep"
            );
        }
    }

    /// Move the selected slider by `steps` steps (negative moves down).
    ///
    /// The new value is snapped to the slider's step grid.
    pub fn adjust_selected(&mut self, steps: f64) {
        let slider = self.selected;
        let step = slider.step();
        let target = slider.value(&self.inputs) + steps * step;
        let snapped = (target / step).round() * step;

        let before = self.inputs;
        slider.set(&mut self.inputs, snapped);
        if self.inputs != before {
            tracing::debug!(slider = slider.label(), value = slider.value(&self.inputs), "Input changed");
            self.recompute();
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    /// Restore the inputs the app started with
    pub fn reset(&mut self) {
        if self.inputs != self.defaults {
            self.inputs = self.defaults;
            tracing::info!("Inputs reset to defaults");
            self.recompute();
        }
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_summary() {
        let state = AppState::default();
        assert_eq!(state.result.len(), 2000);
        assert!(state.summary.is_some());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_invalid_inputs_are_clamped_and_reported() {
        let inputs = ScenarioInputs {
            venue_fee: 0.5,
            ..Default::default()
        };
        let state = AppState::new(inputs);

        assert_eq!(state.inputs.venue_fee, 0.17);
        assert_eq!(state.defaults.venue_fee, 0.17);
        let msg = state.error_message.unwrap();
        assert!(msg.contains("venue_fee"), "{msg}");
    }

    #[test]
    fn test_fee_steps_stay_on_grid() {
        let mut state = AppState::default();
        state.selected = Slider::VenueFee;

        state.adjust_selected(-3.0);
        assert!((state.inputs.venue_fee - 0.167).abs() < 1e-12);

        state.adjust_selected(10.0);
        assert_eq!(state.inputs.venue_fee, 0.17);
    }

    #[test]
    fn test_adjust_recomputes_summary() {
        let mut state = AppState::default();
        state.selected = Slider::HighlightSplit;
        let before = state.summary.unwrap();

        state.adjust_selected(-50.0);
        let after = state.summary.unwrap();

        assert_eq!(state.inputs.highlight_split, 0.0);
        assert_eq!(after.highlighted_index, 0);
        assert_ne!(before.highlighted_index, after.highlighted_index);
        assert_eq!(after.optimal_index, before.optimal_index);
    }

    #[test]
    fn test_dominance_lower_bound() {
        let mut state = AppState::default();
        state.selected = Slider::PoolDominance;

        state.adjust_selected(-500.0);
        assert_eq!(state.inputs.pool_dominance, 0.01);
        assert!(state.inputs.validate().is_ok());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState::default();
        state.selected = Slider::PrimaryHoldings;
        state.adjust_selected(10.0);
        assert_eq!(state.inputs.primary_holdings, 128.0);

        state.reset();
        assert_eq!(state.inputs, ScenarioInputs::default());
        assert_eq!(state.result, sweep(&ScenarioInputs::default()));
    }

    #[test]
    fn test_selection_wraps() {
        assert_eq!(Slider::HighlightSplit.next(), Slider::PrimaryHoldings);
        assert_eq!(Slider::PrimaryHoldings.prev(), Slider::HighlightSplit);
    }
}

mod inputs;
mod results;

pub use inputs::{
    DEFAULT_RESOLUTION, HIGHLIGHT_SPLIT_RANGE, MIN_RESOLUTION, MIN_TOTAL_SUPPLY,
    POOL_DOMINANCE_RANGE, ScenarioInputs, VENUE_FEE_RANGE,
};
pub use results::{SampleBreakdown, Summary, SweepResult};

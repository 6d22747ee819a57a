//! Terminal front end for the reward split simulator
//!
//! Sliders on the left adjust the scenario inputs; every change re-runs the
//! sweep from `splitsim_core` and redraws the reward curve and summary. A
//! headless mode prints the summary as markdown instead.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod report;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;

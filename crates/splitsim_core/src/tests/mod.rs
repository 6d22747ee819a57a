//! Integration tests for the reward split model
//!
//! Tests are organized by topic:
//! - `properties` - Invariants that hold for every valid input
//! - `scenario` - The reference scenario and its empirical optimum
//! - `summary` - Highlight lookup and arg-max behaviour over full sweeps

mod scenario;
mod summary;

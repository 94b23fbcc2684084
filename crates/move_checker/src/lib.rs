//! Scenario runner for the board_core move validator
//!
//! A scenario is a TOML file describing a board (an empty or standard setup
//! plus individual placements) and a list of move queries, each optionally
//! carrying the expected verdict.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p move_checker -- run crates/move_checker/scenarios/sliding_paths.toml
//! cargo run -p move_checker -- run my_scenario.toml --format json
//! ```

mod report;
mod scenario;

pub use report::*;
pub use scenario::*;

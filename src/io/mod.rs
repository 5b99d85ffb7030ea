//! Scenario I/O around the routing core.
//!
//! - [`parse_scenarios`] / [`write_scenarios`] — the scenario input stream
//! - [`write_routes`] / [`write_routes_json`] — the route output stream
//! - [`random_scenario`] — uniform random scenario generation
//! - [`report`] — console reports (matrix, tree, legs, trips, summary)

mod output;
pub mod report;
mod scenario;

pub use output::{write_routes, write_routes_json, ScenarioResult};
pub use scenario::{parse_scenarios, random_scenario, write_scenarios, Scenario};

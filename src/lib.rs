//! # pickup-routing
//!
//! Route construction for a collection agent that starts at a base at the
//! origin, must visit every point of a scenario, and can carry at most `k`
//! points per trip before returning to the base.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Capacity, Stop, Route, Violation)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`tree`] — Prim's minimum spanning tree and depth-first traversal
//! - [`constructive`] — Route builders (spanning tree, nearest neighbor) and capacity segmentation
//! - [`evaluation`] — Route length and invariant checks
//! - [`session`] — Per-scenario state with cached derived structures
//! - [`config`] — Solver options
//! - [`io`] — Scenario parsing, route output, and console reports

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod session;
pub mod tree;

pub use error::RoutingError;

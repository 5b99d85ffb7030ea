//! Route evaluation: total length, per-leg lengths, and invariant checks.

mod evaluator;

pub use evaluator::{leg_distances, route_distance, validate_route};

//! Domain model types for capacity-constrained pickup routing.
//!
//! Provides points with stable insertion-order identifiers, the per-trip
//! capacity, routes as ordered sequences of stops (with the base as a
//! dedicated sentinel), and the violations a route can exhibit.

mod capacity;
mod point;
mod route;
mod violation;

pub use capacity::Capacity;
pub(crate) use point::distance;
pub use point::Point;
pub use route::{Route, Stop};
pub use violation::Violation;

//! Route invariant violations.

use serde::Serialize;

/// A broken route invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A trip collected more points than the capacity allows.
    CapacityExceeded {
        /// 0-based trip index.
        trip_index: usize,
        /// Points collected on that trip.
        load: usize,
        /// Capacity k.
        capacity: usize,
    },
    /// A point of the scenario never appears in the route.
    MissingPoint {
        /// Point ID.
        point_id: usize,
    },
    /// A point appears more than once.
    DuplicateVisit {
        /// Point ID.
        point_id: usize,
    },
    /// The route refers to a point ID outside the scenario.
    UnknownPoint {
        /// Point ID.
        point_id: usize,
    },
    /// A non-empty route does not finish at the base.
    NotEndedAtBase,
}

//! Per-trip carrying capacity.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Maximum number of points collected before a mandatory return to base.
///
/// Always at least 1, so the planners never have to guard against an
/// empty trip.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::Capacity;
///
/// let k = Capacity::new(3).unwrap();
/// assert_eq!(k.get(), 3);
/// assert!(Capacity::new(0).is_err());
/// assert!(Capacity::new(-2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Capacity(usize);

impl Capacity {
    /// Creates a capacity, rejecting values below 1.
    pub fn new(k: i64) -> Result<Self, RoutingError> {
        if k < 1 {
            return Err(RoutingError::InvalidCapacity(k));
        }
        usize::try_from(k)
            .map(Self)
            .map_err(|_| RoutingError::InvalidCapacity(k))
    }

    /// Capacity as a count of points.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of trips needed to collect `points` points.
    pub fn trips_for(self, points: usize) -> usize {
        points.div_ceil(self.0)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = RoutingError;

    fn try_from(k: i64) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl From<Capacity> for i64 {
    fn from(k: Capacity) -> Self {
        k.0 as i64
    }
}

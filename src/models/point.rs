//! Point type.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// A product location the agent must collect.
///
/// Points are numbered in insertion order starting at 0. The base is not a
/// `Point`; it lives at the origin and is represented by
/// [`Stop::Base`](super::Stop::Base) inside routes.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::Point;
///
/// let p = Point::new(3, 3.0, 4.0).unwrap();
/// assert_eq!(p.id(), 3);
/// assert!((p.distance_to_base() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    ///
    /// Returns an error if either coordinate is NaN or infinite.
    pub fn new(id: usize, x: f64, y: f64) -> Result<Self, RoutingError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RoutingError::NonFiniteCoordinate { x, y });
        }
        Ok(Self { id, x, y })
    }

    /// Insertion-order identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to the base at the origin.
    pub fn distance_to_base(&self) -> f64 {
        distance(self.x, self.y, 0.0, 0.0)
    }
}

/// Unchecked wire form of [`Point`].
#[derive(Deserialize)]
struct RawPoint {
    id: usize,
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = RoutingError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::new(raw.id, raw.x, raw.y)
    }
}

/// Euclidean distance between two coordinate pairs.
pub(crate) fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

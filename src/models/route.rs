//! Route and stop types.

use serde::{Deserialize, Serialize};

use super::Point;

/// One entry of a route: either the base or a collected point.
///
/// The base is a dedicated variant rather than a point at the origin, so a
/// product that happens to sit at (0, 0) is never mistaken for a trip
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stop {
    /// Return to (or departure from) the base at the origin.
    Base,
    /// Collection of a product point.
    Point(Point),
}

impl Stop {
    /// Coordinates of this stop.
    pub fn position(&self) -> (f64, f64) {
        match self {
            Stop::Base => (0.0, 0.0),
            Stop::Point(p) => (p.x(), p.y()),
        }
    }

    /// Returns `true` for the base sentinel.
    pub fn is_base(&self) -> bool {
        matches!(self, Stop::Base)
    }

    /// The collected point, if this is not the base.
    pub fn point(&self) -> Option<&Point> {
        match self {
            Stop::Base => None,
            Stop::Point(p) => Some(p),
        }
    }
}

/// An ordered sequence of stops covering every trip of one scenario.
///
/// A non-empty route produced by the planners starts with [`Stop::Base`]
/// and ends with [`Stop::Base`]; base stops in between mark trip
/// boundaries. An empty point set gives an empty route.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Point, Route};
///
/// let mut route = Route::new();
/// route.push_base();
/// route.push_point(Point::new(0, 1.0, 0.0).unwrap());
/// route.push_base();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.num_points(), 1);
/// assert!(route.ends_at_base());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Builds a route from an explicit stop sequence.
    pub fn from_stops(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Appends a point visit.
    pub fn push_point(&mut self, point: Point) {
        self.stops.push(Stop::Point(point));
    }

    /// Appends a base stop.
    pub fn push_base(&mut self) {
        self.stops.push(Stop::Base);
    }

    /// Returns the ordered stops, base markers included.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops, base markers included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterates over the collected points in visiting order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.stops.iter().filter_map(Stop::point)
    }

    /// Number of collected points (base markers excluded).
    pub fn num_points(&self) -> usize {
        self.points().count()
    }

    /// Point IDs in visiting order.
    pub fn point_ids(&self) -> Vec<usize> {
        self.points().map(Point::id).collect()
    }

    /// Returns `true` if the last stop is the base.
    pub fn ends_at_base(&self) -> bool {
        matches!(self.stops.last(), Some(Stop::Base))
    }

    /// Splits the route into trips: maximal runs of points between base
    /// stops. Empty runs (e.g. the leading base) are skipped.
    pub fn trips(&self) -> Vec<Vec<Point>> {
        self.stops
            .split(Stop::is_base)
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().filter_map(Stop::point).copied().collect())
            .collect()
    }

    /// Number of trips in this route.
    pub fn num_trips(&self) -> usize {
        self.trips().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: usize, x: f64, y: f64) -> Point {
        Point::new(id, x, y).expect("finite")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.num_points(), 0);
        assert!(!r.ends_at_base());
        assert!(r.trips().is_empty());
    }

    #[test]
    fn test_route_trips() {
        let mut r = Route::new();
        r.push_base();
        r.push_point(p(0, 1.0, 0.0));
        r.push_point(p(1, 2.0, 0.0));
        r.push_base();
        r.push_point(p(2, 0.0, 1.0));
        r.push_base();

        assert_eq!(r.len(), 6);
        assert_eq!(r.point_ids(), vec![0, 1, 2]);
        assert_eq!(r.num_trips(), 2);
        let trips = r.trips();
        assert_eq!(trips[0].len(), 2);
        assert_eq!(trips[1][0].id(), 2);
    }

    #[test]
    fn test_point_at_origin_is_not_base() {
        let origin = p(0, 0.0, 0.0);
        let r = Route::from_stops(vec![Stop::Base, Stop::Point(origin)]);
        assert!(!r.ends_at_base());
        assert_eq!(r.num_points(), 1);
        assert_eq!(Stop::Point(origin).position(), Stop::Base.position());
    }

    #[test]
    fn test_stop_serde_shape() {
        let json = serde_json::to_string(&Stop::Base).expect("serializes");
        assert_eq!(json, r#"{"kind":"base"}"#);
        let stop = Stop::Point(p(4, 1.5, 2.0));
        let json = serde_json::to_string(&stop).expect("serializes");
        let back: Stop = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, stop);
    }
}

//! Route output stream.
//!
//! # Format
//!
//! ```text
//! <scenario count>
//! <k>
//! <number of route entries>
//! <x> <y>        (one line per entry, two decimals, base included)
//! ...
//! ```

use std::io::Write;

use serde::Serialize;

use crate::error::RoutingError;
use crate::evaluation::route_distance;
use crate::models::{Capacity, Route};

/// The solved route of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    /// Per-trip capacity the route was built for.
    pub capacity: Capacity,
    /// The route, base stops included.
    pub route: Route,
    /// Total travel distance of the route.
    pub total_distance: f64,
}

impl ScenarioResult {
    /// Wraps a route, measuring its total distance.
    pub fn new(capacity: Capacity, route: Route) -> Self {
        let total_distance = route_distance(&route);
        Self {
            capacity,
            route,
            total_distance,
        }
    }
}

/// Writes all results in the route output format.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Point, Route};
/// use pickup_routing::io::{write_routes, ScenarioResult};
///
/// let mut route = Route::new();
/// route.push_base();
/// route.push_point(Point::new(0, 5.0, 5.0).unwrap());
/// route.push_base();
///
/// let mut out = Vec::new();
/// write_routes(&mut out, &[ScenarioResult::new(Capacity::new(3).unwrap(), route)]).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "1\n3\n3\n0.00 0.00\n5.00 5.00\n0.00 0.00\n"
/// );
/// ```
pub fn write_routes<W: Write>(mut out: W, results: &[ScenarioResult]) -> Result<(), RoutingError> {
    writeln!(out, "{}", results.len())?;
    for result in results {
        writeln!(out, "{}", result.capacity.get())?;
        writeln!(out, "{}", result.route.len())?;
        for stop in result.route.stops() {
            let (x, y) = stop.position();
            writeln!(out, "{x:.2} {y:.2}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes all results as a pretty-printed JSON array.
pub fn write_routes_json<W: Write>(
    mut out: W,
    results: &[ScenarioResult],
) -> Result<(), RoutingError> {
    serde_json::to_writer_pretty(&mut out, results).map_err(std::io::Error::from)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn sample() -> ScenarioResult {
        let mut route = Route::new();
        route.push_base();
        route.push_point(Point::new(0, 1.0, 0.0).expect("finite"));
        route.push_point(Point::new(1, 2.0, 0.0).expect("finite"));
        route.push_base();
        route.push_point(Point::new(2, 0.0, 1.0).expect("finite"));
        route.push_base();
        ScenarioResult::new(Capacity::new(2).expect("valid"), route)
    }

    #[test]
    fn test_result_measures_distance() {
        assert!((sample().total_distance - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_write_routes() {
        let empty = ScenarioResult::new(Capacity::new(4).expect("valid"), Route::new());
        let mut out = Vec::new();
        write_routes(&mut out, &[sample(), empty]).expect("in-memory write");
        let text = String::from_utf8(out).expect("utf8");
        let expected = "2\n\
            2\n6\n0.00 0.00\n1.00 0.00\n2.00 0.00\n0.00 0.00\n0.00 1.00\n0.00 0.00\n\
            4\n0\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_routes_rounds_to_two_decimals() {
        let mut route = Route::new();
        route.push_base();
        route.push_point(Point::new(0, 1.0078, -2.3312).expect("finite"));
        route.push_base();
        let mut out = Vec::new();
        write_routes(&mut out, &[ScenarioResult::new(Capacity::new(1).expect("valid"), route)])
            .expect("in-memory write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("1.01 -2.33\n"));
    }

    #[test]
    fn test_write_routes_json() {
        let mut out = Vec::new();
        write_routes_json(&mut out, &[sample()]).expect("in-memory write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value[0]["capacity"], 2);
        assert_eq!(value[0]["route"]["stops"][0]["kind"], "base");
        assert_eq!(value[0]["route"]["stops"][1]["kind"], "point");
        assert_eq!(value[0]["route"]["stops"][1]["x"], 1.0);
    }
}

//! Route length and invariant checks.

use crate::models::{distance, Capacity, Route, Violation};

/// Total travel distance of a route, starting from the base.
///
/// Sums the Euclidean length of every leg: base to the first stop, then
/// each consecutive pair. A leading base stop contributes a zero-length
/// leg, so routes with or without it measure the same. An empty route
/// measures 0.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Point, Route};
/// use pickup_routing::evaluation::route_distance;
///
/// let mut route = Route::new();
/// route.push_point(Point::new(0, 3.0, 4.0).unwrap());
/// route.push_base();
/// assert!((route_distance(&route) - 10.0).abs() < 1e-10);
/// assert_eq!(route_distance(&Route::new()), 0.0);
/// ```
pub fn route_distance(route: &Route) -> f64 {
    leg_distances(route).iter().sum()
}

/// Length of each leg of a route, in order, starting from the base.
///
/// The result has one entry per stop.
pub fn leg_distances(route: &Route) -> Vec<f64> {
    let mut prev = (0.0, 0.0);
    route
        .stops()
        .iter()
        .map(|stop| {
            let next = stop.position();
            let d = distance(prev.0, prev.1, next.0, next.1);
            prev = next;
            d
        })
        .collect()
}

/// Checks a route against a scenario of `point_count` points and the
/// given capacity.
///
/// Reports every trip over capacity, every point missing, visited twice
/// or unknown, and a non-empty route that does not finish at the base.
/// A feasible route yields an empty list.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Point, Route, Violation};
/// use pickup_routing::evaluation::validate_route;
///
/// let mut route = Route::new();
/// route.push_base();
/// route.push_point(Point::new(0, 1.0, 0.0).unwrap());
///
/// let violations = validate_route(&route, 2, Capacity::new(1).unwrap());
/// assert_eq!(
///     violations,
///     vec![Violation::MissingPoint { point_id: 1 }, Violation::NotEndedAtBase]
/// );
/// ```
pub fn validate_route(route: &Route, point_count: usize, capacity: Capacity) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (trip_index, trip) in route.trips().iter().enumerate() {
        if trip.len() > capacity.get() {
            violations.push(Violation::CapacityExceeded {
                trip_index,
                load: trip.len(),
                capacity: capacity.get(),
            });
        }
    }

    let mut seen = vec![false; point_count];
    for id in route.point_ids() {
        match seen.get_mut(id) {
            None => violations.push(Violation::UnknownPoint { point_id: id }),
            Some(flag) if *flag => violations.push(Violation::DuplicateVisit { point_id: id }),
            Some(flag) => *flag = true,
        }
    }
    for (point_id, visited) in seen.into_iter().enumerate() {
        if !visited {
            violations.push(Violation::MissingPoint { point_id });
        }
    }

    if !route.is_empty() && !route.ends_at_base() {
        violations.push(Violation::NotEndedAtBase);
    }

    violations
}

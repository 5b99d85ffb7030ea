//! Capacity segmentation of a visiting order.

use crate::models::{Capacity, Point, Route};

/// Cuts a visiting order into round trips of at most `capacity` points.
///
/// The route departs from the base, returns to the base after every
/// `capacity` points, and always finishes at the base. An empty order
/// gives an empty route with no base stops.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Point};
/// use pickup_routing::constructive::segment;
///
/// let order: Vec<Point> = (0..5)
///     .map(|i| Point::new(i, i as f64 + 1.0, 0.0).unwrap())
///     .collect();
/// let route = segment(&order, Capacity::new(2).unwrap());
/// // base, p0, p1, base, p2, p3, base, p4, base
/// assert_eq!(route.len(), 9);
/// assert_eq!(route.num_trips(), 3);
/// ```
pub fn segment(order: &[Point], capacity: Capacity) -> Route {
    let mut route = Route::new();
    if order.is_empty() {
        return route;
    }

    route.push_base();
    for trip in order.chunks(capacity.get()) {
        for &point in trip {
            route.push_point(point);
        }
        route.push_base();
    }
    route
}

//! Nearest-neighbor constructive heuristic.
//!
//! Builds trips greedily: starting from the base, always collect the
//! nearest uncollected point. After `k` points, or when nothing is left,
//! return to the base and start the next trip from there.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for capacitated routing. It
//! has no lookahead and is usually beaten by the spanning-tree planner, but
//! it always produces a valid route.

use crate::models::{distance, Capacity, Point, Route};

/// Constructs a route with the nearest-neighbor heuristic.
///
/// Distances from the current position are measured on the fly (the
/// current position may be the base, which is not in any matrix). Among
/// equidistant candidates the lowest index wins.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Point};
/// use pickup_routing::constructive::nearest_neighbor;
/// use pickup_routing::evaluation::route_distance;
///
/// let points = vec![
///     Point::new(0, 1.0, 0.0).unwrap(),
///     Point::new(1, 2.0, 0.0).unwrap(),
///     Point::new(2, 0.0, 1.0).unwrap(),
/// ];
/// let route = nearest_neighbor(&points, Capacity::new(2).unwrap());
/// assert_eq!(route.point_ids(), vec![0, 1, 2]);
/// assert_eq!(route.len(), 6);
/// assert!((route_distance(&route) - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(points: &[Point], capacity: Capacity) -> Route {
    let mut route = Route::new();
    let n = points.len();
    if n == 0 {
        return route;
    }

    let mut visited = vec![false; n];
    let mut pending = n;
    route.push_base();

    while pending > 0 {
        let mut current = (0.0, 0.0);
        let mut in_trip = 0;

        while in_trip < capacity.get() && pending > 0 {
            // Find nearest uncollected point
            let mut best: Option<(usize, f64)> = None;
            for (i, p) in points.iter().enumerate() {
                if visited[i] {
                    continue;
                }
                let d = distance(current.0, current.1, p.x(), p.y());
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((i, d));
                }
            }

            let Some((next, _)) = best else {
                break;
            };
            visited[next] = true;
            route.push_point(points[next]);
            current = (points[next].x(), points[next].y());
            in_trip += 1;
            pending -= 1;
        }

        route.push_base();
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::route_distance;
    use crate::models::Stop;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i, x, y).expect("finite"))
            .collect()
    }

    fn k(n: i64) -> Capacity {
        Capacity::new(n).expect("valid")
    }

    #[test]
    fn test_nn_empty() {
        let route = nearest_neighbor(&[], k(3));
        assert!(route.is_empty());
        assert_eq!(route_distance(&route), 0.0);
    }

    #[test]
    fn test_nn_single_point() {
        let route = nearest_neighbor(&points(&[(5.0, 5.0)]), k(3));
        assert_eq!(route.len(), 3);
        assert_eq!(route.stops()[0], Stop::Base);
        assert_eq!(route.point_ids(), vec![0]);
        assert!(route.ends_at_base());
        assert!((route_distance(&route) - 2.0 * 50f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_nn_capacity_split() {
        let route = nearest_neighbor(&points(&[(1.0, 0.0), (2.0, 0.0), (0.0, 1.0)]), k(2));
        let expected = [
            Stop::Base,
            Stop::Point(Point::new(0, 1.0, 0.0).expect("finite")),
            Stop::Point(Point::new(1, 2.0, 0.0).expect("finite")),
            Stop::Base,
            Stop::Point(Point::new(2, 0.0, 1.0).expect("finite")),
            Stop::Base,
        ];
        assert_eq!(route.stops(), &expected);
        // 1 + 1 + 2 + 1 + 1
        assert!((route_distance(&route) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let route = nearest_neighbor(&points(&[(10.0, 0.0), (1.0, 0.0)]), k(5));
        // Point 1 first (distance 1), then point 0 (distance 9)
        assert_eq!(route.point_ids(), vec![1, 0]);
    }

    #[test]
    fn test_nn_tie_goes_to_lowest_index() {
        let route = nearest_neighbor(&points(&[(0.0, 3.0), (3.0, 0.0), (-3.0, 0.0)]), k(1));
        assert_eq!(route.point_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_each_trip_restarts_at_base() {
        // After collecting (1,0) with k=1 the next pick is measured from
        // the base, so (-2,0) beats (3,0).
        let route = nearest_neighbor(&points(&[(1.0, 0.0), (3.0, 0.0), (-2.0, 0.0)]), k(1));
        assert_eq!(route.point_ids(), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_point_at_origin() {
        let route = nearest_neighbor(&points(&[(0.0, 0.0), (1.0, 0.0)]), k(2));
        assert_eq!(route.point_ids(), vec![0, 1]);
        assert_eq!(route.num_trips(), 1);
        assert!((route_distance(&route) - 2.0).abs() < 1e-10);
    }
}

//! Spanning-tree guided route construction.
//!
//! # Algorithm
//!
//! 1. Build the complete Euclidean distance matrix over the points.
//! 2. Grow a minimum spanning tree with Prim's algorithm, seeded at the
//!    point closest to the base.
//! 3. Linearize the tree by depth-first preorder from the seed.
//! 4. Cut the order into trips of at most `k` points.
//!
//! The preorder walk of an MST is the classic "twice around the tree"
//! tour; the capacity cuts then add the base legs.
//!
//! # Complexity
//!
//! O(n² log n), dominated by Prim's dense heap pushes.

use tracing::debug;

use super::segment;
use crate::distance::{closest_to_base, DistanceMatrix};
use crate::models::{Capacity, Point, Route};
use crate::tree::{depth_first_order, prim, SpanningTree};

/// Constructs a route from a minimum spanning tree over `points`.
///
/// Zero points give an empty route; a single point gives
/// `base, point, base` without building a tree.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Point};
/// use pickup_routing::constructive::spanning_tree_route;
///
/// let points = vec![
///     Point::new(0, 3.0, 0.0).unwrap(),
///     Point::new(1, 1.0, 0.0).unwrap(),
///     Point::new(2, 2.0, 0.0).unwrap(),
/// ];
/// let route = spanning_tree_route(&points, Capacity::new(3).unwrap());
/// // Seeded at (1,0), the point nearest the base
/// assert_eq!(route.point_ids(), vec![1, 2, 0]);
/// assert!(route.ends_at_base());
/// ```
pub fn spanning_tree_route(points: &[Point], capacity: Capacity) -> Route {
    if points.len() <= 1 {
        return segment(points, capacity);
    }
    let distances = DistanceMatrix::from_points(points);
    let tree = build_tree(points, &distances);
    segment(&tree_order(points, &tree), capacity)
}

/// Grows the minimum spanning tree from the point closest to the base.
///
/// Returns an empty tree for an empty point set.
pub fn build_tree(points: &[Point], distances: &DistanceMatrix) -> SpanningTree {
    let seed = closest_to_base(points).unwrap_or(0);
    let tree = prim(distances, seed);
    debug!(
        seed,
        edges = tree.edges().len(),
        weight = tree.total_weight(),
        "spanning tree built"
    );
    tree
}

/// Visiting order of `points` given by the depth-first walk of `tree`.
pub fn tree_order(points: &[Point], tree: &SpanningTree) -> Vec<Point> {
    match tree.root() {
        Some(root) => depth_first_order(tree.adjacency(), root)
            .into_iter()
            .map(|i| points[i])
            .collect(),
        None => Vec::new(),
    }
}

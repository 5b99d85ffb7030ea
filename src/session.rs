//! Per-scenario routing session.
//!
//! A [`RoutingSession`] owns the points of one scenario together with the
//! structures derived from them (distance matrix, spanning tree). Derived
//! structures are built lazily and cached; adding a point drops them so
//! they are rebuilt from the new point set on next use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constructive::{build_tree, nearest_neighbor, segment, tree_order};
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::evaluation::{route_distance, validate_route};
use crate::models::{Capacity, Point, Route, Violation};
use crate::tree::SpanningTree;

/// Route-construction strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Minimum spanning tree, depth-first order, capacity cuts.
    #[default]
    SpanningTree,
    /// Greedy nearest uncollected point, trip by trip.
    NearestNeighbor,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::SpanningTree => "spanning-tree",
            Strategy::NearestNeighbor => "nearest-neighbor",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spanning-tree" | "mst" | "prim" => Ok(Strategy::SpanningTree),
            "nearest-neighbor" | "nn" | "greedy" => Ok(Strategy::NearestNeighbor),
            other => Err(format!(
                "unknown strategy `{other}` (expected spanning-tree or nearest-neighbor)"
            )),
        }
    }
}

/// Points of one scenario plus their cached derived structures.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::Capacity;
/// use pickup_routing::session::{RoutingSession, Strategy};
///
/// let mut session = RoutingSession::new(Capacity::new(2).unwrap());
/// session.add_point(1.0, 0.0).unwrap();
/// session.add_point(2.0, 0.0).unwrap();
/// session.add_point(0.0, 1.0).unwrap();
///
/// let route = session.solve(Strategy::NearestNeighbor);
/// assert_eq!(route.len(), 6);
/// assert!((session.total_distance(&route) - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingSession {
    capacity: Capacity,
    points: Vec<Point>,
    distances: Option<DistanceMatrix>,
    tree: Option<SpanningTree>,
}

impl RoutingSession {
    /// Creates an empty session with the given per-trip capacity.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            points: Vec::new(),
            distances: None,
            tree: None,
        }
    }

    /// Creates a session pre-filled with the given coordinates.
    pub fn with_points(capacity: Capacity, coords: &[(f64, f64)]) -> Result<Self, RoutingError> {
        let mut session = Self::new(capacity);
        for &(x, y) in coords {
            session.add_point(x, y)?;
        }
        Ok(session)
    }

    /// Adds a point and returns its identifier.
    ///
    /// Drops any cached matrix or tree.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<usize, RoutingError> {
        let id = self.points.len();
        self.points.push(Point::new(id, x, y)?);
        self.invalidate();
        Ok(id)
    }

    /// Drops the cached distance matrix and spanning tree.
    pub fn invalidate(&mut self) {
        self.distances = None;
        self.tree = None;
    }

    /// Removes every point, ready for a new scenario.
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Per-trip capacity.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the session has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if a matrix or tree is currently cached.
    pub fn has_cached_structures(&self) -> bool {
        self.distances.is_some() || self.tree.is_some()
    }

    /// Distance matrix over the current points, built on first use.
    pub fn distance_matrix(&mut self) -> &DistanceMatrix {
        let points = &self.points;
        self.distances.get_or_insert_with(|| {
            debug!(points = points.len(), "building distance matrix");
            DistanceMatrix::from_points(points)
        })
    }

    /// Minimum spanning tree over the current points, built on first use.
    pub fn spanning_tree(&mut self) -> &SpanningTree {
        self.derived().1
    }

    fn derived(&mut self) -> (&[Point], &SpanningTree) {
        let points = &self.points;
        let distances = self.distances.get_or_insert_with(|| {
            debug!(points = points.len(), "building distance matrix");
            DistanceMatrix::from_points(points)
        });
        let tree = self.tree.get_or_insert_with(|| build_tree(points, distances));
        (points, tree)
    }

    /// Builds a route with the given strategy.
    ///
    /// Zero points give an empty route. With the spanning-tree strategy a
    /// single point is routed directly, without building a tree.
    pub fn solve(&mut self, strategy: Strategy) -> Route {
        let capacity = self.capacity;
        let route = match strategy {
            Strategy::NearestNeighbor => nearest_neighbor(&self.points, capacity),
            Strategy::SpanningTree if self.points.len() <= 1 => segment(&self.points, capacity),
            Strategy::SpanningTree => {
                let (points, tree) = self.derived();
                segment(&tree_order(points, tree), capacity)
            }
        };

        debug_assert!(self.validate(&route).is_empty());
        info!(
            %strategy,
            points = self.points.len(),
            capacity = capacity.get(),
            stops = route.len(),
            trips = route.num_trips(),
            "route built"
        );
        route
    }

    /// Total travel distance of `route`, starting from the base.
    pub fn total_distance(&self, route: &Route) -> f64 {
        route_distance(route)
    }

    /// Checks `route` against this session's points and capacity.
    pub fn validate(&self, route: &Route) -> Vec<Violation> {
        validate_route(route, self.points.len(), self.capacity)
    }
}

//! Human-readable console reports.
//!
//! Each report is a small borrowing struct that implements
//! [`Display`](fmt::Display), so callers can print it, log it, or collect
//! it into a string.

use std::fmt;

use crate::distance::DistanceMatrix;
use crate::evaluation::leg_distances;
use crate::models::{Capacity, Point, Route, Stop};
use crate::tree::SpanningTree;

const RULE: &str = "---------------------------------------------------------";

/// The points of a scenario, numbered from 1.
pub struct PointList<'a>(pub &'a [Point]);

impl fmt::Display for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Points to collect:")?;
        for p in self.0 {
            writeln!(f, "    P{}: ({:.2}, {:.2})", p.id() + 1, p.x(), p.y())?;
        }
        Ok(())
    }
}

/// Pairwise distance table.
pub struct MatrixReport<'a>(pub &'a DistanceMatrix);

impl fmt::Display for MatrixReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.size();
        writeln!(f, "  Distance matrix:")?;
        write!(f, "  {:>6}", "")?;
        for j in 0..n {
            write!(f, "{:>9}", format!("P{}", j + 1))?;
        }
        writeln!(f)?;
        for i in 0..n {
            write!(f, "  {:>6}", format!("P{}", i + 1))?;
            for d in self.0.row(i) {
                write!(f, "{d:>9.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Spanning tree edges with their weights.
pub struct TreeReport<'a> {
    /// Points the tree spans.
    pub points: &'a [Point],
    /// The tree.
    pub tree: &'a SpanningTree,
}

impl fmt::Display for TreeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Minimum spanning tree ({} edges):", self.tree.edges().len())?;
        for e in self.tree.edges() {
            let (a, b) = (&self.points[e.from], &self.points[e.to]);
            writeln!(
                f,
                "    P{} ({:.2}, {:.2}) -- P{} ({:.2}, {:.2})  w = {:.2}",
                e.from + 1,
                a.x(),
                a.y(),
                e.to + 1,
                b.x(),
                b.y(),
                e.weight
            )?;
        }
        writeln!(f, "    Total tree weight: {:.2}", self.tree.total_weight())
    }
}

/// Every leg of a route with its length and running total.
pub struct LegReport<'a>(pub &'a Route);

impl fmt::Display for LegReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Distance breakdown:")?;
        writeln!(f, "  {RULE}")?;
        let mut from = (0.0, 0.0);
        let mut total = 0.0;
        for (i, (stop, d)) in self.0.stops().iter().zip(leg_distances(self.0)).enumerate() {
            let to = stop.position();
            total += d;
            writeln!(
                f,
                "    Leg {}: ({:.2},{:.2}) -> ({:.2},{:.2}) = {d:.2} [total: {total:.2}]",
                i + 1,
                from.0,
                from.1,
                to.0,
                to.1
            )?;
            from = to;
        }
        writeln!(f, "  {RULE}")?;
        writeln!(f, "  TOTAL: {total:.2}")
    }
}

/// The route grouped by trip.
pub struct TripReport<'a>(pub &'a Route);

impl fmt::Display for TripReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Detailed route:")?;
        writeln!(f, "  {RULE}")?;
        let mut trip = 0;
        let mut in_trip = 0;
        for stop in self.0.stops() {
            match stop {
                Stop::Point(p) => {
                    if in_trip == 0 {
                        trip += 1;
                        writeln!(f, "  Trip {trip}:")?;
                        writeln!(f, "    +- start: base (0.00, 0.00)")?;
                    }
                    in_trip += 1;
                    writeln!(f, "    +-> point {in_trip}: ({:.2}, {:.2})", p.x(), p.y())?;
                }
                Stop::Base if in_trip > 0 => {
                    writeln!(f, "    +-> back to base (0.00, 0.00)")?;
                    in_trip = 0;
                }
                Stop::Base => {}
            }
        }
        Ok(())
    }
}

/// Headline numbers for one scenario.
pub struct Summary<'a> {
    /// Capacity k.
    pub capacity: Capacity,
    /// Number of points in the scenario.
    pub num_points: usize,
    /// The route.
    pub route: &'a Route,
    /// Total route distance.
    pub total_distance: f64,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  * Total distance: {:.2}", self.total_distance)?;
        writeln!(f, "  * Trips: {}", self.capacity.trips_for(self.num_points))?;
        writeln!(
            f,
            "  * Points collected: {}/{}",
            self.route.num_points(),
            self.num_points
        )
    }
}

//! Constructive heuristics for building capacity-bounded pickup routes.
//!
//! - [`spanning_tree_route`] — Prim MST + depth-first order + capacity cuts, O(n² log n)
//! - [`nearest_neighbor`] — Greedy nearest-neighbor trips, O(n²)
//! - [`segment`] — Cuts any visiting order into trips of at most k points, O(n)

mod nearest_neighbor;
mod segment;
mod spanning_tree;

pub use nearest_neighbor::nearest_neighbor;
pub use segment::segment;
pub use spanning_tree::{build_tree, spanning_tree_route, tree_order};

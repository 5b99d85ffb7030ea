//! Spanning-tree construction and traversal.
//!
//! - [`prim`] — Prim's minimum spanning tree with a lazy-deletion heap, O(n² log n)
//! - [`depth_first_order`] — Stack-based depth-first preorder of the tree, O(n)

mod prim;
mod traversal;

pub use prim::{prim, Edge, SpanningTree};
pub use traversal::depth_first_order;

//! Prim's minimum spanning tree over the complete point graph.
//!
//! # Algorithm
//!
//! Grows the tree from a seed point. A binary min-heap holds candidate
//! edges from tree points to outside points. Each step pops the lightest
//! edge; if its far end is already in the tree the entry is stale and is
//! discarded, otherwise the edge is accepted and every edge from the new
//! point to a point still outside the tree is pushed.
//!
//! Stale entries are skipped on pop instead of decreasing keys in place,
//! so the heap only ever needs `push` and `pop`.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of points (dense push pattern).
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::distance::DistanceMatrix;

/// An undirected weighted edge between two point indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Index of the endpoint already in the tree when the edge was chosen.
    pub from: usize,
    /// Index of the endpoint the edge brought into the tree.
    pub to: usize,
    /// Euclidean length.
    pub weight: f64,
}

/// Heap entry: an edge plus its push sequence number.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the lightest edge first,
/// and among equal weights the one pushed first.
#[derive(Debug)]
struct Candidate {
    edge: Edge,
    seq: u64,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys for a min-heap
        other
            .edge
            .weight
            .total_cmp(&self.edge.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// A spanning tree as an edge list plus undirected adjacency lists.
///
/// Neighbors are stored in the order their edges were accepted, which is
/// the order the depth-first traversal visits them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    root: Option<usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl SpanningTree {
    fn with_nodes(root: Option<usize>, n: usize) -> Self {
        Self {
            root,
            edges: Vec::with_capacity(n.saturating_sub(1)),
            adjacency: vec![Vec::new(); n],
        }
    }

    fn add_edge(&mut self, edge: Edge) {
        self.adjacency[edge.from].push(edge.to);
        self.adjacency[edge.to].push(edge.from);
        self.edges.push(edge);
    }

    /// Seed point the tree was grown from, `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Accepted edges, in acceptance order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Adjacency lists indexed by point.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Number of points the tree spans.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Sum of edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

/// Builds a minimum spanning tree with Prim's algorithm, starting at `seed`.
///
/// For zero or one point the tree has no edges. Otherwise it has exactly
/// `n - 1` edges, since the distance graph is complete.
///
/// # Panics
///
/// Panics if `seed` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::Point;
/// use pickup_routing::distance::DistanceMatrix;
/// use pickup_routing::tree::prim;
///
/// let points = vec![
///     Point::new(0, 1.0, 0.0).unwrap(),
///     Point::new(1, 2.0, 0.0).unwrap(),
///     Point::new(2, 0.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tree = prim(&dm, 0);
/// assert_eq!(tree.edges().len(), 2);
/// // (1,0)-(2,0) = 1, (1,0)-(0,1) = √2
/// assert!((tree.total_weight() - (1.0 + 2f64.sqrt())).abs() < 1e-10);
/// ```
pub fn prim(distances: &DistanceMatrix, seed: usize) -> SpanningTree {
    let n = distances.size();
    if n == 0 {
        return SpanningTree::with_nodes(None, 0);
    }
    assert!(seed < n, "seed {seed} out of range for {n} points");

    let mut tree = SpanningTree::with_nodes(Some(seed), n);
    let mut in_tree = vec![false; n];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    let mut push_from = |frontier: &mut BinaryHeap<Candidate>, in_tree: &[bool], u: usize| {
        for (v, &weight) in distances.row(u).iter().enumerate() {
            if !in_tree[v] {
                frontier.push(Candidate {
                    edge: Edge { from: u, to: v, weight },
                    seq,
                });
                seq += 1;
            }
        }
    };

    in_tree[seed] = true;
    push_from(&mut frontier, &in_tree, seed);

    while tree.edges.len() + 1 < n {
        let Some(Candidate { edge, .. }) = frontier.pop() else {
            break;
        };
        if in_tree[edge.to] {
            continue;
        }
        in_tree[edge.to] = true;
        tree.add_edge(edge);
        push_from(&mut frontier, &in_tree, edge.to);
    }

    tree
}

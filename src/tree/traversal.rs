//! Depth-first linearization of a spanning tree.
//!
//! Produces the preorder of a recursive depth-first search, visiting
//! neighbors in adjacency-list order, but keeps the recursion on an
//! explicit stack of `(node, next neighbor position)` frames so that deep
//! trees cannot overflow the call stack.

/// Returns every node reachable from `start` in depth-first preorder.
///
/// Each node appears exactly once. On a tree the order is a cheap
/// linearization, not a shortest path.
///
/// # Panics
///
/// Panics if `start` or any stored neighbor index is out of range for
/// `adjacency`; that only happens if the adjacency lists were built wrong.
///
/// # Examples
///
/// ```
/// use pickup_routing::tree::depth_first_order;
///
/// //     0
/// //    / \
/// //   1   3
/// //   |
/// //   2
/// let adjacency = vec![vec![1, 3], vec![0, 2], vec![1], vec![0]];
/// assert_eq!(depth_first_order(&adjacency, 0), vec![0, 1, 2, 3]);
/// assert_eq!(depth_first_order(&adjacency, 2), vec![2, 1, 0, 3]);
/// ```
pub fn depth_first_order(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let n = adjacency.len();
    assert!(start < n, "start node {start} out of range for {n} nodes");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;
    order.push(start);

    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        let Some(&v) = adjacency[u].get(next) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        assert!(v < n, "node {u} lists neighbor {v}, out of range for {n} nodes");
        if !visited[v] {
            visited[v] = true;
            order.push(v);
            stack.push((v, 0));
        }
    }

    order
}

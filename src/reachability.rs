//! Reachability check between the two terminals of a network.
//!
//! This is the first gate of a resistance query: no point enumerating paths if the terminals
//! are not connected at all.
//!
//! Edges are taken from [`Graph::neighbors`]; for the undirected input graph that is simply
//! "connected by a resistor".

use crate::graph::Graph;

/// Whether `end` can be reached from `start`.
///
/// Returns `false` (rather than erroring) when:
/// - either id is out of range for `graph.node_count()`
/// - `start == end` (a query across a single node is not a circuit)
///
/// Depth-first with an explicit stack; vertices are marked before they are pushed and never
/// unmarked, so each vertex is expanded at most once. The search stops as soon as `end`
/// shows up as a neighbor of any expanded vertex.
pub fn has_path<G: Graph>(graph: &G, start: usize, end: usize) -> bool {
    let n = graph.node_count();
    if start >= n || end >= n || start == end {
        return false;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(cur) = stack.pop() {
        for nx in graph.neighbors(cur) {
            if nx == end {
                return true;
            }
            if nx < n && !visited[nx] {
                visited[nx] = true;
                stack.push(nx);
            }
        }
    }
    false
}

//! Series reduction and the lookahead that bounds a series run.

use crate::digraph::WeightedDigraph;
use crate::{Error, Result};

/// Find where the series run beginning at `v` stops.
///
/// Walks forward while the current vertex has in-degree at most 1 and out-degree exactly 1,
/// and returns the first vertex that breaks that: a convergence point (in-degree > 1), a
/// fan-out (out-degree > 1) or a terminal (out-degree 0). `v` itself is checked first, so a
/// branch that is a single direct edge into the convergence vertex reports that vertex.
///
/// Degrees are counted over the whole digraph, not just the run. Pure lookahead; nothing is
/// mutated. The walk is bounded by the vertex count, and a self-loop returns where it sits.
pub fn end_of_serial(digraph: &WeightedDigraph, v: usize) -> usize {
    let mut cur = v;
    for _ in 0..=digraph.node_count() {
        if digraph.in_degree(cur) > 1 || digraph.out_degree(cur) != 1 {
            return cur;
        }
        match digraph.first_successor(cur) {
            Some(next) if next != cur => cur = next,
            _ => return cur,
        }
    }
    cur
}

/// Sum the resistances from `start` to `end`, consuming each edge on the way.
///
/// At every vertex the walk takes the lowest-numbered outgoing edge. The caller must make
/// sure the stretch is a true series run (every vertex before `end` has out-degree 1);
/// otherwise the sum follows whichever edge comes first in the row and means nothing
/// physically.
///
/// Fails with [`Error::BrokenChain`] if the walk reaches a vertex with no outgoing edge
/// before `end`. Each step removes an edge, so the walk always terminates.
pub fn reduce_serial(digraph: &mut WeightedDigraph, start: usize, end: usize) -> Result<f64> {
    let n = digraph.node_count();
    if start >= n {
        return Err(Error::IndexOutOfBounds(start));
    }
    if end >= n {
        return Err(Error::IndexOutOfBounds(end));
    }

    let mut total = 0.0;
    let mut cur = start;
    while cur != end {
        let next = digraph.first_successor(cur).ok_or(Error::BrokenChain { vertex: cur })?;
        if let Some(ohms) = digraph.remove_edge(cur, next) {
            total += ohms;
        }
        cur = next;
    }
    Ok(total)
}

//! Parallel reduction: locating fan-out vertices and collapsing their branch groups.

use log::trace;

use crate::digraph::WeightedDigraph;
use crate::graph::combine_parallel;
use crate::series::{end_of_serial, reduce_serial};
use crate::{Error, Result};

/// What to do with a parallel branch whose total resistance is exactly zero.
///
/// A 0 Ω branch has infinite conductance, so the reciprocal-sum rule is undefined for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortCircuitPolicy {
    /// The wire shorts the whole group: the collapsed edge is 0 Ω.
    #[default]
    Collapse,
    /// Refuse with [`Error::ZeroResistanceBranch`].
    Reject,
}

/// Find the fan-out vertex to reduce next.
///
/// Breadth-first from `from` over outgoing edges (successors in ascending id order). A
/// vertex is a fan-out when its out-degree exceeds 1. Returns the *last* fan-out met, so
/// groups nearer the far end of the circuit are collapsed before the groups enclosing them.
pub fn find_parallel_start(digraph: &WeightedDigraph, from: usize) -> Option<usize> {
    let n = digraph.node_count();
    if from >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut q: Vec<usize> = vec![from];
    visited[from] = true;
    let mut head = 0usize;
    let mut last = None;
    while head < q.len() {
        let cur = q[head];
        head += 1;
        if digraph.out_degree(cur) > 1 {
            last = Some(cur);
        }
        for nx in digraph.successors(cur) {
            if !visited[nx] {
                visited[nx] = true;
                q.push(nx);
            }
        }
    }
    last
}

/// Collapse every branch leaving `fan_out` into one edge `fan_out -> convergence`.
///
/// The convergence vertex is computed once, with [`end_of_serial`] from the first successor
/// of `fan_out`, and used for every branch: all branches of the group are assumed to rejoin
/// there. For each branch `fan_out -> i`:
/// - if `i` is not the convergence vertex, the run `i -> convergence` is series-reduced
///   (consuming its edges) and added to the direct edge weight;
/// - the branch edge is removed and its resistance is combined in parallel with whatever
///   `fan_out -> convergence` edge already exists.
///
/// When the convergence assumption does not hold the series walk ends up somewhere else
/// and usually fails with [`Error::BrokenChain`]. The digraph may be partially reduced when
/// an error is returned.
pub fn reduce_parallel(digraph: &mut WeightedDigraph, fan_out: usize, policy: ShortCircuitPolicy) -> Result<()> {
    if fan_out >= digraph.node_count() {
        return Err(Error::IndexOutOfBounds(fan_out));
    }
    let Some(first) = digraph.first_successor(fan_out) else {
        return Ok(());
    };
    let parallel_end = end_of_serial(digraph, first);
    let branches: Vec<usize> = digraph.successors(fan_out).collect();
    trace!("parallel group at {fan_out}: branches {branches:?} converge at {parallel_end}");

    for i in branches {
        let Some(direct) = digraph.weight(fan_out, i) else {
            continue;
        };
        let chain = if i != parallel_end { reduce_serial(digraph, i, parallel_end)? } else { 0.0 };
        let branch = direct + chain;
        if branch == 0.0 && policy == ShortCircuitPolicy::Reject {
            return Err(Error::ZeroResistanceBranch { from: fan_out, to: i });
        }

        digraph.remove_edge(fan_out, i);
        let combined = match digraph.weight(fan_out, parallel_end) {
            Some(existing) => combine_parallel(existing, branch),
            None => branch,
        };
        digraph.add_edge(fan_out, parallel_end, combined);
    }
    Ok(())
}

//! Circuit stripping: undirected network -> directed working graph.
//!
//! Keeps only the resistors that lie on at least one simple `start -> end` path and orients
//! each of them the way the first such path walks it. Spurs, dangling loops and anything not
//! between the terminals carry no current and are dropped here.

use log::debug;

use crate::digraph::WeightedDigraph;
use crate::graph::WeightedGraph;
use crate::paths::simple_paths;
use crate::{Error, Result};

/// Build the oriented digraph for a query between `start` and `end`.
///
/// Orientation rule: a step `a -> b` is skipped when `b -> a` is already present, so one
/// undirected resistor never appears in both directions. Paths are applied in enumeration
/// order and the first one to walk a resistor decides its direction.
///
/// The result has the same vertex count as `graph`; vertices on no path end up isolated.
pub fn strip_circuit<G: WeightedGraph>(
    graph: &G,
    start: usize,
    end: usize,
    limit: Option<usize>,
) -> Result<WeightedDigraph> {
    let paths = simple_paths(graph, start, end, limit)?;
    let mut digraph = WeightedDigraph::new(graph.node_count());

    for path in &paths {
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            if digraph.has_edge(b, a) {
                continue;
            }
            let ohms = graph.edge_weight(a, b);
            if !ohms.is_finite() || ohms < 0.0 {
                return Err(Error::InvalidResistance { u: a, v: b, ohms });
            }
            digraph.add_edge(a, b, ohms);
        }
    }

    debug!(
        "stripped circuit {start} -> {end}: {} simple paths, {} edges kept",
        paths.len(),
        digraph.edge_count()
    );
    Ok(digraph)
}

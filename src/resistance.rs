//! Equivalent resistance between two vertices.
//!
//! The driver runs a fixed sequence:
//! 1. reachability check (no path -> [`Error::NoPath`])
//! 2. strip the network to an oriented digraph of the `start -> end` paths
//! 3. while a fan-out vertex exists, collapse its parallel group
//! 4. series-reduce what is left from `start` to `end`
//!
//! Every call builds its own digraph; the caller's graph is only read.

use log::{debug, trace, warn};

use crate::digraph::WeightedDigraph;
use crate::graph::WeightedGraph;
use crate::parallel::{find_parallel_start, reduce_parallel, ShortCircuitPolicy};
use crate::reachability::has_path;
use crate::series::reduce_serial;
use crate::strip::strip_circuit;
use crate::{Error, Result};

/// Value returned by [`equivalent_resistance`] when no resistance can be computed.
pub const NO_PATH: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionConfig {
    /// Upper bound on enumerated simple paths (`None` = unbounded).
    pub max_paths: Option<usize>,
    /// Upper bound on parallel reduction passes.
    pub max_iterations: usize,
    /// Handling of 0 Ω branches inside a parallel group.
    pub short_circuit: ShortCircuitPolicy,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self { max_paths: None, max_iterations: 10_000, short_circuit: ShortCircuitPolicy::Collapse }
    }
}

/// Result of a reduction plus a few diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionRun {
    /// Equivalent resistance in ohms.
    pub resistance: f64,
    /// Edges left in the digraph after stripping.
    pub stripped_edges: usize,
    /// Number of parallel groups collapsed.
    pub parallel_reductions: usize,
}

/// Equivalent resistance between `start` and `end`, or [`NO_PATH`] (`-1.0`).
///
/// Uses [`ReductionConfig::default`]. Every failure maps to the sentinel: unreachable end,
/// `start == end`, out-of-range ids, and reductions that fail on non series-parallel
/// topologies. Use [`equivalent_resistance_checked`] to tell these apart.
pub fn equivalent_resistance<G: WeightedGraph>(graph: &G, start: usize, end: usize) -> f64 {
    match equivalent_resistance_checked(graph, start, end, ReductionConfig::default()) {
        Ok(r) => r,
        Err(Error::NoPath { .. }) => NO_PATH,
        Err(e) => {
            warn!("resistance {start} -> {end} not computed: {e}");
            NO_PATH
        }
    }
}

/// Equivalent resistance between `start` and `end`, with errors.
pub fn equivalent_resistance_checked<G: WeightedGraph>(
    graph: &G,
    start: usize,
    end: usize,
    config: ReductionConfig,
) -> Result<f64> {
    equivalent_resistance_run(graph, start, end, config).map(|run| run.resistance)
}

/// Like [`equivalent_resistance_checked`], but also reports how the reduction went.
pub fn equivalent_resistance_run<G: WeightedGraph>(
    graph: &G,
    start: usize,
    end: usize,
    config: ReductionConfig,
) -> Result<ReductionRun> {
    if !has_path(graph, start, end) {
        debug!("no path between {start} and {end}");
        return Err(Error::NoPath { start, end });
    }

    let mut digraph: WeightedDigraph = strip_circuit(graph, start, end, config.max_paths)?;
    let stripped_edges = digraph.edge_count();

    let mut parallel_reductions = 0usize;
    while let Some(fan_out) = find_parallel_start(&digraph, start) {
        if parallel_reductions >= config.max_iterations {
            return Err(Error::IterationLimitExceeded { limit: config.max_iterations });
        }

        let mut next = digraph.clone();
        reduce_parallel(&mut next, fan_out, config.short_circuit)?;
        if next.edge_count() >= digraph.edge_count() {
            return Err(Error::NoProgress { vertex: fan_out });
        }
        trace!("collapsed group at {fan_out}: {} -> {} edges", digraph.edge_count(), next.edge_count());

        digraph = next;
        parallel_reductions += 1;
    }

    let resistance = reduce_serial(&mut digraph, start, end)?;
    if digraph.edge_count() > 0 {
        debug!("{} edges left unreduced after final series pass", digraph.edge_count());
    }
    debug!(
        "resistance {start} -> {end} = {resistance} ({stripped_edges} edges, {parallel_reductions} parallel reductions)"
    );

    Ok(ReductionRun { resistance, stripped_edges, parallel_reductions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ResistorNetwork;

    fn net(n: usize, resistors: &[(usize, usize, f64)]) -> ResistorNetwork {
        let mut g = ResistorNetwork::with_nodes(n);
        for &(u, v, r) in resistors {
            g.add_resistor(u, v, r).unwrap();
        }
        g
    }

    fn assert_close(got: f64, expected: f64) {
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }

    #[test]
    fn sentinel_for_missing_or_degenerate_queries() {
        let g = net(2, &[]);
        assert_eq!(equivalent_resistance(&g, 0, 1), NO_PATH);

        let g = net(2, &[(0, 1, 5.0)]);
        assert_eq!(equivalent_resistance(&g, 0, 0), NO_PATH);
        assert_eq!(equivalent_resistance(&g, 0, 2), NO_PATH);
        assert_eq!(
            equivalent_resistance_checked(&g, 1, 1, ReductionConfig::default()),
            Err(Error::NoPath { start: 1, end: 1 })
        );
    }

    #[test]
    fn single_resistor() {
        let g = net(2, &[(0, 1, 7.5)]);
        assert_eq!(equivalent_resistance(&g, 0, 1), 7.5);
        assert_eq!(equivalent_resistance(&g, 1, 0), 7.5);
    }

    #[test]
    fn run_reports_diagnostics() {
        // 0 -1- 1 -2- 3 in parallel with 0 -3- 2 -3- 3
        let g = net(4, &[(0, 1, 1.0), (1, 3, 2.0), (0, 2, 3.0), (2, 3, 3.0)]);
        let run = equivalent_resistance_run(&g, 0, 3, ReductionConfig::default()).unwrap();
        assert_close(run.resistance, 2.0);
        assert_eq!(run.stripped_edges, 4);
        assert_eq!(run.parallel_reductions, 1);
    }

    #[test]
    fn iteration_limit_is_enforced() {
        let g = net(4, &[(0, 1, 1.0), (1, 3, 2.0), (0, 2, 3.0), (2, 3, 3.0)]);
        let config = ReductionConfig { max_iterations: 0, ..ReductionConfig::default() };
        assert_eq!(
            equivalent_resistance_checked(&g, 0, 3, config),
            Err(Error::IterationLimitExceeded { limit: 0 })
        );
    }

    #[test]
    fn path_limit_is_enforced() {
        let g = net(4, &[(0, 1, 1.0), (1, 3, 2.0), (0, 2, 3.0), (2, 3, 3.0)]);
        let config = ReductionConfig { max_paths: Some(1), ..ReductionConfig::default() };
        assert_eq!(
            equivalent_resistance_checked(&g, 0, 3, config),
            Err(Error::PathLimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn zero_ohm_branch_policy() {
        // 5 Ω shorted by a two-segment wire, then 2 Ω in series.
        let g = net(4, &[(0, 1, 5.0), (0, 2, 0.0), (2, 1, 0.0), (1, 3, 2.0)]);
        assert_close(equivalent_resistance(&g, 0, 3), 2.0);

        let config = ReductionConfig { short_circuit: ShortCircuitPolicy::Reject, ..ReductionConfig::default() };
        assert!(matches!(
            equivalent_resistance_checked(&g, 0, 3, config),
            Err(Error::ZeroResistanceBranch { from: 0, .. })
        ));
    }
}

//! Minimal graph adapter traits.
//!
//! These are the seams through which a caller hands a resistor network to the reduction:
//! any structure that can list neighbors and report a resistance per pair works.

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// An undirected graph whose edge weights are resistances in ohms.
///
/// Requirements:
/// - `edge_weight(u, v) == edge_weight(v, u)`
/// - weights are finite and non-negative (checked when the circuit is stripped)
/// - `edge_weight` is only queried for pairs returned by `neighbors`
pub trait WeightedGraph: Graph {
    fn edge_weight(&self, source: usize, target: usize) -> f64;
}

/// Dense matrix view; `None` means "no resistor", so a 0 Ω wire stays representable.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<Option<f64>>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(i, w)| *i != node && w.is_some()).map(|(i, _)| i).collect()
    }
}

impl<'a> WeightedGraph for AdjacencyMatrix<'a> {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.0[source][target].unwrap_or(f64::INFINITY)
    }
}

/// Resistance of two resistors in parallel. A zero on either side shorts the pair.
pub(crate) fn combine_parallel(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        0.0
    } else {
        1.0 / (1.0 / a + 1.0 / b)
    }
}

#[cfg(feature = "petgraph")]
impl<N, Ix> Graph for petgraph::Graph<N, f64, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        // Multi-edges would otherwise show up once per resistor.
        let mut out: Vec<usize> = self
            .neighbors(petgraph::graph::NodeIndex::new(node))
            .map(|idx| idx.index())
            .filter(|&idx| idx != node)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(feature = "petgraph")]
impl<N, Ix> WeightedGraph for petgraph::Graph<N, f64, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        use petgraph::visit::EdgeRef;

        let a = petgraph::graph::NodeIndex::new(source);
        let b = petgraph::graph::NodeIndex::new(target);
        self.edges_connecting(a, b)
            .map(|e| *e.weight())
            .reduce(combine_parallel)
            .unwrap_or(f64::INFINITY)
    }
}

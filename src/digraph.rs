//! Directed working graph used during reduction.
//!
//! Two parallel `n x n` matrices: `presence[u][v]` says the edge `u -> v` exists, and
//! `weight[u][v]` holds its resistance. A weight cell is only meaningful while its presence
//! cell is set; clearing presence leaves the stale number in place until it is overwritten.
//!
//! In/out degree counters are kept alongside the matrices so the reduction can ask for
//! degrees without rescanning a row or column each time.

use crate::graph::Graph;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDigraph {
    presence: Vec<Vec<bool>>,
    weight: Vec<Vec<f64>>,
    in_deg: Vec<usize>,
    out_deg: Vec<usize>,
    edges: usize,
}

impl WeightedDigraph {
    /// An edgeless digraph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            presence: vec![vec![false; n]; n],
            weight: vec![vec![0.0; n]; n],
            in_deg: vec![0; n],
            out_deg: vec![0; n],
            edges: 0,
        }
    }

    /// Wrap a presence/weight matrix pair. Both must be square and of the same size.
    pub fn from_matrices(presence: Vec<Vec<bool>>, weight: Vec<Vec<f64>>) -> Result<Self> {
        let n = presence.len();
        if weight.len() != n {
            return Err(Error::DimensionMismatch { expected: n, actual: weight.len() });
        }
        for (p_row, w_row) in presence.iter().zip(&weight) {
            if p_row.len() != n {
                return Err(Error::DimensionMismatch { expected: n, actual: p_row.len() });
            }
            if w_row.len() != n {
                return Err(Error::DimensionMismatch { expected: n, actual: w_row.len() });
            }
        }

        let mut in_deg = vec![0; n];
        let mut out_deg = vec![0; n];
        let mut edges = 0;
        for (u, row) in presence.iter().enumerate() {
            for (v, &present) in row.iter().enumerate() {
                if present {
                    out_deg[u] += 1;
                    in_deg[v] += 1;
                    edges += 1;
                }
            }
        }
        Ok(Self { presence, weight, in_deg, out_deg, edges })
    }

    /// Hand back the `(presence, weight)` matrices.
    pub fn into_matrices(self) -> (Vec<Vec<bool>>, Vec<Vec<f64>>) {
        (self.presence, self.weight)
    }

    pub fn node_count(&self) -> usize {
        self.presence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Insert or overwrite `u -> v`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        if !self.presence[u][v] {
            self.presence[u][v] = true;
            self.out_deg[u] += 1;
            self.in_deg[v] += 1;
            self.edges += 1;
        }
        self.weight[u][v] = weight;
    }

    /// Clear `u -> v`, returning the weight it carried.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Option<f64> {
        if !self.presence[u][v] {
            return None;
        }
        self.presence[u][v] = false;
        self.out_deg[u] -= 1;
        self.in_deg[v] -= 1;
        self.edges -= 1;
        Some(self.weight[u][v])
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.presence[u][v]
    }

    /// Weight of `u -> v`, or `None` when the edge is absent.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.presence[u][v].then(|| self.weight[u][v])
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.in_deg[v]
    }

    pub fn out_degree(&self, u: usize) -> usize {
        self.out_deg[u]
    }

    /// Targets of `u`'s outgoing edges, in ascending id order.
    pub fn successors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.presence[u].iter().enumerate().filter(|(_, &p)| p).map(|(v, _)| v)
    }

    /// The lowest-numbered successor of `u`: the edge a row scan finds first.
    pub fn first_successor(&self, u: usize) -> Option<usize> {
        self.successors(u).next()
    }

    /// All edges as `(u, v, weight)`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.node_count()).flat_map(move |u| self.successors(u).map(move |v| (u, v, self.weight[u][v])))
    }
}

impl Graph for WeightedDigraph {
    fn node_count(&self) -> usize {
        self.presence.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.successors(node).collect()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.out_deg[node]
    }
}

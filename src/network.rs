//! Editable resistor network.
//!
//! This is the concrete undirected graph an editor builds up from user actions: vertices are
//! added one at a time, resistors are dropped between pairs of vertices, and either can be
//! removed again. Vertex ids are never reused or shifted, so removing a vertex leaves a gap
//! (an isolated slot) rather than renumbering its successors.

use crate::graph::{combine_parallel, Graph, WeightedGraph};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistorNetwork {
    /// Symmetric matrix of resistances; `None` means the pair is not connected.
    ohms: Vec<Vec<Option<f64>>>,
}

impl ResistorNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// A network with `n` unconnected vertices `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self { ohms: vec![vec![None; n]; n] }
    }

    /// Append a vertex and return its id.
    pub fn add_node(&mut self) -> usize {
        let id = self.ohms.len();
        for row in &mut self.ohms {
            row.push(None);
        }
        self.ohms.push(vec![None; id + 1]);
        id
    }

    /// Place a resistor between `u` and `v`.
    ///
    /// If the pair is already connected, the new resistor sits in parallel with the existing
    /// one and the stored value becomes their combination.
    pub fn add_resistor(&mut self, u: usize, v: usize, ohms: f64) -> Result<()> {
        self.check_pair(u, v)?;
        if !ohms.is_finite() || ohms < 0.0 {
            return Err(Error::InvalidResistance { u, v, ohms });
        }
        let value = match self.ohms[u][v] {
            Some(existing) => combine_parallel(existing, ohms),
            None => ohms,
        };
        self.ohms[u][v] = Some(value);
        self.ohms[v][u] = Some(value);
        Ok(())
    }

    /// Remove whatever is connected between `u` and `v`, returning its resistance.
    pub fn remove_resistor(&mut self, u: usize, v: usize) -> Option<f64> {
        if u >= self.ohms.len() || v >= self.ohms.len() {
            return None;
        }
        self.ohms[v][u] = None;
        self.ohms[u][v].take()
    }

    /// Detach every resistor touching `v`. The id stays allocated.
    pub fn remove_node(&mut self, v: usize) -> Result<()> {
        if v >= self.ohms.len() {
            return Err(Error::IndexOutOfBounds(v));
        }
        for u in 0..self.ohms.len() {
            self.ohms[u][v] = None;
            self.ohms[v][u] = None;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.ohms.clear();
    }

    pub fn resistor(&self, u: usize, v: usize) -> Option<f64> {
        self.ohms.get(u).and_then(|row| row.get(v)).copied().flatten()
    }

    /// Every resistor once, as `(u, v, ohms)` with `u < v`.
    pub fn resistors(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.ohms.iter().enumerate().flat_map(|(u, row)| {
            row.iter().enumerate().skip(u + 1).filter_map(move |(v, w)| w.map(|w| (u, v, w)))
        })
    }

    pub fn resistor_count(&self) -> usize {
        self.resistors().count()
    }

    fn check_pair(&self, u: usize, v: usize) -> Result<()> {
        let n = self.ohms.len();
        if u >= n {
            return Err(Error::IndexOutOfBounds(u));
        }
        if v >= n {
            return Err(Error::IndexOutOfBounds(v));
        }
        if u == v {
            return Err(Error::SelfLoop(u));
        }
        Ok(())
    }
}

impl Graph for ResistorNetwork {
    fn node_count(&self) -> usize {
        self.ohms.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.ohms
            .get(node)
            .map(|row| row.iter().enumerate().filter(|(_, w)| w.is_some()).map(|(i, _)| i).collect())
            .unwrap_or_default()
    }
}

impl WeightedGraph for ResistorNetwork {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.resistor(source, target).unwrap_or(f64::INFINITY)
    }
}

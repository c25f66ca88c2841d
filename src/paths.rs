//! Simple-path enumeration.
//!
//! Depth-first with an explicit stack. Every frame owns its neighbor list and a cursor into
//! it; the shared `path`/`on_path` buffers are rolled back by exactly one vertex when a frame
//! is popped, so sibling branches never see each other's state.
//!
//! Cost is proportional to the number of simple paths, which is exponential in general. The
//! intended inputs are small hand-drawn circuits; `limit` is the escape hatch for anything
//! bigger.

use crate::graph::Graph;
use crate::{Error, Result};

struct Frame {
    neighbors: Vec<usize>,
    cursor: usize,
}

/// All simple paths from `start` to `end`, each listed start-to-end.
///
/// Neighbors are explored in the order `graph.neighbors` yields them, so the output order is
/// deterministic for a deterministic adapter. Out-of-range terminals give no paths;
/// `start == end` gives the single trivial path `[start]`.
///
/// With `limit = Some(k)`, finding more than `k` paths fails with
/// [`Error::PathLimitExceeded`].
pub fn simple_paths<G: Graph>(graph: &G, start: usize, end: usize, limit: Option<usize>) -> Result<Vec<Vec<usize>>> {
    let n = graph.node_count();
    if start >= n || end >= n {
        return Ok(Vec::new());
    }
    if start == end {
        return Ok(vec![vec![start]]);
    }

    let mut paths: Vec<Vec<usize>> = Vec::new();
    let mut path = vec![start];
    let mut on_path = vec![false; n];
    on_path[start] = true;
    let mut stack = vec![Frame { neighbors: graph.neighbors(start), cursor: 0 }];

    while let Some(frame) = stack.last_mut() {
        let next = frame.neighbors.get(frame.cursor).copied();
        let Some(nx) = next else {
            stack.pop();
            if let Some(v) = path.pop() {
                on_path[v] = false;
            }
            continue;
        };
        frame.cursor += 1;

        if nx >= n || on_path[nx] {
            continue;
        }
        if nx == end {
            let mut found = path.clone();
            found.push(end);
            paths.push(found);
            if let Some(limit) = limit {
                if paths.len() > limit {
                    return Err(Error::PathLimitExceeded { limit });
                }
            }
            continue;
        }

        on_path[nx] = true;
        path.push(nx);
        stack.push(Frame { neighbors: graph.neighbors(nx), cursor: 0 });
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ResistorNetwork;

    fn net(n: usize, edges: &[(usize, usize)]) -> ResistorNetwork {
        let mut g = ResistorNetwork::with_nodes(n);
        for &(u, v) in edges {
            g.add_resistor(u, v, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn diamond_has_two_paths_in_neighbor_order() {
        //   1
        //  / \
        // 0   3
        //  \ /
        //   2
        let g = net(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let paths = simple_paths(&g, 0, 3, None).unwrap();
        assert_eq!(paths, vec![vec![0, 1, 3], vec![0, 2, 3]]);
    }

    #[test]
    fn cross_link_paths_do_not_repeat_vertices() {
        // Diamond plus the 1 - 2 rung.
        let g = net(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        let paths = simple_paths(&g, 0, 3, None).unwrap();
        assert_eq!(
            paths,
            vec![vec![0, 1, 2, 3], vec![0, 1, 3], vec![0, 2, 1, 3], vec![0, 2, 3]]
        );
        for p in &paths {
            let mut seen = p.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), p.len(), "repeated vertex in {p:?}");
        }
    }

    #[test]
    fn dead_ends_and_unreachable_end() {
        // 0 - 1 - 2 with a spur 1 - 3; 4 isolated
        let g = net(5, &[(0, 1), (1, 2), (1, 3)]);
        assert_eq!(simple_paths(&g, 0, 2, None).unwrap(), vec![vec![0, 1, 2]]);
        assert!(simple_paths(&g, 0, 4, None).unwrap().is_empty());
        assert!(simple_paths(&g, 0, 9, None).unwrap().is_empty());
        assert_eq!(simple_paths(&g, 2, 2, None).unwrap(), vec![vec![2]]);
    }

    #[test]
    fn limit_stops_enumeration() {
        let g = net(4, &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(simple_paths(&g, 0, 3, Some(4)).unwrap().len(), 4);
        assert_eq!(simple_paths(&g, 0, 3, Some(3)), Err(Error::PathLimitExceeded { limit: 3 }));
    }
}

//! Weighted directed graphs and single-source shortest paths
//!
//! - `Graph` / `Edge`: adjacency-list representation with non-negative weights
//! - `shortest_paths`: Dijkstra with a lazy-deletion min-heap frontier
//! - `extract_path`: predecessor walk into an explicit vertex sequence

pub mod dijkstra;
pub mod load;

pub use dijkstra::{extract_path, shortest_paths};
pub use load::read_graph;

use serde::Serialize;

/// Sentinel distance for unreachable vertices
pub const INF: u64 = u64::MAX;

/// Directed edge with a non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// Adjacency-list directed graph
///
/// Immutable for the duration of a search. Edge endpoints are validated on
/// insertion, so the search loop can index without bounds checks failing.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a directed edge
    ///
    /// Both endpoints must be valid vertex indices.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        let n = self.num_vertices();
        assert!(from < n && to < n, "edge endpoint out of range");
        self.adjacency[from].push(Edge { from, to, weight });
    }

    /// Outgoing edges of `vertex`
    pub fn edges_from(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }
}

/// Result of a single-source shortest-path search
///
/// `distances` and `predecessors` are parallel, indexed by vertex.
/// `distances[v]` is [`INF`] when `v` is unreachable; `predecessors[v]` is
/// `None` for the source and for unreached vertices.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<u64>,
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Whether `vertex` is reachable from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).is_some_and(|&d| d != INF)
    }
}

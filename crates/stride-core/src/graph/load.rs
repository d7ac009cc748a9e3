//! Graph text-file loader
//!
//! Format: the first whitespace-delimited token is the vertex count, followed
//! by zero or more `from to weight` edge triples. The loader fully populates
//! the graph and validates every endpoint before any search runs.

use std::fs;
use std::path::Path;

use crate::error::{Result, StrideError};
use crate::graph::Graph;

/// Read a graph description from `path`
pub fn read_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path).map_err(|e| StrideError::MalformedGraph {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_graph(&text).map_err(|reason| StrideError::MalformedGraph {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_graph(text: &str) -> std::result::Result<Graph, String> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().ok_or_else(|| "missing vertex count".to_string())?;
    let num_vertices: usize = count_token
        .parse()
        .map_err(|_| format!("invalid vertex count '{count_token}'"))?;

    let mut graph = Graph::new(num_vertices);

    while let Some(from_token) = tokens.next() {
        let to_token = tokens
            .next()
            .ok_or_else(|| "truncated edge (expected 'from to weight')".to_string())?;
        let weight_token = tokens
            .next()
            .ok_or_else(|| "truncated edge (expected 'from to weight')".to_string())?;

        let from = parse_vertex(from_token, num_vertices)?;
        let to = parse_vertex(to_token, num_vertices)?;
        let weight: u64 = weight_token
            .parse()
            .map_err(|_| format!("invalid edge weight '{weight_token}'"))?;

        graph.add_edge(from, to, weight);
    }

    Ok(graph)
}

fn parse_vertex(token: &str, num_vertices: usize) -> std::result::Result<usize, String> {
    let vertex: usize = token
        .parse()
        .map_err(|_| format!("invalid vertex '{token}'"))?;
    if vertex >= num_vertices {
        return Err(format!(
            "vertex {vertex} out of range (graph has {num_vertices} vertices)"
        ));
    }
    Ok(vertex)
}

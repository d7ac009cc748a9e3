//! Shortest-path command
//!
//! `stride paths <GRAPH> [--source N] [--to V]` - run Dijkstra from the
//! source vertex and report the cost and route to every vertex (or only the
//! `--to` vertex). Unreachable vertices are reported, not errors.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use stride_core::error::{Result, StrideError};
use stride_core::graph::{self, extract_path, shortest_paths};

/// Per-vertex route for output
#[derive(Debug, Clone, Serialize)]
struct RouteEntry {
    vertex: usize,
    reachable: bool,
    /// Minimal cost from the source; absent when unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u64>,
    /// Vertex sequence from source to this vertex; empty when unreachable
    path: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    source: usize,
    vertices: usize,
    routes: Vec<RouteEntry>,
}

pub fn execute(
    cli: &Cli,
    graph_file: &Path,
    source: usize,
    to: Option<usize>,
    start: Instant,
) -> Result<()> {
    let graph = graph::read_graph(graph_file)?;
    tracing::debug!(elapsed = ?start.elapsed(), vertices = graph.num_vertices(), "load_graph");

    if let Some(dest) = to {
        if dest >= graph.num_vertices() {
            return Err(StrideError::VertexOutOfRange {
                vertex: dest,
                vertices: graph.num_vertices(),
            });
        }
    }

    let paths = shortest_paths(&graph, source)?;
    tracing::debug!(elapsed = ?start.elapsed(), "shortest_paths");

    let targets: Vec<usize> = match to {
        Some(dest) => vec![dest],
        None => (0..graph.num_vertices()).collect(),
    };

    let routes: Vec<RouteEntry> = targets
        .into_iter()
        .map(|vertex| RouteEntry {
            vertex,
            reachable: paths.is_reachable(vertex),
            cost: paths.is_reachable(vertex).then(|| paths.distances[vertex]),
            path: extract_path(&paths, vertex),
        })
        .collect();

    let report = PathsReport {
        source,
        vertices: graph.num_vertices(),
        routes,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(&report),
    }

    Ok(())
}

fn print_human(report: &PathsReport) {
    for route in &report.routes {
        match route.cost {
            None => println!("{}: unreachable", route.vertex),
            Some(cost) => {
                let steps: Vec<String> = route.path.iter().map(usize::to_string).collect();
                println!("{}: cost {} via {}", route.vertex, cost, steps.join(" -> "));
            }
        }
    }
}

//! Single-source shortest paths (Dijkstra, lazy deletion)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, StrideError};
use crate::graph::{Graph, ShortestPaths, INF};

/// Wrapper for BinaryHeap entries (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: u64,
    vertex: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Compute shortest distances and predecessor links from `source` to every
/// vertex of `graph`.
///
/// Label-setting relaxation over a min-heap frontier: once a vertex is popped
/// unvisited its distance is final. The heap does not support decrease-key,
/// so a relaxed vertex is re-pushed under its new priority and stale entries
/// are discarded on extraction via the `visited` guard.
///
/// An out-of-range `source` is a caller error and fails fast.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices(), source = source))]
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let n = graph.num_vertices();
    if source >= n {
        return Err(StrideError::SourceOutOfRange {
            vertex: source,
            vertices: n,
        });
    }

    let mut distances = vec![INF; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0;
    heap.push(Reverse(HeapEntry {
        distance: 0,
        vertex: source,
    }));

    while let Some(Reverse(HeapEntry { vertex: u, .. })) = heap.pop() {
        // A vertex may sit in the heap under several stale priorities;
        // only the first extraction counts.
        if visited[u] {
            continue;
        }
        visited[u] = true;

        for edge in graph.edges_from(u) {
            let v = edge.to;
            if visited[v] || distances[u] == INF {
                continue;
            }
            // Relaxation step
            let candidate = distances[u] + edge.weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: v,
                }));
            }
        }
    }

    tracing::debug!(
        reached = distances.iter().filter(|&&d| d != INF).count(),
        "shortest_paths_done"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Reconstruct the shortest path from the search source to `destination`.
///
/// Returns the vertex sequence in source-to-destination order, `[source]`
/// when the destination is the source itself, and an empty sequence when the
/// destination is unreachable or out of range.
pub fn extract_path(paths: &ShortestPaths, destination: usize) -> Vec<usize> {
    if !paths.is_reachable(destination) {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(prev) = paths.predecessors[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

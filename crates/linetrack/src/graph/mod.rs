pub mod build;
pub mod search;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::track::{ElementType, Point, Track};
use build::TrackDigraph;
use search::resolve_path;

/// Serializable node of a track graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub position: Point,
    pub rotation: f64,
}

/// Serializable directed edge of a track graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Serializable view of a track's graph plus the resolved path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Ordered node ids from start to end, or `None` when no valid path
    /// exists.
    pub valid_path: Option<Vec<String>>,
}

/// Summary statistics for a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAnalysis {
    pub element_count: usize,
    /// Count per element type, in stable type order.
    pub element_types: BTreeMap<ElementType, usize>,
    pub has_valid_path: bool,
    /// Number of nodes on the valid path, 0 when absent.
    pub path_length: usize,
}

/// Convert a track to its graph representation.
///
/// Every element becomes one node keyed by its id; every connection
/// reference becomes one directed edge. Connections to unknown ids are
/// dropped silently. The node list preserves element order and the edge
/// list preserves connection declaration order, so output is
/// deterministic for a given track.
pub fn track_to_graph(track: &Track) -> TrackGraph {
    let graph = TrackDigraph::build(&track.elements);
    let valid_path = resolve_path(&graph, &track.elements);

    let nodes = graph
        .iter_nodes()
        .map(|(id, attrs)| GraphNode {
            id: id.to_string(),
            kind: attrs.kind,
            position: attrs.position,
            rotation: attrs.rotation,
        })
        .collect();

    let edges = graph
        .iter_edges()
        .map(|(source, target)| GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
        })
        .collect();

    TrackGraph {
        nodes,
        edges,
        valid_path,
    }
}

/// Analyze a track: per-type element counts plus a path summary.
pub fn analyze_track(track: &Track) -> TrackAnalysis {
    let graph = track_to_graph(track);

    let mut element_types: BTreeMap<ElementType, usize> = BTreeMap::new();
    for element in &track.elements {
        *element_types.entry(element.kind).or_insert(0) += 1;
    }

    TrackAnalysis {
        element_count: track.elements.len(),
        element_types,
        has_valid_path: graph.valid_path.is_some(),
        path_length: graph.valid_path.as_ref().map_or(0, Vec::len),
    }
}

mod analysis;
mod serialization;

use super::{TrackGraph, analyze_track, track_to_graph};
use crate::track::{ElementType, Point, Track, TrackElement};

/// Helper to create a TrackElement with connections.
fn element(id: &str, kind: ElementType, connections: &[&str]) -> TrackElement {
    TrackElement {
        id: id.to_string(),
        kind,
        position: Point { x: 0.0, y: 0.0 },
        rotation: 0.0,
        width: 50.0,
        length: None,
        radius: None,
        color: None,
        connections: connections.iter().map(|c| c.to_string()).collect(),
        path_data: None,
        points: None,
        label: None,
    }
}

/// Helper to create a Track from elements.
fn track(elements: Vec<TrackElement>) -> Track {
    Track {
        name: "test".to_string(),
        elements,
        width: 800,
        height: 600,
        original_svg: None,
    }
}

/// Assert that the resolved path matches the expected node ids exactly.
fn assert_path(graph: &TrackGraph, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    match &graph.valid_path {
        Some(path) => assert_eq!(path, &expected),
        None => panic!("Expected path {:?}, got none", expected),
    }
}

/// Assert that no path was resolved.
fn assert_no_path(graph: &TrackGraph) {
    if let Some(path) = &graph.valid_path {
        panic!("Expected no path, got {:?}", path);
    }
}

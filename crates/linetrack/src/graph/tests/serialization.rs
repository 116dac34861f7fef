use super::*;

#[test]
fn graph_json_uses_wire_field_names() {
    let track = track(vec![
        element("S", ElementType::Start, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let json = serde_json::to_string(&track_to_graph(&track)).unwrap();
    assert!(json.contains("\"type\":\"start\""));
    assert!(json.contains("\"source\":\"S\""));
    assert!(json.contains("\"target\":\"E\""));
    assert!(json.contains("\"valid_path\":[\"S\",\"E\"]"));
}

#[test]
fn absent_path_serializes_as_null() {
    let track = track(vec![element("S", ElementType::Start, &[])]);
    let json = serde_json::to_string(&track_to_graph(&track)).unwrap();
    assert!(json.contains("\"valid_path\":null"));
}

#[test]
fn graph_json_roundtrips() {
    let track = track(vec![
        element("S", ElementType::Start, &["A"]),
        element("A", ElementType::ForbiddenPath, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let graph = track_to_graph(&track);
    let json = serde_json::to_string(&graph).unwrap();
    let parsed: TrackGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.nodes.len(), graph.nodes.len());
    assert_eq!(parsed.edges, graph.edges);
    assert_eq!(parsed.valid_path, graph.valid_path);
}

#[test]
fn analysis_json_keys_match_backend_contract() {
    let track = track(vec![
        element("S", ElementType::Start, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let json = serde_json::to_string(&analyze_track(&track)).unwrap();
    assert!(json.contains("\"element_count\":2"));
    assert!(json.contains("\"element_types\":{\"start\":1,\"end\":1}"));
    assert!(json.contains("\"has_valid_path\":true"));
    assert!(json.contains("\"path_length\":2"));
}

#[test]
fn frontend_track_payload_converts() {
    // A payload shaped like the editor's POST body.
    let json = r#"{
        "name": "Figure Eight",
        "width": 800,
        "height": 600,
        "elements": [
            {"id": "start-1", "type": "start", "position": {"x": 100, "y": 300},
             "rotation": 0, "width": 50, "connections": ["straight-1"]},
            {"id": "straight-1", "type": "straight", "position": {"x": 200, "y": 300},
             "rotation": 0, "width": 50, "length": 100, "connections": ["curve-1"]},
            {"id": "curve-1", "type": "curve", "position": {"x": 300, "y": 300},
             "rotation": 90, "width": 50, "radius": 75, "connections": ["end-1"]},
            {"id": "end-1", "type": "end", "position": {"x": 400, "y": 200},
             "rotation": 0, "width": 50, "connections": []}
        ]
    }"#;
    let parsed: crate::track::Track = serde_json::from_str(json).unwrap();
    let graph = track_to_graph(&parsed);
    assert_path(&graph, &["start-1", "straight-1", "curve-1", "end-1"]);
}

use super::*;

#[test]
fn counts_per_type() {
    let track = track(vec![
        element("S", ElementType::Start, &["a"]),
        element("a", ElementType::Straight, &["b"]),
        element("b", ElementType::Straight, &["c"]),
        element("c", ElementType::Curve, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let analysis = analyze_track(&track);
    assert_eq!(analysis.element_count, 5);
    assert_eq!(analysis.element_types[&ElementType::Straight], 2);
    assert_eq!(analysis.element_types[&ElementType::Curve], 1);
    assert_eq!(analysis.element_types[&ElementType::Start], 1);
    assert_eq!(analysis.element_types[&ElementType::End], 1);
    assert!(!analysis.element_types.contains_key(&ElementType::Fork));
}

#[test]
fn path_summary_when_path_exists() {
    let track = track(vec![
        element("S", ElementType::Start, &["A"]),
        element("A", ElementType::Straight, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let analysis = analyze_track(&track);
    assert!(analysis.has_valid_path);
    assert_eq!(analysis.path_length, 3);
}

#[test]
fn path_summary_when_no_path() {
    let track = track(vec![
        element("S", ElementType::Start, &[]),
        element("E", ElementType::End, &[]),
    ]);
    let analysis = analyze_track(&track);
    assert!(!analysis.has_valid_path);
    assert_eq!(analysis.path_length, 0);
}

#[test]
fn empty_track_analysis() {
    let analysis = analyze_track(&track(vec![]));
    assert_eq!(analysis.element_count, 0);
    assert!(analysis.element_types.is_empty());
    assert!(!analysis.has_valid_path);
    assert_eq!(analysis.path_length, 0);
}

#[test]
fn summary_agrees_with_graph_output() {
    let track = track(vec![
        element("S", ElementType::Start, &["F"]),
        element("F", ElementType::ForbiddenPath, &["E"]),
        element("E", ElementType::End, &[]),
    ]);
    let graph = track_to_graph(&track);
    let analysis = analyze_track(&track);
    assert_eq!(analysis.has_valid_path, graph.valid_path.is_some());
    assert_eq!(
        analysis.path_length,
        graph.valid_path.as_ref().map_or(0, Vec::len)
    );
}

#[test]
fn duplicate_ids_counted_per_element() {
    // Counts reflect the element list, not the collapsed node set.
    let track = track(vec![
        element("X", ElementType::Straight, &[]),
        element("X", ElementType::Straight, &[]),
    ]);
    let analysis = analyze_track(&track);
    assert_eq!(analysis.element_count, 2);
    assert_eq!(analysis.element_types[&ElementType::Straight], 2);
}

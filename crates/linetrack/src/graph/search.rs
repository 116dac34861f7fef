use std::collections::{HashMap, HashSet, VecDeque};

use super::build::TrackDigraph;
use crate::track::{ElementType, TrackElement};

/// Find a valid path from the start element to the end element.
///
/// The first start-typed and first end-typed elements (by element order)
/// anchor the search. Forbidden-path elements are removed from a working
/// copy of the graph first, unless their id is the chosen start or end,
/// which must stay reachable. Returns `None` when the track has no start
/// element, no end element, or no connecting path — all normal outcomes,
/// not errors.
pub fn resolve_path(graph: &TrackDigraph, elements: &[TrackElement]) -> Option<Vec<String>> {
    let start = elements.iter().find(|e| e.kind == ElementType::Start)?;
    let end = elements.iter().find(|e| e.kind == ElementType::End)?;

    let excluded: HashSet<&str> = elements
        .iter()
        .filter(|e| e.kind == ElementType::ForbiddenPath)
        .map(|e| e.id.as_str())
        .filter(|id| *id != start.id && *id != end.id)
        .collect();

    let filtered = graph.without_nodes(&excluded);
    shortest_path(&filtered, &start.id, &end.id)
}

/// Unweighted breadth-first shortest path between two node ids.
///
/// All edges have implicit unit cost. Neighbor expansion follows
/// connection declaration order, so ties among equal-length paths resolve
/// deterministically to the first one found.
fn shortest_path<'a>(
    graph: &'a TrackDigraph,
    start: &'a str,
    end: &'a str,
) -> Option<Vec<String>> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    if start == end {
        return Some(vec![start.to_string()]);
    }

    let mut frontier: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut came_from: HashMap<&str, &str> = HashMap::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        for neighbor in graph.neighbors(current) {
            let neighbor = neighbor.as_str();
            if !visited.insert(neighbor) {
                continue;
            }
            came_from.insert(neighbor, current);
            if neighbor == end {
                return Some(reconstruct(&came_from, end));
            }
            frontier.push_back(neighbor);
        }
    }

    None
}

/// Walk the predecessor map back from the end node to build the path.
fn reconstruct<'a>(came_from: &HashMap<&'a str, &'a str>, end: &'a str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(&prev) = came_from.get(current) {
        path.push(prev.to_string());
        current = prev;
    }
    path.reverse();
    path
}

use std::collections::{HashMap, HashSet};

use crate::track::{ElementType, Point, TrackElement};

/// Node attributes carried into the graph from a track element.
#[derive(Debug, Clone, Copy)]
pub struct NodeAttrs {
    pub kind: ElementType,
    pub position: Point,
    pub rotation: f64,
}

/// A directed graph derived from a track's elements and connections.
///
/// Nodes are keyed by element id. The adjacency list preserves each
/// element's connection declaration order, and the node index preserves
/// element order. Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TrackDigraph {
    /// Attributes per node id.
    nodes: HashMap<String, NodeAttrs>,
    /// Node ids in first-seen element order.
    order: Vec<String>,
    /// Outgoing neighbor ids per node, in declaration order.
    adjacency: HashMap<String, Vec<String>>,
}

impl TrackDigraph {
    /// Build the graph from track elements.
    ///
    /// No validation is performed: a duplicate id overwrites the earlier
    /// node's attributes (keeping its slot in node order), and a
    /// connection to an unknown id produces no edge.
    pub fn build(elements: &[TrackElement]) -> Self {
        let mut nodes: HashMap<String, NodeAttrs> = HashMap::with_capacity(elements.len());
        let mut order = Vec::with_capacity(elements.len());

        for element in elements {
            let attrs = NodeAttrs {
                kind: element.kind,
                position: element.position,
                rotation: element.rotation,
            };
            if nodes.insert(element.id.clone(), attrs).is_none() {
                order.push(element.id.clone());
            }
        }

        let mut adjacency: HashMap<String, Vec<String>> =
            HashMap::with_capacity(elements.len());
        for element in elements {
            let targets = adjacency.entry(element.id.clone()).or_default();
            for connection in &element.connections {
                if nodes.contains_key(connection) {
                    targets.push(connection.clone());
                }
            }
        }

        Self {
            nodes,
            order,
            adjacency,
        }
    }

    /// Whether a node id exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Outgoing neighbors of a node, in connection declaration order.
    pub fn neighbors(&self, id: &str) -> &[String] {
        static EMPTY: &[String] = &[];
        self.adjacency.get(id).map_or(EMPTY, |v| v.as_slice())
    }

    /// Nodes with their attributes, in first-seen element order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (&str, &NodeAttrs)> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|attrs| (id.as_str(), attrs)))
    }

    /// Directed edges as (source, target) pairs, source in node order and
    /// targets in declaration order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().flat_map(|id| {
            self.neighbors(id)
                .iter()
                .map(move |target| (id.as_str(), target.as_str()))
        })
    }

    /// Copy of the graph with the given node ids removed, along with
    /// every edge touching them.
    pub fn without_nodes(&self, excluded: &HashSet<&str>) -> Self {
        let nodes: HashMap<String, NodeAttrs> = self
            .nodes
            .iter()
            .filter(|(id, _)| !excluded.contains(id.as_str()))
            .map(|(id, attrs)| (id.clone(), *attrs))
            .collect();

        let order: Vec<String> = self
            .order
            .iter()
            .filter(|id| !excluded.contains(id.as_str()))
            .cloned()
            .collect();

        let adjacency: HashMap<String, Vec<String>> = self
            .adjacency
            .iter()
            .filter(|(id, _)| !excluded.contains(id.as_str()))
            .map(|(id, targets)| {
                let kept: Vec<String> = targets
                    .iter()
                    .filter(|target| !excluded.contains(target.as_str()))
                    .cloned()
                    .collect();
                (id.clone(), kept)
            })
            .collect();

        Self {
            nodes,
            order,
            adjacency,
        }
    }
}

//! Event Graph - the aggregate of event transitions across stories.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::GraphError;

/// Whether transitions are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphKind {
    #[default]
    Directed,
    /// `(a, b)` and `(b, a)` share one edge.
    Undirected,
}

/// A distinct event and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNode {
    pub event: String,
    pub frequency: u64,
}

/// A transition between two nodes, by node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Weighted event transition graph.
///
/// Nodes and edges keep insertion order, so iteration and persisted
/// output are deterministic for a given corpus.
#[derive(Debug, Clone, Default)]
pub struct EventGraph {
    kind: GraphKind,

    nodes: Vec<EventNode>,

    /// Index: event text -> node position.
    node_index: HashMap<String, usize>,

    edges: Vec<TransitionEdge>,

    /// Index: (source, target) -> edge position. Undirected keys are
    /// stored with the smaller node position first.
    edge_index: HashMap<(usize, usize), usize>,
}

impl EventGraph {
    /// Create a new empty graph.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Rebuild a graph from stored nodes and edges.
    ///
    /// Rejects duplicate events, edges pointing outside the node list and
    /// repeated edges.
    pub fn from_parts(
        kind: GraphKind,
        nodes: Vec<EventNode>,
        edges: Vec<TransitionEdge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(kind);

        for node in nodes {
            if graph.node_index.contains_key(&node.event) {
                return Err(GraphError::InvalidFormat(format!(
                    "duplicate event node `{}`",
                    node.event
                )));
            }
            graph.node_index.insert(node.event.clone(), graph.nodes.len());
            graph.nodes.push(node);
        }

        for edge in edges {
            if edge.source >= graph.nodes.len() || edge.target >= graph.nodes.len() {
                return Err(GraphError::InvalidFormat(format!(
                    "edge ({}, {}) references a missing node",
                    edge.source, edge.target
                )));
            }
            let key = graph.edge_key(edge.source, edge.target);
            if graph.edge_index.contains_key(&key) {
                return Err(GraphError::InvalidFormat(format!(
                    "duplicate edge `{}` -> `{}`",
                    graph.nodes[edge.source].event, graph.nodes[edge.target].event
                )));
            }
            graph.edge_index.insert(key, graph.edges.len());
            graph.edges.push(edge);
        }

        Ok(graph)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if an event exists in the graph.
    pub fn contains(&self, event: &str) -> bool {
        self.node_index.contains_key(event)
    }

    /// Occurrence count of an event.
    pub fn frequency(&self, event: &str) -> Option<u64> {
        self.node_index.get(event).map(|&i| self.nodes[i].frequency)
    }

    /// Transition count between two events. Symmetric for undirected graphs.
    pub fn weight(&self, source: &str, target: &str) -> Option<u64> {
        let source = *self.node_index.get(source)?;
        let target = *self.node_index.get(target)?;
        self.edge_index
            .get(&self.edge_key(source, target))
            .map(|&i| self.edges[i].weight)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &EventNode> {
        self.nodes.iter()
    }

    /// Raw edges in insertion order.
    pub fn raw_edges(&self) -> &[TransitionEdge] {
        &self.edges
    }

    /// All edges as `(source, target, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.edges.iter().map(|edge| {
            (
                self.nodes[edge.source].event.as_str(),
                self.nodes[edge.target].event.as_str(),
                edge.weight,
            )
        })
    }

    /// Sum of all node frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.nodes.iter().map(|n| n.frequency).sum()
    }

    /// Events reachable in one transition, heaviest first.
    ///
    /// For undirected graphs every neighbour counts.
    pub fn successors(&self, event: &str) -> Vec<(&str, u64)> {
        let Some(&node) = self.node_index.get(event) else {
            return Vec::new();
        };

        let mut next: Vec<(&str, u64)> = self
            .edges
            .iter()
            .filter_map(|edge| {
                let other = if edge.source == node {
                    edge.target
                } else if !self.is_directed() && edge.target == node {
                    edge.source
                } else {
                    return None;
                };
                Some((self.nodes[other].event.as_str(), edge.weight))
            })
            .collect();

        next.sort_by(|a, b| b.1.cmp(&a.1));
        next
    }

    /// Share of `source`'s outgoing weight that goes to `target`.
    pub fn transition_probability(&self, source: &str, target: &str) -> Option<f64> {
        let weight = self.weight(source, target)?;
        let total: u64 = self.successors(source).iter().map(|(_, w)| w).sum();
        if total == 0 {
            return None;
        }
        Some(weight as f64 / total as f64)
    }

    /// Count one occurrence of `event`, and of the transition from `previous`
    /// when given. Node and edge are updated in the same call.
    ///
    /// Returns the node position of `event`.
    pub(crate) fn record(&mut self, previous: Option<usize>, event: &str) -> usize {
        let node = self.ensure_node(event);
        self.nodes[node].frequency += 1;

        if let Some(previous) = previous {
            let key = self.edge_key(previous, node);
            let edge = match self.edge_index.get(&key) {
                Some(&i) => i,
                None => {
                    self.edges.push(TransitionEdge {
                        source: previous,
                        target: node,
                        weight: 0,
                    });
                    self.edge_index.insert(key, self.edges.len() - 1);
                    self.edges.len() - 1
                }
            };
            self.edges[edge].weight += 1;
        }

        node
    }

    fn ensure_node(&mut self, event: &str) -> usize {
        if let Some(&i) = self.node_index.get(event) {
            return i;
        }
        self.nodes.push(EventNode {
            event: event.to_string(),
            frequency: 0,
        });
        self.node_index.insert(event.to_string(), self.nodes.len() - 1);
        self.nodes.len() - 1
    }

    fn edge_key(&self, source: usize, target: usize) -> (usize, usize) {
        match self.kind {
            GraphKind::Directed => (source, target),
            GraphKind::Undirected => (source.min(target), source.max(target)),
        }
    }
}

/// Graphs are equal when they have the same kind, the same node
/// frequencies and the same edge weights, regardless of insertion order.
impl PartialEq for EventGraph {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.node_count() == other.node_count()
            && self.edge_count() == other.edge_count()
            && self
                .nodes()
                .all(|n| other.frequency(&n.event) == Some(n.frequency))
            && self
                .edges()
                .all(|(s, t, w)| other.weight(s, t) == Some(w))
    }
}

// src/graph/assembler.rs
//! Owns the node and edge containers for one compiled graph.

use std::collections::{HashMap, HashSet};

use super::propagate;
use super::style::StyleHint;
use super::types::{CompiledGraph, GraphEdge, GraphNode, GraphSettings, NodeKind};

/// Grows one graph monotonically. Node ids are unique and every unordered
/// `{source, target}` pair carries at most one edge.
#[derive(Debug, Default)]
pub struct GraphAssembler {
    nodes: Vec<GraphNode>,
    positions: HashMap<String, usize>,
    edges: Vec<GraphEdge>,
    pairs: HashSet<(String, String)>,
    settings: GraphSettings,
}

impl GraphAssembler {
    #[must_use]
    pub fn new(settings: GraphSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn node_exists(&self, id: &str) -> bool {
        self.positions.contains_key(id.trim())
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.positions
            .get(id.trim())
            .and_then(|&i| self.nodes.get(i))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a course node. Returns false for an empty id or an id already present;
    /// an existing node keeps its style and state.
    pub fn add_node(&mut self, id: &str, label: &str) -> bool {
        let style = StyleHint::for_label(label, self.settings.width_per_char);
        self.insert(id, label, NodeKind::Course, style)
    }

    /// Adds a gate node with the neutral style.
    pub fn add_gate_node(&mut self, id: &str, label: &str) -> bool {
        let style = StyleHint::gate(label, self.settings.width_per_char);
        self.insert(id, label, NodeKind::Gate, style)
    }

    fn insert(&mut self, id: &str, label: &str, kind: NodeKind, style_hint: StyleHint) -> bool {
        let id = id.trim();
        if id.is_empty() || self.positions.contains_key(id) {
            return false;
        }

        self.positions.insert(id.to_string(), self.nodes.len());
        self.nodes.push(GraphNode {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            prerequisite_ids: Vec::new(),
            ancestor_ids: Vec::new(),
            dependent_ids: Vec::new(),
            style_hint,
        });
        true
    }

    /// True if an edge joins `a` and `b` in either direction.
    ///
    /// Ends are compared trimmed and case-sensitive.
    #[must_use]
    pub fn nodes_connected(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&pair_key(a, b))
    }

    /// Adds `source -> target` unless the pair is already connected.
    ///
    /// Records `source` in the target's prerequisite list. Returns false when
    /// nothing was added.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || !self.pairs.insert(pair_key(source, target)) {
            return false;
        }

        self.edges.push(GraphEdge {
            id: format!("e{}", self.edges.len()),
            source: source.to_string(),
            target: target.to_string(),
            edge_type: self.settings.edge_type.clone(),
            animated: self.settings.animated,
        });

        if let Some(node) = self.node_mut(target) {
            node.push_prerequisite(source);
        }
        true
    }

    /// Records prerequisite entries that do not come from edges, such as raw
    /// catalog clauses.
    pub fn seed_prerequisites<I, S>(&mut self, id: &str, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(node) = self.node_mut(id) {
            for entry in entries {
                node.push_prerequisite(entry.as_ref());
            }
        }
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Runs the propagation pass and hands back the finished graph.
    #[must_use]
    pub fn finish(mut self, title: &str) -> CompiledGraph {
        propagate::propagate(&mut self.nodes);
        CompiledGraph {
            title: title.to_string(),
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        let i = *self.positions.get(id.trim())?;
        self.nodes.get_mut(i)
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (a.trim(), b.trim());
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

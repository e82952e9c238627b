// src/graph/types.rs
//! Compiled graph shapes handed to the rendering layer.

use super::style::StyleHint;
use serde::{Deserialize, Serialize};

/// What a vertex stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Course,
    /// Synthetic quantifier node such as `1 of` or `all`.
    Gate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    /// Entries this node immediately depends on.
    pub prerequisite_ids: Vec<String>,
    /// Nodes reachable through the prerequisite chain.
    pub ancestor_ids: Vec<String>,
    /// Nodes that list this node as a prerequisite.
    pub dependent_ids: Vec<String>,
    pub style_hint: StyleHint,
}

impl GraphNode {
    #[must_use]
    pub fn is_gate(&self) -> bool {
        self.kind == NodeKind::Gate
    }

    /// Appends unless already present.
    pub(crate) fn push_prerequisite(&mut self, id: &str) {
        push_unique(&mut self.prerequisite_ids, id);
    }
}

/// Directed `source -> target`: source is a prerequisite of target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub animated: bool,
}

/// Rendering defaults carried into every node and edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    #[serde(default = "default_edge_type")]
    pub edge_type: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default = "default_width_per_char")]
    pub width_per_char: usize,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            edge_type: default_edge_type(),
            animated: false,
            width_per_char: default_width_per_char(),
        }
    }
}

fn default_edge_type() -> String { "simplebezier".to_string() }
const fn default_width_per_char() -> usize { super::style::DEFAULT_WIDTH_PER_CHAR }

/// Result of one compile operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledGraph {
    pub title: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CompiledGraph {
    /// Graph returned when the seed is not in the catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    pub fn gates(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_gate())
    }

    #[must_use]
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}

pub(crate) fn push_unique(list: &mut Vec<String>, id: &str) {
    if !list.iter().any(|existing| existing == id) {
        list.push(id.to_string());
    }
}

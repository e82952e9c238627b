// src/graph/mod.rs
//! Graph assembly: nodes, edges, gates, styling, and propagation.

pub mod assembler;
pub mod gate;
pub mod propagate;
pub mod style;
pub mod types;

pub use assembler::GraphAssembler;
pub use gate::{resolve as resolve_gate, GateCounter, GateEmission, GateRequest};
pub use style::{style_for, StyleHint, Tone};
pub use types::{CompiledGraph, GraphEdge, GraphNode, GraphSettings, NodeKind};

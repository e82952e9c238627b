// src/graph/gate.rs
//! Decides when a group of prerequisite candidates needs a synthetic gate node.

use std::collections::HashMap;

use tracing::debug;

use super::assembler::GraphAssembler;
use crate::catalog::CatalogIndex;

/// Per-compile count of extra gates minted for each prefix label.
#[derive(Debug, Default, Clone)]
pub struct GateCounter {
    counts: HashMap<String, usize>,
}

impl GateCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of disambiguated ids minted so far for `prefix`.
    #[must_use]
    pub fn count(&self, prefix: &str) -> usize {
        self.counts.get(prefix).copied().unwrap_or(0)
    }

    /// Picks an unused id for a new gate labelled `prefix`.
    ///
    /// The first gate takes the label verbatim; later ones get `prefix2`,
    /// `prefix3`, ...
    pub fn mint(&mut self, prefix: &str, assembler: &GraphAssembler) -> String {
        if !assembler.node_exists(prefix) {
            return prefix.to_string();
        }

        let count = self.counts.entry(prefix.to_string()).or_insert(0);
        loop {
            *count += 1;
            let id = format!("{prefix}{}", *count + 1);
            if !assembler.node_exists(&id) {
                debug!(prefix, id = %id, "minted disambiguated gate id");
                return id;
            }
        }
    }
}

/// One group of candidates to wire into `target`.
#[derive(Debug, Clone, Copy)]
pub struct GateRequest<'r> {
    pub prefix: &'r str,
    pub candidates: &'r [String],
    pub subject: &'r str,
    pub target: &'r str,
}

/// What [`resolve`] added to the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateEmission {
    /// Id of the gate node, when one was needed.
    pub gate_id: Option<String>,
    /// Eligible candidates wired into the graph, in candidate order.
    pub wired: Vec<String>,
}

/// Wires the eligible candidates of `request` into its target.
///
/// More than one eligible candidate routes them through a gate node;
/// otherwise each is wired straight to the target.
pub fn resolve(
    catalog: &CatalogIndex<'_>,
    counter: &mut GateCounter,
    assembler: &mut GraphAssembler,
    request: GateRequest<'_>,
) -> GateEmission {
    let eligible = eligible_tokens(catalog, request.candidates, request.subject);

    if eligible.len() <= 1 {
        for token in &eligible {
            assembler.add_node(token, token);
            assembler.add_edge(token, request.target);
        }
        return GateEmission {
            gate_id: None,
            wired: eligible,
        };
    }

    let gate_id = counter.mint(request.prefix, assembler);
    assembler.add_gate_node(&gate_id, request.prefix);

    for token in &eligible {
        assembler.add_node(token, token);
        assembler.add_edge(token, &gate_id);
    }
    assembler.add_edge(&gate_id, request.target);

    GateEmission {
        gate_id: Some(gate_id),
        wired: eligible,
    }
}

fn eligible_tokens(catalog: &CatalogIndex<'_>, candidates: &[String], subject: &str) -> Vec<String> {
    let mut eligible: Vec<String> = Vec::new();
    for candidate in candidates {
        let token = candidate.trim();
        if !catalog.is_eligible(token, subject) {
            debug!(token, subject, "skipping ineligible candidate");
            continue;
        }
        if !eligible.iter().any(|t| t == token) {
            eligible.push(token.to_string());
        }
    }
    eligible
}

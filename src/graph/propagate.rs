// src/graph/propagate.rs
//! Post-assembly pass filling `ancestor_ids` and `dependent_ids`.
//!
//! A node `p` is a direct prerequisite of `c` when some entry of
//! `c.prerequisite_ids` contains `p.id` as a substring. Matching is loose on
//! purpose: seeded entries may be raw clause text such as `1 of CIS*1300`, and
//! gate ids carry numeric suffixes.

use std::collections::HashSet;

use super::types::{push_unique, GraphNode};

/// Fills both derived lists for every node. Existing entries are kept.
pub fn propagate(nodes: &mut [GraphNode]) {
    let direct = direct_prerequisites(nodes);

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (child, parents) in direct.iter().enumerate() {
        for &parent in parents {
            dependents[parent].push(child);
        }
    }

    let ancestors: Vec<Vec<usize>> = (0..nodes.len())
        .map(|start| closure(&direct, start))
        .collect();

    let ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
    for (i, node) in nodes.iter_mut().enumerate() {
        for &a in &ancestors[i] {
            push_unique(&mut node.ancestor_ids, &ids[a]);
        }
        for &d in &dependents[i] {
            push_unique(&mut node.dependent_ids, &ids[d]);
        }
    }
}

/// `result[c]` lists the indices of nodes that `c` directly depends on, in
/// node order.
fn direct_prerequisites(nodes: &[GraphNode]) -> Vec<Vec<usize>> {
    nodes
        .iter()
        .enumerate()
        .map(|(c, child)| {
            nodes
                .iter()
                .enumerate()
                .filter(|&(p, parent)| {
                    p != c
                        && child
                            .prerequisite_ids
                            .iter()
                            .any(|entry| entry.contains(parent.id.as_str()))
                })
                .map(|(p, _)| p)
                .collect()
        })
        .collect()
}

/// Depth-first walk over `direct` from `start`, excluding `start` itself.
/// Cycles terminate through the visited set.
fn closure(direct: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = HashSet::from([start]);
    let mut order = Vec::new();
    let mut stack: Vec<usize> = direct[start].iter().rev().copied().collect();

    while let Some(next) = stack.pop() {
        if !visited.insert(next) {
            continue;
        }
        order.push(next);
        stack.extend(direct[next].iter().rev().copied());
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::assembler::GraphAssembler;
    use crate::graph::types::CompiledGraph;

    fn chain() -> CompiledGraph {
        let mut g = GraphAssembler::default();
        for id in ["A", "B", "C"] {
            g.add_node(id, id);
        }
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.finish("chain")
    }

    fn ids(list: &[String]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_three_level_chain_ancestors() {
        let graph = chain();
        let c = graph.node("C").map(|n| ids(&n.ancestor_ids));
        assert_eq!(c, Some(vec!["B", "A"]));
        let a = graph.node("A").map(|n| n.ancestor_ids.is_empty());
        assert_eq!(a, Some(true));
    }

    #[test]
    fn test_dependents_are_direct_only() {
        let graph = chain();
        assert_eq!(graph.node("A").map(|n| ids(&n.dependent_ids)), Some(vec!["B"]));
        assert_eq!(graph.node("B").map(|n| ids(&n.dependent_ids)), Some(vec!["C"]));
        assert_eq!(graph.node("C").map(|n| n.dependent_ids.is_empty()), Some(true));
    }

    #[test]
    fn test_every_edge_source_is_target_ancestor() {
        let mut g = GraphAssembler::default();
        for id in ["CIS*1300", "CIS*1500", "CIS*2500", "CIS*2750"] {
            g.add_node(id, id);
        }
        g.add_gate_node("1 of", "1 of");
        g.add_edge("CIS*1300", "1 of");
        g.add_edge("CIS*1500", "1 of");
        g.add_edge("1 of", "CIS*2500");
        g.add_edge("CIS*2500", "CIS*2750");
        let graph = g.finish("t");

        for edge in &graph.edges {
            let target = graph.node(&edge.target);
            assert!(
                target.is_some_and(|t| t.ancestor_ids.contains(&edge.source)),
                "Failed: {} -> {}",
                edge.source,
                edge.target
            );
        }
        let top = graph.node("CIS*2750").map(|n| n.ancestor_ids.len());
        assert_eq!(top, Some(4));
    }

    #[test]
    fn test_substring_matching_policy() {
        let mut g = GraphAssembler::default();
        g.add_node("CIS*1300", "CIS*1300");
        g.add_node("CIS*2500", "CIS*2500");
        g.seed_prerequisites("CIS*2500", ["1 of CIS*1300, CIS*1500"]);
        let graph = g.finish("t");

        assert_eq!(
            graph.node("CIS*1300").map(|n| ids(&n.dependent_ids)),
            Some(vec!["CIS*2500"])
        );
        assert_eq!(
            graph.node("CIS*2500").map(|n| ids(&n.ancestor_ids)),
            Some(vec!["CIS*1300"])
        );
    }

    #[test]
    fn test_suffixed_gate_matches_base_gate_id() {
        let mut g = GraphAssembler::default();
        g.add_gate_node("1 of", "1 of");
        g.add_gate_node("1 of2", "1 of");
        g.add_node("X", "X");
        g.add_edge("1 of2", "X");
        let graph = g.finish("t");

        let x = graph.node("X").map(|n| ids(&n.ancestor_ids));
        assert_eq!(x, Some(vec!["1 of", "1 of2"]));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut g = GraphAssembler::default();
        g.add_node("A", "A");
        g.add_node("B", "B");
        g.seed_prerequisites("A", ["B"]);
        g.seed_prerequisites("B", ["A"]);
        let graph = g.finish("t");

        assert_eq!(graph.node("A").map(|n| ids(&n.ancestor_ids)), Some(vec!["B"]));
        assert_eq!(graph.node("B").map(|n| ids(&n.ancestor_ids)), Some(vec!["A"]));
    }
}

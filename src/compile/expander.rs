// src/compile/expander.rs
//! Turns a course's raw prerequisite clauses into nodes and edges.

use tracing::debug;

use super::session::CompileSession;
use crate::catalog::CourseRecord;
use crate::graph::{resolve_gate, GateRequest};
use crate::prereq::{classify, ClauseForm};

/// Expands every clause of `course` against `subject`, wiring into the node
/// for `course.code`.
///
/// Returns the course tokens actually wired into the graph, in discovery
/// order. Course-code mode recurses into these.
pub fn expand_course(session: &mut CompileSession<'_, '_>, course: &CourseRecord, subject: &str) -> Vec<String> {
    let target = course.code.trim();
    let mut wired = Vec::new();

    for raw in &course.prerequisites {
        let form = classify(raw);
        debug!(course = target, clause = raw.as_str(), ?form, "classified clause");
        emit(session, form, subject, target, &mut wired);
    }
    wired
}

fn emit(
    session: &mut CompileSession<'_, '_>,
    form: ClauseForm,
    subject: &str,
    target: &str,
    wired: &mut Vec<String>,
) {
    match form {
        ClauseForm::Conjunctive { gate, candidates } => {
            emit_gate(session, gate, &candidates, subject, target, wired);
        }
        ClauseForm::Quantified {
            direct,
            gate,
            candidates,
        } => {
            if let Some(course) = direct {
                wire_direct(session, &course, subject, target, wired);
            }
            emit_gate(session, &gate, &candidates, subject, target, wired);
        }
        ClauseForm::QuantifiedSingle { course, .. } | ClauseForm::General(course) => {
            wire_direct(session, &course, subject, target, wired);
        }
    }
}

fn emit_gate(
    session: &mut CompileSession<'_, '_>,
    prefix: &str,
    candidates: &[String],
    subject: &str,
    target: &str,
    wired: &mut Vec<String>,
) {
    let catalog = session.catalog();
    let request = GateRequest {
        prefix,
        candidates,
        subject,
        target,
    };
    let emission = resolve_gate(catalog, &mut session.gates, &mut session.assembler, request);
    wired.extend(emission.wired);
}

/// Wires one token straight to `target` if it is eligible.
fn wire_direct(
    session: &mut CompileSession<'_, '_>,
    token: &str,
    subject: &str,
    target: &str,
    wired: &mut Vec<String>,
) {
    let token = token.trim();
    if !session.catalog().is_eligible(token, subject) {
        debug!(token, subject, "skipping ineligible course");
        return;
    }
    session.assembler.add_node(token, token);
    session.assembler.add_edge(token, target);
    wired.push(token.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogIndex;
    use crate::graph::GraphSettings;

    fn catalog() -> Vec<CourseRecord> {
        vec![
            CourseRecord::new("CIS*1300", "Computing", &[]),
            CourseRecord::new("CIS*1500", "Computing", &[]),
            CourseRecord::new("CIS*2430", "Computing", &[]),
            CourseRecord::new("CIS*2500", "Computing", &[]),
            CourseRecord::new("CIS*2520", "Computing", &[]),
            CourseRecord::new("MATH*1200", "Mathematics", &[]),
        ]
    }

    fn expand(clauses: &[&str]) -> (Vec<String>, crate::graph::CompiledGraph) {
        let data = catalog();
        let index = CatalogIndex::new(&data, '*');
        let mut session = CompileSession::new(&index, GraphSettings::default());
        let course = CourseRecord::new("CIS*3110", "Computing", clauses);
        session.assembler.add_node("CIS*3110", "CIS*3110");
        let wired = expand_course(&mut session, &course, "CIS");
        (wired, session.finish("t"))
    }

    #[test]
    fn test_general_clause_wires_directly() {
        let (wired, graph) = expand(&["CIS*2500"]);
        assert_eq!(wired, vec!["CIS*2500".to_string()]);
        assert!(graph.has_edge("CIS*2500", "CIS*3110"));
        assert_eq!(graph.gates().count(), 0);
    }

    #[test]
    fn test_leading_course_keeps_quantifier_in_first_candidate() {
        // "1 of CIS*2430" reads as subject "1 of CIS", so only CIS*2500 survives.
        let (wired, graph) = expand(&["CIS*2520, 1 of CIS*2430, CIS*2500"]);
        assert_eq!(wired, vec!["CIS*2520", "CIS*2500"]);
        assert!(graph.has_edge("CIS*2520", "CIS*3110"));
        assert!(graph.has_edge("CIS*2500", "CIS*3110"));
        assert!(graph.node("CIS*2430").is_none());
        assert_eq!(graph.gates().count(), 0);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_leading_course_then_gate_over_remaining_candidates() {
        let (wired, graph) = expand(&["CIS*2520, 1 of CIS*1300, CIS*1500, CIS*2500"]);
        assert_eq!(wired, vec!["CIS*2520", "CIS*1500", "CIS*2500"]);
        assert!(graph.has_edge("CIS*1500", "1 of"));
        assert!(graph.has_edge("CIS*2500", "1 of"));
        assert!(graph.has_edge("1 of", "CIS*3110"));
        assert!(graph.node("CIS*1300").is_none());
    }

    #[test]
    fn test_quantified_single_never_gates() {
        let (wired, graph) = expand(&["1 of CIS*1300"]);
        assert_eq!(wired, vec!["CIS*1300"]);
        assert!(graph.has_edge("CIS*1300", "CIS*3110"));
        assert_eq!(graph.gates().count(), 0);
    }

    #[test]
    fn test_two_gates_same_prefix() {
        let (_, graph) = expand(&["CIS*1300 or CIS*1500", "CIS*2430 or CIS*2500"]);
        let gates: Vec<_> = graph.gates().map(|g| (g.id.as_str(), g.label.as_str())).collect();
        assert_eq!(gates, vec![("1 of", "1 of"), ("1 of2", "1 of")]);
        assert!(graph.has_edge("1 of2", "CIS*3110"));
    }

    #[test]
    fn test_foreign_subject_filtered() {
        let (wired, graph) = expand(&["MATH*1200", "(MATH*1200 or CIS*1300)"]);
        assert_eq!(wired, vec!["CIS*1300"]);
        assert!(graph.node("MATH*1200").is_none());
    }

    #[test]
    fn test_unreadable_text_is_dropped() {
        let (wired, graph) = expand(&["Instructor consent", ""]);
        assert!(wired.is_empty());
        assert_eq!(graph.nodes.len(), 1);
    }
}

// src/compile/program.rs
//! Graphs of the courses a major or minor requires.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};

use super::session::CompileSession;
use super::Compiler;
use crate::catalog::{programs, CourseRecord, PrerequisiteStyle, ProgramKind, ProgramRecord};
use crate::graph::CompiledGraph;

fn punctuation() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").ok()).as_ref()
}

impl Compiler<'_> {
    /// Graph of the course list of the program named by `term`.
    ///
    /// Returns an empty graph when no program matches or the program does not
    /// offer `kind`.
    #[must_use]
    pub fn program(&self, programs: &[ProgramRecord], term: &str, kind: ProgramKind) -> CompiledGraph {
        let Some(program) = programs::find_program(programs, term, kind) else {
            warn!(term, %kind, "program not found");
            return CompiledGraph::empty();
        };
        let Some(requirements) = program.requirements(kind) else {
            return CompiledGraph::empty();
        };

        let mut session = CompileSession::new(self.catalog(), self.settings().clone());
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();

        for name in &requirements.courses {
            let name = name.trim();
            if name.is_empty() || !session.assembler.add_node(name, name) {
                continue;
            }
            let prerequisites = self.program_prerequisites(name);
            session.assembler.seed_prerequisites(name, &prerequisites);
            entries.push((name.to_string(), prerequisites));
        }

        for (course, prerequisites) in &entries {
            for (other, _) in &entries {
                if other != course && prerequisites.iter().any(|p| p.contains(other.as_str())) {
                    session.assembler.add_edge(other, course);
                }
            }
        }

        let graph = session.finish(&program.title());
        info!(
            program = program.program_code.as_str(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "compiled program graph"
        );
        graph
    }

    /// Prerequisite entries for a program course name, looked up in the catalog.
    fn program_prerequisites(&self, name: &str) -> Vec<String> {
        match self.style {
            PrerequisiteStyle::Clauses => self
                .catalog()
                .find_by_name(name)
                .map(|course| course.prerequisites.clone())
                .unwrap_or_default(),
            PrerequisiteStyle::Linked => self.linked_prerequisites(name),
        }
    }

    fn linked_prerequisites(&self, name: &str) -> Vec<String> {
        let cleaned = match punctuation() {
            Some(re) => re.replace_all(name, "").into_owned(),
            None => name.to_string(),
        };
        let Some(found) = self.catalog().find_by_name(&cleaned) else {
            debug!(name, "program course missing from catalog");
            return Vec::new();
        };

        let text = found.prerequisites.join(" ");
        self.catalog()
            .courses()
            .iter()
            .map(CourseRecord::display_code)
            .filter(|code| !code.is_empty() && text.contains(code))
            .map(str::to_string)
            .collect()
    }
}

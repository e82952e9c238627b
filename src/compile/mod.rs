// src/compile/mod.rs
//! Compile drivers: subject, course-code, linked-subject and program graphs.

pub mod batch;
pub mod expander;
pub mod program;
pub mod session;

pub use batch::compile_all_subjects;
pub use session::{CompileSession, SeedVisit};

use tracing::{debug, info, warn};

use crate::catalog::{CatalogIndex, CourseRecord, PrerequisiteStyle};
use crate::graph::{CompiledGraph, GraphSettings};

/// Compiles graphs from one borrowed catalog.
///
/// Each call builds a fresh [`CompileSession`], so a single `Compiler` can be
/// used from several threads at once.
#[derive(Debug, Clone)]
pub struct Compiler<'a> {
    catalog: &'a CatalogIndex<'a>,
    style: PrerequisiteStyle,
    settings: GraphSettings,
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub fn new(catalog: &'a CatalogIndex<'a>, style: PrerequisiteStyle) -> Self {
        Self {
            catalog,
            style,
            settings: GraphSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: GraphSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &'a CatalogIndex<'a> {
        self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    /// Picks the mode from the term and catalog style.
    ///
    /// Linked catalogs always use [`Compiler::linked_subject`]. Otherwise a term
    /// containing the code separator is a course code, anything else a subject.
    #[must_use]
    pub fn compile(&self, term: &str) -> CompiledGraph {
        let term = term.trim().to_uppercase();
        let graph = match self.style {
            PrerequisiteStyle::Linked => self.linked_subject(&term),
            PrerequisiteStyle::Clauses if self.catalog.is_course_code(&term) => self.course(&term),
            PrerequisiteStyle::Clauses => self.subject(&term),
        };
        info!(
            term = term.as_str(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "compiled graph"
        );
        graph
    }

    /// One level of prerequisites for every course in `subject`.
    ///
    /// Prerequisites from other subjects are filtered out, not graphed.
    #[must_use]
    pub fn subject(&self, subject: &str) -> CompiledGraph {
        let subject = subject.trim().to_uppercase();
        let subject = subject.as_str();
        let courses = self.catalog.search_by_code(subject);
        let Some(first) = courses.first() else {
            warn!(subject, "no courses found for subject");
            return CompiledGraph::empty();
        };

        let mut session = CompileSession::new(self.catalog, self.settings.clone());
        for course in &courses {
            session.assembler.add_node(&course.code, &course.code);
            if course.has_prerequisites() {
                expander::expand_course(&mut session, course, subject);
            }
        }
        session.finish(&first.department)
    }

    /// The full prerequisite chain of one course, following each wired
    /// prerequisite into its own subject.
    #[must_use]
    pub fn course(&self, code: &str) -> CompiledGraph {
        let code = code.trim().to_uppercase();
        let code = code.as_str();
        let seeds = self.catalog.search_by_code(code);
        let Some(first) = seeds.first() else {
            warn!(code, "course not found in catalog");
            return CompiledGraph::empty();
        };

        let mut session = CompileSession::new(self.catalog, self.settings.clone());
        self.expand_transitively(&mut session, &seeds);
        session.finish(&first.department)
    }

    fn expand_transitively(&self, session: &mut CompileSession<'_, 'a>, courses: &[&CourseRecord]) {
        for course in courses {
            session.assembler.add_node(&course.code, &course.code);
            if !course.has_prerequisites() {
                continue;
            }

            match session.enter(&course.code) {
                SeedVisit::Fresh => {}
                SeedVisit::Revisit => {
                    debug!(code = course.code.as_str(), "already expanded");
                    continue;
                }
                SeedVisit::Cycle => {
                    warn!(code = course.code.as_str(), "prerequisite cycle, not re-expanding");
                    continue;
                }
            }

            let subject = self.catalog.subject_of(&course.code);
            let wired = expander::expand_course(session, course, subject);
            for token in wired {
                let next = self.catalog.search_by_code(&token);
                self.expand_transitively(session, &next);
            }
            session.leave(&course.code);
        }
    }

    /// Subject graph for catalogs whose prerequisite lists already name codes.
    ///
    /// Adds `b -> a` whenever `a`'s prerequisite text mentions `b`'s code.
    #[must_use]
    pub fn linked_subject(&self, term: &str) -> CompiledGraph {
        let term = term.trim().to_uppercase();
        let term = term.as_str();
        let courses = self.catalog.search_by_code(term);
        let Some(first) = courses.first() else {
            warn!(term, "no courses found");
            return CompiledGraph::empty();
        };

        let mut session = CompileSession::new(self.catalog, self.settings.clone());
        for course in &courses {
            session.assembler.add_node(course.display_code(), course.display_code());
        }

        for course in &courses {
            if !course.has_prerequisites() {
                continue;
            }
            let text = course.prerequisites.join(" ");
            let target = course.display_code();
            for other in &courses {
                let source = other.display_code();
                if source != target && text.contains(source) {
                    session.assembler.add_edge(source, target);
                }
            }
        }
        session.finish(&first.department)
    }
}

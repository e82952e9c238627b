// src/compile/session.rs
use std::collections::HashSet;

use crate::catalog::CatalogIndex;
use crate::graph::{CompiledGraph, GateCounter, GraphAssembler, GraphSettings};

/// Mutable state owned by exactly one compile operation.
///
/// Nothing here is shared between compiles; only the catalog is borrowed.
#[derive(Debug)]
pub struct CompileSession<'c, 'a> {
    catalog: &'c CatalogIndex<'a>,
    pub(crate) assembler: GraphAssembler,
    pub(crate) gates: GateCounter,
    visited: HashSet<String>,
    active: HashSet<String>,
}

/// Outcome of trying to enter a seed in course-code mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedVisit {
    /// First time this seed is expanded.
    Fresh,
    /// Already expanded earlier in this compile.
    Revisit,
    /// Reached again while its own expansion is still running.
    Cycle,
}

impl<'c, 'a> CompileSession<'c, 'a> {
    #[must_use]
    pub fn new(catalog: &'c CatalogIndex<'a>, settings: GraphSettings) -> Self {
        Self {
            catalog,
            assembler: GraphAssembler::new(settings),
            gates: GateCounter::new(),
            visited: HashSet::new(),
            active: HashSet::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c CatalogIndex<'a> {
        self.catalog
    }

    #[must_use]
    pub fn assembler(&self) -> &GraphAssembler {
        &self.assembler
    }

    /// Marks `code` as being expanded.
    pub fn enter(&mut self, code: &str) -> SeedVisit {
        let code = code.trim();
        if self.active.contains(code) {
            return SeedVisit::Cycle;
        }
        if !self.visited.insert(code.to_string()) {
            return SeedVisit::Revisit;
        }
        self.active.insert(code.to_string());
        SeedVisit::Fresh
    }

    /// Ends the expansion started by a [`SeedVisit::Fresh`] entry.
    pub fn leave(&mut self, code: &str) {
        self.active.remove(code.trim());
    }

    #[must_use]
    pub fn finish(self, title: &str) -> CompiledGraph {
        self.assembler.finish(title)
    }
}

// src/cli/handlers.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::{self, loader, CatalogIndex, CourseRecord, ProgramKind};
use crate::compile::{compile_all_subjects, Compiler};
use crate::config::Config;
use crate::exit::CoursemapExit;
use crate::graph::CompiledGraph;
use crate::reporting;

fn load_courses(config: &Config) -> Result<Vec<CourseRecord>> {
    let path = config.courses_path();
    loader::load_courses(&path)
        .with_context(|| format!("Failed to load {} courses", config.school()))
}

fn emit(config: &Config, graph: &CompiledGraph, term: &str, out: Option<&Path>) -> Result<CoursemapExit> {
    if graph.is_empty() {
        reporting::print_no_results(term);
        return Ok(CoursemapExit::NoResults);
    }
    match out {
        Some(path) => reporting::write_json(graph, path, config.pretty())?,
        None => reporting::print_json(graph, config.pretty())?,
    }
    reporting::print_summary(graph);
    Ok(CoursemapExit::for_graph(graph))
}

/// Handles `graph <TERM>`.
///
/// # Errors
/// Returns error if the catalog cannot be loaded or output fails.
pub fn handle_graph(config: &Config, term: &str, out: Option<&Path>) -> Result<CoursemapExit> {
    let courses = load_courses(config)?;
    let index = CatalogIndex::new(&courses, config.separator());
    let compiler =
        Compiler::new(&index, config.prerequisite_style()).with_settings(config.graph().clone());

    let graph = compiler.compile(term);
    emit(config, &graph, term, out)
}

/// Handles `program <TERM>`.
///
/// # Errors
/// Returns error if the catalog or program file cannot be loaded or output fails.
pub fn handle_program(
    config: &Config,
    term: &str,
    kind: ProgramKind,
    out: Option<&Path>,
) -> Result<CoursemapExit> {
    let courses = load_courses(config)?;
    let programs = loader::load_programs(&config.programs_path())
        .with_context(|| format!("Failed to load {} programs", config.school()))?;
    let index = CatalogIndex::new(&courses, config.separator());
    let compiler =
        Compiler::new(&index, config.prerequisite_style()).with_settings(config.graph().clone());

    let graph = compiler.program(&programs, term, kind);
    emit(config, &graph, term, out)
}

/// Handles `programs --kind`.
///
/// # Errors
/// Returns error if the program file cannot be loaded.
pub fn handle_programs(config: &Config, kind: ProgramKind) -> Result<CoursemapExit> {
    let programs = loader::load_programs(&config.programs_path())
        .with_context(|| format!("Failed to load {} programs", config.school()))?;
    let offering = catalog::programs::programs_offering(&programs, kind);
    if offering.is_empty() {
        reporting::print_no_results(&kind.to_string());
        return Ok(CoursemapExit::NoResults);
    }
    reporting::print_program_list(&offering, kind);
    Ok(CoursemapExit::Success)
}

/// Handles `batch --out-dir`.
///
/// # Errors
/// Returns error if the catalog cannot be loaded or a file cannot be written.
pub fn handle_batch(config: &Config, out_dir: &Path) -> Result<CoursemapExit> {
    let courses = load_courses(config)?;
    let index = CatalogIndex::new(&courses, config.separator());
    let compiler =
        Compiler::new(&index, config.prerequisite_style()).with_settings(config.graph().clone());

    let graphs = compile_all_subjects(&compiler);
    if graphs.is_empty() {
        reporting::print_no_results("catalog");
        return Ok(CoursemapExit::NoResults);
    }

    for (subject, graph) in &graphs {
        let path = subject_file(out_dir, subject);
        reporting::write_json(graph, &path, config.pretty())?;
        reporting::print_batch_line(subject, graph, &path);
    }
    Ok(CoursemapExit::Success)
}

fn subject_file(out_dir: &Path, subject: &str) -> PathBuf {
    let name: String = subject
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    out_dir.join(format!("{name}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_file_names() {
        let dir = Path::new("out");
        assert_eq!(subject_file(dir, "CIS"), PathBuf::from("out/cis.json"));
        assert_eq!(subject_file(dir, "A/B"), PathBuf::from("out/a_b.json"));
    }
}

// src/reporting.rs
//! Output for compiled graphs: JSON for machines, a short colored summary for
//! people. JSON goes to stdout or a file, summaries to stderr.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::catalog::{ProgramKind, ProgramRecord};
use crate::graph::CompiledGraph;

/// Serializes a graph as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(graph: &CompiledGraph, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    };
    json.context("Failed to serialize graph")
}

/// Prints a graph as JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(graph: &CompiledGraph, pretty: bool) -> Result<()> {
    println!("{}", render_json(graph, pretty)?);
    Ok(())
}

/// Writes a graph as JSON to `path`, creating parent directories.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_json(graph: &CompiledGraph, path: &Path, pretty: bool) -> Result<()> {
    let json = render_json(graph, pretty)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// One-paragraph summary of a graph.
#[must_use]
pub fn format_summary(graph: &CompiledGraph) -> String {
    let mut out = String::new();
    let title = if graph.title.is_empty() {
        "(untitled)"
    } else {
        graph.title.as_str()
    };
    let gates = graph.gates().count();

    let _ = writeln!(out, "{}", title.bold());
    let _ = writeln!(
        out,
        "  {} courses, {} gates, {} edges",
        graph.nodes.len() - gates,
        gates,
        graph.edges.len()
    );
    out
}

pub fn print_summary(graph: &CompiledGraph) {
    eprint!("{}", format_summary(graph));
}

pub fn print_no_results(term: &str) {
    eprintln!(
        "{} No results found for {}. Check your spelling and try again.",
        "!".yellow().bold(),
        term.bold()
    );
}

/// Prints `code  name` for every program offering `kind`.
pub fn print_program_list(programs: &[&ProgramRecord], kind: ProgramKind) {
    eprintln!("{}", format!("{kind} programs ({})", programs.len()).bold());
    for program in programs {
        println!("{:<12} {}", program.program_code, program.program_name);
    }
}

pub fn print_batch_line(subject: &str, graph: &CompiledGraph, path: &Path) {
    eprintln!(
        "{} {:<8} {:>4} nodes -> {}",
        "✓".green(),
        subject,
        graph.nodes.len(),
        path.display().to_string().dimmed()
    );
}

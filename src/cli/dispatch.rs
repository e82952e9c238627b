// src/cli/dispatch.rs
//! Routes parsed arguments to handlers.

use super::args::{Cli, Commands};
use super::handlers::{handle_batch, handle_graph, handle_program, handle_programs};
use crate::config::Config;
use crate::exit::CoursemapExit;
use anyhow::{Context, Result};

/// Loads configuration, applies global flags, and runs the command.
///
/// # Errors
/// Returns error if configuration or the command handler fails.
pub fn execute(cli: &Cli) -> Result<CoursemapExit> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(school) = cli.school {
        config = config.with_school(school);
    }

    match &cli.command {
        Commands::Graph { term, out } => handle_graph(&config, term, out.as_deref()),
        Commands::Program { term, kind, out } => handle_program(&config, term, *kind, out.as_deref()),
        Commands::Programs { kind } => handle_programs(&config, *kind),
        Commands::Batch { out_dir } => handle_batch(&config, out_dir),
    }
}

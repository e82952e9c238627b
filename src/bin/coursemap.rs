// src/bin/coursemap.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use coursemap_core::cli::{dispatch, Cli};
use coursemap_core::exit::CoursemapExit;

fn main() -> CoursemapExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch::execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CoursemapExit::Error
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "coursemap_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{ProgramKind, School};

#[derive(Parser, Debug)]
#[command(name = "coursemap", version, about = "Compile course prerequisite text into graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (defaults to ./coursemap.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Calendar to read, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub school: Option<School>,
    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Graph a subject (`CIS`) or one course and its chain (`CIS*3110`)
    Graph {
        term: String,
        /// Write JSON here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Graph the courses a major or minor requires
    Program {
        /// Program code or name
        term: String,
        #[arg(long, value_enum, default_value_t = ProgramKind::Major)]
        kind: ProgramKind,
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List programs offering a major or minor
    Programs {
        #[arg(long, value_enum, default_value_t = ProgramKind::Major)]
        kind: ProgramKind,
    },
    /// Graph every subject in the catalog, one JSON file each
    Batch {
        #[arg(long, value_name = "DIR", default_value = "graphs")]
        out_dir: PathBuf,
    },
}

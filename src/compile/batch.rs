// src/compile/batch.rs
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::info;

use super::Compiler;
use crate::graph::CompiledGraph;

/// Compiles one graph per catalog subject on the rayon pool.
///
/// Every subject gets its own session. Results keep the catalog's
/// first-seen subject order.
#[must_use]
pub fn compile_all_subjects(compiler: &Compiler<'_>) -> Vec<(String, CompiledGraph)> {
    let subjects = compiler.catalog().subjects();
    info!(subjects = subjects.len(), "compiling all subjects");

    subjects
        .par_iter()
        .map(|subject| (subject.clone(), compiler.compile(subject)))
        .collect()
}

// src/exit.rs
//! Process exit codes for `coursemap`.
//!
//! Scripts can tell "nothing matched" apart from a real failure.

use std::process::Termination;

use crate::graph::CompiledGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CoursemapExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (IO, JSON, config).
    Error = 1,
    /// The term matched no course, subject, or program.
    NoResults = 2,
}

impl CoursemapExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// `NoResults` for an empty graph, `Success` otherwise.
    #[must_use]
    pub fn for_graph(graph: &CompiledGraph) -> Self {
        if graph.is_empty() {
            Self::NoResults
        } else {
            Self::Success
        }
    }
}

impl Termination for CoursemapExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

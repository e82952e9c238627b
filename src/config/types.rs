// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::School;
use crate::graph::GraphSettings;

/// `[catalog]`: which calendar to read and where its files live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub school: School,
    /// Overrides the school's default course file.
    #[serde(default)]
    pub courses: Option<PathBuf>,
    /// Overrides the school's default program file.
    #[serde(default)]
    pub programs: Option<PathBuf>,
    /// Overrides the school's subject/number separator.
    #[serde(default)]
    pub separator: Option<char>,
}

/// `[graph]`: rendering defaults plus output formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSection {
    #[serde(flatten)]
    pub settings: GraphSettings,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            settings: GraphSettings::default(),
            pretty: default_pretty(),
        }
    }
}

const fn default_pretty() -> bool { true }

/// On-disk shape of `coursemap.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursemapToml {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub graph: GraphSection,
}

// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::CoursemapToml;
use crate::error::{CoursemapError, Result};

pub const CONFIG_FILE: &str = "coursemap.toml";

/// Reads `path`, or [`CONFIG_FILE`] in the working directory.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_toml(path: Option<&Path>) -> Result<CoursemapToml> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (Path::new(CONFIG_FILE), false),
    };

    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CoursemapToml::default());
    }

    let content = fs::read_to_string(path).map_err(|source| CoursemapError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), "loaded config file");
    parse_toml(&content)
}

/// Parses config text.
pub fn parse_toml(content: &str) -> Result<CoursemapToml> {
    Ok(toml::from_str(content)?)
}

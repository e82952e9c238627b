// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{CatalogSection, CoursemapToml, GraphSection};

use std::path::{Path, PathBuf};

use crate::catalog::{PrerequisiteStyle, School};
use crate::error::{CoursemapError, Result};
use crate::graph::GraphSettings;

/// Resolved configuration: file values with school defaults filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    file: CoursemapToml,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` (or `coursemap.toml`) and validates it.
    ///
    /// # Errors
    /// Returns error if an explicit file is unreadable, the TOML is invalid,
    /// or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_toml(io::load_toml(path)?)
    }

    /// Parses and validates config text.
    ///
    /// # Errors
    /// Returns error on invalid TOML or failed validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_toml(io::parse_toml(content)?)
    }

    /// # Errors
    /// Returns error if validation fails.
    pub fn from_toml(file: CoursemapToml) -> Result<Self> {
        let config = Self { file };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the configured school, keeping explicit path overrides.
    #[must_use]
    pub fn with_school(mut self, school: School) -> Self {
        self.file.catalog.school = school;
        self
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error on a zero node width or an alphanumeric separator.
    pub fn validate(&self) -> Result<()> {
        if self.file.graph.settings.width_per_char == 0 {
            return Err(CoursemapError::Config(
                "graph.width_per_char must be greater than zero".into(),
            ));
        }
        if let Some(sep) = self.file.catalog.separator {
            if sep.is_alphanumeric() {
                return Err(CoursemapError::Config(format!(
                    "catalog.separator must not be alphanumeric (got {sep:?})"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn school(&self) -> School {
        self.file.catalog.school
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.file
            .catalog
            .separator
            .unwrap_or_else(|| self.school().separator())
    }

    #[must_use]
    pub fn prerequisite_style(&self) -> PrerequisiteStyle {
        self.school().prerequisite_style()
    }

    #[must_use]
    pub fn courses_path(&self) -> PathBuf {
        self.file
            .catalog
            .courses
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.school().default_courses_path()))
    }

    #[must_use]
    pub fn programs_path(&self) -> PathBuf {
        self.file
            .catalog
            .programs
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.school().default_programs_path()))
    }

    #[must_use]
    pub fn graph(&self) -> &GraphSettings {
        &self.file.graph.settings
    }

    #[must_use]
    pub fn pretty(&self) -> bool {
        self.file.graph.pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert_eq!(c.school(), School::Guelph);
        assert_eq!(c.separator(), '*');
        assert_eq!(c.courses_path(), PathBuf::from("data/ScrapedGuelphCourses.json"));
        assert_eq!(c.graph().edge_type, "simplebezier");
        assert_eq!(c.graph().width_per_char, 21);
        assert!(c.pretty());
    }

    #[test]
    fn test_school_switch_keeps_overrides() {
        let c = Config::parse("[catalog]\ncourses = \"my.json\"").map(|c| c.with_school(School::Ubc));
        let c = c.ok();
        assert_eq!(c.as_ref().map(Config::separator), Some(' '));
        assert_eq!(c.as_ref().map(Config::courses_path), Some(PathBuf::from("my.json")));
        assert_eq!(
            c.as_ref().map(Config::programs_path),
            Some(PathBuf::from("data/UBCMajorCourses.json"))
        );
    }

    #[test]
    fn test_validation() {
        let cases = vec![
            ("[graph]\nwidth_per_char = 0", false, "zero width"),
            ("[catalog]\nseparator = \"x\"", false, "alphanumeric separator"),
            ("[catalog]\nseparator = \"-\"", true, "dash separator"),
            ("[graph]\nanimated = true\npretty = false", true, "graph flags"),
            ("[catalog]\nschool = \"mit\"", false, "unknown school"),
        ];
        for (input, ok, desc) in cases {
            assert_eq!(Config::parse(input).is_ok(), ok, "Failed: {desc}");
        }
    }
}

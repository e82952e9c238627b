// src/catalog/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry as produced by the calendar scrapers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "CourseCode")]
    pub code: String,
    #[serde(rename = "CourseName", default)]
    pub name: String,
    #[serde(rename = "CourseDepartment", default)]
    pub department: String,
    /// Raw prerequisite text. Each entry is an independent requirement block.
    #[serde(
        rename = "CoursePrerequisite",
        default,
        deserialize_with = "deserialize_prerequisites"
    )]
    pub prerequisites: Vec<String>,
    #[serde(rename = "CourseSeasons", default)]
    pub seasons: String,
    #[serde(rename = "CourseLectures", default)]
    pub lectures: String,
    #[serde(rename = "CourseWeight", default)]
    pub weight: String,
    #[serde(rename = "CourseDescription", default)]
    pub description: String,
    #[serde(rename = "CourseOffering", default)]
    pub offering: String,
    #[serde(rename = "CourseEquate", default)]
    pub equate: String,
    #[serde(rename = "CourseRestriction", default)]
    pub restriction: String,
    #[serde(rename = "CourseLocation", default)]
    pub location: String,
}

impl CourseRecord {
    /// Minimal record with a code, department and prerequisite clauses.
    #[must_use]
    pub fn new(code: &str, department: &str, prerequisites: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            department: department.to_string(),
            prerequisites: prerequisites.iter().map(|p| (*p).to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Code with any trailing credit/title decoration removed
    /// (e.g. `PHYS 106(3) Enriched Physics` -> `PHYS 106`).
    #[must_use]
    pub fn display_code(&self) -> &str {
        match self.code.split_once('(') {
            Some((head, _)) => head.trim(),
            None => self.code.trim(),
        }
    }
}

/// Scraped prerequisite field: one string for some calendars, a list for others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PrerequisiteEntry {
    Single(String),
    List(Vec<String>),
}

impl PrerequisiteEntry {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) if s.trim().is_empty() => Vec::new(),
            Self::Single(s) => vec![s],
            Self::List(l) => l,
        }
    }
}

fn deserialize_prerequisites<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entry = Option::<PrerequisiteEntry>::deserialize(deserializer)?;
    Ok(entry.map(PrerequisiteEntry::into_vec).unwrap_or_default())
}

/// Courses a program requires for one of its credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSet {
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub extra_information: Vec<String>,
    /// Whether the program offers this credential. Some scrapes omit the flag.
    #[serde(default, alias = "major", alias = "minor", skip_serializing_if = "Option::is_none")]
    pub applies: Option<bool>,
}

impl RequirementSet {
    /// An explicit flag wins; without one, a set that lists courses is offered.
    #[must_use]
    pub fn offered(&self) -> bool {
        self.applies.unwrap_or(!self.courses.is_empty())
    }
}

/// A major/minor listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    #[serde(default)]
    pub program_code: String,
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub degree_name: Option<String>,
    #[serde(rename = "majorInformation", default)]
    pub major: RequirementSet,
    #[serde(rename = "minorInformation", default)]
    pub minor: RequirementSet,
}

impl ProgramRecord {
    /// Returns the requirement set for `kind` if the program offers it.
    #[must_use]
    pub fn requirements(&self, kind: ProgramKind) -> Option<&RequirementSet> {
        let set = match kind {
            ProgramKind::Major => &self.major,
            ProgramKind::Minor => &self.minor,
        };
        set.offered().then_some(set)
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.degree_name.as_deref().map(str::trim) {
            Some(degree) if !degree.is_empty() => format!("{degree} {}", self.program_name),
            _ => self.program_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    Major,
    Minor,
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::Minor => write!(f, "Minor"),
        }
    }
}

/// How a catalog stores its prerequisite lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrerequisiteStyle {
    /// Free-text clauses such as `1 of CIS*1300, CIS*1500`.
    Clauses,
    /// Lists that already hold bare course codes.
    Linked,
}

/// Supported calendar sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum School {
    #[default]
    Guelph,
    Ubc,
}

impl School {
    /// Character between subject and number in a course code.
    #[must_use]
    pub fn separator(self) -> char {
        match self {
            Self::Guelph => '*',
            Self::Ubc => ' ',
        }
    }

    #[must_use]
    pub fn prerequisite_style(self) -> PrerequisiteStyle {
        match self {
            Self::Guelph => PrerequisiteStyle::Clauses,
            Self::Ubc => PrerequisiteStyle::Linked,
        }
    }

    #[must_use]
    pub fn default_courses_path(self) -> &'static str {
        match self {
            Self::Guelph => "data/ScrapedGuelphCourses.json",
            Self::Ubc => "data/ScrapedUBCCourses.json",
        }
    }

    #[must_use]
    pub fn default_programs_path(self) -> &'static str {
        match self {
            Self::Guelph => "data/GuelphMajorCourses.json",
            Self::Ubc => "data/UBCMajorCourses.json",
        }
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guelph => write!(f, "University of Guelph"),
            Self::Ubc => write!(f, "University of British Columbia"),
        }
    }
}

// src/catalog/loader.rs
//! Loads scraped catalog files from disk.

use super::types::{CourseRecord, ProgramRecord};
use crate::error::{CoursemapError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a JSON array of course records.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid course JSON.
pub fn load_courses(path: &Path) -> Result<Vec<CourseRecord>> {
    let courses: Vec<CourseRecord> = load_json(path)?;
    debug!(path = %path.display(), count = courses.len(), "loaded courses");
    Ok(courses)
}

/// Reads a JSON array of program records.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid program JSON.
pub fn load_programs(path: &Path) -> Result<Vec<ProgramRecord>> {
    let programs: Vec<ProgramRecord> = load_json(path)?;
    debug!(path = %path.display(), count = programs.len(), "loaded programs");
    Ok(programs)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| CoursemapError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|source| CoursemapError::Json {
        source,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_guelph_style_courses() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"CourseCode":"CIS*2500","CourseName":"Intermediate Programming",
                "CourseDepartment":"School of Computer Science",
                "CoursePrerequisite":["CIS*1300"],"CourseWeight":"0.50"}}]"#
        )?;

        let courses = load_courses(file.path())?;
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CIS*2500");
        assert_eq!(courses[0].prerequisites, vec!["CIS*1300".to_string()]);
        assert_eq!(courses[0].weight, "0.50");
        Ok(())
    }

    #[test]
    fn test_load_ubc_style_string_prerequisite() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"CourseCode":"CPSC 210","CoursePrerequisite":"Either CPSC 110 or CPSC 107"}},
                {{"CourseCode":"CPSC 110","CoursePrerequisite":""}}]"#
        )?;

        let courses = load_courses(file.path())?;
        assert_eq!(courses[0].prerequisites.len(), 1);
        assert!(courses[1].prerequisites.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_programs() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"programCode":"CS","programName":"Computer Science","degreeName":"Bachelor of Computing",
                "majorInformation":{{"courses":["CIS*1300"],"extraInformation":[],"major":true}},
                "minorInformation":{{"courses":[],"extraInformation":[],"minor":false}}}}]"#
        )?;

        let programs = load_programs(file.path())?;
        assert_eq!(programs[0].program_code, "CS");
        assert_eq!(programs[0].major.applies, Some(true));
        assert_eq!(programs[0].minor.applies, Some(false));
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_courses(Path::new("does/not/exist.json"));
        match err {
            Err(CoursemapError::Io { path, .. }) => {
                assert_eq!(path, Path::new("does/not/exist.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "not json")?;
        assert!(matches!(
            load_courses(file.path()),
            Err(CoursemapError::Json { .. })
        ));
        Ok(())
    }
}

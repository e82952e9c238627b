// src/catalog/mod.rs
//! Read-only lookups over a loaded course catalog.

pub mod loader;
pub mod programs;
pub mod types;

pub use self::types::{
    CourseRecord, PrerequisiteStyle, ProgramKind, ProgramRecord, RequirementSet, School,
};

/// Borrowed view over the catalog for the duration of one compile.
///
/// Holds no mutable state, so a single index can be shared by concurrent compiles.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    courses: &'a [CourseRecord],
    separator: char,
    upper_codes: Vec<String>,
}

impl<'a> CatalogIndex<'a> {
    #[must_use]
    pub fn new(courses: &'a [CourseRecord], separator: char) -> Self {
        let upper_codes = courses.iter().map(|c| c.code.to_uppercase()).collect();
        Self {
            courses,
            separator,
            upper_codes,
        }
    }

    /// Index using the separator of a known calendar.
    #[must_use]
    pub fn for_school(courses: &'a [CourseRecord], school: School) -> Self {
        Self::new(courses, school.separator())
    }

    #[must_use]
    pub fn courses(&self) -> &'a [CourseRecord] {
        self.courses
    }

    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Subject token of a course code: the text before the separator, trimmed.
    #[must_use]
    pub fn subject_of<'s>(&self, code: &'s str) -> &'s str {
        code.trim()
            .split(self.separator)
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// True if `term` names a single course rather than a whole subject.
    #[must_use]
    pub fn is_course_code(&self, term: &str) -> bool {
        term.trim().contains(self.separator)
    }

    /// True if some catalog code contains `code` (case-insensitive).
    #[must_use]
    pub fn exists(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && self.matching_indices(code).next().is_some()
    }

    /// A token may enter a graph for `subject` only if it belongs to that
    /// subject and names a real course.
    #[must_use]
    pub fn is_eligible(&self, token: &str, subject: &str) -> bool {
        let token = token.trim();
        self.subject_of(token) == subject && self.exists(token)
    }

    /// Courses matching a subject (`CIS`) or a course code (`CIS*3110`).
    ///
    /// A subject term requires an exact subject match, so `CIS` does not pull in
    /// `CISC` courses. Results keep catalog order.
    #[must_use]
    pub fn search_by_code(&self, term: &str) -> Vec<&'a CourseRecord> {
        let courses = self.courses;
        self.matching_indices(term.trim())
            .filter_map(|i| courses.get(i))
            .collect()
    }

    /// First course whose code contains `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&'a CourseRecord> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.courses.iter().find(|c| c.code.contains(name))
    }

    /// Distinct subjects in first-seen catalog order.
    #[must_use]
    pub fn subjects(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut subjects = Vec::new();
        for course in self.courses {
            let subject = self.subject_of(&course.code).to_uppercase();
            if !subject.is_empty() && seen.insert(subject.clone()) {
                subjects.push(subject);
            }
        }
        subjects
    }

    fn matching_indices<'s>(&'s self, term: &str) -> impl Iterator<Item = usize> + 's {
        let upper = term.to_uppercase();
        let subject_only = !upper.contains(self.separator);

        self.upper_codes
            .iter()
            .enumerate()
            .filter(move |(_, code)| {
                if subject_only && self.subject_of(code) != upper {
                    return false;
                }
                code.contains(upper.as_str())
            })
            .map(|(i, _)| i)
    }
}

// src/catalog/programs.rs
use super::types::{ProgramKind, ProgramRecord};

/// Finds a program offering `kind`, matching the program code first and the
/// program name second. Both comparisons ignore case; the last match wins.
#[must_use]
pub fn find_program<'a>(
    programs: &'a [ProgramRecord],
    term: &str,
    kind: ProgramKind,
) -> Option<&'a ProgramRecord> {
    by_code(programs, term, kind).or_else(|| by_name(programs, term, kind))
}

/// Programs offering `kind`, in catalog order.
#[must_use]
pub fn programs_offering(programs: &[ProgramRecord], kind: ProgramKind) -> Vec<&ProgramRecord> {
    programs
        .iter()
        .filter(|p| p.requirements(kind).is_some())
        .collect()
}

fn by_code<'a>(
    programs: &'a [ProgramRecord],
    term: &str,
    kind: ProgramKind,
) -> Option<&'a ProgramRecord> {
    let term = term.to_lowercase();
    programs
        .iter()
        .filter(|p| p.program_code.to_lowercase() == term)
        .filter(|p| p.requirements(kind).is_some())
        .last()
}

fn by_name<'a>(
    programs: &'a [ProgramRecord],
    term: &str,
    kind: ProgramKind,
) -> Option<&'a ProgramRecord> {
    let term = term.trim().to_lowercase();
    programs
        .iter()
        .filter(|p| !p.program_name.is_empty())
        .filter(|p| p.program_name.trim().to_lowercase() == term)
        .filter(|p| p.requirements(kind).is_some())
        .last()
}

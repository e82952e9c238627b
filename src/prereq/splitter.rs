// src/prereq/splitter.rs
//! Lexical helpers for splitting prerequisite text on its delimiter vocabulary.
//!
//! This is a flat lexical pass. Brackets are stripped, not tracked.

use regex::Regex;
use std::sync::OnceLock;

/// Words and punctuation that separate prerequisite candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    And,
    Or,
    Of,
    Including,
}

impl Delimiter {
    /// Delimiters re-split by [`split_special_delimiters`], in application order.
    pub const SECONDARY: [Self; 3] = [Self::Comma, Self::And, Self::Or];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::And => "and",
            Self::Or => "or",
            Self::Of => "of",
            Self::Including => "including",
        }
    }

    fn regex(self) -> Option<&'static Regex> {
        static COMMA: OnceLock<Option<Regex>> = OnceLock::new();
        static AND: OnceLock<Option<Regex>> = OnceLock::new();
        static OR: OnceLock<Option<Regex>> = OnceLock::new();
        static OF: OnceLock<Option<Regex>> = OnceLock::new();
        static INCLUDING: OnceLock<Option<Regex>> = OnceLock::new();

        let cell = match self {
            Self::Comma => &COMMA,
            Self::And => &AND,
            Self::Or => &OR,
            Self::Of => &OF,
            Self::Including => &INCLUDING,
        };
        cell.get_or_init(|| match self {
            Self::Comma => Regex::new(",").ok(),
            word => word_regex(word.as_str()),
        })
        .as_ref()
    }

    /// Byte range of the first standalone occurrence in `text`.
    #[must_use]
    pub fn find(self, text: &str) -> Option<(usize, usize)> {
        self.regex()?.find(text).map(|m| (m.start(), m.end()))
    }

    #[must_use]
    pub fn is_in(self, text: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(text))
    }
}

/// Word-boundary aware containment: `and` matches in `A and B` but not in `Andrews`.
#[must_use]
pub fn contains_word(haystack: &str, word: &str) -> bool {
    word_regex(word).is_some_and(|re| re.is_match(haystack))
}

/// Splits `text` around the first standalone occurrence of `word`.
///
/// Returns the whole text as a single piece when `word` does not occur.
#[must_use]
pub fn split_on_word(text: &str, word: &str) -> Vec<String> {
    let found = word_regex(word).and_then(|re| re.find(text).map(|m| (m.start(), m.end())));
    split_at_range(text, found)
}

/// Same as [`split_on_word`] for a known delimiter.
#[must_use]
pub fn split_on(text: &str, delimiter: Delimiter) -> Vec<String> {
    split_at_range(text, delimiter.find(text))
}

/// Removes `[`, `]`, `'`, `(` and `)` from a raw clause.
#[must_use]
pub fn strip_brackets(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '(' | ')'))
        .collect()
}

/// Replaces every clause that still holds a `,`, `and` or `or` with its pieces,
/// in place, until no piece contains any of them.
///
/// Pieces are trimmed and empty pieces are dropped.
pub fn split_special_delimiters(clauses: &mut Vec<String>) {
    let mut out = Vec::with_capacity(clauses.len());
    for clause in clauses.drain(..) {
        explode(&clause, &mut out);
    }
    *clauses = out;
}

fn explode(clause: &str, out: &mut Vec<String>) {
    let found = Delimiter::SECONDARY
        .iter()
        .find_map(|d| d.regex().filter(|re| re.is_match(clause)));
    if let Some(re) = found {
        for piece in re.split(clause) {
            explode(piece, out);
        }
        return;
    }

    let piece = clause.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

fn split_at_range(text: &str, range: Option<(usize, usize)>) -> Vec<String> {
    match range {
        Some((start, end)) => vec![text[..start].to_string(), text[end..].to_string()],
        None => vec![text.to_string()],
    }
}

fn word_regex(word: &str) -> Option<Regex> {
    if word.is_empty() {
        return None;
    }
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_word_respects_boundaries() {
        let cases = vec![
            ("CIS*1300 and CIS*1500", "and", true, "standalone and"),
            ("Andrews Hall", "and", false, "capitalised prefix"),
            ("sandwich", "and", false, "inside a word"),
            ("CIS*1300 or CIS*1500", "or", true, "standalone or"),
            ("professor", "or", false, "suffix"),
            ("1 of CIS*1300", "of", true, "standalone of"),
            ("office", "of", false, "prefix of"),
            ("12 credits including CIS*1300", "including", true, "including"),
            ("", "and", false, "empty haystack"),
            ("anything", "", false, "empty word"),
        ];

        for (haystack, word, expected, desc) in cases {
            assert_eq!(contains_word(haystack, word), expected, "Failed: {desc}");
        }
    }

    #[test]
    fn test_split_on_word_first_match_only() {
        assert_eq!(
            split_on_word("A or B or C", "or"),
            vec!["A ".to_string(), " B or C".to_string()]
        );
        assert_eq!(split_on_word("CIS*1300", "or"), vec!["CIS*1300".to_string()]);
        assert_eq!(
            split_on("A and B", Delimiter::And),
            vec!["A ".to_string(), " B".to_string()]
        );
    }

    #[test]
    fn test_strip_brackets() {
        assert_eq!(
            strip_brackets("['CIS*3400 or (CIS*1200, CIS*2300)']"),
            "CIS*3400 or CIS*1200, CIS*2300"
        );
    }

    #[test]
    fn test_special_delimiters_split_in_place() {
        let mut clauses = vec![
            "CIS*3400 ".to_string(),
            " CIS*1200, CIS*2300".to_string(),
            "MATH*1200".to_string(),
        ];
        split_special_delimiters(&mut clauses);
        assert_eq!(clauses, vec!["CIS*3400", "CIS*1200", "CIS*2300", "MATH*1200"]);
    }

    #[test]
    fn test_special_delimiters_nested_vocabulary() {
        let mut clauses = vec![" B or C, D and E".to_string(), "  ".to_string()];
        split_special_delimiters(&mut clauses);
        assert_eq!(clauses, vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn test_find_reports_byte_range() {
        assert_eq!(Delimiter::Of.find("2 of A, B"), Some((2, 4)));
        assert_eq!(Delimiter::Including.find("credits including A"), Some((8, 17)));
        assert_eq!(Delimiter::Of.find("none here"), None);
    }
}

// src/prereq/clause.rs
//! Classifies one raw prerequisite clause into the shape the expander wires up.

use super::splitter::{self, Delimiter};

/// Gate label for "any one of" alternatives.
pub const ANY_OF: &str = "1 of";
/// Gate label for conjunctions.
pub const ALL_OF: &str = "all";

/// Syntactic reading of a single prerequisite clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseForm {
    /// `A or B` / `A and B`.
    Conjunctive {
        gate: &'static str,
        candidates: Vec<String>,
    },
    /// `2 of A, B, C`, `12 credits including A, B`, or
    /// `X, 1 of A, B` where `X` is required on its own.
    Quantified {
        direct: Option<String>,
        gate: String,
        candidates: Vec<String>,
    },
    /// A quantifier followed by one unsplit course (`1 of A`). Wired directly.
    QuantifiedSingle { gate: String, course: String },
    /// Anything else: the whole trimmed clause is one course token.
    General(String),
}

impl ClauseForm {
    /// Gate label this clause would introduce, if any.
    #[must_use]
    pub fn gate_label(&self) -> Option<&str> {
        match self {
            Self::Conjunctive { gate, .. } => Some(gate),
            Self::Quantified { gate, .. } => Some(gate.as_str()),
            Self::QuantifiedSingle { .. } | Self::General(_) => None,
        }
    }
}

/// Reads a raw clause. Never fails: unrecognised text becomes [`ClauseForm::General`].
#[must_use]
pub fn classify(raw: &str) -> ClauseForm {
    let text = splitter::strip_brackets(raw);

    if let Some(form) = conjunctive(&text) {
        return form;
    }
    if let Some(form) = quantified(&text) {
        return form;
    }
    ClauseForm::General(raw.trim().to_string())
}

fn conjunctive(text: &str) -> Option<ClauseForm> {
    let (delimiter, gate) = if Delimiter::Or.is_in(text) {
        (Delimiter::Or, ANY_OF)
    } else if Delimiter::And.is_in(text) {
        (Delimiter::And, ALL_OF)
    } else {
        return None;
    };

    let mut candidates = splitter::split_on(text, delimiter);
    splitter::split_special_delimiters(&mut candidates);
    Some(ClauseForm::Conjunctive { gate, candidates })
}

fn quantified(text: &str) -> Option<ClauseForm> {
    let (keyword_start, keyword_end) = Delimiter::Of
        .find(text)
        .or_else(|| Delimiter::Including.find(text))?;

    let comma = text.find(',');
    let leading = match comma {
        Some(c) if c < keyword_start => Some(text[..c].trim()),
        Some(_) => None,
        None => Some(""),
    };

    let form = match leading {
        None => ClauseForm::Quantified {
            direct: None,
            gate: text[..keyword_end].trim().to_string(),
            candidates: split_candidates(&text[keyword_end..]),
        },
        Some("") => ClauseForm::QuantifiedSingle {
            gate: text[..keyword_end]
                .trim_matches(|c: char| c == ',' || c.is_whitespace())
                .to_string(),
            course: text[keyword_end..].trim().to_string(),
        },
        Some(first) => {
            let after_comma = comma.map_or(0, |c| c + 1);
            ClauseForm::Quantified {
                direct: Some(first.to_string()),
                gate: text[after_comma..keyword_end].trim().to_string(),
                candidates: split_candidates(&text[after_comma..]),
            }
        }
    };
    Some(form)
}

fn split_candidates(rest: &str) -> Vec<String> {
    let mut candidates: Vec<String> = rest.split(',').map(str::to_string).collect();
    splitter::split_special_delimiters(&mut candidates);
    candidates
}

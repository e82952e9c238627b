// src/prereq/mod.rs
//! Prerequisite text handling: delimiter splitting and clause classification.

pub mod clause;
pub mod splitter;

pub use clause::{classify, ClauseForm, ALL_OF, ANY_OF};
pub use splitter::{contains_word, split_on_word, split_special_delimiters, strip_brackets, Delimiter};

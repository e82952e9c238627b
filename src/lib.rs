// src/lib.rs
//! Compiles free-text course prerequisites into directed graphs.

pub mod catalog;
pub mod cli;
pub mod compile;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod prereq;
pub mod reporting;

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoursemapError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid catalog JSON: {source} (path: {path})")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoursemapError>;

// Allow `?` on std::io::Error by converting to CoursemapError::Io with unknown path.
impl From<std::io::Error> for CoursemapError {
    fn from(source: std::io::Error) -> Self {
        CoursemapError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for CoursemapError {
    fn from(e: toml::de::Error) -> Self {
        CoursemapError::Config(e.to_string())
    }
}

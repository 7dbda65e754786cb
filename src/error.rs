// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Every fatal condition of a run. Anything not listed here is either
/// recovered in place (prior chart history) or encoded as "—" in the output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot read input {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {message}", .path.display())]
    InputJson { path: PathBuf, message: String },

    #[error("taxonomy: {0}")]
    Taxonomy(String),

    #[error("invalid pattern {pattern:?} in {context}: {source}")]
    Pattern {
        context: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("compression failed for {}: {source}", .path.display())]
    Compress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

//! Error taxonomy
//!
//! Absent matches are never errors. Only collaborator failures (reading the
//! document, writing or loading a report) and unbuildable patterns are.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// The text source could not be read
    #[error("input unavailable: {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report sink could not be written
    #[error("output unavailable: {}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted report line could not be parsed
    #[error("malformed report at line {line}: {message}")]
    MalformedReport { line: usize, message: String },

    /// The literal pattern for a query exceeded regex limits
    #[error("cannot build pattern for query '{query}'")]
    Pattern {
        query: String,
        #[source]
        source: regex::Error,
    },
}

impl QueryError {
    /// Stable error code for result items
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InputUnavailable { .. } => "INPUT_UNAVAILABLE",
            QueryError::OutputUnavailable { .. } => "OUTPUT_UNAVAILABLE",
            QueryError::MalformedReport { .. } => "MALFORMED_REPORT",
            QueryError::Pattern { .. } => "MALFORMED_PATTERN",
        }
    }
}

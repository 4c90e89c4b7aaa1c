//! Error types for the breakpoint library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for breakpoint operations.
///
/// Only table loading can fail. Classification never returns an error:
/// unparseable MIC text and unmatched ranges are ordinary outcomes.
#[derive(Debug, Error)]
pub enum BreakpointError {
    /// Error reading or accessing a rule table file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON or does not match the table shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The resource parsed but violates a table constraint.
    #[error("Invalid rule table: {0}")]
    InvalidTable(String),
}

/// Result type alias for breakpoint operations.
pub type Result<T> = std::result::Result<T, BreakpointError>;

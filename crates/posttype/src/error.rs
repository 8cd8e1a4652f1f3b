//! Error types for the posttype library.

use std::path::PathBuf;
use thiserror::Error;

use crate::value::{AcceptedTypes, ValueType};

/// Main error type for posttype operations.
#[derive(Debug, Error)]
pub enum PostTypeError {
    /// A supplied option value has a type the schema does not accept.
    #[error("Option '{option}' expects {expected}, got {found}")]
    SchemaViolation {
        option: String,
        expected: AcceptedTypes,
        found: ValueType,
    },

    /// The schema itself is malformed (empty type set, default of the wrong type).
    #[error("Invalid schema for option '{option}': {reason}")]
    InvalidSchema { option: String, reason: String },

    /// A post-type definition is semantically invalid.
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// Error reading a definition file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for posttype operations.
pub type Result<T> = std::result::Result<T, PostTypeError>;

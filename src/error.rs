//! Error types for loading annotation documents
//!
//! Every variant is terminal for the file it concerns: the document is
//! rejected as a whole and nothing is rendered.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A document that parsed as JSON but does not match the MDACE schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    /// Missing field, wrong type, negative offset...
    #[error("{0}")]
    Shape(String),

    #[error("note {note_id}, annotation {index} ({code}): begin {begin} is after end {end}")]
    InvertedSpan {
        note_id: i64,
        index: usize,
        code: String,
        begin: usize,
        end: usize,
    },

    #[error(
        "note {note_id}, annotation {index} ({code}): end {end} exceeds text length {text_len}"
    )]
    SpanOutOfBounds {
        note_id: i64,
        index: usize,
        code: String,
        end: usize,
        text_len: usize,
    },
}

/// Failure to turn a JSON string into a validated document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("schema violation: {0}")]
    Schema(#[from] SchemaViolation),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => DocumentError::Schema(SchemaViolation::Shape(err.to_string())),
            Category::Syntax | Category::Eof | Category::Io => DocumentError::Syntax(err),
        }
    }
}

/// Failure to load a file from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema violation in {}: {violation}", path.display())]
    Schema {
        path: PathBuf,
        violation: SchemaViolation,
    },
}

impl LoadError {
    pub(crate) fn from_document_error(path: PathBuf, err: DocumentError) -> Self {
        match err {
            DocumentError::Syntax(source) => LoadError::InvalidJson { path, source },
            DocumentError::Schema(violation) => LoadError::Schema { path, violation },
        }
    }

    /// Path of the file the error concerns
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::NotAFile { path }
            | LoadError::Io { path, .. }
            | LoadError::InvalidJson { path, .. }
            | LoadError::Schema { path, .. } => path,
        }
    }
}

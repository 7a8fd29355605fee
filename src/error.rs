//! Error types for mshkit.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while decoding or mutating a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Malformed section, record or field in MSH text.
    #[error("format error: {message} (line: {line:?})")]
    Format {
        /// Content of the offending line.
        line: String,
        /// What was wrong with it.
        message: String,
    },

    /// A referenced id has no corresponding entry.
    #[error("{kind} id {id} not found")]
    Lookup {
        /// The kind of id ("node" or "element").
        kind: &'static str,
        /// The unresolved id.
        id: i64,
    },

    /// The same id was mapped twice while building a reindex.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// The kind of id ("node" or "element").
        kind: &'static str,
        /// The repeated id.
        id: i64,
    },

    /// Renumbering would assign ids past `i64::MAX`.
    #[error("{kind} ids counted from {start} overflow i64")]
    IdOverflow {
        /// The kind of id ("node" or "element").
        kind: &'static str,
        /// Id the overflowing range was counted from.
        start: i64,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// The external mesh generator failed.
    #[error("mesh generation failed: {0}")]
    Generate(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl MeshError {
    /// Create a format error for the given line.
    pub fn format<L: Into<String>, M: Into<String>>(line: L, message: M) -> Self {
        MeshError::Format {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors that indicate a broken id invariant.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            MeshError::Lookup { .. } | MeshError::DuplicateId { .. } | MeshError::IdOverflow { .. }
        )
    }
}

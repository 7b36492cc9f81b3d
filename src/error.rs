use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced outside the identification core
///
/// Identifying a stream never fails; these come from opening paths and building tables.
#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid rule table: {0}")]
    InvalidTable(#[from] serde_json::Error),

    #[error("Signature for {mime} has no sub-rules")]
    EmptyRule { mime: String },

    #[error("Sub-rule for {mime} has no offsets")]
    EmptyOffsets { mime: String },

    #[error("Sub-rule for {mime} reaches past the address space at offset {offset}")]
    OffsetOverflow { mime: String, offset: usize },
}

pub type Result<T> = std::result::Result<T, IdentifyError>;

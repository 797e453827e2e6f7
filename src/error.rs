//! Error types for asmedit
//!
//! Uses `thiserror` for library errors. Expected validation failures
//! (duplicate references, addressing-mode conflicts, malformed GUID input)
//! are boolean results on the editing API, not errors; only structural parse
//! failures and storage failures surface here.

use thiserror::Error;

/// Result type alias for asmedit operations
pub type AsmeditResult<T> = Result<T, AsmeditError>;

/// Main error type for asmedit operations
#[derive(Error, Debug)]
pub enum AsmeditError {
    /// Document text is not a well-formed assembly definition
    #[error("malformed assembly definition: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// A stored version define entry is not a well-formed record
    #[error("malformed version define at index {index}: {source}")]
    MalformedVersionDefine {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a document or version define failed
    #[error("failed to serialize assembly definition: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Storage collaborator failed to read a definition
    #[error("failed to read assembly definition at '{location}'")]
    StorageRead {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Storage collaborator failed to write a definition
    #[error("failed to write assembly definition at '{location}'")]
    StorageWrite {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

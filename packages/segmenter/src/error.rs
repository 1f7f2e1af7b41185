//! Error types for the segmenter.
//!
//! Segmentation itself never fails: malformed text degrades to a
//! `whole_document` unit and missing metadata fields stay `None`. Errors
//! only occur at the I/O shell around the core (input validation, file
//! reading, JSON output).

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Invalid document identifier.
    #[error("Invalid document id: '{0}'. Expected letters, digits, '_' or '-' (e.g., ley_1670)")]
    InvalidDocumentId(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;

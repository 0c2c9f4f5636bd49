//! Error types for the mentor engine.
//!
//! The mapping core itself never fails: absent matches, empty curricula,
//! and unindexed concepts are all valid terminal states represented by
//! empty collections. Errors only arise when loading a curriculum
//! document from disk.

use thiserror::Error;

/// Main error type for the mentor engine.
#[derive(Error, Debug)]
pub enum MentorError {
    /// I/O error while reading a curriculum file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Curriculum document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result with MentorError.
pub type Result<T> = std::result::Result<T, MentorError>;

//! Error type shared by the whole crate.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("invalid rating {0}, expected 1-4")]
    InvalidRating(u8),

    #[error("progress key '{key}' does not match word id '{word_id}'")]
    WordIdMismatch { key: String, word_id: String },

    #[error("invalid review state for '{word_id}': {reason}")]
    InvalidState { word_id: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VocabResult<T> = Result<T, VocabError>;

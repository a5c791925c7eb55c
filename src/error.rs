// File: src/error.rs
use thiserror::Error;

/// Load-time failures. A store or script table that fails to build must
/// not be used for detection.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("language model {script}/{language} has no trigrams")]
    EmptyModel { script: String, language: String },

    #[error(
        "duplicate trigram \"{trigram}\" in language model {script}/{language} \
         (ranks {first} and {second})"
    )]
    DuplicateTrigram {
        script: String,
        language: String,
        trigram: String,
        first: usize,
        second: usize,
    },

    #[error(
        "malformed trigram \"{trigram}\" at rank {rank} in language model \
         {script}/{language}: expected exactly 3 characters"
    )]
    MalformedTrigram {
        script: String,
        language: String,
        trigram: String,
        rank: usize,
    },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid character-class pattern for script {script}")]
    InvalidPattern {
        script: String,
        #[source]
        source: regex::Error,
    },
}

/// Failures while reading or writing model assets on disk.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model asset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

pub type DataResult<T> = std::result::Result<T, DataError>;
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;

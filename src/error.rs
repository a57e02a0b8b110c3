use std::path::PathBuf;

use thiserror::Error;

use crate::types::text::Gospel;

/// Every failure aborts the whole run; nothing is written for a partial result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("source file for {gospel} not found at {}", path.display())]
    MissingSource { gospel: Gospel, path: PathBuf },

    #[error("failed to read source file for {gospel} at {}: {source}", path.display())]
    ReadSource {
        gospel: Gospel,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed source for {gospel} ({}): {reason}", path.display())]
    MalformedSource {
        gospel: Gospel,
        path: PathBuf,
        reason: String,
    },

    #[error("sentiment model failed on {gospel}: {message}")]
    SentimentModel { gospel: Gospel, message: String },

    #[error("failed to write analysis output to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read analysis results from {}: {reason}", path.display())]
    MalformedArtifact { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to serialize analysis result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to output: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown synth type: {0}")]
    UnknownSynthType(String),

    #[error("Unknown effects preset: {0}")]
    UnknownEffectsPreset(String),

    #[error("Note {index} is invalid: {reason}")]
    InvalidNote { index: usize, reason: String },

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Logger could not be initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl FixtureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io { path: path.into(), source }
    }
}

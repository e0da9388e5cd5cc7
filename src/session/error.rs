//! Session errors.

use crate::pipeline::GameOver;
use crate::source::SourceError;
use thiserror::Error;

/// Errors that can occur when building a session or starting a round.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No words available. Add words or call .allow_empty(true) before .build()")]
    NoWords,

    #[error("Maximum lives must be at least 1")]
    InvalidMaxLives,

    #[error("Explicit word is empty")]
    EmptyWord,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    GameOver(#[from] GameOver),
}

impl SessionError {
    /// Whether this is a configuration problem rather than a runtime one.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NoWords | Self::InvalidMaxLives | Self::EmptyWord)
    }
}

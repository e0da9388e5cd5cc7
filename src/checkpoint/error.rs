//! Errors raised while saving or restoring a game session.

use thiserror::Error;

/// Errors that can occur when checkpointing or resuming a session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The session could not be encoded as JSON or bincode
    #[error("Failed to encode session checkpoint: {0}")]
    SerializationFailed(String),

    /// The bytes or text do not decode to a session checkpoint
    #[error("Failed to decode session checkpoint: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible version of the engine
    #[error("Session checkpoint format {found} cannot be resumed (this engine reads format {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The saved round could not have been reached by playing the game,
    /// e.g. more lives than the session allows or letters revealed that
    /// were never guessed
    #[error("Session checkpoint holds an impossible round: {0}")]
    ValidationFailed(String),
}

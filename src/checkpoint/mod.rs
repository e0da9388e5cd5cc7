//! Checkpoint and resume for game sessions.
//!
//! A checkpoint captures everything a session owns except its word bank:
//! the current round (including visible letters) and the round history.
//! Hosts keep their own bank and hand it back on resume.

use crate::core::{Round, RoundHistory, Status, ALWAYS_VISIBLE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a game session.
///
/// # Example
///
/// ```rust
/// use gallows::{Checkpoint, GameSession, WordBank};
///
/// let mut session = GameSession::builder().word("owl").build().unwrap();
/// session.start(None).unwrap();
/// session.guess_letter("w").unwrap();
///
/// let json = session.checkpoint().to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap();
/// let resumed = GameSession::resume(restored, WordBank::from_words(["owl"])).unwrap();
///
/// assert_eq!(resumed.visible_word(), "_W_");
/// assert_eq!(resumed.id(), session.id());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Identifier of the checkpointed session
    pub session_id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub max_lives: u32,

    pub allow_empty: bool,

    /// Round in play when the checkpoint was taken
    pub round: Round,

    /// Every archived round
    pub history: RoundHistory,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Parse a JSON checkpoint, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode a binary checkpoint, rejecting unknown format versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Check that the checkpoint describes a reachable session state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        self.check_version()?;
        validate_round(&self.round, self.max_lives).map_err(CheckpointError::ValidationFailed)
    }
}

fn validate_round(round: &Round, max_lives: u32) -> Result<(), String> {
    if max_lives == 0 {
        return Err("max_lives must be at least 1".to_string());
    }
    if round.max_lives != max_lives {
        return Err(format!(
            "round max_lives {} differs from session max_lives {max_lives}",
            round.max_lives
        ));
    }
    if round.lives > max_lives {
        return Err(format!("lives {} exceed max_lives {max_lives}", round.lives));
    }

    let guessed: BTreeSet<char> = round
        .guesses
        .iter()
        .flat_map(|g| g.guess.chars())
        .chain(ALWAYS_VISIBLE)
        .collect();
    if let Some(c) = round.visible.iter().find(|c| !guessed.contains(*c)) {
        return Err(format!("visible letter '{c}' was never guessed"));
    }

    match round.status {
        Status::Inactive if !round.guesses.is_empty() => {
            Err("inactive round has guesses".to_string())
        }
        Status::Active if round.word.is_empty() => Err("active round has no word".to_string()),
        Status::Active if round.ended_at.is_some() => {
            Err("active round has an end time".to_string())
        }
        Status::Active if round.lives == 0 => Err("active round has no lives left".to_string()),
        Status::Won | Status::Lost if round.ended_at.is_none() => {
            Err(format!("{} round has no end time", round.status))
        }
        Status::Won if !round.is_fully_revealed() => {
            Err("won round has hidden letters".to_string())
        }
        Status::Lost if round.lives != 0 => Err("lost round has lives left".to_string()),
        _ => Ok(()),
    }
}

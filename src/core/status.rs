//! Round status for a game session.
//!
//! `Status` is a closed set of four states. The boolean predicates are derived
//! from the variant on every call, never stored alongside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the current round.
///
/// `Inactive` is both the initial state and the idle state between rounds.
/// `Won` and `Lost` are terminal for the round; only `start` or `stop` leave
/// them.
///
/// # Example
///
/// ```rust
/// use gallows::Status;
///
/// assert!(Status::default().is_inactive());
/// assert!(Status::Won.is_final());
/// assert!(!Status::Active.is_final());
/// assert_eq!(Status::Lost.name(), "Lost");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Status {
    /// No round is being played.
    #[default]
    Inactive,
    /// A round is in progress and accepts guesses.
    Active,
    /// Every character of the word has been revealed.
    Won,
    /// The player ran out of lives.
    Lost,
}

impl Status {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::Active => "Active",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Check if the round has reached an outcome.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

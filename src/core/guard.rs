//! Guard predicates over the round status.
//!
//! Guards are pure boolean functions deciding whether an action may run
//! against the current status. The guess pipeline's legality stage is one.

use super::status::Status;

/// Pure predicate that determines if an action may run in a given status.
///
/// # Example
///
/// ```rust
/// use gallows::{Guard, Status};
///
/// let accepts_guesses = Guard::active();
///
/// assert!(accepts_guesses.check(&Status::Active));
/// assert!(!accepts_guesses.check(&Status::Won));
/// assert!(!accepts_guesses.check(&Status::Inactive));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&Status) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    ///
    /// ```rust
    /// use gallows::{Guard, Status};
    ///
    /// let finished = Guard::new(|s: &Status| s.is_final());
    /// assert!(finished.check(&Status::Lost));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Status) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that only passes while a round is being played.
    pub fn active() -> Self {
        Self::new(Status::is_active)
    }

    /// Check if the guard allows the action from this status.
    pub fn check(&self, status: &Status) -> bool {
        (self.predicate)(status)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

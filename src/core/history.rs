//! Guess records and round history.
//!
//! Both logs are append-only: a `GuessRecord` or `RoundSnapshot` is never
//! changed after it is pushed.

use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single guess attempt.
///
/// Failed guesses are recorded too, with `revealed == 0`.
///
/// # Example
///
/// ```rust
/// use gallows::GuessRecord;
/// use chrono::Utc;
///
/// let record = GuessRecord {
///     timestamp: Utc::now(),
///     guess: "T".to_string(),
///     revealed: 3,
/// };
/// assert!(record.was_successful());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// When the guess was evaluated
    pub timestamp: DateTime<Utc>,
    /// The guessed text, as seen by the pipeline
    pub guess: String,
    /// Number of word positions the guess revealed
    pub revealed: usize,
}

impl GuessRecord {
    pub fn was_successful(&self) -> bool {
        self.revealed > 0
    }
}

/// Immutable copy of a round, captured when the round ends or is discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: Status,
    pub word: String,
    pub guesses: Vec<GuessRecord>,
    pub max_lives: u32,
}

impl RoundSnapshot {
    /// Time between start and end of the round.
    ///
    /// Returns `None` if the round never recorded an end, or if the wall
    /// clock moved backwards in between.
    pub fn duration(&self) -> Option<Duration> {
        self.ended_at
            .and_then(|ended| ended.signed_duration_since(self.started_at).to_std().ok())
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

/// Ordered, append-only log of finished rounds.
///
/// # Example
///
/// ```rust
/// use gallows::{RoundHistory, RoundSnapshot, Status};
/// use chrono::Utc;
///
/// let mut history = RoundHistory::new();
/// let now = Utc::now();
/// history.record(RoundSnapshot {
///     started_at: now,
///     ended_at: Some(now),
///     status: Status::Won,
///     word: "ABC".to_string(),
///     guesses: Vec::new(),
///     max_lives: 6,
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.wins(), 1);
/// assert_eq!(history.latest().map(|r| r.word.as_str()), Some("ABC"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHistory {
    rounds: Vec<RoundSnapshot>,
}

impl RoundHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Append a finished round.
    pub fn record(&mut self, snapshot: RoundSnapshot) {
        self.rounds.push(snapshot);
    }

    /// All recorded rounds, oldest first.
    pub fn rounds(&self) -> &[RoundSnapshot] {
        &self.rounds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoundSnapshot> {
        self.rounds.iter()
    }

    /// The most recently recorded round.
    pub fn latest(&self) -> Option<&RoundSnapshot> {
        self.rounds.last()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.count_status(Status::Won)
    }

    pub fn losses(&self) -> usize {
        self.count_status(Status::Lost)
    }

    /// Sum of the durations of every round that recorded an end.
    pub fn total_duration(&self) -> Duration {
        self.rounds.iter().filter_map(RoundSnapshot::duration).sum()
    }

    fn count_status(&self, status: Status) -> usize {
        self.rounds.iter().filter(|r| r.status == status).count()
    }
}

impl<'a> IntoIterator for &'a RoundHistory {
    type Item = &'a RoundSnapshot;
    type IntoIter = std::slice::Iter<'a, RoundSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn snapshot(status: Status, seconds: i64) -> RoundSnapshot {
        let started_at = Utc::now();
        RoundSnapshot {
            started_at,
            ended_at: Some(started_at + ChronoDuration::seconds(seconds)),
            status,
            word: "WORD".to_string(),
            guesses: Vec::new(),
            max_lives: 6,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = RoundHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.total_duration(), Duration::ZERO);
    }

    #[test]
    fn record_preserves_order() {
        let mut history = RoundHistory::new();
        history.record(snapshot(Status::Won, 1));
        history.record(snapshot(Status::Lost, 2));
        history.record(snapshot(Status::Active, 3));

        let statuses: Vec<Status> = history.iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![Status::Won, Status::Lost, Status::Active]);
        assert_eq!(history.latest().map(|r| r.status), Some(Status::Active));
    }

    #[test]
    fn counts_outcomes() {
        let mut history = RoundHistory::new();
        history.record(snapshot(Status::Won, 1));
        history.record(snapshot(Status::Won, 1));
        history.record(snapshot(Status::Lost, 1));
        history.record(snapshot(Status::Active, 1));

        assert_eq!(history.wins(), 2);
        assert_eq!(history.losses(), 1);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn total_duration_skips_unfinished_rounds() {
        let mut history = RoundHistory::new();
        history.record(snapshot(Status::Won, 4));
        let mut unfinished = snapshot(Status::Active, 0);
        unfinished.ended_at = None;
        history.record(unfinished);
        history.record(snapshot(Status::Lost, 6));

        assert_eq!(history.total_duration(), Duration::from_secs(10));
    }

    #[test]
    fn snapshot_duration_is_none_when_clock_went_backwards() {
        let round = snapshot(Status::Won, -5);
        assert!(round.duration().is_none());
    }

    #[test]
    fn guess_record_success_tracks_revealed() {
        let failed = GuessRecord {
            timestamp: Utc::now(),
            guess: "Z".to_string(),
            revealed: 0,
        };
        assert!(!failed.was_successful());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = RoundHistory::new();
        history.record(snapshot(Status::Won, 2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RoundHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}

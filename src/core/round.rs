//! Round-scoped state of a game session.

use super::history::{GuessRecord, RoundSnapshot};
use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Characters that are revealed regardless of guesses.
pub const ALWAYS_VISIBLE: [char; 1] = [' '];

/// Placeholder shown for a hidden character.
pub const HIDDEN: char = '_';

/// State of the round currently held by a session.
///
/// Everything here resets when a new round starts; the word bank and round
/// history live on the session instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) word: String,
    pub(crate) status: Status,
    pub(crate) lives: u32,
    pub(crate) max_lives: u32,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) ended_at: Option<DateTime<Utc>>,
    pub(crate) guesses: Vec<GuessRecord>,
    pub(crate) visible: BTreeSet<char>,
}

impl Round {
    /// An idle round with no word.
    pub(crate) fn idle(max_lives: u32) -> Self {
        Self::fresh(String::new(), Status::Inactive, max_lives)
    }

    /// A round being played for `word`.
    pub(crate) fn begin(word: String, max_lives: u32) -> Self {
        Self::fresh(word, Status::Active, max_lives)
    }

    fn fresh(word: String, status: Status, max_lives: u32) -> Self {
        Self {
            word,
            status,
            lives: max_lives,
            max_lives,
            started_at: Utc::now(),
            ended_at: None,
            guesses: Vec::new(),
            visible: ALWAYS_VISIBLE.into_iter().collect(),
        }
    }

    /// The word being guessed, empty for an idle round.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Current status of the round.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Lives left.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Lives the round started with.
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    /// When the round started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the round was won, lost, or discarded.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Every guess made this round, oldest first.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Characters confirmed present so far, including the always-visible set.
    pub fn visible_letters(&self) -> &BTreeSet<char> {
        &self.visible
    }

    /// Number of guesses made, failed ones included.
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Check if `c` would be shown rather than hidden.
    pub fn is_visible(&self, c: char) -> bool {
        self.visible.contains(&c) || ALWAYS_VISIBLE.contains(&c)
    }

    /// The word with every hidden character replaced by `_`.
    pub fn visible_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.is_visible(c) { c } else { HIDDEN })
            .collect()
    }

    /// Check if no character of the word is hidden.
    pub fn is_fully_revealed(&self) -> bool {
        self.word.chars().all(|c| self.is_visible(c))
    }

    /// Elapsed wall-clock time, up to the end of the round or now.
    pub fn duration(&self) -> Duration {
        self.ended_at
            .unwrap_or_else(Utc::now)
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Set `ended_at` unless already set.
    pub(crate) fn finish(&mut self, at: DateTime<Utc>) {
        self.ended_at.get_or_insert(at);
    }

    pub(crate) fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            started_at: self.started_at,
            ended_at: self.ended_at,
            status: self.status,
            word: self.word.clone(),
            guesses: self.guesses.clone(),
            max_lives: self.max_lives,
        }
    }
}

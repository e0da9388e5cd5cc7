//! Game session: one word bank, one round at a time, and the history of
//! every round played.
//!
//! # Transitions
//!
//! - `Inactive -> Active` via [`GameSession::start`] when a word is available
//! - `Inactive -> Inactive` via `start` with an empty bank, if allowed
//! - `Active -> Won | Lost` via guesses
//! - `Active | Won | Lost -> Inactive` via [`GameSession::stop`]
//! - `Active | Won | Lost -> Active | Inactive` via `start`
//!
//! Whenever a round that is not `Inactive` is ended by `stop` or replaced by
//! `start`, its snapshot is appended to the session's [`RoundHistory`].

mod builder;
mod config;
mod error;

pub use builder::SessionBuilder;
pub use config::{SessionConfig, DEFAULT_MAX_LIVES};
pub use error::SessionError;

use crate::bank::{normalize, WordBank};
use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{GuessRecord, Round, RoundHistory, RoundSnapshot, Status};
use crate::pipeline::{GameOver, GuessPipeline};
use crate::source::{SourceError, WordSource};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// A long-lived game session.
///
/// The session exclusively owns its word bank, the current round, and the
/// round history. It performs no locking: hosts running several sessions
/// must serialize calls to each one.
///
/// # Example
///
/// ```rust
/// use gallows::{GameSession, Status};
///
/// let mut session = GameSession::builder().word("echo location").build().unwrap();
/// assert_eq!(session.start(None).unwrap(), Status::Active);
///
/// assert_eq!(session.guess_letter("O").unwrap(), 3);
/// assert_eq!(session.visible_word(), "___O _O____O_");
/// assert_eq!(session.guess_word("ECHO LOCATION").unwrap(), 9);
/// assert!(session.is_won());
///
/// let finished = session.stop().unwrap();
/// assert_eq!(finished.status, Status::Won);
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    max_lives: u32,
    allow_empty: bool,
    round: Round,
    bank: WordBank,
    history: RoundHistory,
    pipeline: GuessPipeline,
}

impl GameSession {
    /// Create a builder for configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Create an idle session around an existing bank.
    ///
    /// Fails with [`SessionError::InvalidMaxLives`] for zero lives, and with
    /// [`SessionError::NoWords`] for an empty bank unless `allow_empty` is set.
    pub fn new(bank: WordBank, max_lives: u32, allow_empty: bool) -> Result<Self, SessionError> {
        if max_lives == 0 {
            return Err(SessionError::InvalidMaxLives);
        }
        if bank.is_empty() && !allow_empty {
            return Err(SessionError::NoWords);
        }

        let id = Uuid::new_v4();
        info!(session = %id, words = bank.len(), max_lives, "session created");
        Ok(Self {
            id,
            max_lives,
            allow_empty,
            round: Round::idle(max_lives),
            bank,
            history: RoundHistory::new(),
            pipeline: GuessPipeline::new(),
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        config.build()
    }

    /// Begin a new round.
    ///
    /// Uses `word` when given, otherwise draws the next word from the bank.
    /// A round that was not `Inactive` is archived to the history first.
    /// With no word available the session stays `Inactive` if empty banks
    /// are allowed, and fails with [`SessionError::NoWords`] (changing
    /// nothing) if they are not.
    #[instrument(skip(self), fields(session = %self.id, from = %self.round.status))]
    pub fn start(&mut self, word: Option<&str>) -> Result<Status, SessionError> {
        let word = match word {
            Some(explicit) => {
                let explicit = normalize(explicit);
                if explicit.is_empty() {
                    return Err(SessionError::EmptyWord);
                }
                Some(explicit)
            }
            None => self.bank.next(),
        };

        if word.is_none() && !self.allow_empty {
            warn!("no words available to start a round");
            return Err(SessionError::NoWords);
        }

        self.archive();
        self.round = match word {
            Some(word) => {
                info!(letters = word.chars().count(), "round started");
                Round::begin(word, self.max_lives)
            }
            None => {
                info!("word bank is empty, session stays inactive");
                Round::idle(self.max_lives)
            }
        };
        Ok(self.round.status)
    }

    /// End the current round and return to `Inactive`.
    ///
    /// Returns the archived snapshot, or `None` if no round was in play.
    #[instrument(skip(self), fields(session = %self.id, from = %self.round.status))]
    pub fn stop(&mut self) -> Option<RoundSnapshot> {
        let snapshot = self.archive();
        self.round = Round::idle(self.max_lives);
        snapshot
    }

    fn archive(&mut self) -> Option<RoundSnapshot> {
        if self.round.status.is_inactive() {
            return None;
        }

        self.round.finish(Utc::now());
        let snapshot = self.round.snapshot();
        info!(
            status = %snapshot.status,
            word = %snapshot.word,
            guesses = snapshot.guesses.len(),
            "round archived"
        );
        self.history.record(snapshot.clone());
        Some(snapshot)
    }

    /// Guess a letter. Text is trimmed and uppercased first.
    ///
    /// Returns the number of word positions revealed; zero means the guess
    /// cost a life.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn guess_letter(&mut self, letter: &str) -> Result<usize, GameOver> {
        let letter = normalize(letter);
        let result = self.pipeline.evaluate_letter(&mut self.round, &letter);
        self.report(result)
    }

    /// Guess the whole word. Text is trimmed and uppercased first.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn guess_word(&mut self, word: &str) -> Result<usize, GameOver> {
        let word = normalize(word);
        let result = self.pipeline.evaluate_word(&mut self.round, &word);
        self.report(result)
    }

    /// Guess a letter if `text` is a single character, the word otherwise.
    pub fn guess(&mut self, text: &str) -> Result<usize, GameOver> {
        if text.trim().chars().count() == 1 {
            self.guess_letter(text)
        } else {
            self.guess_word(text)
        }
    }

    fn report(&self, result: Result<usize, GameOver>) -> Result<usize, GameOver> {
        match &result {
            Ok(_) if self.round.status.is_final() => {
                info!(status = %self.round.status, guesses = self.round.guess_count(), "round over");
            }
            Err(err) => warn!(%err, "guess rejected"),
            Ok(_) => {}
        }
        result
    }

    /// Whether this exact text was already guessed in the current round.
    pub fn has_guessed(&self, text: &str) -> bool {
        let text = normalize(text);
        self.round.guesses.iter().any(|g| g.guess == text)
    }

    /// Whether `text` is a single character or as long as the word.
    pub fn is_plausible_guess(&self, text: &str) -> bool {
        let len = text.trim().chars().count();
        len == 1 || len == self.round.word.chars().count()
    }

    /// Unique identifier of this session, stable across checkpoints.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Lives each round starts with.
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    /// Whether rounds may be started with an empty word bank.
    pub fn allows_empty(&self) -> bool {
        self.allow_empty
    }

    /// The round currently held by the session.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Status of the current round.
    pub fn status(&self) -> Status {
        self.round.status
    }

    /// Check if no round is being played.
    pub fn is_inactive(&self) -> bool {
        self.round.status.is_inactive()
    }

    /// Check if the current round accepts guesses.
    pub fn is_active(&self) -> bool {
        self.round.status.is_active()
    }

    /// Check if the current round was won.
    pub fn is_won(&self) -> bool {
        self.round.status.is_won()
    }

    /// Check if the current round was lost.
    pub fn is_lost(&self) -> bool {
        self.round.status.is_lost()
    }

    /// Lives left in the current round.
    pub fn lives(&self) -> u32 {
        self.round.lives
    }

    /// Lives spent this round.
    pub fn lives_lost(&self) -> u32 {
        self.max_lives - self.round.lives
    }

    /// Word of the current round, empty while inactive.
    pub fn word(&self) -> &str {
        &self.round.word
    }

    /// Every guess made this round, oldest first.
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.round.guesses
    }

    /// Number of guesses made this round.
    pub fn guess_count(&self) -> usize {
        self.round.guess_count()
    }

    /// Characters revealed so far, spaces included.
    pub fn visible_letters(&self) -> &BTreeSet<char> {
        &self.round.visible
    }

    /// The word with hidden characters shown as `_`.
    pub fn visible_word(&self) -> String {
        self.round.visible_word()
    }

    /// When the current round started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.round.started_at
    }

    /// When the current round ended, if it has.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.round.ended_at
    }

    /// Elapsed time of the current round, up to its end or now.
    pub fn duration(&self) -> Duration {
        self.round.duration()
    }

    /// Average seconds spent per guess, `None` before the first guess.
    pub fn seconds_per_guess(&self) -> Option<f64> {
        match self.guess_count() {
            0 => None,
            n => Some(self.duration().as_secs_f64() / n as f64),
        }
    }

    /// Rounds archived so far.
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// The words rounds are drawn from.
    pub fn word_bank(&self) -> &WordBank {
        &self.bank
    }

    /// Mutable access to the word bank, for adding or removing words.
    pub fn word_bank_mut(&mut self) -> &mut WordBank {
        &mut self.bank
    }

    /// Merge the words of `source` into the bank, returning how many were new.
    #[instrument(skip(self, source), fields(session = %self.id, source = %source.describe()))]
    pub fn add_words_from(&mut self, source: &dyn WordSource) -> Result<usize, SourceError> {
        let added = self.bank.add(source.words()?);
        info!(added, total = self.bank.len(), "words added");
        Ok(added)
    }

    /// Capture the session state, minus the word bank.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            session_id: self.id,
            timestamp: Utc::now(),
            max_lives: self.max_lives,
            allow_empty: self.allow_empty,
            round: self.round.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a checkpoint and a bank supplied by the host.
    #[instrument(skip(checkpoint, bank), fields(session = %checkpoint.session_id))]
    pub fn resume(checkpoint: Checkpoint, bank: WordBank) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(status = %checkpoint.round.status, rounds = checkpoint.history.len(), "session resumed");
        Ok(Self {
            id: checkpoint.session_id,
            max_lives: checkpoint.max_lives,
            allow_empty: checkpoint.allow_empty,
            round: checkpoint.round,
            bank,
            history: checkpoint.history,
            pipeline: GuessPipeline::new(),
        })
    }
}

//! Builder for constructing game sessions.

use crate::bank::WordBank;
use crate::session::config::{SessionConfig, DEFAULT_MAX_LIVES};
use crate::session::error::SessionError;
use crate::session::GameSession;
use crate::source::{resolve_location, WordSource};
use tracing::{debug, instrument};

/// Builder for constructing game sessions with a fluent API.
///
/// Words can come from an existing bank, explicit words, locations, and
/// arbitrary sources; all of them are merged into one bank.
///
/// ```rust
/// use gallows::{GameSession, SessionError};
///
/// let session = GameSession::builder().max_lives(3).words(["fox", "owl"]).build().unwrap();
/// assert_eq!(session.max_lives(), 3);
///
/// let empty = GameSession::builder().build();
/// assert!(matches!(empty, Err(SessionError::NoWords)));
/// ```
pub struct SessionBuilder {
    max_lives: u32,
    bank: WordBank,
    locations: Vec<String>,
    sources: Vec<Box<dyn WordSource>>,
    allow_empty: bool,
}

impl SessionBuilder {
    /// Create a new builder with default lives and no words.
    pub fn new() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            bank: WordBank::new(),
            locations: Vec::new(),
            sources: Vec::new(),
            allow_empty: false,
        }
    }

    /// Start from a serializable configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        let builder = Self::new()
            .max_lives(config.max_lives)
            .words(&config.words)
            .allow_empty(config.allow_empty);
        match &config.location {
            Some(location) => builder.location(location.clone()),
            None => builder,
        }
    }

    /// Set the number of wrong guesses allowed per round.
    pub fn max_lives(mut self, lives: u32) -> Self {
        self.max_lives = lives;
        self
    }

    /// Add a single word.
    pub fn word(mut self, word: impl AsRef<str>) -> Self {
        self.bank.insert(word.as_ref());
        self
    }

    /// Add several words.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.bank.add(words);
        self
    }

    /// Use an existing bank, merging any words added so far into it.
    pub fn bank(mut self, mut bank: WordBank) -> Self {
        bank.add(self.bank.words().map(str::to_string).collect::<Vec<_>>());
        self.bank = bank;
        self
    }

    /// Load words from a location when the session is built.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Load words from a source when the session is built.
    pub fn source(mut self, source: impl WordSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Permit a session whose bank ends up empty.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Build the session.
    ///
    /// Fails if `max_lives` is zero, if any source fails, or if no words
    /// were loaded and empty banks are not allowed.
    #[instrument(skip(self), fields(max_lives = self.max_lives, allow_empty = self.allow_empty))]
    pub fn build(self) -> Result<GameSession, SessionError> {
        let mut bank = self.bank;

        for location in &self.locations {
            let source = resolve_location(location)?;
            let added = bank.add(source.words()?);
            debug!(location = %location, added, "loaded word location");
        }
        for source in &self.sources {
            let added = bank.add(source.words()?);
            debug!(source = %source.describe(), added, "loaded word source");
        }

        GameSession::new(bank, self.max_lives, self.allow_empty)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

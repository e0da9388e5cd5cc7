//! Guess evaluation pipeline.
//!
//! Every guess runs through the same fixed, ordered list of stages:
//!
//! 1. **legality** - the round must be `Active`, otherwise [`GameOver`]
//! 2. **correctness** - letter: substring of the word; word: exact match
//! 3. **visibility** - merge the guessed characters and count the word
//!    positions that became visible
//! 4. **recording** - append a [`GuessRecord`](crate::GuessRecord), failed
//!    guesses included
//! 5. **lives** - a guess revealing nothing costs a life; no lives left
//!    loses the round and stops the pipeline
//! 6. **win** - a fully revealed word wins the round
//!
//! A failed legality check stops the pipeline before anything is mutated.

mod stages;

use crate::core::{Guard, Round, Status};
use stages::{Flow, STAGES};
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Raised when a guess is made while no round is being played.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Game is over (status: {status})")]
pub struct GameOver {
    /// Status of the round when the guess was attempted
    pub status: Status,
}

/// Which entry point a guess came through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuessKind {
    Letter,
    Word,
}

/// Working state threaded through the stages of one evaluation.
pub(crate) struct Evaluation<'a> {
    pub(crate) guard: &'a Guard,
    pub(crate) kind: GuessKind,
    pub(crate) text: &'a str,
    pub(crate) correct: bool,
    pub(crate) revealed: usize,
}

/// Drives a guess through the stage list.
///
/// # Example
///
/// ```rust
/// use gallows::GameSession;
///
/// let mut session = GameSession::builder().word("kitty cat").build().unwrap();
/// session.start(None).unwrap();
///
/// assert_eq!(session.guess_letter("t"), Ok(3));
/// assert_eq!(session.round().visible_word(), "__TT_ __T");
/// ```
#[derive(Debug)]
pub struct GuessPipeline {
    guard: Guard,
}

impl Default for GuessPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessPipeline {
    /// Pipeline whose legality stage only admits `Active` rounds.
    pub fn new() -> Self {
        Self {
            guard: Guard::active(),
        }
    }

    /// Evaluate a letter guess, returning how many positions it revealed.
    pub fn evaluate_letter(&self, round: &mut Round, text: &str) -> Result<usize, GameOver> {
        self.evaluate(round, GuessKind::Letter, text)
    }

    /// Evaluate a whole-word guess, returning how many positions it revealed.
    pub fn evaluate_word(&self, round: &mut Round, text: &str) -> Result<usize, GameOver> {
        self.evaluate(round, GuessKind::Word, text)
    }

    #[instrument(level = "debug", skip(self, round), fields(status = %round.status))]
    pub fn evaluate(&self, round: &mut Round, kind: GuessKind, text: &str) -> Result<usize, GameOver> {
        let mut eval = Evaluation {
            guard: &self.guard,
            kind,
            text,
            correct: false,
            revealed: 0,
        };

        for stage in &STAGES {
            trace!(stage = stage.name, "running stage");
            if (stage.run)(round, &mut eval)? == Flow::Halt {
                trace!(stage = stage.name, "pipeline halted");
                break;
            }
        }

        debug!(
            correct = eval.correct,
            revealed = eval.revealed,
            status = %round.status,
            "guess evaluated"
        );
        Ok(eval.revealed)
    }
}

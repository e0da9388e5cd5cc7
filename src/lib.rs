//! Gallows: a turn-based word-guessing (hangman) engine
//!
//! A [`GameSession`] owns a [`WordBank`], plays one round at a time, and
//! logs every finished round in its [`RoundHistory`]. Presentation layers
//! (terminal menus, widget UIs, chat bots) call the session's operations
//! and render its state; the engine does no I/O beyond optional word
//! sources.
//!
//! # Core Concepts
//!
//! - **Status**: `Inactive`, `Active`, `Won` or `Lost`
//! - **Guess pipeline**: fixed stages every guess runs through (legality,
//!   correctness, visibility, recording, lives, win detection)
//! - **Word bank**: every word is drawn once before any word repeats
//! - **History**: append-only snapshots of finished rounds
//!
//! # Example
//!
//! ```rust
//! use gallows::{GameOver, GameSession, Status};
//!
//! let mut session = GameSession::builder()
//!     .max_lives(1)
//!     .word("abc")
//!     .build()
//!     .unwrap();
//! session.start(None).unwrap();
//!
//! assert_eq!(session.guess_letter("a").unwrap(), 1);
//! assert_eq!(session.lives(), 1);
//! assert_eq!(session.guess_letter("z").unwrap(), 0);
//! assert_eq!(session.status(), Status::Lost);
//!
//! assert_eq!(session.guess_letter("b"), Err(GameOver { status: Status::Lost }));
//! ```

pub mod bank;
pub mod checkpoint;
pub mod core;
pub mod pipeline;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use bank::WordBank;
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Guard, GuessRecord, Round, RoundHistory, RoundSnapshot, Status};
pub use pipeline::{GameOver, GuessKind, GuessPipeline};
pub use session::{GameSession, SessionBuilder, SessionConfig, SessionError};
pub use source::{SourceError, WordSource};

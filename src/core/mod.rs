//! Core game types.
//!
//! This module contains the pieces every other module builds on:
//! - Round status via the `Status` enum
//! - Guard predicates over the status
//! - Round-scoped state (`Round`)
//! - Append-only guess and round logs

mod guard;
mod history;
mod round;
mod status;

pub use guard::Guard;
pub use history::{GuessRecord, RoundHistory, RoundSnapshot};
pub use round::{Round, ALWAYS_VISIBLE, HIDDEN};
pub use status::Status;

//! The ordered stages every guess passes through.

use super::{Evaluation, GameOver, GuessKind};
use crate::core::{GuessRecord, Round, Status};
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::debug;

/// Whether the driver should run the next stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Halt,
}

type StageFn = fn(&mut Round, &mut Evaluation<'_>) -> Result<Flow, GameOver>;

/// A named pipeline stage.
pub(crate) struct Stage {
    pub(crate) name: &'static str,
    pub(crate) run: StageFn,
}

/// Stages in the order they run: legality, correctness, visibility,
/// recording, lives, win detection.
pub(crate) const STAGES: [Stage; 6] = [
    Stage {
        name: "legality",
        run: legality,
    },
    Stage {
        name: "correctness",
        run: correctness,
    },
    Stage {
        name: "visibility",
        run: visibility,
    },
    Stage {
        name: "recording",
        run: recording,
    },
    Stage {
        name: "lives",
        run: lives,
    },
    Stage {
        name: "win",
        run: win,
    },
];

fn legality(round: &mut Round, eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    if eval.guard.check(&round.status) {
        Ok(Flow::Continue)
    } else {
        Err(GameOver {
            status: round.status,
        })
    }
}

/// A letter guess is correct when its text occurs anywhere in the word, so
/// multi-character text routed through a letter guess is a substring test.
fn correctness(round: &mut Round, eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    eval.correct = match eval.kind {
        GuessKind::Letter => round.word.contains(eval.text),
        GuessKind::Word => round.word == eval.text,
    };
    Ok(Flow::Continue)
}

/// Counts word positions, not distinct letters, that became visible.
fn visibility(round: &mut Round, eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    if !eval.correct {
        eval.revealed = 0;
        return Ok(Flow::Continue);
    }

    let prior = round.visible.clone();
    round.visible.extend(eval.text.chars());

    let newly: BTreeSet<char> = eval
        .text
        .chars()
        .filter(|c| round.visible.contains(c) && !prior.contains(c))
        .collect();
    eval.revealed = round.word.chars().filter(|c| newly.contains(c)).count();
    Ok(Flow::Continue)
}

fn recording(round: &mut Round, eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    round.guesses.push(GuessRecord {
        timestamp: Utc::now(),
        guess: eval.text.to_string(),
        revealed: eval.revealed,
    });
    Ok(Flow::Continue)
}

fn lives(round: &mut Round, eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    if eval.revealed > 0 {
        return Ok(Flow::Continue);
    }

    round.lives = round.lives.saturating_sub(1);
    debug!(lives = round.lives, "guess revealed nothing");
    if round.lives == 0 {
        round.status = Status::Lost;
        round.finish(Utc::now());
    }
    // Nothing new is visible, so the word cannot have just been completed.
    Ok(Flow::Halt)
}

fn win(round: &mut Round, _eval: &mut Evaluation<'_>) -> Result<Flow, GameOver> {
    if round.is_fully_revealed() {
        round.status = Status::Won;
        round.finish(Utc::now());
    }
    Ok(Flow::Continue)
}

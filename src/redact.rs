//! The single spoiler gate. Every puzzle leaving the core passes through `redact`.

use serde::Serialize;

use crate::domain::{Category, Difficulty, Puzzle};

/// Replaces spoiler values when they are not revealed.
pub const HIDDEN: &str = "[Hidden]";

/// Puzzle as callers see it. Same public fields as `Puzzle`; spoilers may be the sentinel.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PuzzleView<'a> {
  pub id: &'a str,
  pub category: Category,
  pub difficulty: Difficulty,
  pub question: &'a str,
  pub answer: &'a str,
  pub hints: &'a [String],
  pub explanation: &'a str,
  pub thinking_approach: &'a str,
}

impl PuzzleView<'_> {
  pub fn is_redacted(&self) -> bool {
    self.answer == HIDDEN && self.explanation == HIDDEN
  }
}

pub fn redact(puzzle: &Puzzle, reveal: bool) -> PuzzleView<'_> {
  let (answer, explanation) = if reveal {
    (puzzle.answer.as_str(), puzzle.explanation.as_str())
  } else {
    (HIDDEN, HIDDEN)
  };
  PuzzleView {
    id: &puzzle.id,
    category: puzzle.category,
    difficulty: puzzle.difficulty,
    question: &puzzle.question,
    answer,
    hints: &puzzle.hints,
    explanation,
    thinking_approach: &puzzle.thinking_approach,
  }
}

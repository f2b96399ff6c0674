//! Query outcomes that are not a rendered entity.
//!
//! Neither variant is fatal; transports surface the `Display` text to the caller as-is.

use serde::{Deserialize, Serialize};

/// Name of the listing operation callers can fall back to.
pub const LIST_PUZZLES_OP: &str = "list_puzzles";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
  /// Exact-match lookup (puzzle id, technique name) did not resolve.
  #[error("{entity} '{key}' not found. {recovery}")]
  KeyNotFound {
    entity: &'static str,
    key: String,
    recovery: String,
  },
  /// The filters were well-formed but nothing matched.
  #[error("No {entity} found matching the specified criteria. {recovery}")]
  EmptyResult {
    entity: &'static str,
    recovery: String,
  },
}

/// Wire-level tag for an operation outcome.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
  Ok,
  KeyNotFound,
  EmptyResult,
}

impl QueryError {
  pub fn puzzle_not_found(id: &str) -> Self {
    QueryError::KeyNotFound {
      entity: "Puzzle",
      key: id.to_string(),
      recovery: format!("Use {LIST_PUZZLES_OP} to see available puzzles."),
    }
  }

  pub fn technique_not_found<'a>(name: &str, available: impl IntoIterator<Item = &'a str>) -> Self {
    let names: Vec<&str> = available.into_iter().collect();
    QueryError::KeyNotFound {
      entity: "Technique",
      key: name.to_string(),
      recovery: format!("Available techniques: {}", names.join(", ")),
    }
  }

  pub fn no_puzzles() -> Self {
    QueryError::EmptyResult {
      entity: "puzzles",
      recovery: format!("Use {LIST_PUZZLES_OP} to see available puzzles."),
    }
  }

  pub fn outcome(&self) -> Outcome {
    match self {
      QueryError::KeyNotFound { .. } => Outcome::KeyNotFound,
      QueryError::EmptyResult { .. } => Outcome::EmptyResult,
    }
  }
}

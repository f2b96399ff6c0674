//! Domain models: puzzle categories/difficulties, output forms, and the four content entities.

use std::fmt;

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Which kind of lateral leap a puzzle asks for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Situation,
  Wordplay,
  Visual,
  LogicTrick,
  AssumptionChallenge,
  PerspectiveShift,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Situation,
    Category::Wordplay,
    Category::Visual,
    Category::LogicTrick,
    Category::AssumptionChallenge,
    Category::PerspectiveShift,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Category::Situation => "situation",
      Category::Wordplay => "wordplay",
      Category::Visual => "visual",
      Category::LogicTrick => "logic_trick",
      Category::AssumptionChallenge => "assumption_challenge",
      Category::PerspectiveShift => "perspective_shift",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
  Expert,
}

impl Difficulty {
  pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
      Difficulty::Expert => "expert",
    }
  }

  /// Lenient parse used for challenge keys; unknown strings yield `None`.
  pub fn parse(s: &str) -> Option<Difficulty> {
    Difficulty::ALL.into_iter().find(|d| d.as_str() == s)
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Target rendering. `json` / `markdown` are the wire names; the long names are accepted too.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputForm {
  #[serde(rename = "json", alias = "structured")]
  Structured,
  #[default]
  #[serde(rename = "markdown", alias = "human_readable")]
  HumanReadable,
}

/// A curated lateral thinking puzzle. `answer` and `explanation` are spoilers.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Puzzle {
  pub id: String,
  pub category: Category,
  pub difficulty: Difficulty,
  pub question: String,
  pub answer: String,
  pub hints: Vec<String>,
  pub explanation: String,
  pub thinking_approach: String,
}

/// A named problem-solving technique. Always fully visible.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Technique {
  pub name: String,
  pub description: String,
  pub when_to_use: String,
  pub steps: Vec<String>,
  pub example: String,
}

/// Creative prompt served for a theme.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PromptTemplate {
  pub id: String,
  pub title: String,
  pub prompt: String,
  pub context: String,
  pub suggested_approaches: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub example_response: Option<String>,
}

/// Brainstorming challenge served for a difficulty bucket.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChallengeTemplate {
  pub id: String,
  pub challenge: String,
  pub constraints: Vec<String>,
  pub success_criteria: Vec<String>,
  pub sample_solutions: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn output_form_accepts_wire_names_and_aliases() {
    let f: OutputForm = serde_json::from_str("\"json\"").unwrap();
    assert_eq!(f, OutputForm::Structured);
    let f: OutputForm = serde_json::from_str("\"structured\"").unwrap();
    assert_eq!(f, OutputForm::Structured);
    let f: OutputForm = serde_json::from_str("\"human_readable\"").unwrap();
    assert_eq!(f, OutputForm::HumanReadable);
    assert_eq!(OutputForm::default(), OutputForm::HumanReadable);
  }

  #[test]
  fn enums_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&Category::LogicTrick).unwrap(), "\"logic_trick\"");
    assert_eq!(Difficulty::parse("hard"), Some(Difficulty::Hard));
    assert_eq!(Difficulty::parse("Hard"), None);
  }
}

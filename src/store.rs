//! Immutable content store: the four entity families, validated and indexed once.
//!
//! Nothing mutates a `ContentStore` after construction; it is shared as `Arc<ContentStore>`
//! and read by concurrent requests without locking.

use std::collections::{HashMap, HashSet};

use tracing::{info, instrument};

use crate::domain::{ChallengeTemplate, Difficulty, PromptTemplate, Puzzle, Technique};
use crate::seeds::{seed_challenges, seed_prompts, seed_puzzles, seed_techniques, seed_themes, DEFAULT_THEME};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("duplicate puzzle id: {0}")]
  DuplicatePuzzleId(String),
  #[error("puzzle {0} has no hints")]
  EmptyHints(String),
  #[error("duplicate technique name (case-insensitive): {0}")]
  DuplicateTechnique(String),
  #[error("default theme '{0}' has no prompt template")]
  MissingDefaultPrompt(String),
  #[error("no challenge template for difficulty 'easy'")]
  MissingEasyChallenge,
}

/// Raw entity lists a store is built from.
#[derive(Clone, Debug, Default)]
pub struct Seed {
  pub puzzles: Vec<Puzzle>,
  pub techniques: Vec<Technique>,
  pub themes: Vec<String>,
  pub prompts: Vec<(String, PromptTemplate)>,
  pub default_theme: String,
  pub challenges: Vec<(Difficulty, ChallengeTemplate)>,
}

#[derive(Debug)]
pub struct ContentStore {
  puzzles: Vec<Puzzle>,
  techniques: Vec<Technique>,
  themes: Vec<String>,
  prompts: HashMap<String, PromptTemplate>,
  default_prompt: PromptTemplate,
  challenges: HashMap<Difficulty, ChallengeTemplate>,
  fallback_challenge: ChallengeTemplate,
}

impl ContentStore {
  /// The built-in knowledge base.
  pub fn seeded() -> Result<Self, StoreError> {
    Self::from_seed(Seed {
      puzzles: seed_puzzles(),
      techniques: seed_techniques(),
      themes: seed_themes(),
      prompts: seed_prompts(),
      default_theme: DEFAULT_THEME.to_string(),
      challenges: seed_challenges(),
    })
  }

  /// Validate and index a seed. Insertion order of puzzles and techniques is preserved.
  pub fn from_seed(seed: Seed) -> Result<Self, StoreError> {
    let mut ids = HashSet::new();
    for p in &seed.puzzles {
      if !ids.insert(p.id.as_str()) {
        return Err(StoreError::DuplicatePuzzleId(p.id.clone()));
      }
      if p.hints.is_empty() {
        return Err(StoreError::EmptyHints(p.id.clone()));
      }
    }

    let mut names = HashSet::new();
    for t in &seed.techniques {
      if !names.insert(t.name.to_lowercase()) {
        return Err(StoreError::DuplicateTechnique(t.name.clone()));
      }
    }

    let prompts: HashMap<String, PromptTemplate> = seed.prompts.into_iter().collect();
    let default_prompt = prompts
      .get(&seed.default_theme)
      .cloned()
      .ok_or_else(|| StoreError::MissingDefaultPrompt(seed.default_theme.clone()))?;

    let challenges: HashMap<Difficulty, ChallengeTemplate> = seed.challenges.into_iter().collect();
    let fallback_challenge = challenges
      .get(&Difficulty::Easy)
      .cloned()
      .ok_or(StoreError::MissingEasyChallenge)?;

    // Themes with a template but absent from the catalogue still need to be drawable.
    let mut themes = seed.themes;
    let mut keyed: Vec<&String> = prompts.keys().filter(|k| !themes.contains(*k)).collect();
    keyed.sort();
    let extra: Vec<String> = keyed.into_iter().cloned().collect();
    themes.extend(extra);

    Ok(Self {
      puzzles: seed.puzzles,
      techniques: seed.techniques,
      themes,
      prompts,
      default_prompt,
      challenges,
      fallback_challenge,
    })
  }

  pub fn puzzles(&self) -> &[Puzzle] { &self.puzzles }

  pub fn techniques(&self) -> &[Technique] { &self.techniques }

  pub fn themes(&self) -> &[String] { &self.themes }

  /// Total: unknown themes resolve to the default template.
  pub fn prompt_for(&self, theme: &str) -> &PromptTemplate {
    self.prompts.get(theme).unwrap_or(&self.default_prompt)
  }

  /// Total: unknown or missing difficulties resolve to the `easy` template.
  pub fn challenge_for(&self, difficulty: Option<Difficulty>) -> &ChallengeTemplate {
    difficulty
      .and_then(|d| self.challenges.get(&d))
      .unwrap_or(&self.fallback_challenge)
  }

  /// Startup inventory summary by difficulty.
  #[instrument(level = "info", skip_all)]
  pub fn log_inventory(&self) {
    for d in Difficulty::ALL {
      let count = self.puzzles.iter().filter(|p| p.difficulty == d).count();
      info!(target: "lateral", difficulty = %d, puzzles = count, "Startup puzzle inventory");
    }
    info!(
      target: "lateral",
      techniques = self.techniques.len(),
      themes = self.themes.len(),
      prompt_templates = self.prompts.len(),
      challenge_templates = self.challenges.len(),
      "Startup content inventory"
    );
  }
}

//! Selection over the content store: exact lookups, filtered listing, and uniform random picks.

use rand::Rng;
use tracing::{debug, instrument};

use crate::domain::{Category, ChallengeTemplate, Difficulty, PromptTemplate, Puzzle, Technique};
use crate::error::QueryError;
use crate::store::ContentStore;

/// Source of uniform indices in `[0, n)`. `n` is always > 0.
pub trait IndexSource: Send + Sync {
  fn pick(&self, n: usize) -> usize;
}

/// Process-wide default: thread-local RNG, one independent draw per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngIndex;

impl IndexSource for ThreadRngIndex {
  fn pick(&self, n: usize) -> usize {
    rand::thread_rng().gen_range(0..n)
  }
}

/// Optional filters for puzzle listing. `None` means "don't filter on this field".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PuzzleFilter {
  pub category: Option<Category>,
  pub difficulty: Option<Difficulty>,
}

impl PuzzleFilter {
  pub fn matches(&self, p: &Puzzle) -> bool {
    self.category.map_or(true, |c| p.category == c) && self.difficulty.map_or(true, |d| p.difficulty == d)
  }
}

pub struct Selector<'a> {
  store: &'a ContentStore,
  rng: &'a dyn IndexSource,
}

impl<'a> Selector<'a> {
  pub fn new(store: &'a ContentStore, rng: &'a dyn IndexSource) -> Self {
    Self { store, rng }
  }

  pub fn get_by_id(&self, id: &str) -> Result<&'a Puzzle, QueryError> {
    self
      .store
      .puzzles()
      .iter()
      .find(|p| p.id == id)
      .ok_or_else(|| QueryError::puzzle_not_found(id))
  }

  /// Case-insensitive exact match. A miss lists every valid name.
  pub fn get_by_name(&self, name: &str) -> Result<&'a Technique, QueryError> {
    let wanted = name.to_lowercase();
    let techniques = self.store.techniques();
    techniques
      .iter()
      .find(|t| t.name.to_lowercase() == wanted)
      .ok_or_else(|| QueryError::technique_not_found(name, techniques.iter().map(|t| t.name.as_str())))
  }

  /// Conjunction of all supplied filters, in store order.
  pub fn list(&self, filter: PuzzleFilter) -> Vec<&'a Puzzle> {
    self.store.puzzles().iter().filter(|p| filter.matches(p)).collect()
  }

  #[instrument(level = "debug", skip(self))]
  pub fn random_eligible(&self, filter: PuzzleFilter) -> Option<&'a Puzzle> {
    let eligible = self.list(filter);
    if eligible.is_empty() {
      return None;
    }
    let idx = self.rng.pick(eligible.len());
    debug!(target: "lateral", eligible = eligible.len(), idx, "Random puzzle drawn");
    eligible.get(idx).copied()
  }

  /// Exact theme lookup with default fallback. A missing or empty theme draws one from the catalogue.
  pub fn pick_by_theme(&self, theme: Option<&str>) -> &'a PromptTemplate {
    match theme.filter(|t| !t.is_empty()) {
      Some(t) => self.store.prompt_for(t),
      None => {
        let themes = self.store.themes();
        if themes.is_empty() {
          return self.store.prompt_for("");
        }
        let drawn = &themes[self.rng.pick(themes.len()).min(themes.len() - 1)];
        debug!(target: "lateral", theme = %drawn, "Theme drawn");
        self.store.prompt_for(drawn)
      }
    }
  }

  /// Total: unrecognized keys resolve to the `easy` template.
  pub fn pick_by_difficulty(&self, difficulty: &str) -> &'a ChallengeTemplate {
    self.store.challenge_for(Difficulty::parse(difficulty))
  }
}

#[cfg(test)]
pub(crate) mod sources {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use super::IndexSource;

  /// Always returns the same index (clamped to the range).
  pub struct FixedIndex(pub usize);

  impl IndexSource for FixedIndex {
    fn pick(&self, n: usize) -> usize { self.0.min(n - 1) }
  }

  /// Cycles 0, 1, 2, ... modulo `n`.
  #[derive(Default)]
  pub struct CyclingIndex(AtomicUsize);

  impl IndexSource for CyclingIndex {
    fn pick(&self, n: usize) -> usize { self.0.fetch_add(1, Ordering::Relaxed) % n }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::sources::{CyclingIndex, FixedIndex};
  use super::*;
  use crate::store::fixtures;

  fn seeded() -> ContentStore { ContentStore::seeded().unwrap() }

  #[test]
  fn get_by_id_returns_exact_entity_or_not_found() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    for p in store.puzzles() {
      assert_eq!(sel.get_by_id(&p.id).unwrap(), p);
    }
    assert_eq!(sel.get_by_id("puzzle_999").unwrap_err(), QueryError::puzzle_not_found("puzzle_999"));
  }

  #[test]
  fn technique_lookup_ignores_case() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    let a = sel.get_by_name("challenge assumptions").unwrap();
    let b = sel.get_by_name("Challenge Assumptions").unwrap();
    assert_eq!(a, b);
    assert_eq!(sel.get_by_name("CHALLENGE ASSUMPTIONS").unwrap(), a);

    let err = sel.get_by_name("Lateral Leap").unwrap_err().to_string();
    for t in store.techniques() {
      assert!(err.contains(&t.name), "missing {} in {err}", t.name);
    }
  }

  #[test]
  fn list_applies_conjunction_in_store_order() {
    let store = ContentStore::from_seed(fixtures::seed()).unwrap();
    let sel = Selector::new(&store, &ThreadRngIndex);

    let ids = |v: Vec<&Puzzle>| v.into_iter().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(sel.list(PuzzleFilter::default())), ["p1", "p2", "p3", "p4"]);
    assert_eq!(
      ids(sel.list(PuzzleFilter { difficulty: Some(Difficulty::Easy), category: None })),
      ["p1", "p2", "p4"]
    );
    assert_eq!(
      ids(sel.list(PuzzleFilter { category: Some(Category::Situation), difficulty: Some(Difficulty::Easy) })),
      ["p1"]
    );
    assert!(sel.list(PuzzleFilter { category: Some(Category::LogicTrick), difficulty: None }).is_empty());
  }

  #[test]
  fn union_over_categories_reconstructs_difficulty_subset() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    for d in Difficulty::ALL {
      let by_difficulty = sel.list(PuzzleFilter { category: None, difficulty: Some(d) });
      for p in &by_difficulty {
        assert_eq!(p.difficulty, d);
      }
      let mut union: Vec<&Puzzle> = Vec::new();
      for c in Category::ALL {
        for p in sel.list(PuzzleFilter { category: Some(c), difficulty: Some(d) }) {
          assert_eq!(p.category, c);
          union.push(p);
        }
      }
      let seen: HashSet<&str> = union.iter().map(|p| p.id.as_str()).collect();
      assert_eq!(seen.len(), union.len(), "duplicates for {d}");
      let expected: HashSet<&str> = by_difficulty.iter().map(|p| p.id.as_str()).collect();
      assert_eq!(seen, expected);
    }
  }

  #[test]
  fn expert_listing_is_the_fish_puzzle() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    let expert = sel.list(PuzzleFilter { category: None, difficulty: Some(Difficulty::Expert) });
    assert_eq!(expert.len(), 1);
    assert!(expert[0].answer.contains("fish"));
  }

  #[test]
  fn random_draws_respect_filter_and_cover_subset() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    let filter = PuzzleFilter { category: None, difficulty: Some(Difficulty::Easy) };
    let eligible: HashSet<&str> = sel.list(filter).iter().map(|p| p.id.as_str()).collect();

    let mut seen = HashSet::new();
    for _ in 0..1000 {
      let p = sel.random_eligible(filter).expect("easy puzzles exist");
      assert_eq!(p.difficulty, Difficulty::Easy);
      seen.insert(p.id.as_str());
    }
    assert_eq!(seen, eligible);
  }

  #[test]
  fn random_on_empty_subset_is_none() {
    let store = ContentStore::from_seed(fixtures::seed()).unwrap();
    let sel = Selector::new(&store, &FixedIndex(0));
    assert!(sel.random_eligible(PuzzleFilter { category: None, difficulty: Some(Difficulty::Expert) }).is_none());
  }

  #[test]
  fn injected_source_makes_draws_deterministic() {
    let store = ContentStore::from_seed(fixtures::seed()).unwrap();
    let rng = FixedIndex(1);
    let sel = Selector::new(&store, &rng);
    assert_eq!(sel.random_eligible(PuzzleFilter::default()).unwrap().id, "p2");
    // Catalogue is [home, away, elsewhere]; index 1 is "away".
    assert_eq!(sel.pick_by_theme(None).id, "pr_away");
  }

  #[test]
  fn empty_theme_draws_like_no_theme() {
    let store = ContentStore::from_seed(fixtures::seed()).unwrap();
    let rng = FixedIndex(1);
    let sel = Selector::new(&store, &rng);
    assert_eq!(sel.pick_by_theme(Some("")).id, "pr_away");
    assert_eq!(sel.pick_by_theme(Some("")), sel.pick_by_theme(None));
  }

  #[test]
  fn undrawn_themes_fall_back_to_default() {
    let store = ContentStore::from_seed(fixtures::seed()).unwrap();
    let rng = CyclingIndex::default();
    let sel = Selector::new(&store, &rng);
    let drawn: Vec<&str> = (0..3).map(|_| sel.pick_by_theme(None).id.as_str()).collect();
    assert_eq!(drawn, ["pr_home", "pr_away", "pr_home"]);
    assert_eq!(sel.pick_by_theme(Some("away")).id, "pr_away");
    assert_eq!(sel.pick_by_theme(Some("unknown")).id, "pr_home");
  }

  #[test]
  fn unknown_difficulty_is_easy() {
    let store = seeded();
    let sel = Selector::new(&store, &ThreadRngIndex);
    assert_eq!(sel.pick_by_difficulty("nonexistent"), sel.pick_by_difficulty("easy"));
    assert_eq!(sel.pick_by_difficulty("hard").id, "challenge_hard_001");
  }
}

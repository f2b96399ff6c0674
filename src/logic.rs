//! The seven query operations, shared by the HTTP, WebSocket and MCP transports.
//!
//! Each operation is a stateless unit of work: select, redact (puzzles only), render.
//! Not-found and empty outcomes come back as `QueryError` values, never panics.

use tracing::{debug, info, instrument};

use crate::domain::{Category, Difficulty, OutputForm};
use crate::error::QueryError;
use crate::protocol::{ClientMessage, ServerMessage, ToolResponse};
use crate::redact::redact;
use crate::render::Rendered;
use crate::select::PuzzleFilter;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub fn get_puzzle(state: &AppState, puzzle_id: &str, include_answer: bool, form: OutputForm) -> Result<Rendered, QueryError> {
  let view = redact(state.selector().get_by_id(puzzle_id)?, include_answer);
  info!(target: "lateral", id = %view.id, redacted = view.is_redacted(), "Puzzle served");
  Ok(state.renderer.puzzle(&view, form))
}

/// No reveal flag on purpose: listings are always redacted.
#[instrument(level = "info", skip(state))]
pub fn list_puzzles(
  state: &AppState,
  category: Option<Category>,
  difficulty: Option<Difficulty>,
  form: OutputForm,
) -> Result<Rendered, QueryError> {
  let puzzles = state.selector().list(PuzzleFilter { category, difficulty });
  if puzzles.is_empty() {
    info!(target: "lateral", "Puzzle listing matched nothing");
    return Err(QueryError::no_puzzles());
  }
  info!(target: "lateral", count = puzzles.len(), "Puzzle listing served");
  Ok(state.renderer.puzzle_list(&puzzles, form))
}

#[instrument(level = "info", skip(state))]
pub fn random_puzzle(
  state: &AppState,
  difficulty: Option<Difficulty>,
  include_answer: bool,
  form: OutputForm,
) -> Result<Rendered, QueryError> {
  let puzzle = state
    .selector()
    .random_eligible(PuzzleFilter { category: None, difficulty })
    .ok_or_else(QueryError::no_puzzles)?;
  info!(target: "lateral", id = %puzzle.id, include_answer, "Random puzzle served");
  Ok(state.renderer.puzzle(&redact(puzzle, include_answer), form))
}

#[instrument(level = "info", skip(state))]
pub fn get_technique(state: &AppState, technique_name: &str, form: OutputForm) -> Result<Rendered, QueryError> {
  let technique = state.selector().get_by_name(technique_name)?;
  Ok(state.renderer.technique(technique, form))
}

#[instrument(level = "info", skip(state))]
pub fn list_techniques(state: &AppState, form: OutputForm) -> Rendered {
  state.renderer.technique_list(state.store.techniques(), form)
}

#[instrument(level = "info", skip(state))]
pub fn generate_prompt(state: &AppState, theme: Option<&str>, form: OutputForm) -> Rendered {
  state.generator().generate_prompt(theme, form)
}

#[instrument(level = "info", skip(state))]
pub fn generate_challenge(state: &AppState, difficulty: &str, form: OutputForm) -> Rendered {
  state.generator().generate_challenge(difficulty, form)
}

/// Route one client message to its operation.
pub fn dispatch(state: &AppState, msg: ClientMessage) -> ServerMessage {
  let response: ToolResponse = match msg {
    ClientMessage::Ping => return ServerMessage::Pong,
    ClientMessage::GetPuzzle { puzzle_id, include_answer, response_format } =>
      get_puzzle(state, &puzzle_id, include_answer, response_format).into(),
    ClientMessage::ListPuzzles { category, difficulty, response_format } =>
      list_puzzles(state, category, difficulty, response_format).into(),
    ClientMessage::RandomPuzzle { difficulty, include_answer, response_format } =>
      random_puzzle(state, difficulty, include_answer, response_format).into(),
    ClientMessage::GetTechnique { technique_name, response_format } =>
      get_technique(state, &technique_name, response_format).into(),
    ClientMessage::ListTechniques { response_format } => list_techniques(state, response_format).into(),
    ClientMessage::GeneratePrompt { theme, response_format } =>
      generate_prompt(state, theme.as_deref(), response_format).into(),
    ClientMessage::GenerateChallenge { difficulty, response_format } =>
      generate_challenge(state, &difficulty, response_format).into(),
  };
  response.into()
}

/// Parse, dispatch, serialize. One call per WebSocket text frame.
pub fn handle_client_text(state: &AppState, txt: &str) -> String {
  let reply = match serde_json::from_str::<ClientMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "lateral_backend", "Received: {:?}", &incoming);
      dispatch(state, incoming)
    }
    Err(e) => {
      debug!(target: "lateral_backend", input = %trunc_for_log(txt, 200), "Rejected malformed message");
      ServerMessage::Error { message: format!("Invalid JSON: {}", e) }
    }
  };

  serde_json::to_string(&reply).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[cfg(test)]
mod tests {
  use serde_json::Value;

  use super::*;
  use crate::error::Outcome;
  use crate::state::test_state;

  #[test]
  fn get_puzzle_not_found_suggests_listing() {
    let state = test_state();
    let err = get_puzzle(&state, "puzzle_404", false, OutputForm::HumanReadable).unwrap_err();
    assert!(err.to_string().contains("puzzle_404"));
    assert!(err.to_string().contains("list_puzzles"));
  }

  #[test]
  fn expert_listing_hides_the_fish_answer() {
    let state = test_state();
    let fish = state.selector().get_by_id("puzzle_006").unwrap();
    let json = list_puzzles(&state, None, Some(Difficulty::Expert), OutputForm::Structured).unwrap();
    let v = json.structured.unwrap();
    assert_eq!(v["count"], 1);
    assert_eq!(v["puzzles"][0]["id"], "puzzle_006");
    assert_eq!(v["puzzles"][0]["answer"], crate::redact::HIDDEN);
    assert!(!json.text.contains(&fish.answer));

    let md = list_puzzles(&state, None, Some(Difficulty::Expert), OutputForm::HumanReadable).unwrap();
    assert!(md.text.contains("dies of thirst"));
    assert!(!md.text.contains(&fish.answer));
  }

  #[test]
  fn list_never_leaks_any_answer() {
    let state = test_state();
    let answers: Vec<String> = state.store.puzzles().iter().map(|p| p.answer.clone()).collect();
    let mut categories = vec![None];
    categories.extend(Category::ALL.map(Some));
    let mut difficulties = vec![None];
    difficulties.extend(Difficulty::ALL.map(Some));
    for c in &categories {
      for d in &difficulties {
        for form in [OutputForm::Structured, OutputForm::HumanReadable] {
          let text = match list_puzzles(&state, *c, *d, form) {
            Ok(r) => r.text,
            Err(e) => e.to_string(),
          };
          for a in &answers {
            assert!(!text.contains(a.as_str()));
          }
        }
      }
    }
  }

  #[test]
  fn empty_listing_is_distinguished_from_not_found() {
    let state = test_state();
    let err = list_puzzles(&state, Some(Category::Wordplay), Some(Difficulty::Expert), OutputForm::Structured).unwrap_err();
    assert_eq!(err.outcome(), Outcome::EmptyResult);
  }

  #[test]
  fn random_puzzle_respects_reveal_and_filter() {
    let state = test_state();
    let r = random_puzzle(&state, Some(Difficulty::Hard), true, OutputForm::Structured).unwrap();
    let v = r.structured.unwrap();
    assert_eq!(v["id"], "puzzle_005");
    assert!(v["answer"].as_str().unwrap().contains("Monopoly"));

    let r = random_puzzle(&state, Some(Difficulty::Hard), false, OutputForm::HumanReadable).unwrap();
    assert!(!r.text.contains("Monopoly. He landed"));
  }

  #[test]
  fn technique_miss_lists_all_names() {
    let state = test_state();
    let err = get_technique(&state, "Lateral Leap", OutputForm::HumanReadable).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Lateral Leap"));
    assert!(msg.contains("Challenge Assumptions, Reframe the Context"));
    assert!(msg.contains("Analogical Thinking"));
  }

  #[test]
  fn dispatch_covers_every_operation() {
    let state = test_state();
    let cases = [
      r#"{"type":"get_puzzle","puzzle_id":"puzzle_003","include_answer":true}"#,
      r#"{"type":"list_puzzles","category":"situation"}"#,
      r#"{"type":"random_puzzle"}"#,
      r#"{"type":"get_technique","technique_name":"reverse engineering"}"#,
      r#"{"type":"list_techniques","response_format":"json"}"#,
      r#"{"type":"generate_prompt","theme":"food systems"}"#,
      r#"{"type":"generate_challenge","difficulty":"hard"}"#,
    ];
    for c in cases {
      let v: Value = serde_json::from_str(&handle_client_text(&state, c)).unwrap();
      assert_eq!(v["type"], "result", "{c}");
      assert_eq!(v["outcome"], "ok", "{c}");
    }
  }

  #[test]
  fn dispatch_reports_misses_and_bad_json() {
    let state = test_state();
    let v: Value = serde_json::from_str(&handle_client_text(&state, r#"{"type":"get_puzzle","puzzle_id":"x"}"#)).unwrap();
    assert_eq!(v["outcome"], "key_not_found");
    assert!(v["text"].as_str().unwrap().starts_with("Puzzle 'x' not found."));

    let v: Value = serde_json::from_str(&handle_client_text(&state, "{not json")).unwrap();
    assert_eq!(v["type"], "error");

    let v: Value = serde_json::from_str(&handle_client_text(&state, r#"{"type":"ping"}"#)).unwrap();
    assert_eq!(v["type"], "pong");
  }
}

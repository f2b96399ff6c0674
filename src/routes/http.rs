//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; not-found outcomes map to 404, everything else to 200.

use std::sync::Arc;

use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::error::Outcome;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

fn respond(r: ToolResponse) -> impl IntoResponse {
  let status = match r.outcome {
    Outcome::KeyNotFound => StatusCode::NOT_FOUND,
    Outcome::Ok | Outcome::EmptyResult => StatusCode::OK,
  };
  (status, Json(r))
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { status: "ok".into(), service: env!("CARGO_PKG_NAME").into() })
}

#[instrument(level = "info")]
pub async fn http_info() -> impl IntoResponse {
  Json(InfoOut {
    name: "Lateral Thinking Backend".into(),
    version: env!("CARGO_PKG_VERSION").into(),
    description: "Lateral thinking puzzles, techniques, creative prompts and brainstorming challenges".into(),
    tools: 7,
  })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_puzzle(
  State(state): State<Arc<AppState>>,
  Path(puzzle_id): Path<String>,
  Query(q): Query<PuzzleQuery>,
) -> impl IntoResponse {
  let r: ToolResponse = get_puzzle(&state, &puzzle_id, q.include_answer, q.response_format).into();
  info!(target: "lateral_backend", %puzzle_id, outcome = ?r.outcome, "HTTP get_puzzle served");
  respond(r)
}

#[instrument(level = "info", skip(state))]
pub async fn http_list_puzzles(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ListPuzzlesQuery>,
) -> impl IntoResponse {
  respond(list_puzzles(&state, q.category, q.difficulty, q.response_format).into())
}

#[instrument(level = "info", skip(state))]
pub async fn http_random_puzzle(
  State(state): State<Arc<AppState>>,
  Query(q): Query<RandomPuzzleQuery>,
) -> impl IntoResponse {
  respond(random_puzzle(&state, q.difficulty, q.include_answer, q.response_format).into())
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_technique(
  State(state): State<Arc<AppState>>,
  Path(technique_name): Path<String>,
  Query(q): Query<FormatQuery>,
) -> impl IntoResponse {
  respond(get_technique(&state, &technique_name, q.response_format).into())
}

#[instrument(level = "info", skip(state))]
pub async fn http_list_techniques(
  State(state): State<Arc<AppState>>,
  Query(q): Query<FormatQuery>,
) -> impl IntoResponse {
  respond(list_techniques(&state, q.response_format).into())
}

#[instrument(level = "info", skip(state))]
pub async fn http_generate_prompt(
  State(state): State<Arc<AppState>>,
  Query(q): Query<PromptQuery>,
) -> impl IntoResponse {
  respond(generate_prompt(&state, q.theme.as_deref(), q.response_format).into())
}

#[instrument(level = "info", skip(state))]
pub async fn http_generate_challenge(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ChallengeQuery>,
) -> impl IntoResponse {
  let difficulty = q.difficulty.unwrap_or_else(|| DEFAULT_CHALLENGE_DIFFICULTY.into());
  respond(generate_challenge(&state, &difficulty, q.response_format).into())
}

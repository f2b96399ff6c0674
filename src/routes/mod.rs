//! Router assembly: HTTP endpoints, WebSocket upgrade, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...` (one GET per operation)
/// - Service info at `/`
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http::http_info))
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/puzzles", get(http::http_list_puzzles))
        .route("/api/v1/puzzles/random", get(http::http_random_puzzle))
        .route("/api/v1/puzzles/:puzzle_id", get(http::http_get_puzzle))
        .route("/api/v1/techniques", get(http::http_list_techniques))
        .route("/api/v1/techniques/:technique_name", get(http::http_get_technique))
        .route("/api/v1/prompt", get(http::http_generate_prompt))
        .route("/api/v1/challenge", get(http::http_generate_challenge))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::error::Outcome;
    use crate::governor::LengthGovernor;
    use crate::protocol::{HealthOut, InfoOut, ToolResponse};
    use crate::select::sources::FixedIndex;
    use crate::state::test_state;
    use crate::store::ContentStore;

    fn app() -> Router {
        build_router(Arc::new(test_state()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(uri: &str) -> (StatusCode, T) {
        get_json_from(app(), uri).await
    }

    async fn get_json_from<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_and_info() {
        let (status, health): (_, HealthOut) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.status, "ok");

        let (status, info): (_, InfoOut) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(info.tools, 7);
    }

    #[tokio::test]
    async fn test_get_puzzle_revealed_json() {
        let (status, r): (_, ToolResponse) =
            get_json("/api/v1/puzzles/puzzle_003?include_answer=true&response_format=json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(r.outcome, Outcome::Ok);
        assert!(r.text.contains("an apple a day keeps the doctor away"));
        assert_eq!(r.structured.unwrap()["id"], "puzzle_003");
    }

    #[tokio::test]
    async fn test_get_puzzle_defaults_to_hidden_markdown() {
        let (_, r): (_, ToolResponse) = get_json("/api/v1/puzzles/puzzle_003").await;
        assert!(r.text.starts_with("# Lateral Thinking Puzzle: puzzle_003"));
        assert!(!r.text.contains("an apple a day keeps the doctor away"));
        assert!(r.structured.is_none());
    }

    #[tokio::test]
    async fn test_unknown_puzzle_is_404() {
        let (status, r): (_, ToolResponse) = get_json("/api/v1/puzzles/puzzle_999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(r.outcome, Outcome::KeyNotFound);
        assert!(r.text.contains("list_puzzles"));
    }

    #[tokio::test]
    async fn test_list_ignores_include_answer() {
        let (status, r): (_, ToolResponse) =
            get_json("/api/v1/puzzles?difficulty=expert&include_answer=true&response_format=json").await;
        assert_eq!(status, StatusCode::OK);
        let v = r.structured.unwrap();
        assert_eq!(v["count"], 1);
        assert!(!r.text.contains("The man was a fish"));
    }

    #[tokio::test]
    async fn test_empty_listing_is_ok_with_outcome() {
        let (status, r): (_, ToolResponse) = get_json("/api/v1/puzzles?category=wordplay&difficulty=hard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(r.outcome, Outcome::EmptyResult);
    }

    #[tokio::test]
    async fn test_blank_filters_are_ignored() {
        let (status, r): (_, ToolResponse) = get_json("/api/v1/puzzles?category=&difficulty=expert&response_format=json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(r.structured.unwrap()["puzzles"][0]["id"], "puzzle_006");

        let (status, r): (_, ToolResponse) = get_json("/api/v1/puzzles?category=&difficulty=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(r.outcome, Outcome::Ok);
    }

    #[tokio::test]
    async fn test_blank_theme_draws_from_catalogue() {
        let state = AppState::new(
            Arc::new(ContentStore::seeded().unwrap()),
            Arc::new(FixedIndex(1)),
            LengthGovernor::default(),
        );
        let app = build_router(Arc::new(state));
        // Catalogue index 1 is "solving social problems".
        let (_, r): (_, ToolResponse) = get_json_from(app, "/api/v1/prompt?theme=&response_format=json").await;
        assert_eq!(r.structured.unwrap()["id"], "prompt_002");
    }

    #[tokio::test]
    async fn test_random_technique_prompt_and_challenge_routes() {
        let (_, r): (_, ToolResponse) = get_json("/api/v1/puzzles/random?difficulty=expert&response_format=json").await;
        assert_eq!(r.structured.unwrap()["id"], "puzzle_006");

        let (_, r): (_, ToolResponse) = get_json("/api/v1/techniques/challenge%20assumptions").await;
        assert!(r.text.starts_with("# Lateral Thinking Technique: Challenge Assumptions"));

        let (status, r): (_, ToolResponse) = get_json("/api/v1/techniques/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(r.text.contains("Available techniques:"));

        let (_, r): (_, ToolResponse) = get_json("/api/v1/techniques?response_format=json").await;
        assert_eq!(r.structured.unwrap()["count"], 6);

        let (_, r): (_, ToolResponse) = get_json("/api/v1/prompt?theme=solving%20social%20problems").await;
        assert!(r.text.contains("Flip the Problem"));

        let (_, r): (_, ToolResponse) = get_json("/api/v1/challenge").await;
        assert!(r.text.starts_with("# Brainstorming Challenge: challenge_medium_001"));

        let (_, r): (_, ToolResponse) = get_json("/api/v1/challenge?difficulty=nonexistent").await;
        assert!(r.text.starts_with("# Brainstorming Challenge: challenge_easy_001"));
    }
}

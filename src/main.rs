//! Lateral Thinking Backend
//!
//! Serves a fixed knowledge base of lateral thinking puzzles, techniques, creative
//! prompts and brainstorming challenges, rendered as JSON or bounded Markdown.
//!
//! - Axum HTTP + WebSocket API, or an MCP tool server over stdio
//! - Spoilers (answers/explanations) hidden unless explicitly revealed
//!
//! Important env variables:
//!   TRANSPORT     : "http" or "stdio" (default: http if PORT is set, else stdio)
//!   PORT          : u16 (default 3000)
//!   CONFIG_PATH   : path to TOML config (server + render settings)
//!   LOG_LEVEL     : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT    : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod error;
mod config;
mod seeds;
mod store;
mod select;
mod redact;
mod governor;
mod render;
mod generate;
mod state;
mod protocol;
mod logic;
mod routes;
mod mcp;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{load_config_from_env, Transport};
use crate::governor::LengthGovernor;
use crate::routes::build_router;
use crate::select::ThreadRngIndex;
use crate::state::AppState;
use crate::store::ContentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = load_config_from_env();
  let settings = cfg.resolve(|k| std::env::var(k).ok());

  // Content is built once and never written again.
  let store = Arc::new(ContentStore::seeded()?);
  store.log_inventory();

  let state = Arc::new(AppState::new(
    store,
    Arc::new(ThreadRngIndex),
    LengthGovernor::new(settings.character_limit),
  ));

  match settings.transport {
    Transport::Stdio => mcp::run_stdio(state).await?,
    Transport::Http => {
      let app = build_router(state);
      let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
      let listener = TcpListener::bind(addr).await?;
      info!(target: "lateral_backend", %addr, character_limit = settings.character_limit, "HTTP server listening");
      axum::serve(listener, app).await?;
    }
  }
  Ok(())
}

//! `/ws`: one `ServerMessage` reply per `ClientMessage` text frame.
//! A malformed frame gets an `error` reply; the socket stays open.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{error, info, instrument, warn};

use crate::logic::handle_client_text;
use crate::state::AppState;

#[instrument(level = "info", skip(ws, state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "lateral_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| serve_socket(socket, state))
}

#[instrument(level = "info", skip_all)]
async fn serve_socket(mut socket: WebSocket, state: Arc<AppState>) {
  let mut replies = 0usize;
  while let Some(frame) = socket.recv().await {
    let reply = match frame {
      Ok(Message::Text(txt)) => Message::Text(handle_client_text(&state, &txt)),
      Ok(Message::Ping(payload)) => Message::Pong(payload),
      Ok(Message::Close(_)) => break,
      Ok(_) => continue,
      Err(e) => {
        warn!(target: "lateral_backend", error = %e, "WebSocket receive failed");
        break;
      }
    };
    if let Err(e) = socket.send(reply).await {
      error!(target: "lateral_backend", error = %e, "WebSocket send failed");
      break;
    }
    replies += 1;
  }
  info!(target: "lateral_backend", replies, "WebSocket closed");
}

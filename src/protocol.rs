//! Public protocol structs for HTTP and WebSocket (serde ready).
//! Parameter names match the tool arguments callers already know.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{Category, Difficulty, OutputForm};
use crate::error::{Outcome, QueryError};
use crate::render::Rendered;

pub const DEFAULT_CHALLENGE_DIFFICULTY: &str = "medium";

fn default_challenge_difficulty() -> String { DEFAULT_CHALLENGE_DIFFICULTY.into() }

/// Messages a client can send over WebSocket (one JSON object per frame).
///
/// Unknown fields are ignored, so e.g. `include_answer` on `list_puzzles` has no effect.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Ping,
    GetPuzzle {
        puzzle_id: String,
        #[serde(default)]
        include_answer: bool,
        #[serde(default)]
        response_format: OutputForm,
    },
    ListPuzzles {
        #[serde(default)]
        category: Option<Category>,
        #[serde(default)]
        difficulty: Option<Difficulty>,
        #[serde(default)]
        response_format: OutputForm,
    },
    RandomPuzzle {
        #[serde(default)]
        difficulty: Option<Difficulty>,
        #[serde(default)]
        include_answer: bool,
        #[serde(default)]
        response_format: OutputForm,
    },
    GetTechnique {
        technique_name: String,
        #[serde(default)]
        response_format: OutputForm,
    },
    ListTechniques {
        #[serde(default)]
        response_format: OutputForm,
    },
    GeneratePrompt {
        #[serde(default)]
        theme: Option<String>,
        #[serde(default)]
        response_format: OutputForm,
    },
    GenerateChallenge {
        #[serde(default = "default_challenge_difficulty")]
        difficulty: String,
        #[serde(default)]
        response_format: OutputForm,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Pong,
    Result {
        outcome: Outcome,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        structured: Option<Value>,
    },
    Error {
        message: String,
    },
}

/// Result of one operation, shared by all transports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResponse {
    pub outcome: Outcome,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<Value>,
}

impl From<Result<Rendered, QueryError>> for ToolResponse {
    fn from(r: Result<Rendered, QueryError>) -> Self {
        match r {
            Ok(Rendered { text, structured }) => ToolResponse { outcome: Outcome::Ok, text, structured },
            Err(e) => ToolResponse { outcome: e.outcome(), text: e.to_string(), structured: None },
        }
    }
}

impl From<ToolResponse> for ServerMessage {
    fn from(r: ToolResponse) -> Self {
        ServerMessage::Result { outcome: r.outcome, text: r.text, structured: r.structured }
    }
}

impl From<Rendered> for ToolResponse {
    fn from(r: Rendered) -> Self { Ok(r).into() }
}

//
// HTTP query DTOs
//

/// Query strings send `?category=` for an unset select box; treat that like an absent key.
fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(de)?.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => T::deserialize(s.into_deserializer()).map(Some),
    }
}

#[derive(Debug, Deserialize)]
pub struct PuzzleQuery {
    #[serde(default)]
    pub include_answer: bool,
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize)]
pub struct ListPuzzlesQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize)]
pub struct RandomPuzzleQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub include_answer: bool,
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize)]
pub struct PromptQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub response_format: OutputForm,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoOut {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tools: usize,
}

//! MCP tool server over stdio.
//!
//! The seven query operations are registered as `lateral_*` tools. Text goes in the
//! content block; the structured form also fills `structured_content`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::transport::stdio;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{Category, Difficulty, OutputForm};
use crate::error::QueryError;
use crate::logic;
use crate::protocol::DEFAULT_CHALLENGE_DIFFICULTY;
use crate::render::Rendered;
use crate::state::AppState;

fn default_challenge_difficulty() -> String {
    DEFAULT_CHALLENGE_DIFFICULTY.into()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetPuzzleRequest {
    #[schemars(description = "Unique puzzle identifier, e.g. \"puzzle_001\"")]
    pub puzzle_id: String,
    #[serde(default)]
    #[schemars(description = "Include answer and explanation")]
    pub include_answer: bool,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

/// No reveal flag: listings never carry answers.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListPuzzlesRequest {
    #[serde(default)]
    #[schemars(description = "Filter by puzzle category")]
    pub category: Option<Category>,
    #[serde(default)]
    #[schemars(description = "Filter by difficulty")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RandomPuzzleRequest {
    #[serde(default)]
    #[schemars(description = "Only draw from this difficulty")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    #[schemars(description = "Include answer and explanation")]
    pub include_answer: bool,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTechniqueRequest {
    #[schemars(description = "Technique name, matched case-insensitively")]
    pub technique_name: String,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListTechniquesRequest {
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GeneratePromptRequest {
    #[serde(default)]
    #[schemars(description = "Theme for the prompt; omitted or empty draws a random theme")]
    pub theme: Option<String>,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateChallengeRequest {
    #[serde(default = "default_challenge_difficulty")]
    #[schemars(description = "easy, medium (default) or hard; anything else gets the easy challenge")]
    pub difficulty: String,
    #[serde(default)]
    #[schemars(description = "Output format: markdown (default) or json")]
    pub response_format: OutputForm,
}

/// Misses come back as tool errors carrying the recovery hint, never as protocol errors.
fn tool_result(r: Result<Rendered, QueryError>) -> CallToolResult {
    match r {
        Ok(Rendered { text, structured }) => {
            let mut result = CallToolResult::success(vec![Content::text(text)]);
            result.structured_content = structured;
            result
        }
        Err(e) => {
            debug!(target: "lateral_backend", outcome = ?e.outcome(), "Tool call missed");
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[derive(Clone)]
pub struct LateralService {
    state: Arc<AppState>,
    tool_router: ToolRouter<Self>,
}

impl LateralService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state, tool_router: Self::tool_router() }
    }
}

#[tool_handler]
impl ServerHandler for LateralService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Lateral thinking puzzles, solution techniques, creative prompts and brainstorming challenges. Puzzle answers stay hidden unless include_answer is set on lateral_get_puzzle or lateral_random_puzzle.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl LateralService {
    #[tool(
        name = "lateral_get_puzzle",
        description = "Retrieve a lateral thinking puzzle by id. Answer and explanation are hidden unless include_answer is true."
    )]
    pub async fn get_puzzle(
        &self,
        Parameters(req): Parameters<GetPuzzleRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(logic::get_puzzle(&self.state, &req.puzzle_id, req.include_answer, req.response_format)))
    }

    #[tool(
        name = "lateral_list_puzzles",
        description = "List puzzles, optionally filtered by category and difficulty. Answers are never included; use lateral_get_puzzle for those."
    )]
    pub async fn list_puzzles(
        &self,
        Parameters(req): Parameters<ListPuzzlesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(logic::list_puzzles(&self.state, req.category, req.difficulty, req.response_format)))
    }

    #[tool(
        name = "lateral_random_puzzle",
        description = "Draw a random puzzle, optionally from one difficulty. Same output as lateral_get_puzzle."
    )]
    pub async fn random_puzzle(
        &self,
        Parameters(req): Parameters<RandomPuzzleRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(logic::random_puzzle(&self.state, req.difficulty, req.include_answer, req.response_format)))
    }

    #[tool(
        name = "lateral_get_technique",
        description = "Explain one lateral thinking technique: when to use it, its steps and an example."
    )]
    pub async fn get_technique(
        &self,
        Parameters(req): Parameters<GetTechniqueRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(logic::get_technique(&self.state, &req.technique_name, req.response_format)))
    }

    #[tool(name = "lateral_list_techniques", description = "List every lateral thinking technique with its full details.")]
    pub async fn list_techniques(
        &self,
        Parameters(req): Parameters<ListTechniquesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(Ok(logic::list_techniques(&self.state, req.response_format))))
    }

    #[tool(
        name = "lateral_generate_prompt",
        description = "Generate a creative thinking prompt for a theme. Unknown themes get the default prompt."
    )]
    pub async fn generate_prompt(
        &self,
        Parameters(req): Parameters<GeneratePromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(Ok(logic::generate_prompt(&self.state, req.theme.as_deref(), req.response_format))))
    }

    #[tool(
        name = "lateral_brainstorming_challenge",
        description = "Generate a brainstorming challenge with constraints, success criteria and sample solutions."
    )]
    pub async fn generate_challenge(
        &self,
        Parameters(req): Parameters<GenerateChallengeRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tool_result(Ok(logic::generate_challenge(&self.state, &req.difficulty, req.response_format))))
    }
}

/// Serve MCP on stdin/stdout until the client disconnects.
pub async fn run_stdio(state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    info!(target: "lateral_backend", "Serving MCP tools on stdio");
    let server = LateralService::new(state).serve(stdio()).await?;
    server.waiting().await?;
    info!(target: "lateral_backend", "MCP session closed");
    Ok(())
}

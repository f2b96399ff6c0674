//! Loading runtime configuration from TOML, with environment overrides.
//!
//! Expected schema:
//!
//! ```toml
//! [server]
//! port = 3000
//! transport = "http"   # or "stdio"
//!
//! [render]
//! character_limit = 4000
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::governor::{notice_len, DEFAULT_CHARACTER_LIMIT};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("failed to read config file: {0}")]
  Io(#[from] std::io::Error),

  #[error("failed to parse TOML: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("validation error: {0}")]
  Validation(String),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
  Http,
  Stdio,
}

impl Transport {
  fn parse(s: &str) -> Option<Transport> {
    match s.trim().to_ascii_lowercase().as_str() {
      "http" => Some(Transport::Http),
      "stdio" => Some(Transport::Stdio),
      _ => None,
    }
  }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub server: ServerConfig,
  #[serde(default)]
  pub render: RenderConfig,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ServerConfig {
  #[serde(default)] pub port: Option<u16>,
  #[serde(default)] pub transport: Option<Transport>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RenderConfig {
  /// Character budget for human-readable output.
  #[serde(default = "default_character_limit")]
  pub character_limit: usize,
}

fn default_character_limit() -> usize { DEFAULT_CHARACTER_LIMIT }

impl Default for RenderConfig {
  fn default() -> Self { Self { character_limit: DEFAULT_CHARACTER_LIMIT } }
}

/// Effective settings after applying environment overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
  pub transport: Transport,
  pub port: u16,
  pub character_limit: usize,
}

impl AppConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    let cfg: AppConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
  }

  pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    Self::from_toml_str(&s)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.render.character_limit <= notice_len() {
      return Err(ConfigError::Validation(format!(
        "render.character_limit must exceed the truncation notice length ({}), got {}",
        notice_len(),
        self.render.character_limit
      )));
    }
    Ok(())
  }

  /// Transport: `TRANSPORT` wins, then a set `PORT` means http, then the file, then stdio.
  pub fn resolve(&self, env: impl Fn(&str) -> Option<String>) -> Settings {
    let env_port = env("PORT");
    let env_transport = env("TRANSPORT").and_then(|t| {
      let parsed = Transport::parse(&t);
      if parsed.is_none() {
        warn!(target: "lateral_backend", value = %t, "Ignoring unknown TRANSPORT");
      }
      parsed
    });

    let transport = env_transport
      .or_else(|| env_port.as_ref().map(|_| Transport::Http))
      .or(self.server.transport)
      .unwrap_or(Transport::Stdio);

    let port = env_port
      .and_then(|p| p.parse::<u16>().ok())
      .or(self.server.port)
      .unwrap_or(DEFAULT_PORT);

    Settings { transport, port, character_limit: self.render.character_limit }
  }
}

/// Load from CONFIG_PATH. On any IO/parse/validation error, log and fall back to defaults.
pub fn load_config_from_env() -> AppConfig {
  let Ok(path) = std::env::var("CONFIG_PATH") else {
    return AppConfig::default();
  };
  match AppConfig::from_file(Path::new(&path)) {
    Ok(cfg) => {
      info!(target: "lateral_backend", %path, "Loaded config (TOML)");
      cfg
    }
    Err(e) => {
      error!(target: "lateral_backend", %path, error = %e, "Failed to load config; using defaults");
      AppConfig::default()
    }
  }
}

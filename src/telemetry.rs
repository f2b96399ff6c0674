//! Tracing setup. Every event goes to stderr: on the stdio transport, stdout carries MCP frames.
//!
//! `LOG_LEVEL` takes `EnvFilter` directives. `LOG_FORMAT=json` emits one JSON object per event.

use tracing_subscriber::EnvFilter;

/// Query outcomes log under `lateral`, transports and startup under `lateral_backend`.
pub const DEFAULT_FILTER: &str = "info,lateral=debug,lateral_backend=debug,tower_http=info,axum=info,rmcp=warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `doctriage serve` command implementation.
//!
//! Wires the classify-dispatch-log pipeline from configuration and exposes
//! it through the HTTP gateway.

use std::sync::Arc;

use tracing::{info, warn};

use doctriage_agents::{DocumentRouter, EmailAgent, JsonAgent, PlainTextAgent};
use doctriage_anthropic::AnthropicClient;
use doctriage_config::{DoctriageConfig, TextAgentMode};
use doctriage_core::{CompletionProvider, DoctriageError};
use doctriage_gateway::{AuthConfig, GatewayState, HealthState, ServerConfig};
use doctriage_memory::RecordLog;

/// Builds the triage pipeline from configuration.
///
/// The plain-text agent is LLM-backed when `router.text_agent = "llm"` and
/// an API key is available (config or `ANTHROPIC_API_KEY`); otherwise it
/// falls back to the stub with a warning.
pub fn build_pipeline(
    config: &DoctriageConfig,
) -> Result<(Arc<DocumentRouter>, RecordLog), DoctriageError> {
    let text_agent = match config.router.text_agent {
        TextAgentMode::Llm => match resolve_api_key(config) {
            Some(api_key) => {
                let client = AnthropicClient::new(
                    api_key,
                    config.anthropic.api_version.clone(),
                    config.anthropic.model.clone(),
                )?;
                info!(model = %config.anthropic.model, "plain-text agent is LLM-backed");
                PlainTextAgent::with_provider(
                    Arc::new(client) as Arc<dyn CompletionProvider>,
                    config.anthropic.max_tokens,
                )
            }
            None => {
                warn!("router.text_agent = \"llm\" but no API key found, using stub");
                PlainTextAgent::stub()
            }
        },
        TextAgentMode::Stub => PlainTextAgent::stub(),
    };

    let log = RecordLog::new();
    let router = DocumentRouter::new(
        Arc::new(JsonAgent::new()),
        Arc::new(EmailAgent::new()),
        Arc::new(text_agent),
        log.clone(),
    )?;

    Ok((Arc::new(router), log))
}

/// Runs the `doctriage serve` command.
pub async fn run_serve(config: DoctriageConfig) -> Result<(), DoctriageError> {
    info!("starting doctriage serve");

    if config.server.bearer_token.is_none() {
        warn!("no server.bearer_token configured -- all /v1 requests will be rejected");
    }

    let (router, log) = build_pipeline(&config)?;

    let state = GatewayState {
        router,
        log,
        auth: AuthConfig {
            bearer_token: config.server.bearer_token.clone(),
        },
        health: HealthState {
            start_time: std::time::Instant::now(),
        },
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        bearer_token: config.server.bearer_token.clone(),
    };

    doctriage_gateway::start_server(&server_config, state).await
}

/// Resolves the Anthropic API key from config or environment.
fn resolve_api_key(config: &DoctriageConfig) -> Option<String> {
    config
        .anthropic
        .api_key
        .clone()
        .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
}

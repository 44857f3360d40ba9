// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent for brace-delimited JSON documents.

use async_trait::async_trait;

use doctriage_core::{AgentOutcome, DocFormat, DoctriageError, DocumentAgent, HealthStatus};

/// Parses JSON payloads and surfaces the structured value in the outcome.
///
/// The format heuristic only checks braces, so the payload may turn out
/// not to be valid JSON. The agent still produces an outcome in that case,
/// keeping the raw text and noting the parse error.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAgent;

impl JsonAgent {
    /// Creates a new JSON agent.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentAgent for JsonAgent {
    fn name(&self) -> &str {
        "json-agent"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn format(&self) -> DocFormat {
        DocFormat::Json
    }

    async fn handle(&self, input: &str) -> Result<AgentOutcome, DoctriageError> {
        match serde_json::from_str::<serde_json::Value>(input.trim()) {
            Ok(payload) => Ok(AgentOutcome::Json {
                payload,
                parse_error: None,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "brace-delimited payload is not valid JSON");
                Ok(AgentOutcome::Json {
                    payload: serde_json::Value::String(input.to_string()),
                    parse_error: Some(e.to_string()),
                })
            }
        }
    }

    async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
        Ok(HealthStatus::Healthy)
    }
}

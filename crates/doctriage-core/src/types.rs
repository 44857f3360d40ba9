// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Doctriage workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a classification record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generates a fresh random record ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Detected document format, which selects the handling agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocFormat {
    Json,
    Email,
    PlainText,
}

/// Business intent guessed from keyword matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Invoice,
    Complaint,
    Rfq,
    Regulation,
    Order,
    Support,
    Unknown,
}

/// Urgency level extracted by the email agent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Normal,
    High,
}

/// Health status reported by agent and provider health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Component is fully operational.
    Healthy,
    /// Component is operational but experiencing issues.
    Degraded(String),
    /// Component is not operational.
    Unhealthy(String),
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Degraded(reason) => write!(f, "degraded: {reason}"),
            Self::Unhealthy(reason) => write!(f, "unhealthy: {reason}"),
        }
    }
}

/// Structured result produced by a format agent.
///
/// Serializes with an `agent` tag so record consumers can tell which
/// handler produced the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "agent", rename_all = "snake_case")]
pub enum AgentOutcome {
    /// Produced by the JSON agent.
    Json {
        /// Parsed payload, or the raw text when parsing failed.
        payload: serde_json::Value,
        /// Set when the braces heuristic matched but the body was not valid JSON.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        parse_error: Option<String>,
    },
    /// Produced by the email agent.
    Email {
        sender: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        subject: Option<String>,
        urgency: Urgency,
    },
    /// Produced by the plain-text agent (stub acknowledgement or LLM reply).
    PlainText {
        reply: String,
        /// Model identifier when the reply came from an LLM provider.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        model: Option<String>,
    },
}

/// One entry in the shared classification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Record identifier.
    pub id: RecordId,
    /// Detected document format.
    pub format: DocFormat,
    /// Guessed business intent.
    pub intent: Intent,
    /// Outcome returned by the dispatched agent.
    pub outcome: AgentOutcome,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl ClassificationRecord {
    /// Builds a record with a fresh ID and the current UTC timestamp.
    pub fn new(format: DocFormat, intent: Intent, outcome: AgentOutcome) -> Self {
        Self {
            id: RecordId::new(),
            format,
            intent,
            outcome,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// --- Provider types ---

/// A single-shot completion request to an LLM provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt, if any.
    pub system: Option<String>,
    /// Document text handed to the model as the user turn.
    pub input: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A completion response from an LLM provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Provider-assigned response ID.
    pub id: String,
    /// Generated text.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Reason the generation stopped.
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: TokenUsage,
}

/// Token usage statistics from a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn doc_format_display_round_trips() {
        for format in [DocFormat::Json, DocFormat::Email, DocFormat::PlainText] {
            let s = format.to_string();
            assert_eq!(DocFormat::from_str(&s).unwrap(), format);
        }
    }

    #[test]
    fn intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::Rfq).unwrap();
        assert_eq!(json, "\"rfq\"");
        let parsed: Intent = serde_json::from_str("\"invoice\"").unwrap();
        assert_eq!(parsed, Intent::Invoice);
    }

    #[test]
    fn urgency_defaults_to_normal() {
        assert_eq!(Urgency::default(), Urgency::Normal);
    }

    #[test]
    fn outcome_serializes_with_agent_tag() {
        let outcome = AgentOutcome::Email {
            sender: "user@example.com".into(),
            subject: Some("Quote".into()),
            urgency: Urgency::High,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["agent"], "email");
        assert_eq!(json["sender"], "user@example.com");
        assert_eq!(json["urgency"], "high");
    }

    #[test]
    fn outcome_omits_empty_optionals() {
        let outcome = AgentOutcome::PlainText {
            reply: "ack".into(),
            model: None,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("model").is_none());
    }

    #[test]
    fn record_new_assigns_id_and_timestamp() {
        let record = ClassificationRecord::new(
            DocFormat::PlainText,
            Intent::Unknown,
            AgentOutcome::PlainText {
                reply: "ack".into(),
                model: None,
            },
        );
        assert!(!record.id.0.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok());
    }

    #[test]
    fn record_ids_are_unique() {
        assert_ne!(RecordId::new(), RecordId::new());
    }
}

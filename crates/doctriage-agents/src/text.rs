// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent for plain-text documents.
//!
//! Runs in one of two modes: a stub that returns a canned acknowledgement
//! (the CLI default), or an LLM mode that forwards the document to a
//! [`CompletionProvider`] and returns the model's reply (the service mode).

use std::sync::Arc;

use async_trait::async_trait;

use doctriage_core::types::CompletionRequest;
use doctriage_core::{
    AgentOutcome, CompletionProvider, DocFormat, DoctriageError, DocumentAgent, HealthStatus,
};

/// Reply used in stub mode.
const STUB_REPLY: &str = "plain text document received";

/// System prompt for LLM mode. Deliberately minimal; prompt engineering is
/// out of scope.
const SYSTEM_PROMPT: &str =
    "You are a document triage assistant. Summarize the document below in one or two sentences \
     and state what action, if any, the sender is requesting.";

/// Default token ceiling for LLM replies.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Handles documents that are neither JSON nor email-shaped.
pub struct PlainTextAgent {
    provider: Option<Arc<dyn CompletionProvider>>,
    max_tokens: u32,
}

impl PlainTextAgent {
    /// Creates a stub agent that returns a canned acknowledgement.
    pub fn stub() -> Self {
        Self {
            provider: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Creates an LLM-backed agent that forwards documents to `provider`.
    pub fn with_provider(provider: Arc<dyn CompletionProvider>, max_tokens: u32) -> Self {
        Self {
            provider: Some(provider),
            max_tokens,
        }
    }

    /// Returns true when an LLM provider is wired in.
    pub fn is_llm_backed(&self) -> bool {
        self.provider.is_some()
    }
}

impl std::fmt::Debug for PlainTextAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlainTextAgent")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[async_trait]
impl DocumentAgent for PlainTextAgent {
    fn name(&self) -> &str {
        "plain-text-agent"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn format(&self) -> DocFormat {
        DocFormat::PlainText
    }

    async fn handle(&self, input: &str) -> Result<AgentOutcome, DoctriageError> {
        let Some(provider) = &self.provider else {
            return Ok(AgentOutcome::PlainText {
                reply: STUB_REPLY.to_string(),
                model: None,
            });
        };

        let request = CompletionRequest {
            system: Some(SYSTEM_PROMPT.to_string()),
            input: input.to_string(),
            max_tokens: self.max_tokens,
        };
        let response = provider.complete(request).await?;
        tracing::debug!(
            provider = provider.name(),
            model = %response.model,
            output_tokens = response.usage.output_tokens,
            "plain-text agent got model reply"
        );

        Ok(AgentOutcome::PlainText {
            reply: response.content,
            model: Some(response.model),
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
        match &self.provider {
            Some(provider) => provider.health_check().await,
            None => Ok(HealthStatus::Healthy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctriage_core::types::{CompletionResponse, TokenUsage};

    struct FixedProvider(String);

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, DoctriageError> {
            assert!(request.system.is_some());
            Ok(CompletionResponse {
                id: "resp-1".into(),
                content: self.0.clone(),
                model: "test-model".into(),
                stop_reason: Some("end_turn".into()),
                usage: TokenUsage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
            })
        }

        async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
            Ok(HealthStatus::Healthy)
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, DoctriageError> {
            Err(DoctriageError::Provider {
                message: "api down".into(),
                source: None,
            })
        }

        async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
            Ok(HealthStatus::Unhealthy("api down".into()))
        }
    }

    #[tokio::test]
    async fn stub_mode_returns_canned_reply() {
        let agent = PlainTextAgent::stub();
        assert!(!agent.is_llm_backed());
        let outcome = agent.handle("some note").await.unwrap();
        assert_eq!(
            outcome,
            AgentOutcome::PlainText {
                reply: STUB_REPLY.into(),
                model: None,
            }
        );
    }

    #[tokio::test]
    async fn llm_mode_returns_model_reply() {
        let agent =
            PlainTextAgent::with_provider(Arc::new(FixedProvider("a summary".into())), 512);
        assert!(agent.is_llm_backed());
        let outcome = agent.handle("long document text").await.unwrap();
        assert_eq!(
            outcome,
            AgentOutcome::PlainText {
                reply: "a summary".into(),
                model: Some("test-model".into()),
            }
        );
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let agent = PlainTextAgent::with_provider(Arc::new(FailingProvider), 512);
        let err = agent.handle("text").await.unwrap_err();
        assert!(err.to_string().contains("api down"));
    }

    #[tokio::test]
    async fn health_reflects_provider() {
        let agent = PlainTextAgent::with_provider(Arc::new(FailingProvider), 512);
        assert!(matches!(
            agent.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));

        let stub = PlainTextAgent::stub();
        assert_eq!(stub.health_check().await.unwrap(), HealthStatus::Healthy);
    }
}

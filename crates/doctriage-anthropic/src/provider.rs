// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`CompletionProvider`] implementation over [`AnthropicClient`].

use async_trait::async_trait;

use doctriage_core::types::{CompletionRequest, CompletionResponse, TokenUsage};
use doctriage_core::{CompletionProvider, DoctriageError, HealthStatus};

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest};

#[async_trait]
impl CompletionProvider for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, DoctriageError> {
        let api_request = MessageRequest {
            model: self.default_model().to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: request.input,
            }],
            system: request.system,
            max_tokens: request.max_tokens,
            stream: false,
        };

        let response = self.complete_message(&api_request).await?;
        let content = response.text();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason: response.stop_reason,
            usage: TokenUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
        // No cheap unauthenticated ping exists; report healthy and let
        // completion calls surface real failures.
        Ok(HealthStatus::Healthy)
    }
}

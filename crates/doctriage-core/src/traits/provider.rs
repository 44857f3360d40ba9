// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for hosted LLM integrations.

use async_trait::async_trait;

use crate::error::DoctriageError;
use crate::types::{CompletionRequest, CompletionResponse, HealthStatus};

/// A single-shot completion backend.
///
/// The LLM-backed plain-text agent talks to the hosted model through this
/// seam; tests substitute a queue-backed mock.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full response.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, DoctriageError>;

    /// Performs a health check and returns the provider's current status.
    async fn health_check(&self) -> Result<HealthStatus, DoctriageError>;
}

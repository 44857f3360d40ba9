// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The base trait implemented by every format agent.

use async_trait::async_trait;

use crate::error::DoctriageError;
use crate::types::{AgentOutcome, DocFormat, HealthStatus};

/// A handler for one document format.
///
/// The router dispatches each classified document to the agent whose
/// [`DocFormat`] matches, and records the returned outcome.
#[async_trait]
pub trait DocumentAgent: Send + Sync + 'static {
    /// Returns the human-readable name of this agent.
    fn name(&self) -> &str;

    /// Returns the semantic version of this agent.
    fn version(&self) -> semver::Version;

    /// Returns the document format this agent handles.
    fn format(&self) -> DocFormat;

    /// Processes a document and produces a structured outcome.
    async fn handle(&self, input: &str) -> Result<AgentOutcome, DoctriageError>;

    /// Performs a health check and returns the agent's current status.
    async fn health_check(&self) -> Result<HealthStatus, DoctriageError>;
}

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the full triage pipeline with a mock completion
//! provider and a fresh record log. Provides `send_document()` to drive the
//! classify-dispatch-log pipeline in tests.

use std::sync::Arc;

use doctriage_agents::{DocumentRouter, EmailAgent, JsonAgent, PlainTextAgent};
use doctriage_core::{ClassificationRecord, CompletionProvider, DoctriageError};
use doctriage_memory::RecordLog;

use crate::mock_provider::MockProvider;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    responses: Vec<String>,
    llm_text_agent: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            responses: Vec::new(),
            llm_text_agent: false,
        }
    }

    /// Set mock provider responses and switch the text agent to LLM mode.
    pub fn with_mock_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self.llm_text_agent = true;
        self
    }

    /// Back the plain-text agent with the mock provider even with no
    /// queued responses (the provider falls back to "mock response").
    pub fn with_llm_text_agent(mut self) -> Self {
        self.llm_text_agent = true;
        self
    }

    /// Build the test harness, wiring agents, router, and log.
    pub fn build(self) -> Result<TestHarness, DoctriageError> {
        let mock_provider = Arc::new(if self.responses.is_empty() {
            MockProvider::new()
        } else {
            MockProvider::with_responses(self.responses)
        });

        let text_agent = if self.llm_text_agent {
            PlainTextAgent::with_provider(
                mock_provider.clone() as Arc<dyn CompletionProvider>,
                100,
            )
        } else {
            PlainTextAgent::stub()
        };

        let log = RecordLog::new();
        let router = DocumentRouter::new(
            Arc::new(JsonAgent::new()),
            Arc::new(EmailAgent::new()),
            Arc::new(text_agent),
            log.clone(),
        )?;

        Ok(TestHarness {
            mock_provider,
            router: Arc::new(router),
            log,
        })
    }
}

/// A complete test environment: three agents, router, and record log.
pub struct TestHarness {
    /// The mock completion provider backing the text agent in LLM mode.
    pub mock_provider: Arc<MockProvider>,
    /// The triage pipeline under test.
    pub router: Arc<DocumentRouter>,
    /// The shared record log (same handle the router appends to).
    pub log: RecordLog,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Create a harness with stub agents and an empty log.
    ///
    /// Panics only if router wiring is broken, which cannot happen with
    /// correctly slotted agents.
    pub fn new() -> Self {
        match Self::builder().build() {
            Ok(harness) => harness,
            Err(e) => panic!("test harness wiring failed: {e}"),
        }
    }

    /// Run a document through the full pipeline and return its record.
    ///
    /// The record is also appended to [`TestHarness::log`].
    pub async fn send_document(&self, text: &str) -> Result<ClassificationRecord, DoctriageError> {
        self.router.process(text).await
    }

    /// Add a response to the mock provider's queue.
    pub async fn add_provider_response(&self, text: String) {
        self.mock_provider.add_response(text).await;
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctriage_core::{AgentOutcome, DocFormat, Intent};

    #[tokio::test]
    async fn builder_creates_working_environment() {
        let harness = TestHarness::new();
        assert!(harness.log.is_empty().await);
    }

    #[tokio::test]
    async fn send_document_classifies_and_logs() {
        let harness = TestHarness::new();
        let record = harness
            .send_document("Please review the attached invoice for payment.")
            .await
            .unwrap();

        assert_eq!(record.format, DocFormat::PlainText);
        assert_eq!(record.intent, Intent::Invoice);
        assert_eq!(harness.log.len().await, 1);
    }

    #[tokio::test]
    async fn mock_responses_flow_through_text_agent() {
        let harness = TestHarness::builder()
            .with_mock_responses(vec!["routed to billing".to_string()])
            .build()
            .unwrap();

        let record = harness.send_document("a free-form note").await.unwrap();
        match record.outcome {
            AgentOutcome::PlainText { reply, .. } => assert_eq!(reply, "routed to billing"),
            other => panic!("expected PlainText outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn logs_are_independent_per_harness() {
        let h1 = TestHarness::new();
        let h2 = TestHarness::new();

        h1.send_document("note one").await.unwrap();
        assert_eq!(h1.log.len().await, 1);
        assert_eq!(h2.log.len().await, 0);
    }
}

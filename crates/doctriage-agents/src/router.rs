// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document routing: classify, dispatch to the format agent, log.

use std::sync::Arc;

use tracing::info;

use doctriage_classifier::DocumentClassifier;
use doctriage_core::{
    ClassificationRecord, DocFormat, DoctriageError, DocumentAgent, HealthStatus,
};
use doctriage_memory::RecordLog;

/// Orchestrates the triage pipeline.
///
/// [`classify`](DocumentRouter::classify) produces a record without touching
/// the log (callers that defer logging, like the gateway, use this);
/// [`process`](DocumentRouter::process) classifies and appends in one call.
pub struct DocumentRouter {
    classifier: DocumentClassifier,
    json: Arc<dyn DocumentAgent>,
    email: Arc<dyn DocumentAgent>,
    text: Arc<dyn DocumentAgent>,
    log: RecordLog,
}

impl DocumentRouter {
    /// Creates a router over the three format agents and a shared log.
    ///
    /// Agents are dispatched by [`DocFormat`]; each agent's `format()` must
    /// match the slot it is passed in.
    pub fn new(
        json: Arc<dyn DocumentAgent>,
        email: Arc<dyn DocumentAgent>,
        text: Arc<dyn DocumentAgent>,
        log: RecordLog,
    ) -> Result<Self, DoctriageError> {
        for (agent, expected) in [
            (&json, DocFormat::Json),
            (&email, DocFormat::Email),
            (&text, DocFormat::PlainText),
        ] {
            if agent.format() != expected {
                return Err(DoctriageError::Config(format!(
                    "agent `{}` handles {} but was registered for {}",
                    agent.name(),
                    agent.format(),
                    expected
                )));
            }
        }

        Ok(Self {
            classifier: DocumentClassifier::new(),
            json,
            email,
            text,
            log,
        })
    }

    /// Returns the shared record log handle.
    pub fn log(&self) -> &RecordLog {
        &self.log
    }

    /// Classifies a document and runs the matching agent.
    ///
    /// Does NOT append to the log.
    pub async fn classify(&self, input: &str) -> Result<ClassificationRecord, DoctriageError> {
        let class = self.classifier.classify(input);
        let agent = self.agent_for(class.format);
        let outcome = agent.handle(input).await?;

        let record = ClassificationRecord::new(class.format, class.intent, outcome);
        info!(
            id = %record.id,
            format = %record.format,
            intent = %record.intent,
            agent = agent.name(),
            "document routed"
        );
        Ok(record)
    }

    /// Classifies a document, runs the matching agent, and logs the record.
    pub async fn process(&self, input: &str) -> Result<ClassificationRecord, DoctriageError> {
        let record = self.classify(input).await?;
        self.log.append(record.clone()).await;
        Ok(record)
    }

    /// Aggregates agent health: the worst individual status wins.
    pub async fn health(&self) -> Result<HealthStatus, DoctriageError> {
        let mut status = HealthStatus::Healthy;
        for agent in [&self.json, &self.email, &self.text] {
            match agent.health_check().await? {
                HealthStatus::Healthy => {}
                HealthStatus::Degraded(reason) => {
                    if status == HealthStatus::Healthy {
                        status = HealthStatus::Degraded(format!("{}: {reason}", agent.name()));
                    }
                }
                HealthStatus::Unhealthy(reason) => {
                    return Ok(HealthStatus::Unhealthy(format!(
                        "{}: {reason}",
                        agent.name()
                    )));
                }
            }
        }
        Ok(status)
    }

    fn agent_for(&self, format: DocFormat) -> &Arc<dyn DocumentAgent> {
        match format {
            DocFormat::Json => &self.json,
            DocFormat::Email => &self.email,
            DocFormat::PlainText => &self.text,
        }
    }
}

impl std::fmt::Debug for DocumentRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRouter")
            .field("json", &self.json.name())
            .field("email", &self.email.name())
            .field("text", &self.text.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmailAgent, JsonAgent, PlainTextAgent};
    use doctriage_core::{AgentOutcome, Intent, Urgency};

    fn stub_router(log: RecordLog) -> DocumentRouter {
        DocumentRouter::new(
            Arc::new(JsonAgent::new()),
            Arc::new(EmailAgent::new()),
            Arc::new(PlainTextAgent::stub()),
            log,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn routes_email_to_email_agent() {
        let router = stub_router(RecordLog::new());
        let sample = "From: user@example.com\nSubject: Request for Quote\n\nHello, I would like to request a quote for 100 units of product X.";
        let record = router.process(sample).await.unwrap();

        assert_eq!(record.format, DocFormat::Email);
        assert_eq!(record.intent, Intent::Rfq);
        assert_eq!(
            record.outcome,
            AgentOutcome::Email {
                sender: "user@example.com".into(),
                subject: Some("Request for Quote".into()),
                urgency: Urgency::Normal,
            }
        );
    }

    #[tokio::test]
    async fn routes_json_to_json_agent() {
        let router = stub_router(RecordLog::new());
        let sample = r#"{"order_id": "12345", "amount": 2500, "status": "pending"}"#;
        let record = router.process(sample).await.unwrap();

        assert_eq!(record.format, DocFormat::Json);
        assert_eq!(record.intent, Intent::Order);
        match record.outcome {
            AgentOutcome::Json { payload, .. } => assert_eq!(payload["amount"], 2500),
            other => panic!("expected Json outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn routes_plain_text_to_text_agent() {
        let router = stub_router(RecordLog::new());
        let record = router
            .process("I have an issue with my recent payment invoice.")
            .await
            .unwrap();

        assert_eq!(record.format, DocFormat::PlainText);
        assert_eq!(record.intent, Intent::Invoice);
        assert!(matches!(record.outcome, AgentOutcome::PlainText { .. }));
    }

    #[tokio::test]
    async fn process_appends_to_log_classify_does_not() {
        let log = RecordLog::new();
        let router = stub_router(log.clone());

        router.classify("a note").await.unwrap();
        assert!(log.is_empty().await);

        let record = router.process("a note").await.unwrap();
        assert_eq!(log.len().await, 1);
        assert_eq!(log.get(&record.id).await, Some(record));
    }

    #[tokio::test]
    async fn log_preserves_processing_order() {
        let log = RecordLog::new();
        let router = stub_router(log.clone());

        router.process("first invoice payment").await.unwrap();
        router.process("second complaint issue").await.unwrap();

        let all = log.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].intent, Intent::Invoice);
        assert_eq!(all[1].intent, Intent::Complaint);
    }

    #[tokio::test]
    async fn mismatched_agent_slot_is_rejected() {
        let result = DocumentRouter::new(
            Arc::new(EmailAgent::new()), // wrong slot
            Arc::new(EmailAgent::new()),
            Arc::new(PlainTextAgent::stub()),
            RecordLog::new(),
        );
        assert!(matches!(result, Err(DoctriageError::Config(_))));
    }

    #[tokio::test]
    async fn stub_router_is_healthy() {
        let router = stub_router(RecordLog::new());
        assert_eq!(router.health().await.unwrap(), HealthStatus::Healthy);
    }
}

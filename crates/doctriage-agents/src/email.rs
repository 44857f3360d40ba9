// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent for email-shaped documents.
//!
//! Extracts sender, subject, and urgency from header lines and body
//! keywords. No full RFC 5322 parsing; the inputs here are pasted text,
//! not wire-format messages.

use async_trait::async_trait;

use doctriage_core::{
    AgentOutcome, DocFormat, DoctriageError, DocumentAgent, HealthStatus, Urgency,
};

/// Sender used when no `From:` header or address is found.
const UNKNOWN_SENDER: &str = "unknown";

/// Urgency indicators (contains, case-insensitive).
const URGENCY_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "critical", "emergency"];

/// Extracts sender, subject, and urgency from email-shaped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAgent;

impl EmailAgent {
    /// Creates a new email agent.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentAgent for EmailAgent {
    fn name(&self) -> &str {
        "email-agent"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn format(&self) -> DocFormat {
        DocFormat::Email
    }

    async fn handle(&self, input: &str) -> Result<AgentOutcome, DoctriageError> {
        Ok(AgentOutcome::Email {
            sender: extract_sender(input),
            subject: extract_subject(input),
            urgency: detect_urgency(input),
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, DoctriageError> {
        Ok(HealthStatus::Healthy)
    }
}

/// Pulls the sender address from a `From:` header line.
///
/// Accepts both bare addresses and `Name <address>` forms. Falls back to
/// the first token containing `@` anywhere in the text, then to "unknown".
fn extract_sender(input: &str) -> String {
    for line in input.lines() {
        let trimmed = line.trim();
        if let Some(rest) = strip_header(trimmed, "from:") {
            if let Some(addr) = find_address(rest) {
                return addr;
            }
        }
    }

    // No From: header; any address-looking token will do.
    find_address(input).unwrap_or_else(|| UNKNOWN_SENDER.to_string())
}

/// Pulls the subject from a `Subject:` header line, if present.
fn extract_subject(input: &str) -> Option<String> {
    for line in input.lines() {
        let trimmed = line.trim();
        if let Some(rest) = strip_header(trimmed, "subject:") {
            let subject = rest.trim();
            if !subject.is_empty() {
                return Some(subject.to_string());
            }
        }
    }
    None
}

/// Flags the message High urgency when the text contains an urgency keyword.
fn detect_urgency(input: &str) -> Urgency {
    let lower = input.to_lowercase();
    if URGENCY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Urgency::High
    } else {
        Urgency::Normal
    }
}

/// Case-insensitive header prefix strip: `strip_header("From: x", "from:")` -> `Some(" x")`.
fn strip_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let prefix = line.get(..header.len())?;
    if prefix.eq_ignore_ascii_case(header) {
        line.get(header.len()..)
    } else {
        None
    }
}

/// Finds the first whitespace-separated token containing `@`, trimming
/// angle brackets and trailing punctuation.
fn find_address(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| token.contains('@'))
        .map(|token| {
            token
                .trim_matches(|c: char| matches!(c, '<' | '>' | ',' | ';' | '"'))
                .to_string()
        })
        .filter(|addr| !addr.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "From: user@example.com\nSubject: Request for Quote\n\nHello, I would like to request a quote for 100 units of product X.";

    #[tokio::test]
    async fn extracts_sender_subject_and_urgency() {
        let agent = EmailAgent::new();
        let outcome = agent.handle(SAMPLE).await.unwrap();
        assert_eq!(
            outcome,
            AgentOutcome::Email {
                sender: "user@example.com".into(),
                subject: Some("Request for Quote".into()),
                urgency: Urgency::Normal,
            }
        );
    }

    #[tokio::test]
    async fn angle_bracket_sender() {
        let agent = EmailAgent::new();
        let text = "From: Jordan Smith <jordan@corp.example>\n\nHi.";
        let outcome = agent.handle(text).await.unwrap();
        match outcome {
            AgentOutcome::Email { sender, .. } => assert_eq!(sender, "jordan@corp.example"),
            other => panic!("expected Email outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_from_header_falls_back_to_body_address() {
        let agent = EmailAgent::new();
        let text = "Hello,\nplease reply to billing@example.com soon.";
        let outcome = agent.handle(text).await.unwrap();
        match outcome {
            AgentOutcome::Email { sender, subject, .. } => {
                assert_eq!(sender, "billing@example.com");
                assert!(subject.is_none());
            }
            other => panic!("expected Email outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_address_yields_unknown_sender() {
        // The router never sends such text here, but handle() must not panic.
        let agent = EmailAgent::new();
        let outcome = agent.handle("just\nsome lines").await.unwrap();
        match outcome {
            AgentOutcome::Email { sender, .. } => assert_eq!(sender, "unknown"),
            other => panic!("expected Email outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn urgency_keywords_raise_urgency() {
        let agent = EmailAgent::new();
        let text = "From: ops@example.com\nSubject: outage\n\nPlease respond ASAP.";
        let outcome = agent.handle(text).await.unwrap();
        match outcome {
            AgentOutcome::Email { urgency, .. } => assert_eq!(urgency, Urgency::High),
            other => panic!("expected Email outcome, got {other:?}"),
        }
    }

    #[test]
    fn header_match_is_case_insensitive() {
        assert_eq!(strip_header("FROM: a@b.c", "from:"), Some(" a@b.c"));
        assert!(strip_header("Forwarded:", "from:").is_none());
    }

    #[test]
    fn empty_subject_is_none() {
        assert!(extract_subject("Subject:   \nbody").is_none());
    }
}

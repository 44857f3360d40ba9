// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Doctriage document triage service.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Doctriage workspace. Format agents and
//! LLM providers implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DoctriageError;
pub use types::{
    AgentOutcome, ClassificationRecord, CompletionRequest, CompletionResponse, DocFormat,
    HealthStatus, Intent, RecordId, TokenUsage, Urgency,
};

pub use traits::{CompletionProvider, DocumentAgent};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctriage_error_has_all_variants() {
        let _config = DoctriageError::Config("test".into());
        let _classifier = DoctriageError::Classifier("test".into());
        let _agent = DoctriageError::Agent {
            message: "test".into(),
            source: None,
        };
        let _provider = DoctriageError::Provider {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _log = DoctriageError::Log("test".into());
        let _server = DoctriageError::Server {
            message: "test".into(),
            source: None,
        };
        let _timeout = DoctriageError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = DoctriageError::Internal("test".into());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = DoctriageError::Provider {
            message: "model not found".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: model not found");
    }

    #[test]
    fn trait_modules_are_exported() {
        // If either trait module is missing or fails to compile, this
        // test won't compile.
        fn _assert_agent<T: DocumentAgent>() {}
        fn _assert_provider<T: CompletionProvider>() {}
    }
}

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Doctriage document triage service.

use thiserror::Error;

/// The primary error type used across all Doctriage crates.
#[derive(Debug, Error)]
pub enum DoctriageError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Classification errors (malformed input that no heuristic could place).
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Agent errors (a format handler failed to produce an outcome).
    #[error("agent error: {message}")]
    Agent {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// LLM provider errors (API failure, token limits, model not found).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Record log errors.
    #[error("record log error: {0}")]
    Log(String),

    /// Server errors (bind failure, serve failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

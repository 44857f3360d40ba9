// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic document classification for the Doctriage pipeline.
//!
//! This crate provides:
//! - [`classify_format`]: structural format detection (JSON / Email / Plain Text)
//! - [`classify_intent`]: fixed-order keyword intent matching
//! - [`DocumentClassifier`]: both in one call, for the router
//!
//! All heuristics are zero-cost string checks. No network, no latency.

pub mod format;
pub mod intent;

pub use format::classify_format;
pub use intent::classify_intent;

use doctriage_core::{DocFormat, Intent};

/// Combined result of format and intent classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentClass {
    /// Detected format.
    pub format: DocFormat,
    /// Guessed intent.
    pub intent: Intent,
}

/// Classifies documents before routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentClassifier;

impl DocumentClassifier {
    /// Creates a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Runs format and intent classification on a document.
    pub fn classify(&self, input: &str) -> DocumentClass {
        let class = DocumentClass {
            format: classify_format(input),
            intent: classify_intent(input),
        };
        tracing::debug!(
            format = %class.format,
            intent = %class.intent,
            bytes = input.len(),
            "document classified"
        );
        class
    }
}

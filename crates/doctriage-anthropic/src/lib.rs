// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude completion provider for Doctriage.
//!
//! Provides [`AnthropicClient`], a non-streaming Messages API client that
//! implements the [`CompletionProvider`](doctriage_core::CompletionProvider)
//! trait backing the LLM-mode plain-text agent.

pub mod client;
pub mod provider;
pub mod types;

pub use client::AnthropicClient;
pub use types::{MessageRequest, MessageResponse};

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable Doctriage components.

pub mod agent;
pub mod provider;

pub use agent::DocumentAgent;
pub use provider::CompletionProvider;

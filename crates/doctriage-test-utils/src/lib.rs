// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Doctriage integration tests.
//!
//! Provides a mock completion provider and a test harness for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockProvider`] - Mock completion provider with pre-configured responses
//! - [`TestHarness`] - Fully wired triage pipeline over mock components

pub mod harness;
pub mod mock_provider;

pub use harness::TestHarness;
pub use mock_provider::MockProvider;

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared classification log for the Doctriage pipeline.

pub mod store;

pub use store::RecordLog;

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format agents and the document router for the Doctriage pipeline.
//!
//! This crate provides:
//! - [`JsonAgent`], [`EmailAgent`], [`PlainTextAgent`]: one handler per
//!   detected format
//! - [`DocumentRouter`]: classification + dispatch + shared-log append

pub mod email;
pub mod json;
pub mod router;
pub mod text;

pub use email::EmailAgent;
pub use json::JsonAgent;
pub use router::DocumentRouter;
pub use text::PlainTextAgent;

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Doctriage triage pipeline as a REST API.
//!
//! Routes:
//! - `GET /health` (public liveness probe)
//! - `POST /v1/classify` (bearer auth)
//! - `GET /v1/records` (bearer auth)
//! - `GET /v1/health` (bearer auth, aggregate agent health)

pub mod auth;
pub mod handlers;
pub mod server;

pub use auth::AuthConfig;
pub use server::{build_router, start_server, GatewayState, HealthState, ServerConfig};

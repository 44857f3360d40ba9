// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use doctriage_agents::DocumentRouter;
use doctriage_core::DoctriageError;
use doctriage_memory::RecordLog;
use tower_http::cors::CorsLayer;

use crate::auth::{auth_middleware, AuthConfig};
use crate::handlers;

/// Health state for unauthenticated health endpoints.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Classification and dispatch pipeline.
    pub router: Arc<DocumentRouter>,
    /// Shared record log appended to after each classification.
    pub log: RecordLog,
    /// Authentication configuration.
    pub auth: AuthConfig,
    /// Health state for unauthenticated endpoints.
    pub health: HealthState,
}

/// Gateway server configuration (mirrors ServerConfig from doctriage-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Bearer token for auth (None = all API requests rejected).
    pub bearer_token: Option<String>,
}

/// Build the axum router with all routes and middleware.
///
/// Routes:
/// - GET /health (public)
/// - POST /v1/classify (with auth)
/// - GET /v1/records (with auth)
/// - GET /v1/health (with auth)
pub fn build_router(state: GatewayState) -> Router {
    let auth_state = state.auth.clone();

    // Unauthenticated public route (health for systemd and load balancers).
    let public_routes = Router::new()
        .route("/health", get(handlers::get_public_health))
        .with_state(state.clone());

    // Routes requiring authentication.
    let api_routes = Router::new()
        .route("/v1/classify", post(handlers::post_classify))
        .route("/v1/records", get(handlers::get_records))
        .route("/v1/health", get(handlers::get_health))
        .route_layer(axum_middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), DoctriageError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| DoctriageError::Server {
                message: format!("failed to bind gateway to {addr}: {e}"),
                source: Some(Box::new(e)),
            })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| DoctriageError::Server {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

// SPDX-FileCopyrightText: 2026 Doctriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/classify, GET /v1/records, GET /v1/health.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use doctriage_core::ClassificationRecord;

use crate::server::GatewayState;

/// Default number of records returned by GET /v1/records.
const DEFAULT_RECORD_LIMIT: usize = 50;

/// Request body for POST /v1/classify.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Raw document text to triage.
    pub content: String,
    /// Optional caller-supplied identifier echoed back in the response.
    #[serde(default)]
    pub source_id: Option<String>,
}

/// Response body for POST /v1/classify.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// The classification record produced for this document.
    #[serde(flatten)]
    pub record: ClassificationRecord,
    /// Echo of the caller-supplied source identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// Query parameters for GET /v1/records.
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    /// Maximum number of records to return (newest first).
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response body for GET /v1/records.
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    /// Records, newest first.
    pub records: Vec<ClassificationRecord>,
    /// Total number of records in the log.
    pub total: usize,
}

/// Response body for health endpoints.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// POST /v1/classify
///
/// Classifies a document, runs the matching agent, and returns the record.
/// The log append happens in the background so the response is not held up
/// by log contention.
pub async fn post_classify(
    State(state): State<GatewayState>,
    Json(body): Json<ClassifyRequest>,
) -> Response {
    match state.router.classify(&body.content).await {
        Ok(record) => {
            let log = state.log.clone();
            let to_log = record.clone();
            tokio::spawn(async move {
                log.append(to_log).await;
            });

            (
                StatusCode::OK,
                Json(ClassifyResponse {
                    record,
                    source_id: body.source_id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "classification failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /v1/records
///
/// Returns recent classification records, newest first.
pub async fn get_records(
    State(state): State<GatewayState>,
    Query(query): Query<RecordsQuery>,
) -> Json<RecordsResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_RECORD_LIMIT);
    let total = state.log.len().await;
    let records = state.log.recent(limit).await;
    Json(RecordsResponse { records, total })
}

/// GET /health (public, unauthenticated)
///
/// Liveness probe for systemd and load balancers.
pub async fn get_public_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

/// GET /v1/health (authenticated)
///
/// Returns aggregate agent health alongside uptime.
pub async fn get_health(State(state): State<GatewayState>) -> Response {
    let status = match state.router.health().await {
        Ok(status) => status.to_string(),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.health.start_time.elapsed().as_secs(),
        }),
    )
        .into_response()
}

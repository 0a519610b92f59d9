//! API handlers
//!
//! All handlers return `Response` via [`ApiResponse::ok`] or [`ApiErrorResponse`].
//! Malformed JSON bodies are answered with the envelope's `BAD_REQUEST` shape
//! instead of axum's plain-text rejection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::analysis::analyze;
use crate::config::CalculatorConfig;
use crate::delivery::mailto_link;
use crate::submission::SubmissionCoordinator;
use crate::types::{ClinicInputs, Scenario, ScenarioProfile};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct ApiState {
    pub coordinator: Arc<SubmissionCoordinator>,
    pub config: Arc<CalculatorConfig>,
}

impl ApiState {
    pub fn new(coordinator: SubmissionCoordinator, config: CalculatorConfig) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Request / response types
// ============================================================================

/// Body of every calculator request. Missing fields take form defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorRequest {
    #[serde(default)]
    pub inputs: ClinicInputs,
    #[serde(default)]
    pub scenario: Scenario,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MailtoResponse {
    pub link: String,
}

fn parse_body(body: Result<Json<CalculatorRequest>, JsonRejection>) -> Result<CalculatorRequest, Response> {
    body.map(|Json(req)| req).map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected request body");
        ApiErrorResponse::bad_request(rejection.body_text())
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
pub async fn health() -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/v1/scenarios
pub async fn list_scenarios() -> Response {
    let profiles: Vec<ScenarioProfile> = Scenario::ALL.iter().map(|s| s.profile()).collect();
    ApiResponse::ok(profiles)
}

/// GET /api/v1/inputs/default
pub async fn default_inputs() -> Response {
    ApiResponse::ok(ClinicInputs::default())
}

/// POST /api/v1/project
///
/// Live recompute: no identity validation, any numbers accepted.
pub async fn project(body: Result<Json<CalculatorRequest>, JsonRejection>) -> Response {
    match parse_body(body) {
        Ok(req) => ApiResponse::ok(analyze(&req.inputs, req.scenario)),
        Err(resp) => resp,
    }
}

/// POST /api/v1/submit
pub async fn submit(
    State(state): State<ApiState>,
    body: Result<Json<CalculatorRequest>, JsonRejection>,
) -> Response {
    let req = match parse_body(body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    match state.coordinator.submit(&req.inputs, req.scenario).await {
        Ok(submission) => ApiResponse::ok(submission),
        Err(e) => ApiErrorResponse::validation_failed(e.field(), e.to_string()),
    }
}

/// POST /api/v1/mailto
pub async fn mailto(
    State(state): State<ApiState>,
    body: Result<Json<CalculatorRequest>, JsonRejection>,
) -> Response {
    match parse_body(body) {
        Ok(req) => {
            let analysis = analyze(&req.inputs, req.scenario);
            let link = mailto_link(&state.config.contact.mailto_recipient, &req.inputs, &analysis);
            ApiResponse::ok(MailtoResponse { link })
        }
        Err(resp) => resp,
    }
}

//! API route definitions
//!
//! - /api/v1/scenarios - the three improvement profiles
//! - /api/v1/inputs/default - form defaults
//! - /api/v1/project - live analysis for a set of inputs
//! - /api/v1/submit - validated submission with delivery side effects
//! - /api/v1/mailto - pre-filled contact link

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Create all v1 API routes
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/scenarios", get(handlers::list_scenarios))
        .route("/inputs/default", get(handlers::default_inputs))
        .route("/project", post(handlers::project))
        .route("/submit", post(handlers::submit))
        .route("/mailto", post(handlers::mailto))
        .with_state(state)
}

/// Health endpoint at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(handlers::health))
}

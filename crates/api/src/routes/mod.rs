//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::AppState;

pub mod events;
pub mod health;
pub mod ngos;
pub mod registrations;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(events::routes())
        .merge(ngos::routes())
        .merge(registrations::routes())
}

/// Generic 500 response; the cause is logged at the call site, never
/// surfaced to the client.
pub(crate) fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "An internal error occurred" })),
    )
        .into_response()
}

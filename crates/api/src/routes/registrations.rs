//! Registration admin routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use givehub_db::repositories::{RegistrationError, RegistrationRepository};

use crate::AppState;
use super::internal_error;

/// Creates the registrations router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/registrations", get(list_registrations))
        .route("/registrations/{registration_id}", delete(delete_registration))
}

/// GET /registrations - all registrations with their event's name.
async fn list_registrations(State(state): State<AppState>) -> impl IntoResponse {
    let repo = RegistrationRepository::new((*state.db).clone());

    match repo.list_all().await {
        Ok(registrations) => (StatusCode::OK, Json(registrations)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query registrations");
            internal_error()
        }
    }
}

/// DELETE `/registrations/{registration_id}` - delete a registration.
async fn delete_registration(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = RegistrationRepository::new((*state.db).clone());

    match repo.delete(registration_id).await {
        Ok(()) => {
            info!(registration_id = %registration_id, "Registration deleted");
            (StatusCode::OK, Json(json!({ "message": "success deleted" }))).into_response()
        }
        Err(RegistrationError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Registration not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete registration");
            internal_error()
        }
    }
}

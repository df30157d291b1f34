//! NGO management routes (admin surface).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use givehub_core::ngo::NgoInput;
use givehub_db::repositories::{NgoError, NgoRepository};

use crate::AppState;
use super::internal_error;

/// Creates the NGOs router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ngos", get(list_ngos))
        .route("/ngos", post(create_ngo))
        .route("/ngos/{ngo_id}", put(update_ngo))
        .route("/ngos/{ngo_id}", delete(delete_ngo))
}

/// GET /ngos - list all NGOs ordered by name.
async fn list_ngos(State(state): State<AppState>) -> impl IntoResponse {
    let repo = NgoRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(ngos) => (StatusCode::OK, Json(ngos)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query NGOs");
            internal_error()
        }
    }
}

/// POST /ngos - create an NGO.
async fn create_ngo(
    State(state): State<AppState>,
    Json(payload): Json<NgoInput>,
) -> impl IntoResponse {
    let repo = NgoRepository::new((*state.db).clone());

    match repo.create(payload).await {
        Ok(ngo) => {
            info!(ngo_id = %ngo.ngo_id, name = %ngo.ngo_name, "NGO created");
            (StatusCode::CREATED, Json(ngo)).into_response()
        }
        Err(NgoError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create NGO");
            internal_error()
        }
    }
}

/// PUT `/ngos/{ngo_id}` - replace an NGO's editable fields.
async fn update_ngo(
    State(state): State<AppState>,
    Path(ngo_id): Path<Uuid>,
    Json(payload): Json<NgoInput>,
) -> impl IntoResponse {
    let repo = NgoRepository::new((*state.db).clone());

    match repo.update(ngo_id, payload).await {
        Ok(ngo) => {
            info!(ngo_id = %ngo.ngo_id, "NGO updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(NgoError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "NGO not found" })),
        )
            .into_response(),
        Err(NgoError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update NGO");
            internal_error()
        }
    }
}

/// DELETE `/ngos/{ngo_id}` - delete an NGO, guarded by its events.
async fn delete_ngo(
    State(state): State<AppState>,
    Path(ngo_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = NgoRepository::new((*state.db).clone());

    match repo.delete(ngo_id).await {
        Ok(()) => {
            info!(ngo_id = %ngo_id, "NGO deleted");
            (StatusCode::OK, Json(json!({ "message": "success deleted" }))).into_response()
        }
        Err(e @ NgoError::HasEvents(_)) => {
            (StatusCode::CONFLICT, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(NgoError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "NGO not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete NGO");
            internal_error()
        }
    }
}

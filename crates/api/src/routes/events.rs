//! Event routes: public browse/search/register plus the admin surface.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use givehub_core::event::{CreateEventInput, UpdateEventInput, revenue_estimate};
use givehub_core::registration::RegisterInput;
use givehub_db::repositories::{
    EventDetail, EventError, EventRepository, EventSearchFilter, RegistrationError,
    RegistrationRepository,
};

use crate::AppState;
use super::internal_error;

/// Creates the events router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(home_events))
        .route("/events", post(create_event))
        .route("/events/admin", get(admin_events))
        .route("/events/categories", get(event_categories))
        .route("/events/search", post(search_events))
        .route("/events/{event_id}", get(event_detail))
        .route("/events/{event_id}", put(update_event))
        .route("/events/{event_id}", delete(delete_event))
        .route("/events/{event_id}/registrations", get(event_registrations))
        .route("/events/{event_id}/register", post(register_for_event))
}

/// Registration statistics attached to the event detail.
#[derive(Serialize)]
struct EventStatsBody {
    total: u64,
    paid: u64,
    pending: u64,
    free: u64,
    revenue_estimate: Decimal,
}

/// Event detail plus registration statistics.
#[derive(Serialize)]
struct EventDetailResponse {
    #[serde(flatten)]
    detail: EventDetail,
    stats: EventStatsBody,
}

/// GET /events - active events split into upcoming and past.
async fn home_events(State(state): State<AppState>) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.home(Utc::now()).await {
        Ok(split) => (
            StatusCode::OK,
            Json(json!({
                "upcoming": split.upcoming,
                "past": split.past
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query home events");
            internal_error()
        }
    }
}

/// GET /events/admin - all events regardless of status.
async fn admin_events(State(state): State<AppState>) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.list_admin().await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query admin events");
            internal_error()
        }
    }
}

/// GET /events/categories - distinct category labels.
async fn event_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.categories().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query categories");
            internal_error()
        }
    }
}

/// POST /events/search - filtered public search.
async fn search_events(
    State(state): State<AppState>,
    Json(filter): Json<EventSearchFilter>,
) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.search(&filter).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to search events");
            internal_error()
        }
    }
}

/// GET `/events/{event_id}` - event detail with NGO fields and statistics.
async fn event_detail(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    let event_repo = EventRepository::new((*state.db).clone());
    let registration_repo = RegistrationRepository::new((*state.db).clone());

    let detail = match event_repo.find_detail(event_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Event not found" })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to query event detail");
            return internal_error();
        }
    };

    let tally = match registration_repo.tally(event_id).await {
        Ok(tally) => tally,
        Err(e) => {
            error!(error = %e, "Failed to query registration statistics");
            return internal_error();
        }
    };

    let stats = EventStatsBody {
        total: tally.total,
        paid: tally.paid,
        pending: tally.pending,
        free: tally.free,
        revenue_estimate: revenue_estimate(detail.event.ticket_price, tally.paid),
    };

    (
        StatusCode::OK,
        Json(EventDetailResponse { detail, stats }),
    )
        .into_response()
}

/// GET `/events/{event_id}/registrations` - registrations for one event.
async fn event_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = RegistrationRepository::new((*state.db).clone());

    match repo.list_for_event(event_id).await {
        Ok(registrations) => (StatusCode::OK, Json(registrations)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to query event registrations");
            internal_error()
        }
    }
}

/// POST /events - create an event.
async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventInput>,
) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.create(payload).await {
        Ok(event) => {
            info!(event_id = %event.event_id, name = %event.name, "Event created");
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(EventError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(EventError::NgoNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "ngo_id does not reference an existing NGO" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create event");
            internal_error()
        }
    }
}

/// PUT `/events/{event_id}` - partial update of an event.
async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEventInput>,
) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.update(event_id, payload).await {
        Ok(event) => {
            info!(event_id = %event.event_id, "Event updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(EventError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Event not found" })),
        )
            .into_response(),
        Err(EventError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(EventError::NgoNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "ngo_id does not reference an existing NGO" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to update event");
            internal_error()
        }
    }
}

/// DELETE `/events/{event_id}` - delete an event, guarded by registrations.
async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = EventRepository::new((*state.db).clone());

    match repo.delete(event_id).await {
        Ok(()) => {
            info!(event_id = %event_id, "Event deleted");
            (StatusCode::OK, Json(json!({ "message": "success deleted" }))).into_response()
        }
        Err(e @ EventError::HasRegistrations(_)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(EventError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Event not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to delete event");
            internal_error()
        }
    }
}

/// POST `/events/{event_id}/register` - public registration, guarded against
/// duplicate emails.
async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<RegisterInput>,
) -> impl IntoResponse {
    let repo = RegistrationRepository::new((*state.db).clone());

    match repo.register(event_id, payload).await {
        Ok(registration) => {
            info!(
                event_id = %event_id,
                registration_id = %registration.registration_id,
                "Registration created"
            );
            (StatusCode::CREATED, Json(registration)).into_response()
        }
        Err(RegistrationError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(e @ RegistrationError::Duplicate) => {
            (StatusCode::CONFLICT, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(RegistrationError::EventNotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Event not found" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create registration");
            internal_error()
        }
    }
}

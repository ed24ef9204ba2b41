use crate::domain::model::{NewReminder, Reminder, ReminderPatch};
use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::handlers::resource::{self, JsonBody};
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/reminders",
    responses((status = 200, description = "All reminders", body = [Reminder]))
)]
pub async fn list_reminders_handler(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    resource::list::<Reminder>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/reminders/overdue",
    responses((status = 200, description = "Open reminders flagged overdue", body = [Reminder]))
)]
pub async fn overdue_reminders_handler(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    let store = state.store.read().await;
    Json(store.overdue_reminders())
}

/// Every open reminder not flagged overdue; the path keeps its historical name,
/// there is no month window.
#[utoipa::path(
    get,
    path = "/api/reminders/upcoming-monthly",
    responses((status = 200, description = "Open reminders not flagged overdue", body = [Reminder]))
)]
pub async fn upcoming_reminders_handler(State(state): State<AppState>) -> Json<Vec<Reminder>> {
    let store = state.store.read().await;
    Json(store.upcoming_reminders())
}

#[utoipa::path(
    get,
    path = "/api/reminders/{id}",
    params(("id" = u64, Path, description = "Reminder id")),
    responses(
        (status = 200, description = "Reminder", body = Reminder),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    )
)]
pub async fn get_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reminder>, ApiError> {
    resource::get::<Reminder>(&state, &id).await
}

#[utoipa::path(
    post,
    path = "/api/reminders",
    request_body = NewReminder,
    responses(
        (status = 201, description = "Reminder created", body = Reminder),
        (status = 400, description = "Invalid reminder data", body = ErrorResponse)
    )
)]
pub async fn create_reminder_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Reminder>), ApiError> {
    resource::create::<Reminder>(&state, body).await
}

#[utoipa::path(
    put,
    path = "/api/reminders/{id}",
    params(("id" = u64, Path, description = "Reminder id")),
    request_body = ReminderPatch,
    responses(
        (status = 200, description = "Reminder updated", body = Reminder),
        (status = 400, description = "Invalid reminder data", body = ErrorResponse),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    )
)]
pub async fn update_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Reminder>, ApiError> {
    resource::update::<Reminder>(&state, &id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/reminders/{id}",
    params(("id" = u64, Path, description = "Reminder id")),
    responses(
        (status = 204, description = "Reminder deleted"),
        (status = 404, description = "Reminder not found", body = ErrorResponse)
    )
)]
pub async fn delete_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete::<Reminder>(&state, &id).await
}

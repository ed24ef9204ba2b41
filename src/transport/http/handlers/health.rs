use crate::domain::model::{Client, Contact, Machine, Reminder};
use crate::transport::http::types::{AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up; includes record counts", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.read().await;
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            clients: store.len::<Client>(),
            contacts: store.len::<Contact>(),
            machines: store.len::<Machine>(),
            reminders: store.len::<Reminder>(),
        }),
    )
}

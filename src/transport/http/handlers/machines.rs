use crate::domain::model::{Machine, MachinePatch, NewMachine};
use crate::transport::http::handlers::common::{parse_id, ApiError};
use crate::transport::http::handlers::resource::{self, JsonBody};
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/machines",
    responses((status = 200, description = "All machines", body = [Machine]))
)]
pub async fn list_machines_handler(State(state): State<AppState>) -> Json<Vec<Machine>> {
    resource::list::<Machine>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}/machines",
    params(("id" = u64, Path, description = "Client id")),
    responses((status = 200, description = "Machines of the client", body = [Machine]))
)]
pub async fn list_client_machines_handler(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Json<Vec<Machine>> {
    let store = state.store.read().await;
    Json(
        parse_id(&client_id)
            .map(|id| store.list_by_client::<Machine>(id))
            .unwrap_or_default(),
    )
}

#[utoipa::path(
    get,
    path = "/api/machines/{id}",
    params(("id" = u64, Path, description = "Machine id")),
    responses(
        (status = 200, description = "Machine", body = Machine),
        (status = 404, description = "Machine not found", body = ErrorResponse)
    )
)]
pub async fn get_machine_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Machine>, ApiError> {
    resource::get::<Machine>(&state, &id).await
}

#[utoipa::path(
    post,
    path = "/api/machines",
    request_body = NewMachine,
    responses(
        (status = 201, description = "Machine created", body = Machine),
        (status = 400, description = "Invalid machine data", body = ErrorResponse)
    )
)]
pub async fn create_machine_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Machine>), ApiError> {
    resource::create::<Machine>(&state, body).await
}

#[utoipa::path(
    put,
    path = "/api/machines/{id}",
    params(("id" = u64, Path, description = "Machine id")),
    request_body = MachinePatch,
    responses(
        (status = 200, description = "Machine updated", body = Machine),
        (status = 400, description = "Invalid machine data", body = ErrorResponse),
        (status = 404, description = "Machine not found", body = ErrorResponse)
    )
)]
pub async fn update_machine_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Machine>, ApiError> {
    resource::update::<Machine>(&state, &id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/machines/{id}",
    params(("id" = u64, Path, description = "Machine id")),
    responses(
        (status = 204, description = "Machine deleted"),
        (status = 404, description = "Machine not found", body = ErrorResponse)
    )
)]
pub async fn delete_machine_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete::<Machine>(&state, &id).await
}

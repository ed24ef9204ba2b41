use crate::domain::model::{Client, ClientPatch, ClientWithDetails, NewClient};
use crate::transport::http::handlers::common::{parse_id, ApiError};
use crate::transport::http::handlers::resource::{self, JsonBody};
use crate::transport::http::types::{AppState, ClientListQuery, ErrorResponse};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/clients",
    params(ClientListQuery),
    responses(
        (status = 200, description = "Clients in insertion order, optionally filtered by search term", body = [Client])
    )
)]
pub async fn list_clients_handler(
    State(state): State<AppState>,
    Query(query): Query<ClientListQuery>,
) -> Json<Vec<Client>> {
    let store = state.store.read().await;
    match query.search.as_deref() {
        Some(term) => Json(store.search_clients(term)),
        None => Json(store.list::<Client>()),
    }
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(("id" = u64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client with its contacts and machines", body = ClientWithDetails),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn get_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClientWithDetails>, ApiError> {
    let store = state.store.read().await;
    parse_id(&id)
        .and_then(|id| store.client_with_details(id))
        .map(Json)
        .ok_or_else(ApiError::not_found::<Client>)
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = NewClient,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Invalid client data", body = ErrorResponse)
    )
)]
pub async fn create_client_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    resource::create::<Client>(&state, body).await
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(("id" = u64, Path, description = "Client id")),
    request_body = ClientPatch,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Invalid client data", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn update_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Client>, ApiError> {
    resource::update::<Client>(&state, &id, body).await
}

/// Contacts, machines and reminders of the client are left in place.
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(("id" = u64, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn delete_client_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete::<Client>(&state, &id).await
}

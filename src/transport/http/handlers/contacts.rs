use crate::domain::model::{Contact, ContactPatch, NewContact};
use crate::transport::http::handlers::common::{parse_id, ApiError};
use crate::transport::http::handlers::resource::{self, JsonBody};
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/contacts",
    responses((status = 200, description = "All contacts", body = [Contact]))
)]
pub async fn list_contacts_handler(State(state): State<AppState>) -> Json<Vec<Contact>> {
    resource::list::<Contact>(&state).await
}

/// No existence check on the client: unknown or malformed ids give an empty list.
#[utoipa::path(
    get,
    path = "/api/clients/{id}/contacts",
    params(("id" = u64, Path, description = "Client id")),
    responses((status = 200, description = "Contacts of the client", body = [Contact]))
)]
pub async fn list_client_contacts_handler(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Json<Vec<Contact>> {
    let store = state.store.read().await;
    Json(
        parse_id(&client_id)
            .map(|id| store.list_by_client::<Contact>(id))
            .unwrap_or_default(),
    )
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = u64, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn get_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    resource::get::<Contact>(&state, &id).await
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = NewContact,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Invalid contact data", body = ErrorResponse)
    )
)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    resource::create::<Contact>(&state, body).await
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = u64, Path, description = "Contact id")),
    request_body = ContactPatch,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 400, description = "Invalid contact data", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn update_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Contact>, ApiError> {
    resource::update::<Contact>(&state, &id, body).await
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = u64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    resource::delete::<Contact>(&state, &id).await
}

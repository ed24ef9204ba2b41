//! CRUD plumbing shared by the per-entity handlers: validate input, call the store,
//! map absence to 404.

use crate::app::entity_store::Stored;
use crate::domain::model::Record;
use crate::transport::http::handlers::common::{parse_id, ApiError};
use crate::transport::http::types::AppState;
use crate::transport::http::validation::{decode, Validate};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub type JsonBody = Result<Json<JsonValue>, JsonRejection>;

pub async fn list<T>(state: &AppState) -> Json<Vec<T>>
where
    T: Stored + Serialize,
{
    let store = state.store.read().await;
    Json(store.list::<T>())
}

pub async fn get<T>(state: &AppState, raw_id: &str) -> Result<Json<T>, ApiError>
where
    T: Stored + Serialize,
{
    let store = state.store.read().await;
    parse_id(raw_id)
        .and_then(|id| store.get::<T>(id))
        .map(Json)
        .ok_or_else(ApiError::not_found::<T>)
}

pub async fn create<T>(state: &AppState, body: JsonBody) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Stored + Serialize,
    T::Insert: Validate,
{
    let Json(body) = body.map_err(ApiError::rejected::<T>)?;
    let insert = decode::<T::Insert>(body).map_err(ApiError::invalid::<T>)?;

    let mut store = state.store.write().await;
    let row = store.create::<T>(insert);
    tracing::info!(kind = T::KIND, id = row.id(), "record created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// Body is validated before the id is looked up, so a bad body on an unknown id is a 400.
pub async fn update<T>(state: &AppState, raw_id: &str, body: JsonBody) -> Result<Json<T>, ApiError>
where
    T: Stored + Serialize,
    T::Patch: Validate,
{
    let Json(body) = body.map_err(ApiError::rejected::<T>)?;
    let patch = decode::<T::Patch>(body).map_err(ApiError::invalid::<T>)?;
    let id = parse_id(raw_id).ok_or_else(ApiError::not_found::<T>)?;

    let mut store = state.store.write().await;
    let row = store
        .update::<T>(id, patch)
        .ok_or_else(ApiError::not_found::<T>)?;
    tracing::info!(kind = T::KIND, id, "record updated");
    Ok(Json(row))
}

pub async fn delete<T>(state: &AppState, raw_id: &str) -> Result<StatusCode, ApiError>
where
    T: Stored,
{
    let id = parse_id(raw_id).ok_or_else(ApiError::not_found::<T>)?;

    let mut store = state.store.write().await;
    if !store.delete::<T>(id) {
        return Err(ApiError::not_found::<T>());
    }
    tracing::info!(kind = T::KIND, id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

use crate::app::entity_store::EntityStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::{IntoParams, ToSchema};

/// Shared router state. The store is created once at startup and injected here;
/// the lock serializes writes so every store call runs as one atomic step.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<EntityStore>>,
}

impl AppState {
    pub fn new(store: EntityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Field-level details, present on validation failures only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    /// Offending field in wire (camelCase) form, or `<body>` for whole-body problems.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub clients: usize,
    pub contacts: usize,
    pub machines: usize,
    pub reminders: usize,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientListQuery {
    /// Case-insensitive substring matched against client name and industry.
    #[serde(default)]
    pub search: Option<String>,
}

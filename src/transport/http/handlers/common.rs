use crate::domain::model::{EntityId, Record};
use crate::transport::http::types::{ErrorResponse, FieldError};
use crate::transport::http::validation::BODY_FIELD;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid {entity} data")]
    Validation {
        entity: String,
        errors: Vec<FieldError>,
    },
}

impl ApiError {
    pub fn not_found<T: Record>() -> Self {
        ApiError::NotFound(T::KIND)
    }

    pub fn invalid<T: Record>(errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            entity: T::KIND.to_lowercase(),
            errors,
        }
    }

    /// Malformed JSON, wrong content type and similar body-level failures.
    pub fn rejected<T: Record>(rejection: JsonRejection) -> Self {
        Self::invalid::<T>(vec![FieldError::new(BODY_FIELD, rejection.body_text())])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let errors = match self {
            ApiError::Validation { errors, .. } => Some(errors),
            ApiError::NotFound(_) => None,
        };
        if status.is_client_error() {
            tracing::debug!(%status, %message, "request rejected");
        }
        (status, Json(ErrorResponse { message, errors })).into_response()
    }
}

/// Path ids that are not positive integers behave like unknown ids.
pub fn parse_id(raw: &str) -> Option<EntityId> {
    raw.trim().parse::<EntityId>().ok().filter(|id| *id > 0)
}

/// Converts a handler panic into a generic 500 without leaking the panic payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            errors: None,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Client;

    #[test]
    fn parse_id_rejects_non_positive_and_garbage() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn error_messages_name_the_entity() {
        assert_eq!(ApiError::not_found::<Client>().to_string(), "Client not found");
        let invalid = ApiError::invalid::<Client>(vec![FieldError::new("name", "Required")]);
        assert_eq!(invalid.to_string(), "Invalid client data");
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn panic_response_is_generic() {
        let response = handle_panic(Box::new("secret detail".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

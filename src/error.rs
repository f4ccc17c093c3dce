use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    // Field-level failures from the derive-based checks
    #[error("Validation error: {0}")]
    Fields(#[from] validator::ValidationErrors),

    // Enumeration labels outside the allowed set
    #[error("Unknown {field}: {value:?}")]
    UnknownLabel { field: &'static str, value: String },

    // Pagination bounds
    #[error("Invalid pagination: page={page}, per_page={per_page}")]
    InvalidPagination { page: i64, per_page: i64 },
    #[error("Total cannot be negative: {0}")]
    NegativeTotal(i64),

    // Identifier parsing
    #[error("Invalid {field} identifier")]
    InvalidId {
        field: &'static str,
        #[source]
        source: uuid::Error,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("request rejected: {}", self);

        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use content::ErrorBody;
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a flat `{"error": "..."}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound => ENDPOINT_NOT_FOUND.to_string(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                INTERNAL_ERROR.to_string()
            }
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}

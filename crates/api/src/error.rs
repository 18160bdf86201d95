use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::StoreError;

use crate::response::MessageResponse;

/// Plain-text body returned for every failure other than not-found.
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Application-level error type for HTTP handlers.
///
/// Callers only ever see two outcomes: a 404 with `{ "msg": "<Entity> not
/// found" }`, or a 500 with a plain `Server Error` body. Details of the
/// latter are logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as the expected JSON shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Document not found");
                (StatusCode::NOT_FOUND, Json(MessageResponse::not_found(entity))).into_response()
            }
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::error!(
                    violations = ?errors.violations(),
                    "Validation failed: {errors}"
                );
                server_error()
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                server_error()
            }
            AppError::MalformedBody(msg) => {
                tracing::error!(error = %msg, "Malformed request body");
                server_error()
            }
        }
    }
}

fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
}

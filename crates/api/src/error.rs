use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use intake_core::error::CoreError;
use intake_db::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StorageError`] for persistence
/// faults. Every variant renders as a JSON body with a `message` key.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `intake_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A fault from the storage engine.
    #[error("Database error: {0}")]
    Storage(#[from] StorageError),

    /// A malformed request body or path.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error; the message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::Unauthenticated | CoreError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, json!({ "message": core.to_string() }))
                }
                CoreError::InvalidToken => {
                    (StatusCode::FORBIDDEN, json!({ "message": core.to_string() }))
                }
            },

            AppError::Storage(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Database error", "error": err.to_string() }),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

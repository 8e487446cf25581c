use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomdesk_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON for the expected shape.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    /// The query string could not be decoded.
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::Body(rejection) => internal(rejection.body_text()),
            AppError::Query(rejection) => internal(rejection.body_text()),
        };

        let body = match code {
            Some(code) => json!({ "error": message, "code": code }),
            None => json!({ "error": message }),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to its HTTP status, machine code and message.
fn classify_core_error(err: &CoreError) -> (StatusCode, Option<&'static str>, String) {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Some(err.code()), err.to_string())
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - A unique violation on `rooms.room_number` or `room_categories.code`
///   maps to the matching `DUPLICATE_*` 400. This catches two concurrent
///   writers that both passed the pre-write uniqueness check.
/// - Everything else maps to 500 with the driver message appended.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Option<&'static str>, String) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("rooms.room_number") {
                return classify_core_error(&CoreError::DuplicateRoomNumber);
            }
            if message.contains("room_categories.code") {
                return classify_core_error(&CoreError::DuplicateCode);
            }
        }
    }
    internal(err.to_string())
}

fn internal(detail: String) -> (StatusCode, Option<&'static str>, String) {
    tracing::error!(error = %detail, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
        format!("Internal server error: {detail}"),
    )
}

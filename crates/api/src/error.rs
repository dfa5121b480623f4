use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use movies_core::error::CoreError;
use movies_core::validation::{join_field_errors, FieldError};

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the service's error bodies:
/// 400 with an `errors` list, 404 with no body, 500 with an `error` string.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed input outside the body fields (path id, JSON syntax).
    #[error("Bad request: {}", join_field_errors(.0))]
    BadRequest(Vec<FieldError>),

    /// The path id was empty.
    #[error("Missing id")]
    MissingId,

    /// The request body was not declared as JSON.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(field: &'static str, message: impl Into<String>) -> Self {
        AppError::BadRequest(vec![FieldError::new(field, message)])
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(err) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            other => AppError::bad_request("body", other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::Validation(errors)) | AppError::BadRequest(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::fields(errors)),
            )
                .into_response(),

            AppError::Core(CoreError::NotFound { .. }) | AppError::MissingId => {
                StatusCode::NOT_FOUND.into_response()
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::message(persistence_cause(&err))),
                )
                    .into_response()
            }

            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse::message(msg)),
            )
                .into_response(),
        }
    }
}

/// Best-effort description of the underlying storage failure.
///
/// Database-reported errors use the driver's message; everything else uses
/// the sqlx error's display text.
fn persistence_cause(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

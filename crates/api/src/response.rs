//! Response body types shared by handlers and the error mapper.

use movies_core::validation::FieldError;
use movies_db::models::movie::Movie;
use serde::Serialize;
use utoipa::ToSchema;

/// `GET /movies` payload: `{ "movies": [...] }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MoviesResponse {
    pub movies: Vec<Movie>,
}

/// Error payload. Exactly one of the two fields is set; the other is omitted.
///
/// - `{"error": "..."}` for persistence failures
/// - `{"errors": [{"field": "message"}, ...]}` for rejected input
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Each entry maps one field name to its message.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            errors: None,
        }
    }

    pub fn fields(errors: Vec<FieldError>) -> Self {
        Self {
            error: None,
            errors: Some(errors),
        }
    }
}

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// GET /api-docs/openapi.json -- the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

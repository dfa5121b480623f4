pub mod docs;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (without middleware or state).
///
/// ```text
/// /api-docs/openapi.json   generated OpenAPI document
/// /movies[/]               list, create
/// /movies/{id}             get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(docs::router())
        .merge(movies::router())
}

//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes for the movie collection and individual movies.
///
/// ```text
/// POST   /movies, /movies/      -> create
/// GET    /movies, /movies/      -> list
/// GET    /movies/{id}           -> get_by_id
/// PUT    /movies/{id}           -> update
/// DELETE /movies/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route(
            "/movies/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}

//! Generated OpenAPI document for the `/movies` resource.

use movies_core::movie::MovieRequest;
use movies_db::models::movie::Movie;
use utoipa::OpenApi;

use crate::handlers::movies;
use crate::response::{ErrorResponse, MoviesResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        description = "Create, read, update and delete movie records."
    ),
    paths(
        movies::create,
        movies::list,
        movies::get_by_id,
        movies::update,
        movies::delete,
    ),
    components(schemas(MovieRequest, Movie, MoviesResponse, ErrorResponse)),
    tags((name = "movies", description = "Movie records"))
)]
pub struct ApiDoc;

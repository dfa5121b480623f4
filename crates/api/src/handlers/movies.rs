//! Handlers for the `/movies` resource.
//!
//! Every write runs in its own transaction: the handler begins it, performs
//! the lookup and the write on it, and commits before responding. Returning
//! early with an error drops the transaction, which rolls it back.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::error::CoreError;
use movies_core::movie::{validate_movie, MovieRequest};
use movies_core::types::DbId;
use movies_db::models::movie::Movie;
use movies_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, AppJson};
use crate::response::{ErrorResponse, MoviesResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id,
    })
}

/// POST /movies
///
/// Returns 201 with an empty body once the row is committed.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created"),
        (status = 400, description = "Invalid fields or rating", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<MovieRequest>,
) -> AppResult<StatusCode> {
    let fields = validate_movie(&input).map_err(CoreError::Validation)?;

    let mut tx = state.pool.begin().await?;
    let movie = MovieRepo::create(&mut *tx, &fields).await?;
    tx.commit().await?;

    tracing::info!(movie_id = movie.id, "Movie created");

    Ok(StatusCode::CREATED)
}

/// GET /movies
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "Every movie, ordered by id", body = MoviesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<MoviesResponse>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(MoviesResponse { movies }))
}

/// GET /movies/{id}
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "No movie with this id"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Movie>> {
    let id = parse_id(&raw_id)?;
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Checks run in order: id present, field presence, rating, id format,
/// existence. Returns 200 with an empty body.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated"),
        (status = 400, description = "Invalid fields, rating or id", body = ErrorResponse),
        (status = 404, description = "No movie with this id"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<MovieRequest>,
) -> AppResult<StatusCode> {
    if raw_id.trim().is_empty() {
        return Err(AppError::MissingId);
    }

    let fields = validate_movie(&input).map_err(CoreError::Validation)?;
    let id = parse_id(&raw_id)?;

    let mut tx = state.pool.begin().await?;

    if MovieRepo::find_by_id(&mut *tx, id).await?.is_none() {
        return Err(not_found(id));
    }

    MovieRepo::update(&mut *tx, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(StatusCode::OK)
}

/// DELETE /movies/{id}
///
/// Not idempotent: deleting an absent id is a 404.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie deleted"),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "No movie with this id"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id)?;

    let mut tx = state.pool.begin().await?;

    if MovieRepo::find_by_id(&mut *tx, id).await?.is_none() {
        return Err(not_found(id));
    }

    if !MovieRepo::delete(&mut *tx, id).await? {
        return Err(not_found(id));
    }
    tx.commit().await?;

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::OK)
}

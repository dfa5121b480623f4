//! Repository for the `movies` table.

use movies_core::movie::MovieFields;
use movies_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, rating";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its generated id.
    pub async fn create<'e, E>(executor: E, input: &MovieFields) -> Result<Movie, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO movies (title, category, rating)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.rating)
            .fetch_one(executor)
            .await
    }

    /// Find a movie by id.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Movie>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List every movie in id order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Movie>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(executor).await
    }

    /// Overwrite title, category and rating. The id is never changed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &MovieFields,
    ) -> Result<Option<Movie>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                category = $3,
                rating = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.rating)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete a movie. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Movie entity model.

use movies_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `movies` table. Serializes as the public
/// `{id, title, category, rating}` projection.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Movie {
    #[schema(example = 1)]
    pub id: DbId,
    pub title: String,
    pub category: String,
    #[schema(example = 4.5)]
    pub rating: f32,
}

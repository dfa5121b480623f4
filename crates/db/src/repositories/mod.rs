//! Repository layer.
//!
//! Repositories are zero-sized structs with async CRUD methods generic over
//! [`sqlx::PgExecutor`], so the same call runs against the pool for reads or
//! against an open transaction (`&mut *tx`) for writes.

pub mod movie_repo;

pub use movie_repo::MovieRepo;

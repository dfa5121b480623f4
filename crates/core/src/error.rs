use crate::types::DbId;
use crate::validation::{join_field_errors, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
}

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An update request that carries no fields at all.
    #[error("No update data provided")]
    EmptyUpdate,

    /// An update request whose `technologies` value is not an array.
    #[error("Technologies must be an array")]
    InvalidTechnologies,
}

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The entity exists but is not in a state that permits the operation,
    /// e.g. reviewing a design that already left `pending`.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Persisted data contradicts a domain invariant (an approved design
    /// with no approving review on record). Indicates a bug or data
    /// corruption, not caller misuse.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

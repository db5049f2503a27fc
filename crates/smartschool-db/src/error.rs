use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// A required field is missing or a declared constraint failed.
    #[error("{0}")]
    Validation(String),

    #[error("connection lock poisoned")]
    LockPoisoned,

    /// Store-level failure, including unique-key violations.
    #[error(transparent)]
    Persistence(#[from] rusqlite::Error),
}

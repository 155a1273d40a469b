use thiserror::Error;

use crate::errors::{PersistenceError, ValidationError};

/// Authentication and registration error types.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username and wrong password are deliberately collapsed into
    /// one variant with one message so callers cannot tell which failed.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("username already exists")]
    DuplicateUsername,

    /// Password hashing machinery failed; not caller-correctable.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

use thiserror::Error;

use crate::errors::{PersistenceError, ValidationError};

/// Errors from the privileged admin operations.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("operation requires the admin role")]
    NotAuthorized,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

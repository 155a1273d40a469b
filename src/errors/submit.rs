use thiserror::Error;

use crate::errors::{PersistenceError, ValidationError};

/// Failure surface of the review submission pipeline.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

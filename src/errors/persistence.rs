use thiserror::Error;

/// Storage-boundary failure: unreachable database or constraint violation.
///
/// Never retried automatically; callers surface the message and let the user
/// re-invoke the operation.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("constraint violation: {0}")]
    Constraint(String),
}

impl PersistenceError {
    pub fn operation(operation: &str, source: sea_orm::DbErr) -> Self {
        PersistenceError::Operation {
            operation: operation.to_string(),
            source,
        }
    }
}

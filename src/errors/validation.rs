use thiserror::Error;

/// Bad caller input, rejected before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("review text must not be empty")]
    EmptyReviewText,

    #[error("no product selected")]
    MissingProduct,

    #[error("score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(i32),

    #[error("product name must not be empty")]
    EmptyProductName,
}

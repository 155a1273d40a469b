// Errors layer - Error type definitions
pub mod admin;
pub mod auth;
pub mod model;
pub mod persistence;
pub mod submit;
pub mod validation;

// Re-exports for convenience
pub use admin::AdminError;
pub use auth::AuthError;
pub use model::ModelError;
pub use persistence::PersistenceError;
pub use submit::SubmitError;
pub use validation::ValidationError;

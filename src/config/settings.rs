use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Injected runtime configuration for the backend core.
///
/// The embedding shell either constructs this directly or uses `from_env`.
/// Nothing in the core reads the environment on its own.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    /// Directory holding `vectorizer.json` and `classifier.json`; `None`
    /// falls back to the model bundled with the crate.
    pub model_dir: Option<PathBuf>,
    pub password_pepper: String,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("PASSWORD_PEPPER environment variable must be set")]
    MissingPepper,
}

impl Settings {
    /// Load settings from DATABASE_URL, MODEL_DIR, and PASSWORD_PEPPER.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://reviews.db?mode=rwc".to_string());

        let model_dir = env::var("MODEL_DIR").ok().map(PathBuf::from);

        let password_pepper =
            env::var("PASSWORD_PEPPER").map_err(|_| SettingsError::MissingPepper)?;

        Ok(Self {
            database_url,
            model_dir,
            password_pepper,
        })
    }
}

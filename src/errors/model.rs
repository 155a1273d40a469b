use thiserror::Error;

/// Failure while loading the serialized vectorizer/classifier artifacts.
///
/// Only possible at startup; a loaded model is read-only and total over
/// string input.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent model artifacts: {0}")]
    Shape(String),
}

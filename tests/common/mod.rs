// Common test utilities for integration tests

use reviewsense_backend::config::Settings;
use reviewsense_backend::AppData;

/// Creates a fully initialized application over an in-memory database with
/// the bundled sentiment model.
pub async fn setup_app() -> AppData {
    let settings = Settings {
        database_url: "sqlite::memory:".to_string(),
        model_dir: None,
        password_pepper: "integration-test-pepper".to_string(),
    };

    AppData::init(&settings)
        .await
        .expect("application should initialize")
}

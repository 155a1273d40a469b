use std::sync::Arc;

use sea_orm::DatabaseConnection;
use thiserror::Error;

use crate::config::{self, Settings};
use crate::coordinators::{AdminCoordinator, AuthCoordinator, ReviewCoordinator};
use crate::errors::{ModelError, PersistenceError};
use crate::services::SentimentModel;
use crate::stores::{CredentialStore, ProductStore, ReviewStore};

/// Startup failure: database unreachable, migration failure, or bad model
/// artifacts.
#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Centralized application data following the main-owned stores pattern.
///
/// Everything with process-wide lifetime is created once here: the database
/// connection, the loaded sentiment model (read-only after load, never
/// reloaded mid-session), and the stores. The embedding shell holds one
/// `AppData` and builds coordinators from it.
pub struct AppData {
    pub db: DatabaseConnection,
    pub model: Arc<SentimentModel>,
    pub credential_store: Arc<CredentialStore>,
    pub product_store: Arc<ProductStore>,
    pub review_store: Arc<ReviewStore>,
}

impl AppData {
    /// Connect, migrate, load the model, and construct the stores.
    pub async fn init(settings: &Settings) -> Result<Self, InitError> {
        tracing::info!("initializing application data");

        let db = config::database::connect(&settings.database_url).await?;
        config::database::migrate(&db).await?;

        let model = match &settings.model_dir {
            Some(dir) => SentimentModel::load(
                dir.join("vectorizer.json"),
                dir.join("classifier.json"),
            )?,
            None => SentimentModel::bundled()?,
        };
        tracing::info!(labels = ?model.labels(), "sentiment model loaded");

        let credential_store = Arc::new(CredentialStore::new(
            db.clone(),
            settings.password_pepper.clone(),
        ));
        let product_store = Arc::new(ProductStore::new(db.clone()));
        let review_store = Arc::new(ReviewStore::new(db.clone()));

        Ok(Self {
            db,
            model: Arc::new(model),
            credential_store,
            product_store,
            review_store,
        })
    }

    pub fn auth_coordinator(&self) -> AuthCoordinator {
        AuthCoordinator::new(Arc::clone(&self.credential_store))
    }

    pub fn review_coordinator(&self) -> ReviewCoordinator {
        ReviewCoordinator::new(
            Arc::clone(&self.review_store),
            Arc::clone(&self.product_store),
            Arc::clone(&self.model),
        )
    }

    pub fn admin_coordinator(&self) -> AdminCoordinator {
        AdminCoordinator::new(
            Arc::clone(&self.product_store),
            Arc::clone(&self.review_store),
        )
    }
}

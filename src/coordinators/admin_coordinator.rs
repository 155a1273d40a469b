use std::sync::Arc;

use crate::errors::{AdminError, ValidationError};
use crate::stores::{ProductStore, ReviewStore, ReviewWithContext, SentimentCount};
use crate::types::Session;

/// Privileged operations: product management and the cross-user review view.
///
/// Every operation checks the session's role first; privilege comes from the
/// user's explicit admin flag, never from comparing ids.
pub struct AdminCoordinator {
    product_store: Arc<ProductStore>,
    review_store: Arc<ReviewStore>,
}

impl AdminCoordinator {
    pub fn new(product_store: Arc<ProductStore>, review_store: Arc<ReviewStore>) -> Self {
        Self {
            product_store,
            review_store,
        }
    }

    /// Add a product to the catalog.
    pub async fn add_product(&self, session: &Session, name: &str) -> Result<i32, AdminError> {
        self.require_admin(session)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyProductName.into());
        }

        let product_id = self.product_store.add(name).await?;
        tracing::info!(product_id, name, "product added");
        Ok(product_id)
    }

    /// All reviews across users, newest first, with author and product
    /// context.
    pub async fn all_reviews(
        &self,
        session: &Session,
    ) -> Result<Vec<ReviewWithContext>, AdminError> {
        self.require_admin(session)?;
        Ok(self.review_store.list_all().await?)
    }

    /// Review counts per sentiment label.
    pub async fn sentiment_distribution(
        &self,
        session: &Session,
    ) -> Result<Vec<SentimentCount>, AdminError> {
        self.require_admin(session)?;
        Ok(self.review_store.sentiment_distribution().await?)
    }

    fn require_admin(&self, session: &Session) -> Result<(), AdminError> {
        if session.is_admin() {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %session.user_id,
                "non-admin attempted a privileged operation"
            );
            Err(AdminError::NotAuthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup() -> AdminCoordinator {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        AdminCoordinator::new(
            Arc::new(ProductStore::new(db.clone())),
            Arc::new(ReviewStore::new(db)),
        )
    }

    fn admin_session() -> Session {
        Session::new("admin-id".to_string(), "admin".to_string(), true)
    }

    fn user_session() -> Session {
        Session::new("user-id".to_string(), "user".to_string(), false)
    }

    #[tokio::test]
    async fn non_admin_sessions_are_rejected() {
        let admin = setup().await;
        let session = user_session();

        assert!(matches!(
            admin.add_product(&session, "Grinder").await,
            Err(AdminError::NotAuthorized)
        ));
        assert!(matches!(
            admin.all_reviews(&session).await,
            Err(AdminError::NotAuthorized)
        ));
        assert!(matches!(
            admin.sentiment_distribution(&session).await,
            Err(AdminError::NotAuthorized)
        ));
    }

    #[tokio::test]
    async fn blank_product_name_is_rejected() {
        let admin = setup().await;

        let result = admin.add_product(&admin_session(), "   ").await;
        assert!(matches!(
            result,
            Err(AdminError::Validation(ValidationError::EmptyProductName))
        ));
    }

    #[tokio::test]
    async fn admin_can_add_products_and_view_reviews() {
        let admin = setup().await;
        let session = admin_session();

        let product_id = admin
            .add_product(&session, "Grinder")
            .await
            .expect("adding a product should succeed");
        assert!(product_id > 0);

        let reviews = admin
            .all_reviews(&session)
            .await
            .expect("listing should succeed");
        assert!(reviews.is_empty());
    }
}

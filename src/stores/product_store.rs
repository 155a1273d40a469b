use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::errors::PersistenceError;
use crate::types::db::product::{self, ActiveModel, Entity as Product};

/// ProductStore is the gateway for the products table; validation and
/// privilege checks live in the calling coordinator.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a product and return its assigned id.
    pub async fn add(&self, name: &str) -> Result<i32, PersistenceError> {
        let new_product = ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        let inserted = new_product.insert(&self.db).await.map_err(|e| {
            tracing::error!(name, error = %e, "failed to insert product");
            PersistenceError::operation("insert_product", e)
        })?;

        Ok(inserted.id)
    }

    /// All products, oldest first. Callers re-fetch on demand; repeated calls
    /// reflect the latest committed state.
    pub async fn list(&self) -> Result<Vec<product::Model>, PersistenceError> {
        Product::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to list products");
                PersistenceError::operation("list_products", e)
            })
    }
}

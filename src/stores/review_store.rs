use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::errors::PersistenceError;
use crate::types::db::{product, review, user};

/// In-memory review awaiting an assigned id and timestamp.
///
/// `sentiment` is always the classifier's output for this review's text; the
/// submission coordinator is the only writer and never accepts a label from
/// a client.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub user_id: String,
    pub product_id: i32,
    pub review_text: String,
    pub score: i32,
    pub sentiment: String,
}

/// A review joined with its author and product, for the privileged
/// all-reviews view.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ReviewWithContext {
    pub id: i64,
    pub review_text: String,
    pub score: i32,
    pub sentiment: String,
    pub date_created: i64,
    pub username: String,
    pub product_name: String,
}

/// Review count per sentiment label.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SentimentCount {
    pub sentiment: String,
    pub count: i64,
}

/// ReviewStore persists labeled reviews and serves the history queries.
pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist a draft, assigning its id and creation timestamp.
    ///
    /// Referential integrity is checked at write time: a draft referencing a
    /// missing user or product fails with `PersistenceError::Constraint` and
    /// nothing is written.
    pub async fn insert(&self, draft: ReviewDraft) -> Result<i64, PersistenceError> {
        let user_exists = user::Entity::find_by_id(draft.user_id.clone())
            .one(&self.db)
            .await
            .map_err(|e| PersistenceError::operation("check_review_user", e))?
            .is_some();
        if !user_exists {
            return Err(PersistenceError::Constraint(format!(
                "user {} does not exist",
                draft.user_id
            )));
        }

        let product_exists = product::Entity::find_by_id(draft.product_id)
            .one(&self.db)
            .await
            .map_err(|e| PersistenceError::operation("check_review_product", e))?
            .is_some();
        if !product_exists {
            return Err(PersistenceError::Constraint(format!(
                "product {} does not exist",
                draft.product_id
            )));
        }

        let new_review = review::ActiveModel {
            id: NotSet,
            user_id: Set(draft.user_id),
            product_id: Set(draft.product_id),
            review_text: Set(draft.review_text),
            score: Set(draft.score),
            sentiment: Set(draft.sentiment),
            date_created: Set(Utc::now().timestamp_millis()),
        };

        let inserted = new_review.insert(&self.db).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("FOREIGN KEY") {
                PersistenceError::Constraint(message)
            } else {
                tracing::error!(error = %e, "failed to insert review");
                PersistenceError::operation("insert_review", e)
            }
        })?;

        Ok(inserted.id)
    }

    /// One user's reviews, newest first. The optional row cap is always a
    /// bound query parameter, never formatted into the statement.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<review::Model>, PersistenceError> {
        review::Entity::find()
            .filter(review::Column::UserId.eq(user_id))
            .order_by_desc(review::Column::DateCreated)
            .order_by_desc(review::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "failed to list reviews for user");
                PersistenceError::operation("list_reviews_for_user", e)
            })
    }

    /// Every review with author and product context, newest first.
    ///
    /// Privileged view; the admin coordinator checks the session role before
    /// calling this.
    pub async fn list_all(&self) -> Result<Vec<ReviewWithContext>, PersistenceError> {
        review::Entity::find()
            .select_only()
            .column(review::Column::Id)
            .column(review::Column::ReviewText)
            .column(review::Column::Score)
            .column(review::Column::Sentiment)
            .column(review::Column::DateCreated)
            .column_as(user::Column::Username, "username")
            .column_as(product::Column::Name, "product_name")
            .join(JoinType::InnerJoin, review::Relation::User.def())
            .join(JoinType::InnerJoin, review::Relation::Product.def())
            .order_by_desc(review::Column::DateCreated)
            .order_by_desc(review::Column::Id)
            .into_model::<ReviewWithContext>()
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to list all reviews");
                PersistenceError::operation("list_all_reviews", e)
            })
    }

    /// Review counts grouped by sentiment label.
    pub async fn sentiment_distribution(&self) -> Result<Vec<SentimentCount>, PersistenceError> {
        review::Entity::find()
            .select_only()
            .column(review::Column::Sentiment)
            .column_as(review::Column::Id.count(), "count")
            .group_by(review::Column::Sentiment)
            .into_model::<SentimentCount>()
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to compute sentiment distribution");
                PersistenceError::operation("sentiment_distribution", e)
            })
    }
}

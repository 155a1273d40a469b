use std::sync::Arc;

use crate::errors::{PersistenceError, SubmitError, ValidationError};
use crate::services::{normalize, SentimentModel};
use crate::stores::{ProductStore, ReviewDraft, ReviewStore};
use crate::types::db::{product, review};
use crate::types::{Label, Session};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

/// The review submission pipeline: validate, normalize, classify, persist.
///
/// This is the only place classification and persistence are bound together.
/// There is no compensating step when the insert fails after classification —
/// classification is pure and its result is simply discarded.
pub struct ReviewCoordinator {
    review_store: Arc<ReviewStore>,
    product_store: Arc<ProductStore>,
    model: Arc<SentimentModel>,
}

impl ReviewCoordinator {
    pub fn new(
        review_store: Arc<ReviewStore>,
        product_store: Arc<ProductStore>,
        model: Arc<SentimentModel>,
    ) -> Self {
        Self {
            review_store,
            product_store,
            model,
        }
    }

    /// Submit one review and return the predicted sentiment.
    ///
    /// Validation failures happen before the classifier or the store is
    /// touched, so nothing is written and the caller can re-prompt. The raw
    /// text is persisted as submitted; only the classifier sees the
    /// normalized form.
    pub async fn submit_review(
        &self,
        session: &Session,
        product_id: Option<i32>,
        raw_text: &str,
        score: i32,
    ) -> Result<Label, SubmitError> {
        if raw_text.trim().is_empty() {
            return Err(ValidationError::EmptyReviewText.into());
        }
        let product_id = product_id.ok_or(ValidationError::MissingProduct)?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange(score).into());
        }

        let normalized = normalize(raw_text);
        let label = self.model.classify(&normalized);

        let review_id = self
            .review_store
            .insert(ReviewDraft {
                user_id: session.user_id.clone(),
                product_id,
                review_text: raw_text.to_string(),
                score,
                sentiment: label.as_str().to_string(),
            })
            .await?;

        tracing::info!(
            review_id,
            user_id = %session.user_id,
            product_id,
            sentiment = label.as_str(),
            "review submitted"
        );

        Ok(label)
    }

    /// The session user's own review history, newest first.
    pub async fn history(
        &self,
        session: &Session,
    ) -> Result<Vec<review::Model>, PersistenceError> {
        self.review_store
            .list_for_user(&session.user_id, None)
            .await
    }

    /// Products available for review; re-fetched on every call so the
    /// selection input reflects the latest committed state.
    pub async fn products(&self) -> Result<Vec<product::Model>, PersistenceError> {
        self.product_store.list().await
    }
}

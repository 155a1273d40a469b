use std::sync::Arc;

use crate::errors::AuthError;
use crate::stores::CredentialStore;
use crate::types::Session;

/// Coordinates registration and login.
///
/// Login returns a [`Session`] value; the embedding shell keeps at most one
/// and replaces it wholesale on the next successful login.
pub struct AuthCoordinator {
    credential_store: Arc<CredentialStore>,
}

impl AuthCoordinator {
    pub fn new(credential_store: Arc<CredentialStore>) -> Self {
        Self { credential_store }
    }

    /// Register a new user account.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let user_id = self.credential_store.add_user(username, password).await?;
        tracing::info!(username, user_id = %user_id, "user registered");
        Ok(())
    }

    /// Authenticate and open a session for the user.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let verified = self
            .credential_store
            .verify_credentials(username, password)
            .await?;

        tracing::info!(username = %verified.username, "login succeeded");
        Ok(Session::new(
            verified.id,
            verified.username,
            verified.is_admin,
        ))
    }
}

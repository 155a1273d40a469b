use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::{AuthError, PersistenceError, ValidationError};
use crate::types::db::user::{self, ActiveModel, Entity as User};

/// Identity established by a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub id: String,
    pub username: String,
    pub is_admin: bool,
}

impl From<user::Model> for VerifiedUser {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            username: u.username,
            is_admin: u.is_admin,
        }
    }
}

/// CredentialStore manages user accounts and credential verification.
///
/// Passwords are stored as Argon2id hashes with a deployment-wide pepper as
/// the secret parameter; plaintext never leaves this store.
pub struct CredentialStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self {
            db,
            password_pepper,
        }
    }

    /// Register a regular (non-admin) user.
    ///
    /// # Returns
    /// * `Ok(String)` - The generated user id
    /// * `Err(AuthError)` - `Validation` on empty username/password,
    ///   `DuplicateUsername` if the username is taken
    pub async fn add_user(&self, username: &str, password: &str) -> Result<String, AuthError> {
        self.insert_user(username, password, false).await
    }

    /// Create the designated admin account if it does not exist yet.
    ///
    /// Returns the existing user's id when the username is already taken, so
    /// bootstrap is safe to run on every startup.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let existing = self.find_by_username(username).await?;
        if let Some(user) = existing {
            tracing::debug!(username, "admin account already present, skipping bootstrap");
            return Ok(user.id);
        }

        let user_id = self.insert_user(username, password, true).await?;
        tracing::info!(username, "admin account created");
        Ok(user_id)
    }

    /// Verify a username/password pair and return the user's identity.
    ///
    /// Unknown username and wrong password both fail with
    /// `AuthError::InvalidCredentials`; the two cases are indistinguishable
    /// to the caller.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, AuthError> {
        let user = self
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|_| AuthError::InvalidCredentials)?;

        self.hasher()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(user.into())
    }

    async fn insert_user(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<String, AuthError> {
        if username.trim().is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }

        if self.find_by_username(username).await?.is_some() {
            return Err(AuthError::DuplicateUsername);
        }

        let user_id = Uuid::new_v4().to_string();

        let salt = SaltString::generate(&mut rand_core::OsRng);
        let password_hash = self
            .hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .to_string();

        let new_user = ActiveModel {
            id: Set(user_id.clone()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            is_admin: Set(is_admin),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // The pre-check above races with concurrent registration; the
            // unique index is the authority
            if e.to_string().contains("UNIQUE") {
                AuthError::DuplicateUsername
            } else {
                tracing::error!(username, error = %e, "failed to insert user");
                AuthError::Persistence(PersistenceError::operation("insert_user", e))
            }
        })?;

        Ok(user_id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, AuthError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(username, error = %e, "user lookup failed");
                AuthError::Persistence(PersistenceError::operation("find_user_by_username", e))
            })
    }

    /// Argon2id configured with the deployment pepper as secret parameter.
    fn hasher(&self) -> Result<Argon2<'_>, AuthError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| AuthError::Hashing(e.to_string()))
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("db", &"<connection>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_store() -> (DatabaseConnection, CredentialStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = CredentialStore::new(db.clone(), "test-pepper".to_string());
        (db, store)
    }

    #[tokio::test]
    async fn add_user_creates_verifiable_account() {
        let (_db, store) = setup_store().await;

        let user_id = store
            .add_user("alice", "pw123")
            .await
            .expect("registration should succeed");
        assert!(!user_id.is_empty());

        let verified = store
            .verify_credentials("alice", "pw123")
            .await
            .expect("login should succeed");
        assert_eq!(verified.id, user_id);
        assert_eq!(verified.username, "alice");
        assert!(!verified.is_admin);
    }

    #[tokio::test]
    async fn add_user_stores_argon2_hash_not_plaintext() {
        let (db, store) = setup_store().await;

        store
            .add_user("hashuser", "mysecretpassword")
            .await
            .expect("registration should succeed");

        let user = User::find()
            .filter(user::Column::Username.eq("hashuser"))
            .one(&db)
            .await
            .expect("query should succeed")
            .expect("user should exist");

        assert_ne!(user.password_hash, "mysecretpassword");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn add_user_rejects_empty_username_and_password() {
        let (_db, store) = setup_store().await;

        assert!(matches!(
            store.add_user("", "pw").await,
            Err(AuthError::Validation(ValidationError::EmptyUsername))
        ));
        assert!(matches!(
            store.add_user("   ", "pw").await,
            Err(AuthError::Validation(ValidationError::EmptyUsername))
        ));
        assert!(matches!(
            store.add_user("bob", "").await,
            Err(AuthError::Validation(ValidationError::EmptyPassword))
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_fails_and_keeps_original_hash() {
        let (db, store) = setup_store().await;

        store
            .add_user("duplicate", "first-password")
            .await
            .expect("first registration should succeed");

        let original = User::find()
            .filter(user::Column::Username.eq("duplicate"))
            .one(&db)
            .await
            .expect("query should succeed")
            .expect("user should exist");

        let second = store.add_user("duplicate", "second-password").await;
        assert!(matches!(second, Err(AuthError::DuplicateUsername)));

        let after = User::find()
            .filter(user::Column::Username.eq("duplicate"))
            .one(&db)
            .await
            .expect("query should succeed")
            .expect("user should still exist");
        assert_eq!(after.password_hash, original.password_hash);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (_db, store) = setup_store().await;

        store
            .add_user("carol", "correct-password")
            .await
            .expect("registration should succeed");

        let wrong_password = store.verify_credentials("carol", "wrong-password").await;
        let unknown_user = store.verify_credentials("nobody", "anything").await;

        let wrong_password = wrong_password.expect_err("wrong password must fail");
        let unknown_user = unknown_user.expect_err("unknown user must fail");

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn ensure_admin_creates_admin_once() {
        let (_db, store) = setup_store().await;

        let first = store
            .ensure_admin("admin", "admin-pw")
            .await
            .expect("bootstrap should succeed");
        let second = store
            .ensure_admin("admin", "different-pw")
            .await
            .expect("repeated bootstrap should succeed");
        assert_eq!(first, second);

        let verified = store
            .verify_credentials("admin", "admin-pw")
            .await
            .expect("admin login should succeed");
        assert!(verified.is_admin);
    }

    #[tokio::test]
    async fn verification_depends_on_pepper() {
        let (db, store) = setup_store().await;

        store
            .add_user("peppered", "password123")
            .await
            .expect("registration should succeed");

        let other_store = CredentialStore::new(db, "different-pepper".to_string());
        let result = other_store.verify_credentials("peppered", "password123").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn debug_does_not_expose_pepper() {
        let (_db, store) = setup_store().await;
        let debug_output = format!("{store:?}");
        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("test-pepper"));
    }
}

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::PersistenceError;

/// Connect to the database.
///
/// Does not run migrations; call [`migrate`] separately.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, PersistenceError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| PersistenceError::operation("connect_database", e))?;

    tracing::debug!(database_url, "connected to database");

    Ok(db)
}

/// Run all pending schema migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), PersistenceError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| PersistenceError::operation("run_migrations", e))?;

    tracing::debug!("database migrations completed");

    Ok(())
}

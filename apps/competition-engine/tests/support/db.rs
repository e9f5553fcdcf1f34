use competition_engine::{bootstrap_db, AppError, DbKind, DbProfile};
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory SQLite database private to one test.
pub async fn test_db() -> Result<DatabaseConnection, AppError> {
    bootstrap_db(DbKind::SqliteMemory, DbProfile::Test).await
}

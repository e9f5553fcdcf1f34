use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, sanitize_db_url, DbKind, DbProfile};
use crate::error::AppError;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_RETRY_INTERVAL_MS: u64 = 500;
const MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Open a connection pool for the given kind and profile.
///
/// Does NOT run migrations. In-memory SQLite is pinned to a single
/// long-lived connection; every new connection sees its own empty database.
pub async fn connect_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, profile)?;

    let mut opt = ConnectOptions::new(url.clone());
    opt.acquire_timeout(Duration::from_secs(5)).sqlx_logging(false);
    match kind {
        DbKind::SqliteMemory => {
            opt.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_CONN_LIFETIME)
                .max_lifetime(MEMORY_CONN_LIFETIME);
        }
        DbKind::SqliteFile => {
            opt.max_connections(1);
        }
        DbKind::Postgres => {
            opt.max_connections(10);
        }
    }

    info!(db_kind = ?kind, profile = ?profile, url = %sanitize_db_url(&url), "Connecting to database");

    if kind != DbKind::Postgres {
        return Ok(Database::connect(opt).await?);
    }

    let mut attempt = 1;
    loop {
        match Database::connect(opt.clone()).await {
            Ok(conn) => return Ok(conn),
            Err(e) if attempt < PG_CONNECT_ATTEMPTS => {
                warn!(
                    attempt,
                    max_attempts = PG_CONNECT_ATTEMPTS,
                    error = %e,
                    "Postgres connection failed, retrying"
                );
                tokio::time::sleep(Duration::from_millis(PG_RETRY_INTERVAL_MS)).await;
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind, profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind, profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

use std::env;
use std::path::Path;

use crate::error::AppError;

/// Which database engine a connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Private in-memory SQLite database (tests, dry runs)
    SqliteMemory,
}

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

impl std::str::FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" | "pg" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-file" => Ok(DbKind::SqliteFile),
            "memory" | "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "unknown database kind '{other}' (expected postgres | sqlite | memory)"
            ))),
        }
    }
}

impl std::str::FromStr for DbProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(DbProfile::Prod),
            "test" => Ok(DbProfile::Test),
            other => Err(AppError::config(format!(
                "unknown profile '{other}' (expected prod | test)"
            ))),
        }
    }
}

/// Builds a database URL from environment variables based on kind and profile
pub fn db_url(kind: DbKind, profile: DbProfile) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = host();
            let port = port();
            let db_name = db_name(profile)?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_path(profile)?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn sqlite_path(profile: DbProfile) -> Result<String, AppError> {
    let path = env::var("SQLITE_DB_PATH").unwrap_or_else(|_| match profile {
        DbProfile::Prod => "competition.db".to_string(),
        DbProfile::Test => "competition_test.db".to_string(),
    });

    if profile == DbProfile::Test {
        let stem = Path::new(&path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if !stem.ends_with("_test") {
            return Err(AppError::config(format!(
                "Test profile requires SQLite file stem to end with '_test', but got: '{path}'"
            )));
        }
    }
    Ok(path)
}

fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Mask the password of a connection URL for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth.rfind(':') {
        Some(colon) if auth[..colon].contains("://") => {
            format!("{}:***@{host}", &auth[..colon])
        }
        _ => url.to_string(),
    }
}

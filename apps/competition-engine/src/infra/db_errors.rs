//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and services map that to
//! `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the first table.column from SQLite "UNIQUE constraint failed: t.a, t.b" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..]
        .split_whitespace()
        .next()
        .map(|s| s.trim_end_matches([',', '"', '\'']))
}

fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "rounds.stage_id" => Some((
            ConflictKind::DuplicateRound,
            "Round already exists for this stage, bracket and number",
        )),
        "competition_stages.competition_id" => Some((
            ConflictKind::Other("DuplicateStageOrder".into()),
            "Stage order already used in this competition",
        )),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_rounds_stage_bracket_number") {
        return Some((
            ConflictKind::DuplicateRound,
            "Round already exists for this stage, bracket and number",
        ));
    }
    if error_msg.contains("ux_competition_stages_competition_order") {
        return Some((
            ConflictKind::Other("DuplicateStageOrder".into()),
            "Stage order already used in this competition",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), what.clone());
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::Other("FK_VIOLATION".into()),
            "Foreign key constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation(
            ValidationKind::Other("CHECK_VIOLATION".into()),
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

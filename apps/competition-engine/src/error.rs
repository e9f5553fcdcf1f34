use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Error returned by every engine entry point.
///
/// `Display` yields a message an operator can read directly; `code()` gives the
/// stable machine-readable classification.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Integrity error: {detail}")]
    Integrity { detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Database timeout: {detail}")]
    Timeout { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Integrity { .. } => ErrorCode::IntegrityError,
            AppError::Db { code, .. } => *code,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Timeout { .. } => ErrorCode::DbTimeout,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Integrity { detail }
            | AppError::Db { detail, .. }
            | AppError::DbUnavailable { detail }
            | AppError::Timeout { detail }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }

    /// True for failures of the storage layer rather than of the request.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            AppError::Db { .. } | AppError::DbUnavailable { .. } | AppError::Timeout { .. }
        )
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::NoParticipants => ErrorCode::NoParticipants,
                    ValidationKind::OddParticipantCount => ErrorCode::OddParticipantCount,
                    ValidationKind::FormatMismatch => ErrorCode::FormatMismatch,
                    ValidationKind::MatchesIncomplete => ErrorCode::MatchesIncomplete,
                    ValidationKind::Other(ref name) if name == "CHECK_VIOLATION" => {
                        ErrorCode::CheckViolation
                    }
                    ValidationKind::Other(ref name) if name == "FK_VIOLATION" => {
                        ErrorCode::FkViolation
                    }
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::Validation { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Competition => ErrorCode::CompetitionNotFound,
                    NotFoundKind::Stage => ErrorCode::StageNotFound,
                    NotFoundKind::PreviousStage => ErrorCode::NoPreviousStage,
                    NotFoundKind::Participants => ErrorCode::NoParticipants,
                    NotFoundKind::Round => ErrorCode::RoundNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::DuplicateRound => ErrorCode::DuplicateRound,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::Conflict { code, detail }
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DataCorruption => AppError::Integrity { detail },
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                InfraErrorKind::Timeout => AppError::Timeout { detail },
                InfraErrorKind::Other(_) => AppError::Db {
                    code: ErrorCode::DbError,
                    detail,
                },
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::from(e).into()
    }
}

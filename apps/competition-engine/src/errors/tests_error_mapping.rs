// Unit tests for error mapping - pure domain logic without database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_progression_validations() {
    let odd = DomainError::odd_participants(3, "winners bracket");
    let app: AppError = odd.into();
    assert_eq!(app.code(), ErrorCode::OddParticipantCount);
    assert_eq!(app.detail(), "expected even participants in winners bracket, got 3");

    let empty = DomainError::validation(ValidationKind::NoParticipants, "no participants in stage");
    let app: AppError = empty.into();
    assert_eq!(app.code().as_str(), "NO_PARTICIPANTS");

    let fmt = DomainError::validation(ValidationKind::FormatMismatch, "previous stage is not round robin");
    let app: AppError = fmt.into();
    assert_eq!(app.code(), ErrorCode::FormatMismatch);
}

#[test]
fn maps_not_found() {
    let prev = DomainError::not_found(NotFoundKind::PreviousStage, "no previous stage");
    let app: AppError = prev.into();
    assert_eq!(app.code(), ErrorCode::NoPreviousStage);
    assert!(matches!(app, AppError::NotFound { .. }));

    let roster = DomainError::not_found(NotFoundKind::Participants, "stage 7 has no participants");
    let app: AppError = roster.into();
    assert_eq!(app.code(), ErrorCode::NoParticipants);

    let stage = DomainError::not_found(NotFoundKind::Stage, "stage 9 not found");
    let app: AppError = stage.into();
    assert_eq!(app.code().as_str(), "STAGE_NOT_FOUND");
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::DuplicateRound, "round exists");
    let app: AppError = dup.into();
    assert_eq!(app.code(), ErrorCode::DuplicateRound);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_infra() {
    let corrupt = DomainError::malformed_entrant("participant 4 has neither user nor team");
    let app: AppError = corrupt.into();
    assert_eq!(app.code(), ErrorCode::IntegrityError);
    assert!(!app.is_persistence());

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert!(app.is_persistence());

    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert!(matches!(app, AppError::Timeout { .. }));

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::DbError);
}

#[test]
fn display_is_operator_readable() {
    let app: AppError = DomainError::odd_participants(5, "losers bracket").into();
    assert_eq!(
        app.to_string(),
        "Validation error: expected even participants in losers bracket, got 5"
    );
}

//! Error codes for the competition engine.
//!
//! This module defines all error codes surfaced to callers.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes for the competition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Progression rules
    /// Stage (or previous round) has no entrants to pair
    NoParticipants,
    /// Pairing requires an even entrant count
    OddParticipantCount,
    /// No stage precedes the target stage
    NoPreviousStage,
    /// Stage format does not fit the operation
    FormatMismatch,
    /// Stage still has matches without a recorded result
    MatchesIncomplete,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Competition not found
    CompetitionNotFound,
    /// Stage not found
    StageNotFound,
    /// Round not found
    RoundNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Round already generated for this (stage, bracket, number)
    DuplicateRound,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Persistence
    /// Stored entrant violates the user-xor-team invariant
    IntegrityError,
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Check constraint violation
    CheckViolation,
    /// Foreign key constraint violation
    FkViolation,

    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::OddParticipantCount => "ODD_PARTICIPANT_COUNT",
            Self::NoPreviousStage => "NO_PREVIOUS_STAGE",
            Self::FormatMismatch => "FORMAT_MISMATCH",
            Self::MatchesIncomplete => "MATCHES_INCOMPLETE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::CompetitionNotFound => "COMPETITION_NOT_FOUND",
            Self::StageNotFound => "STAGE_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateRound => "DUPLICATE_ROUND",
            Self::Conflict => "CONFLICT",
            Self::IntegrityError => "INTEGRITY_ERROR",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

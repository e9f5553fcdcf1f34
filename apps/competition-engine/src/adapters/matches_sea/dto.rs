//! DTOs for matches_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a new match.
#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub round_id: i64,
    pub scheduled_at: OffsetDateTime,
}

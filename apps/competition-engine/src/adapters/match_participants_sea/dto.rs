//! DTOs for match_participants_sea adapter.

/// DTO for seating an entrant in a new match (no result yet).
#[derive(Debug, Clone)]
pub struct MatchParticipantCreate {
    pub match_id: i64,
    pub user_id: Option<i64>,
    pub team_id: Option<i64>,
}

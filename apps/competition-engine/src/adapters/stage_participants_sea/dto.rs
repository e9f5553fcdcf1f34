//! DTOs for stage_participants_sea adapter.

/// DTO for adding an entrant to a stage roster.
#[derive(Debug, Clone)]
pub struct StageParticipantCreate {
    pub stage_id: i64,
    pub user_id: Option<i64>,
    pub team_id: Option<i64>,
}

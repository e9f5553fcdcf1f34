//! DTOs for rounds_sea adapter.

use crate::entities::rounds::DbBracket;

/// DTO for creating a new round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub stage_id: i64,
    pub round_number: i32,
    pub bracket: DbBracket,
}

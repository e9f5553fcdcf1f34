//! DTOs for competitions_sea adapter.

use crate::entities::competitions::CompetitionStatus;

#[derive(Debug, Clone)]
pub struct CompetitionUpdateStatus {
    pub competition_id: i64,
    pub status: CompetitionStatus,
}

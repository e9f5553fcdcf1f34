//! Stage roster repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::stage_participants_sea as participants_adapter;
use crate::domain::Entrant;
use crate::entities::stage_participants;
use crate::errors::domain::DomainError;

/// A roster row of a stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageParticipant {
    pub id: i64,
    pub stage_id: i64,
    pub entrant: Entrant,
}

/// Roster rows of a stage in insertion order
pub async fn list_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<StageParticipant>, DomainError> {
    let rows = participants_adapter::find_all_by_stage(conn, stage_id).await?;
    rows.into_iter().map(StageParticipant::try_from).collect()
}

/// Entrants of a stage in insertion order
pub async fn list_entrants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<Entrant>, DomainError> {
    let roster = list_roster(conn, stage_id).await?;
    Ok(roster.into_iter().map(|p| p.entrant).collect())
}

pub async fn add_entrant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    entrant: Entrant,
) -> Result<StageParticipant, DomainError> {
    let (user_id, team_id) = entrant.columns();
    let dto = participants_adapter::StageParticipantCreate {
        stage_id,
        user_id,
        team_id,
    };
    let row = participants_adapter::create_participant(conn, dto).await?;
    StageParticipant::try_from(row)
}

impl TryFrom<stage_participants::Model> for StageParticipant {
    type Error = DomainError;

    fn try_from(model: stage_participants::Model) -> Result<Self, Self::Error> {
        let entrant = Entrant::try_from_columns(
            model.user_id,
            model.team_id,
            &format!("stage participant {}", model.id),
        )?;
        Ok(Self {
            id: model.id,
            stage_id: model.stage_id,
            entrant,
        })
    }
}

//! Round repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::domain::Bracket;
use crate::entities::rounds;
use crate::errors::domain::DomainError;

/// Round domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    pub id: i64,
    pub stage_id: i64,
    pub round_number: i32,
    pub bracket: Bracket,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// All rounds of a stage in creation order
pub async fn list_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::find_all_by_stage(conn, stage_id).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

/// Rounds of one bracket ordered by round number
pub async fn list_by_bracket<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
) -> Result<Vec<Round>, DomainError> {
    let rounds = rounds_adapter::find_all_by_stage_and_bracket(conn, stage_id, bracket.into()).await?;
    Ok(rounds.into_iter().map(Round::from).collect())
}

/// Highest round number of a stage; `None` bracket means any bracket
pub async fn max_round_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Option<Bracket>,
) -> Result<Option<i32>, DomainError> {
    let round = rounds_adapter::find_highest_numbered(conn, stage_id, bracket.map(Into::into)).await?;
    Ok(round.map(|r| r.round_number))
}

/// Round number the next round of `bracket` takes (1 if none exist)
pub async fn next_round_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Option<Bracket>,
) -> Result<i32, DomainError> {
    Ok(max_round_number(conn, stage_id, bracket).await?.unwrap_or(0) + 1)
}

/// Most recently created round of a stage
pub async fn latest_created<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_latest_created(conn, stage_id).await?;
    Ok(round.map(Round::from))
}

pub async fn find_by_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
    round_number: i32,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_by_number(conn, stage_id, bracket.into(), round_number).await?;
    Ok(round.map(Round::from))
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
    round_number: i32,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundCreate {
        stage_id,
        round_number,
        bracket: bracket.into(),
    };
    let round = rounds_adapter::create_round(conn, dto).await?;
    Ok(Round::from(round))
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Self {
            id: model.id,
            stage_id: model.stage_id,
            round_number: model.round_number,
            bracket: model.bracket.into(),
            created_at: model.created_at,
        }
    }
}

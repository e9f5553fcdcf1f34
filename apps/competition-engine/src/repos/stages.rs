//! Stage repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::stages_sea as stages_adapter;
use crate::domain::StageFormat;
use crate::entities::competition_stages;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Stage domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub id: i64,
    pub competition_id: i64,
    pub name: String,
    pub stage_order: i32,
    pub format: StageFormat,
    pub participants_at_start: i32,
    pub participants_at_end: i32,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Option<Stage>, DomainError> {
    let stage = stages_adapter::find_by_id(conn, stage_id).await?;
    Ok(stage.map(Stage::from))
}

/// Load a stage or fail with `NotFound(Stage)`
pub async fn require_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Stage, DomainError> {
    find_by_id(conn, stage_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Stage, format!("stage {stage_id} not found")))
}

/// The stage immediately before `stage` in its competition
pub async fn find_previous<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage: &Stage,
) -> Result<Option<Stage>, DomainError> {
    let prev =
        stages_adapter::find_by_competition_and_order(conn, stage.competition_id, stage.stage_order - 1)
            .await?;
    Ok(prev.map(Stage::from))
}

/// The stage immediately after `stage` in its competition
pub async fn find_next<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage: &Stage,
) -> Result<Option<Stage>, DomainError> {
    let next =
        stages_adapter::find_by_competition_and_order(conn, stage.competition_id, stage.stage_order + 1)
            .await?;
    Ok(next.map(Stage::from))
}

/// All stages of a competition ordered by stage_order
pub async fn list_by_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Vec<Stage>, DomainError> {
    let stages = stages_adapter::find_all_by_competition(conn, competition_id).await?;
    Ok(stages.into_iter().map(Stage::from).collect())
}

impl From<competition_stages::Model> for Stage {
    fn from(model: competition_stages::Model) -> Self {
        Self {
            id: model.id,
            competition_id: model.competition_id,
            name: model.stage_name,
            stage_order: model.stage_order,
            format: model.format.into(),
            participants_at_start: model.participants_at_start,
            participants_at_end: model.participants_at_end,
        }
    }
}

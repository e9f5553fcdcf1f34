//! SeaORM adapter for stage rosters.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::stage_participants;

pub mod dto;

pub use dto::StageParticipantCreate;

/// Roster rows of a stage in insertion order
pub async fn find_all_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<stage_participants::Model>, sea_orm::DbErr> {
    stage_participants::Entity::find()
        .filter(stage_participants::Column::StageId.eq(stage_id))
        .order_by_asc(stage_participants::Column::Id)
        .all(conn)
        .await
}

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StageParticipantCreate,
) -> Result<stage_participants::Model, sea_orm::DbErr> {
    let row = stage_participants::ActiveModel {
        id: sea_orm::NotSet,
        stage_id: Set(dto.stage_id),
        user_id: Set(dto.user_id),
        team_id: Set(dto.team_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    row.insert(conn).await
}

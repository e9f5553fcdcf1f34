//! SeaORM adapter for competitions.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::entities::competitions;

pub mod dto;

pub use dto::CompetitionUpdateStatus;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<competitions::Model>, sea_orm::DbErr> {
    competitions::Entity::find_by_id(competition_id).one(conn).await
}

/// Set the lifecycle status and bump `updated_at`
pub async fn update_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompetitionUpdateStatus,
) -> Result<competitions::Model, sea_orm::DbErr> {
    let competition = find_by_id(conn, dto.competition_id)
        .await?
        .ok_or_else(|| {
            sea_orm::DbErr::RecordNotFound(format!("competition {}", dto.competition_id))
        })?;

    let mut competition: competitions::ActiveModel = competition.into();
    competition.status = Set(dto.status);
    competition.updated_at = Set(time::OffsetDateTime::now_utc());
    competition.update(conn).await
}

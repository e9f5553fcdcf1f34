//! SeaORM adapter for competition stages.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::competition_stages;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Option<competition_stages::Model>, sea_orm::DbErr> {
    competition_stages::Entity::find_by_id(stage_id).one(conn).await
}

/// Find the stage at a given position within a competition
pub async fn find_by_competition_and_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
    stage_order: i32,
) -> Result<Option<competition_stages::Model>, sea_orm::DbErr> {
    competition_stages::Entity::find()
        .filter(competition_stages::Column::CompetitionId.eq(competition_id))
        .filter(competition_stages::Column::StageOrder.eq(stage_order))
        .one(conn)
        .await
}

/// All stages of a competition (ordered by stage_order)
pub async fn find_all_by_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Vec<competition_stages::Model>, sea_orm::DbErr> {
    competition_stages::Entity::find()
        .filter(competition_stages::Column::CompetitionId.eq(competition_id))
        .order_by_asc(competition_stages::Column::StageOrder)
        .all(conn)
        .await
}

//! SeaORM adapter for matches.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{matches, rounds};

pub mod dto;

pub use dto::MatchCreate;

/// Matches of a round (ordered by id)
pub async fn find_all_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::RoundId.eq(round_id))
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

/// Matches of every round of a stage (ordered by id)
pub async fn find_all_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .join(sea_orm::JoinType::InnerJoin, matches::Relation::Round.def())
        .filter(rounds::Column::StageId.eq(stage_id))
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

/// Number of matches of a stage without a completion timestamp
pub async fn count_incomplete_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    matches::Entity::find()
        .join(sea_orm::JoinType::InnerJoin, matches::Relation::Round.def())
        .filter(rounds::Column::StageId.eq(stage_id))
        .filter(matches::Column::CompletedAt.is_null())
        .count(conn)
        .await
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let m = matches::ActiveModel {
        id: sea_orm::NotSet,
        round_id: Set(dto.round_id),
        scheduled_at: Set(dto.scheduled_at),
        completed_at: Set(None),
    };

    m.insert(conn).await
}

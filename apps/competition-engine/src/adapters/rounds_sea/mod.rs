//! SeaORM adapter for rounds.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::rounds::{self, DbBracket};

pub mod dto;

pub use dto::RoundCreate;

/// All rounds of a stage in creation order
pub async fn find_all_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::StageId.eq(stage_id))
        .order_by_asc(rounds::Column::Id)
        .all(conn)
        .await
}

/// Rounds of one bracket (ordered by round_number)
pub async fn find_all_by_stage_and_bracket<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: DbBracket,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::StageId.eq(stage_id))
        .filter(rounds::Column::Bracket.eq(bracket))
        .order_by_asc(rounds::Column::RoundNumber)
        .all(conn)
        .await
}

/// Highest-numbered round of a stage, optionally limited to one bracket
pub async fn find_highest_numbered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Option<DbBracket>,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    let mut query = rounds::Entity::find().filter(rounds::Column::StageId.eq(stage_id));
    if let Some(bracket) = bracket {
        query = query.filter(rounds::Column::Bracket.eq(bracket));
    }
    query
        .order_by_desc(rounds::Column::RoundNumber)
        .one(conn)
        .await
}

/// Most recently created round of a stage (any bracket)
pub async fn find_latest_created<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::StageId.eq(stage_id))
        .order_by_desc(rounds::Column::Id)
        .one(conn)
        .await
}

pub async fn find_by_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: DbBracket,
    round_number: i32,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::StageId.eq(stage_id))
        .filter(rounds::Column::Bracket.eq(bracket))
        .filter(rounds::Column::RoundNumber.eq(round_number))
        .one(conn)
        .await
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = rounds::ActiveModel {
        id: sea_orm::NotSet,
        stage_id: Set(dto.stage_id),
        round_number: Set(dto.round_number),
        bracket: Set(dto.bracket),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    round.insert(conn).await
}

//! SeaORM adapter for match participants.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::match_participants;

pub mod dto;

pub use dto::MatchParticipantCreate;

/// Participants of the given matches, ordered by match id then participant id
pub async fn find_all_by_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<Vec<match_participants::Model>, sea_orm::DbErr> {
    if match_ids.is_empty() {
        return Ok(Vec::new());
    }
    match_participants::Entity::find()
        .filter(match_participants::Column::MatchId.is_in(match_ids.iter().copied()))
        .order_by_asc(match_participants::Column::MatchId)
        .order_by_asc(match_participants::Column::Id)
        .all(conn)
        .await
}

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchParticipantCreate,
) -> Result<match_participants::Model, sea_orm::DbErr> {
    let row = match_participants::ActiveModel {
        id: sea_orm::NotSet,
        match_id: Set(dto.match_id),
        user_id: Set(dto.user_id),
        team_id: Set(dto.team_id),
        is_winner: Set(false),
        score: Set(None),
    };

    row.insert(conn).await
}

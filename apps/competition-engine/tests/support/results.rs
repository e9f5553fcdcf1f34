//! Result recording as the scoring side would do it: flag the winner, set
//! scores and stamp the match complete.

use competition_engine::domain::Entrant;
use competition_engine::entities::{match_participants, matches as match_rows};
use competition_engine::repos::matches;
use competition_engine::AppError;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use time::OffsetDateTime;

pub async fn record_winner(
    db: &DatabaseConnection,
    match_id: i64,
    winner: Entrant,
) -> Result<(), AppError> {
    let seated = match_participants::Entity::find()
        .filter(match_participants::Column::MatchId.eq(match_id))
        .all(db)
        .await?;

    let mut found = false;
    for row in seated {
        let entrant = Entrant::try_from_columns(row.user_id, row.team_id, "match participant")?;
        let won = entrant == winner;
        found |= won;
        let mut active: match_participants::ActiveModel = row.into();
        active.is_winner = Set(won);
        active.score = Set(Some(if won { 2 } else { 1 }));
        active.update(db).await?;
    }
    if !found {
        return Err(AppError::internal(format!(
            "{winner} does not play in match {match_id}"
        )));
    }

    let fixture = match_rows::Entity::find_by_id(match_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::internal(format!("match {match_id} missing")))?;
    let mut active: match_rows::ActiveModel = fixture.into();
    active.completed_at = Set(Some(OffsetDateTime::now_utc()));
    active.update(db).await?;
    Ok(())
}

/// Complete every match of a round, choosing the winner per pairing.
pub async fn complete_round(
    db: &DatabaseConnection,
    round_id: i64,
    pick: impl Fn(Entrant, Entrant) -> Entrant,
) -> Result<(), AppError> {
    let fixtures = matches::list_by_round(db, round_id).await?;
    for fixture in fixtures {
        let seated = matches::list_participants(db, &[fixture.id]).await?;
        let winner = pick(seated[0].entrant, seated[1].entrant);
        record_winner(db, fixture.id, winner).await?;
    }
    Ok(())
}

/// Complete a round where the winner of each match is whichever participant is listed.
pub async fn complete_round_with_winners(
    db: &DatabaseConnection,
    round_id: i64,
    winners: &[Entrant],
) -> Result<(), AppError> {
    let fixtures = matches::list_by_round(db, round_id).await?;
    for fixture in fixtures {
        let seated = matches::list_participants(db, &[fixture.id]).await?;
        let winner = seated
            .iter()
            .map(|p| p.entrant)
            .find(|e| winners.contains(e))
            .ok_or_else(|| {
                AppError::internal(format!("no listed winner plays in match {}", fixture.id))
            })?;
        record_winner(db, fixture.id, winner).await?;
    }
    Ok(())
}

pub fn first_wins(first: Entrant, _second: Entrant) -> Entrant {
    first
}

pub fn second_wins(_first: Entrant, second: Entrant) -> Entrant {
    second
}

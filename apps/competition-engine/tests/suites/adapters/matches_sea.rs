use competition_engine::adapters::matches_sea;
use competition_engine::domain::{Pairing, StageFormat};
use competition_engine::repos::matches;
use competition_engine::{AppError, Bracket};

use crate::support::fixtures::{insert_round, stage_with_roster};
use crate::support::results::record_winner;
use crate::support::{test_db, users};

#[tokio::test]
async fn stage_matches_and_incomplete_count() -> Result<(), AppError> {
    let db = test_db().await?;
    let u = users(1..=4);
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &u).await?;
    let other = stage_with_roster(&db, StageFormat::SingleElimination, &u).await?;

    let round_id = insert_round(
        &db,
        setup.stage_id,
        Bracket::Unbracketed,
        1,
        &[Pairing::new(u[0], u[1]), Pairing::new(u[2], u[3])],
    )
    .await?;
    insert_round(&db, other.stage_id, Bracket::Unbracketed, 1, &[Pairing::new(u[0], u[1])]).await?;

    let stage_matches = matches_sea::find_all_by_stage(&db, setup.stage_id).await?;
    assert_eq!(stage_matches.len(), 2);
    assert!(stage_matches.iter().all(|m| m.round_id == round_id));
    assert_eq!(matches_sea::count_incomplete_by_stage(&db, setup.stage_id).await?, 2);

    record_winner(&db, stage_matches[0].id, u[1]).await?;
    assert_eq!(matches::count_incomplete_in_stage(&db, setup.stage_id).await?, 1);
    assert_eq!(matches::winners_of_round(&db, round_id).await?, vec![u[1]]);
    assert_eq!(matches::losers_of_round(&db, round_id).await?, vec![u[0]]);
    Ok(())
}

#[tokio::test]
async fn new_matches_seat_two_undecided_participants() -> Result<(), AppError> {
    let db = test_db().await?;
    let u = users(1..=2);
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &u).await?;

    let round_id = insert_round(&db, setup.stage_id, Bracket::Unbracketed, 1, &[Pairing::new(u[1], u[0])]).await?;
    let fixtures = matches::list_by_round(&db, round_id).await?;
    assert_eq!(fixtures.len(), 1);
    assert!(!fixtures[0].is_completed());

    let seated = matches::list_participants(&db, &[fixtures[0].id]).await?;
    assert_eq!(seated.len(), 2);
    assert_eq!(seated[0].entrant, u[1]);
    assert_eq!(seated[1].entrant, u[0]);
    assert!(seated.iter().all(|p| !p.is_winner && p.score.is_none()));
    Ok(())
}

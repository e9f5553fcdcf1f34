use competition_engine::adapters::rounds_sea::{self, RoundCreate};
use competition_engine::domain::StageFormat;
use competition_engine::entities::rounds::DbBracket;
use competition_engine::repos::rounds;
use competition_engine::{AppError, Bracket};

use crate::support::fixtures::stage_with_roster;
use crate::support::{test_db, users};

#[tokio::test]
async fn create_round_and_find_by_number_roundtrip() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::DoubleElimination, &users(1..=4)).await?;

    let created = rounds_sea::create_round(
        &db,
        RoundCreate {
            stage_id: setup.stage_id,
            round_number: 1,
            bracket: DbBracket::Losers,
        },
    )
    .await?;
    assert!(created.id > 0);

    let found = rounds::find_by_number(&db, setup.stage_id, Bracket::Losers, 1)
        .await?
        .expect("round should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.bracket, Bracket::Losers);

    assert!(rounds::find_by_number(&db, setup.stage_id, Bracket::Winners, 1)
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn highest_numbered_is_scoped_by_bracket() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::DoubleElimination, &users(1..=4)).await?;
    let stage_id = setup.stage_id;

    rounds::create_round(&db, stage_id, Bracket::Winners, 1).await?;
    rounds::create_round(&db, stage_id, Bracket::Winners, 2).await?;
    rounds::create_round(&db, stage_id, Bracket::Losers, 1).await?;

    assert_eq!(rounds::max_round_number(&db, stage_id, Some(Bracket::Winners)).await?, Some(2));
    assert_eq!(rounds::max_round_number(&db, stage_id, Some(Bracket::Losers)).await?, Some(1));
    assert_eq!(rounds::max_round_number(&db, stage_id, Some(Bracket::Grand)).await?, None);
    assert_eq!(rounds::max_round_number(&db, stage_id, None).await?, Some(2));
    assert_eq!(rounds::next_round_number(&db, stage_id, Some(Bracket::Grand)).await?, 1);

    let latest = rounds::latest_created(&db, stage_id).await?.expect("latest round");
    assert_eq!((latest.bracket, latest.round_number), (Bracket::Losers, 1));
    Ok(())
}

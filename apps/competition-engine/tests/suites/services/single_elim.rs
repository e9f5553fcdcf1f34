use competition_engine::domain::StageFormat;
use competition_engine::repos::rounds;
use competition_engine::{AppError, Bracket, ErrorCode, SingleEliminationGenerator};

use crate::support::fixtures::stage_with_roster;
use crate::support::results::{complete_round, first_wins, second_wins};
use crate::support::{entrant_pairs, test_db, users};

#[tokio::test]
async fn halves_the_field_each_round() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=8)).await?;
    let generator = SingleEliminationGenerator::new(db.clone());

    let r1 = generator.generate_next_round(setup.stage_id).await?;
    assert_eq!((r1.round_number, r1.bracket), (1, Bracket::Unbracketed));
    assert_eq!(r1.match_ids.len(), 4);
    let u = users(1..=8);
    assert_eq!(
        entrant_pairs(&db, r1.round_id).await?,
        vec![(u[0], u[1]), (u[2], u[3]), (u[4], u[5]), (u[6], u[7])]
    );
    complete_round(&db, r1.round_id, first_wins).await?;

    let r2 = generator.generate_next_round(setup.stage_id).await?;
    assert_eq!(r2.round_number, 2);
    assert_eq!(entrant_pairs(&db, r2.round_id).await?, vec![(u[0], u[2]), (u[4], u[6])]);
    complete_round(&db, r2.round_id, second_wins).await?;

    let r3 = generator.generate_next_round(setup.stage_id).await?;
    assert_eq!(r3.round_number, 3);
    assert_eq!(entrant_pairs(&db, r3.round_id).await?, vec![(u[2], u[6])]);
    Ok(())
}

#[tokio::test]
async fn odd_winner_count_rolls_back() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=6)).await?;
    let generator = SingleEliminationGenerator::new(db.clone());

    let r1 = generator.generate_next_round(setup.stage_id).await?;
    assert_eq!(r1.match_ids.len(), 3);
    complete_round(&db, r1.round_id, first_wins).await?;

    let err = generator.generate_next_round(setup.stage_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::OddParticipantCount);
    assert!(err.detail().contains("got 3"), "{}", err.detail());

    assert_eq!(rounds::max_round_number(&db, setup.stage_id, None).await?, Some(1));
    Ok(())
}

#[tokio::test]
async fn odd_roster_fails_on_first_round() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=3)).await?;

    let err = SingleEliminationGenerator::new(db.clone())
        .generate_next_round(setup.stage_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::OddParticipantCount);
    assert!(rounds::list_by_stage(&db, setup.stage_id).await?.is_empty());
    Ok(())
}

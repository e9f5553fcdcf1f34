use competition_engine::domain::StageFormat;
use competition_engine::repos::rounds;
use competition_engine::{AppError, Bracket, DoubleElimOutcome, DoubleEliminationGenerator, ErrorCode};

use crate::support::fixtures::stage_with_roster;
use crate::support::results::{complete_round, first_wins, second_wins};
use crate::support::{entrant_pairs, test_db, users};

#[tokio::test]
async fn four_entrants_converge_to_one_grand_final() -> Result<(), AppError> {
    let db = test_db().await?;
    let u = users(1..=4);
    let setup = stage_with_roster(&db, StageFormat::DoubleElimination, &u).await?;
    let generator = DoubleEliminationGenerator::new(db.clone());

    // Winners round 1 only: nobody has lost yet.
    let DoubleElimOutcome::WinnersRoundCreated { round: w1 } =
        generator.generate_next_round(setup.stage_id).await?
    else {
        panic!("expected winners round 1");
    };
    assert_eq!((w1.bracket, w1.round_number), (Bracket::Winners, 1));
    assert_eq!(w1.match_ids.len(), 2);
    complete_round(&db, w1.round_id, first_wins).await?;

    // Winners round 2 and the first losers round together.
    let DoubleElimOutcome::BothCreated { winners: w2, losers: l1 } =
        generator.generate_next_round(setup.stage_id).await?
    else {
        panic!("expected both brackets");
    };
    assert_eq!(entrant_pairs(&db, w2.round_id).await?, vec![(u[0], u[2])]);
    assert_eq!((l1.bracket, l1.round_number), (Bracket::Losers, 1));
    assert_eq!(entrant_pairs(&db, l1.round_id).await?, vec![(u[1], u[3])]);
    complete_round(&db, w2.round_id, first_wins).await?;
    complete_round(&db, l1.round_id, first_wins).await?;

    // Winners bracket is settled; the winners-final loser drops in.
    let DoubleElimOutcome::LosersRoundCreated { round: l2 } =
        generator.generate_next_round(setup.stage_id).await?
    else {
        panic!("expected losers round 2");
    };
    assert_eq!(l2.round_number, 2);
    assert_eq!(entrant_pairs(&db, l2.round_id).await?, vec![(u[2], u[1])]);
    complete_round(&db, l2.round_id, second_wins).await?;

    let DoubleElimOutcome::GrandFinalCreated { round: gf } =
        generator.generate_next_round(setup.stage_id).await?
    else {
        panic!("expected grand final");
    };
    assert_eq!((gf.bracket, gf.round_number), (Bracket::Grand, 1));
    assert_eq!(gf.match_ids.len(), 1);
    assert_eq!(entrant_pairs(&db, gf.round_id).await?, vec![(u[0], u[1])]);

    // A repeat call is not silently duplicated: the round uniqueness index rejects it.
    let err = generator.generate_next_round(setup.stage_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateRound);
    assert_eq!(
        rounds::list_by_bracket(&db, setup.stage_id, Bracket::Grand).await?.len(),
        1
    );
    Ok(())
}

#[tokio::test]
async fn two_entrants_go_straight_to_grand_final() -> Result<(), AppError> {
    let db = test_db().await?;
    let u = users([10, 20]);
    let setup = stage_with_roster(&db, StageFormat::DoubleElimination, &u).await?;
    let generator = DoubleEliminationGenerator::new(db.clone());

    let w1 = match generator.generate_next_round(setup.stage_id).await? {
        DoubleElimOutcome::WinnersRoundCreated { round } => round,
        other => panic!("unexpected {other:?}"),
    };
    complete_round(&db, w1.round_id, second_wins).await?;

    let outcome = generator.generate_next_round(setup.stage_id).await?;
    let DoubleElimOutcome::GrandFinalCreated { round } = outcome else {
        panic!("expected grand final, got {outcome:?}");
    };
    assert_eq!(entrant_pairs(&db, round.round_id).await?, vec![(u[1], u[0])]);
    Ok(())
}

#[tokio::test]
async fn odd_winners_bracket_fails_without_writing() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::DoubleElimination, &users(1..=6)).await?;
    let generator = DoubleEliminationGenerator::new(db.clone());

    let w1 = match generator.generate_next_round(setup.stage_id).await? {
        DoubleElimOutcome::WinnersRoundCreated { round } => round,
        other => panic!("unexpected {other:?}"),
    };
    complete_round(&db, w1.round_id, first_wins).await?;

    let err = generator.generate_next_round(setup.stage_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::OddParticipantCount);

    let stored = rounds::list_by_stage(&db, setup.stage_id).await?;
    assert_eq!(stored.len(), 1, "no losers round may survive the failed call");
    Ok(())
}

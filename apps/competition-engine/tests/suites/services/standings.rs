use std::collections::HashSet;

use competition_engine::domain::{Entrant, StageFormat};
use competition_engine::entities::competitions::CompetitionStatus;
use competition_engine::{AppError, ErrorCode, RoundRobinGenerator, StandingsService};
use sea_orm::DatabaseConnection;

use crate::support::fixtures::{create_competition, create_stage, seed_roster};
use crate::support::results::complete_round_with_winners;
use crate::support::{test_db, users};

struct TwoStages {
    first: i64,
    second: i64,
}

async fn two_stages(
    db: &DatabaseConnection,
    first_format: StageFormat,
    roster: &[Entrant],
) -> Result<TwoStages, AppError> {
    let competition_id = create_competition(db, CompetitionStatus::Ongoing).await?;
    let first = create_stage(db, competition_id, 1, first_format, roster.len() as i32).await?;
    let second = create_stage(db, competition_id, 2, StageFormat::SingleElimination, 2).await?;
    seed_roster(db, first, roster).await?;
    Ok(TwoStages { first, second })
}

/// Plays the 4-entrant schedule `(1,4),(2,3) / (1,3),(4,2) / (1,2),(3,4)`
/// with the listed winners per round.
async fn play_round_robin(
    db: &DatabaseConnection,
    stage_id: i64,
    winners: [[Entrant; 2]; 3],
) -> Result<(), AppError> {
    let round_ids = RoundRobinGenerator::new(db.clone()).generate(stage_id).await?;
    for (round_id, round_winners) in round_ids.into_iter().zip(winners) {
        complete_round_with_winners(db, round_id, &round_winners).await?;
    }
    Ok(())
}

#[tokio::test]
async fn head_to_head_orders_tied_entrants() -> Result<(), AppError> {
    let db = test_db().await?;
    let [a, b, c, d] = [1, 2, 3, 4].map(Entrant::User);
    let stages = two_stages(&db, StageFormat::RoundRobin, &[a, b, c, d]).await?;
    // A:2 B:2 C:1 D:1; A beat B and D beat C head to head.
    play_round_robin(&db, stages.first, [[a, b], [c, b], [a, d]]).await?;

    let service = StandingsService::new(db.clone());
    let table = service.stage_standings(stages.first).await?;
    let order: Vec<Entrant> = table.iter().map(|s| s.entrant).collect();
    assert_eq!(order, vec![a, b, d, c]);
    assert_eq!(table.iter().map(|s| s.wins).collect::<Vec<_>>(), vec![2, 2, 1, 1]);

    let top = service
        .top_n_from_completed_round_robin(stages.second, 3)
        .await?;
    assert_eq!(top, vec![a, b, d]);

    let everyone = service
        .top_n_from_completed_round_robin(stages.second, 10)
        .await?;
    assert_eq!(everyone.len(), 4);
    Ok(())
}

#[tokio::test]
async fn cyclic_tie_is_deterministic() -> Result<(), AppError> {
    let db = test_db().await?;
    let [a, b, c, d] = [1, 2, 3, 4].map(Entrant::User);
    let stages = two_stages(&db, StageFormat::RoundRobin, &[a, b, c, d]).await?;
    // A>B, B>C, C>A, everyone beats D: three-way tie on 2 wins.
    play_round_robin(&db, stages.first, [[a, b], [c, b], [a, c]]).await?;

    let service = StandingsService::new(db.clone());
    let first = service.top_n_from_completed_round_robin(stages.second, 4).await?;
    let second = service.top_n_from_completed_round_robin(stages.second, 4).await?;
    assert_eq!(first, second);
    assert_eq!(first[3], d);

    let leaders: HashSet<Entrant> = first[..3].iter().copied().collect();
    assert_eq!(leaders, HashSet::from([a, b, c]));
    Ok(())
}

#[tokio::test]
async fn first_stage_has_no_previous_stage() -> Result<(), AppError> {
    let db = test_db().await?;
    let stages = two_stages(&db, StageFormat::RoundRobin, &users(1..=4)).await?;

    let err = StandingsService::new(db)
        .top_n_from_completed_round_robin(stages.first, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoPreviousStage);
    Ok(())
}

#[tokio::test]
async fn previous_stage_must_be_round_robin() -> Result<(), AppError> {
    let db = test_db().await?;
    let stages = two_stages(&db, StageFormat::SingleElimination, &users(1..=4)).await?;

    let err = StandingsService::new(db)
        .top_n_from_completed_round_robin(stages.second, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::FormatMismatch);
    Ok(())
}

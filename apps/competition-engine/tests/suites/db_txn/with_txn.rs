use competition_engine::db::txn_policy::{current, TxnPolicy};
use competition_engine::domain::StageFormat;
use competition_engine::repos::rounds;
use competition_engine::{with_txn, AppError, Bracket, ErrorCode};
use tracing::debug;

use crate::support::fixtures::stage_with_roster;
use crate::support::{test_db, users};

#[tokio::test]
async fn ok_result_commits() -> Result<(), AppError> {
    assert_eq!(current(), TxnPolicy::CommitOnOk);

    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=2)).await?;
    let stage_id = setup.stage_id;

    let round_id = with_txn(&db, |txn| {
        Box::pin(async move {
            let round = rounds::create_round(txn, stage_id, Bracket::Unbracketed, 1).await?;
            Ok(round.id)
        })
    })
    .await?;

    let stored = rounds::list_by_stage(&db, stage_id).await?;
    assert_eq!(stored.iter().map(|r| r.id).collect::<Vec<_>>(), vec![round_id]);
    Ok(())
}

#[tokio::test]
async fn err_result_rolls_back_and_keeps_the_error() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=2)).await?;
    let stage_id = setup.stage_id;

    let result = with_txn(&db, |txn| {
        Box::pin(async move {
            rounds::create_round(txn, stage_id, Bracket::Unbracketed, 1).await?;
            debug!("inserted round inside txn before error");
            Err::<(), _>(AppError::invalid(ErrorCode::ValidationError, "forced failure"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert_eq!(err.detail(), "forced failure");
    assert!(rounds::list_by_stage(&db, stage_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn failure_midway_through_a_round_leaves_nothing() -> Result<(), AppError> {
    let db = test_db().await?;
    let setup = stage_with_roster(&db, StageFormat::SingleElimination, &users(1..=2)).await?;
    let stage_id = setup.stage_id;
    rounds::create_round(&db, stage_id, Bracket::Unbracketed, 2).await?;

    let err = with_txn(&db, |txn| {
        Box::pin(async move {
            rounds::create_round(txn, stage_id, Bracket::Unbracketed, 1).await?;
            rounds::create_round(txn, stage_id, Bracket::Unbracketed, 2).await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DuplicateRound);
    let stored = rounds::list_by_stage(&db, stage_id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].round_number, 2);
    Ok(())
}

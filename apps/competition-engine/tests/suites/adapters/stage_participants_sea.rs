use competition_engine::domain::{Entrant, StageFormat};
use competition_engine::repos::participants;
use competition_engine::AppError;

use crate::support::fixtures::stage_with_roster;
use crate::support::test_db;

#[tokio::test]
async fn roster_is_returned_in_insertion_order() -> Result<(), AppError> {
    let db = test_db().await?;
    let roster = vec![Entrant::Team(40), Entrant::User(2), Entrant::Team(1)];
    let setup = stage_with_roster(&db, StageFormat::RoundRobin, &roster).await?;

    let added = participants::add_entrant(&db, setup.stage_id, Entrant::User(99)).await?;
    assert_eq!(added.entrant, Entrant::User(99));

    let rows = participants::list_roster(&db, setup.stage_id).await?;
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(
        rows.iter().map(|r| r.entrant).collect::<Vec<_>>(),
        vec![Entrant::Team(40), Entrant::User(2), Entrant::Team(1), Entrant::User(99)]
    );
    Ok(())
}

use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::{debug, info};

use super::entrant_resolver::resolve_entrants;
use super::{persist_round, CreatedRound};
use crate::db::txn::with_txn;
use crate::domain::{pair_consecutive, Bracket};
use crate::error::AppError;
use crate::repos::rounds;

/// Generates single elimination rounds one at a time.
#[derive(Clone)]
pub struct SingleEliminationGenerator {
    db: DatabaseConnection,
}

impl SingleEliminationGenerator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn generate_next_round(&self, stage_id: i64) -> Result<CreatedRound, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { Self::generate_in_txn(txn, stage_id).await })
        })
        .await
    }

    /// Round `max + 1` pairing the roster (round 1) or the previous round's winners.
    pub async fn generate_in_txn(
        txn: &DatabaseTransaction,
        stage_id: i64,
    ) -> Result<CreatedRound, AppError> {
        let round_number = rounds::next_round_number(txn, stage_id, None).await?;
        debug!(stage_id, round_number, "Next single elimination round");

        let entrants = resolve_entrants(txn, stage_id, Bracket::Unbracketed, round_number).await?;
        let pairings = pair_consecutive(&entrants, &format!("round {round_number}"))?;
        let created =
            persist_round(txn, stage_id, Bracket::Unbracketed, round_number, &pairings).await?;

        info!(
            stage_id,
            round_number,
            round_id = created.round_id,
            matches = created.match_ids.len(),
            "Single elimination round generated"
        );
        Ok(created)
    }
}

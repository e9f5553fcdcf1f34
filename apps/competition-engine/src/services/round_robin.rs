use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::info;

use super::entrant_resolver::resolve_entrants;
use super::persist_round;
use crate::db::txn::with_txn;
use crate::domain::{round_robin_schedule, Bracket};
use crate::error::AppError;

/// Schedules a whole round robin stage at once (circle method).
#[derive(Clone)]
pub struct RoundRobinGenerator {
    db: DatabaseConnection,
}

impl RoundRobinGenerator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create all `N - 1` rounds for the stage; returns the round ids in order.
    ///
    /// Meant to be called once per stage. A repeat call hits the round
    /// uniqueness index and fails with `DuplicateRound`, leaving nothing behind.
    pub async fn generate(&self, stage_id: i64) -> Result<Vec<i64>, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { Self::generate_in_txn(txn, stage_id).await })
        })
        .await
    }

    pub async fn generate_in_txn(
        txn: &DatabaseTransaction,
        stage_id: i64,
    ) -> Result<Vec<i64>, AppError> {
        let entrants = resolve_entrants(txn, stage_id, Bracket::Unbracketed, 1).await?;
        let schedule = round_robin_schedule(&entrants)?;

        let mut round_ids = Vec::with_capacity(schedule.len());
        for (i, pairings) in schedule.iter().enumerate() {
            let round_number = i as i32 + 1;
            let created =
                persist_round(txn, stage_id, Bracket::Unbracketed, round_number, pairings).await?;
            round_ids.push(created.round_id);
        }

        info!(
            stage_id,
            entrants = entrants.len(),
            rounds = round_ids.len(),
            "Round robin schedule generated"
        );
        Ok(round_ids)
    }
}

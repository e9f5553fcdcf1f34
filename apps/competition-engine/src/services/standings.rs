use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::debug;

use crate::db::txn::with_txn;
use crate::domain::{rank_standings, Entrant, Standing, StageFormat};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{matches, participants, stages};

/// Full ranking of a stage's roster by wins with head-to-head tiebreaks.
pub async fn stage_standings_in<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<Standing>, DomainError> {
    let roster = participants::list_entrants(conn, stage_id).await?;
    let records = matches::stage_match_records(conn, stage_id).await?;
    debug!(stage_id, roster = roster.len(), matches = records.len(), "Computing standings");
    Ok(rank_standings(&roster, &records))
}

/// Top `n` entrants of the round robin stage preceding `next_stage_id`.
pub async fn top_n_in<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    next_stage_id: i64,
    n: usize,
) -> Result<Vec<Entrant>, DomainError> {
    let next = stages::require_stage(conn, next_stage_id).await?;
    let previous = stages::find_previous(conn, &next).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::PreviousStage,
            format!("stage {next_stage_id} has no previous stage"),
        )
    })?;
    if previous.format != StageFormat::RoundRobin {
        return Err(DomainError::validation(
            ValidationKind::FormatMismatch,
            format!(
                "previous stage {} is {:?}, expected round robin",
                previous.id, previous.format
            ),
        ));
    }

    let standings = stage_standings_in(conn, previous.id).await?;
    Ok(standings.into_iter().take(n).map(|s| s.entrant).collect())
}

/// Read-side entry point for standings and advancement selection.
#[derive(Clone)]
pub struct StandingsService {
    db: DatabaseConnection,
}

impl StandingsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Up to `n` entrants that advance into `next_stage_id`, best first.
    pub async fn top_n_from_completed_round_robin(
        &self,
        next_stage_id: i64,
        n: usize,
    ) -> Result<Vec<Entrant>, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { Ok(top_n_in(txn, next_stage_id, n).await?) })
        })
        .await
    }

    pub async fn stage_standings(&self, stage_id: i64) -> Result<Vec<Standing>, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move {
                stages::require_stage(txn, stage_id).await?;
                Ok(stage_standings_in(txn, stage_id).await?)
            })
        })
        .await
    }
}

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::debug;

use crate::domain::{Bracket, Entrant};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::{matches, participants, rounds};

/// Ordered entrants eligible for a round of one bracket.
///
/// Round 1 takes the whole stage roster in insertion order; later rounds take
/// the winners of the previous round in the same bracket.
pub async fn resolve_entrants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
    round_number: i32,
) -> Result<Vec<Entrant>, DomainError> {
    if round_number <= 1 {
        let roster = participants::list_entrants(conn, stage_id).await?;
        if roster.is_empty() {
            return Err(DomainError::not_found(
                NotFoundKind::Participants,
                format!("stage {stage_id} has no participants"),
            ));
        }
        debug!(stage_id, bracket = ?bracket, count = roster.len(), "Resolved entrants from roster");
        return Ok(roster);
    }

    let previous = round_number - 1;
    let round = rounds::find_by_number(conn, stage_id, bracket, previous)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Round,
                format!("stage {stage_id} has no {} round {previous}", bracket.label()),
            )
        })?;

    let winners = matches::winners_of_round(conn, round.id).await?;
    if winners.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::Participants,
            format!(
                "no winners recorded for {} round {previous} of stage {stage_id}",
                bracket.label()
            ),
        ));
    }
    debug!(
        stage_id,
        bracket = ?bracket,
        round_number,
        count = winners.len(),
        "Resolved entrants from previous round winners"
    );
    Ok(winners)
}

/// Read-only entry point over [`resolve_entrants`].
#[derive(Clone)]
pub struct EntrantResolver {
    db: DatabaseConnection,
}

impl EntrantResolver {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn resolve(
        &self,
        stage_id: i64,
        bracket: Bracket,
        round_number: i32,
    ) -> Result<Vec<Entrant>, AppError> {
        Ok(resolve_entrants(&self.db, stage_id, bracket, round_number).await?)
    }
}

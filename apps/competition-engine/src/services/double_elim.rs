use sea_orm::{DatabaseConnection, DatabaseTransaction};
use serde::Serialize;
use tracing::{debug, info};

use super::entrant_resolver::resolve_entrants;
use super::{persist_round, CreatedRound};
use crate::db::txn::with_txn;
use crate::domain::double_elim::merge_losers_entrants;
use crate::domain::{plan_double_elim, Bracket, BracketPlan, BracketState, Entrant};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::{matches, rounds};

/// What one double elimination call created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DoubleElimOutcome {
    WinnersRoundCreated { round: CreatedRound },
    LosersRoundCreated { round: CreatedRound },
    GrandFinalCreated { round: CreatedRound },
    BothCreated { winners: CreatedRound, losers: CreatedRound },
}

/// Generates winners, losers and grand final rounds one call at a time.
#[derive(Clone)]
pub struct DoubleEliminationGenerator {
    db: DatabaseConnection,
}

impl DoubleEliminationGenerator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn generate_next_round(&self, stage_id: i64) -> Result<DoubleElimOutcome, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { Self::generate_in_txn(txn, stage_id).await })
        })
        .await
    }

    pub async fn generate_in_txn(
        txn: &DatabaseTransaction,
        stage_id: i64,
    ) -> Result<DoubleElimOutcome, AppError> {
        let state = load_bracket_state(txn, stage_id).await?;
        debug!(
            stage_id,
            next_winners_round = state.next_winners_round,
            next_losers_round = state.next_losers_round,
            winners = state.winners_entrants.len(),
            losers = state.losers_entrants.len(),
            "Derived double elimination state"
        );

        let outcome = match plan_double_elim(&state)? {
            BracketPlan::GrandFinal(pairing) => {
                let round = persist_round(txn, stage_id, Bracket::Grand, 1, &[pairing]).await?;
                DoubleElimOutcome::GrandFinalCreated { round }
            }
            BracketPlan::Rounds { winners, losers } => {
                let winners = match winners {
                    Some(planned) => Some(
                        persist_round(
                            txn,
                            stage_id,
                            Bracket::Winners,
                            planned.round_number,
                            &planned.pairings,
                        )
                        .await?,
                    ),
                    None => None,
                };
                let losers = match losers {
                    Some(planned) => Some(
                        persist_round(
                            txn,
                            stage_id,
                            Bracket::Losers,
                            planned.round_number,
                            &planned.pairings,
                        )
                        .await?,
                    ),
                    None => None,
                };
                match (winners, losers) {
                    (Some(winners), Some(losers)) => {
                        DoubleElimOutcome::BothCreated { winners, losers }
                    }
                    (Some(round), None) => DoubleElimOutcome::WinnersRoundCreated { round },
                    (None, Some(round)) => DoubleElimOutcome::LosersRoundCreated { round },
                    (None, None) => {
                        return Err(AppError::internal(
                            "double elimination plan created no rounds",
                        ))
                    }
                }
            }
        };

        info!(stage_id, outcome = outcome.label(), "Double elimination round generated");
        Ok(outcome)
    }
}

impl DoubleElimOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            DoubleElimOutcome::WinnersRoundCreated { .. } => "winners_round_created",
            DoubleElimOutcome::LosersRoundCreated { .. } => "losers_round_created",
            DoubleElimOutcome::GrandFinalCreated { .. } => "grand_final_created",
            DoubleElimOutcome::BothCreated { .. } => "both_created",
        }
    }
}

async fn load_bracket_state(
    txn: &DatabaseTransaction,
    stage_id: i64,
) -> Result<BracketState, DomainError> {
    let next_winners_round = rounds::next_round_number(txn, stage_id, Some(Bracket::Winners)).await?;
    let next_losers_round = rounds::next_round_number(txn, stage_id, Some(Bracket::Losers)).await?;

    let winners_entrants =
        resolve_entrants(txn, stage_id, Bracket::Winners, next_winners_round).await?;

    let losers_entrants = if next_winners_round > 1 {
        losers_bracket_entrants(txn, stage_id, next_winners_round - 1, next_losers_round).await?
    } else {
        Vec::new()
    };

    Ok(BracketState {
        next_winners_round,
        next_losers_round,
        winners_entrants,
        losers_entrants,
    })
}

/// Entrants dropped by the last winners round plus survivors of the last losers round.
async fn losers_bracket_entrants(
    txn: &DatabaseTransaction,
    stage_id: i64,
    last_winners_round: i32,
    next_losers_round: i32,
) -> Result<Vec<Entrant>, DomainError> {
    let dropped = match rounds::find_by_number(txn, stage_id, Bracket::Winners, last_winners_round)
        .await?
    {
        Some(round) => matches::losers_of_round(txn, round.id).await?,
        None => Vec::new(),
    };
    let already_in_losers = matches::entrants_in_bracket(txn, stage_id, Bracket::Losers).await?;

    let survivors = if next_losers_round > 1 {
        match rounds::find_by_number(txn, stage_id, Bracket::Losers, next_losers_round - 1).await? {
            Some(round) => matches::winners_of_round(txn, round.id).await?,
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    Ok(merge_losers_entrants(&dropped, &already_in_losers, &survivors))
}

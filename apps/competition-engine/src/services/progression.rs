//! Progression controller: format dispatch, readiness, stage advancement and
//! competition finish.

use sea_orm::{DatabaseConnection, DatabaseTransaction};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::overview::{load_stage_overview, StageOverview};
use super::standings::{stage_standings_in, top_n_in};
use super::{
    CreatedRound, DoubleElimOutcome, DoubleEliminationGenerator, RoundRobinGenerator,
    SingleEliminationGenerator,
};
use crate::db::txn::with_txn;
use crate::domain::{Bracket, Entrant, StageFormat};
use crate::entities::competitions::CompetitionStatus;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::{competitions, matches, participants, rounds, stages};

/// Result of a dispatched generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum GenerationOutcome {
    RoundRobin { round_ids: Vec<i64> },
    SingleElimination { round: CreatedRound },
    DoubleElimination { result: DoubleElimOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    Blocked { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// Top entrants were added to the next stage's roster.
    Advanced {
        next_stage_id: i64,
        inserted: Vec<Entrant>,
        already_present: usize,
    },
    /// The stage was the last one; the competition is now finished.
    CompetitionFinished { competition_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Champion {
    pub competition_id: i64,
    pub stage_id: i64,
    pub entrant: Entrant,
}

/// Orchestrating entry point over the generators and standings.
#[derive(Clone)]
pub struct ProgressionService {
    db: DatabaseConnection,
}

impl ProgressionService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run the generator matching the stage format.
    ///
    /// The caller is expected to have checked round completion (see
    /// [`Self::can_generate_next_round`]); generation itself does not.
    pub async fn generate_next_round(&self, stage_id: i64) -> Result<GenerationOutcome, AppError> {
        let result = with_txn(&self.db, |txn| {
            Box::pin(async move { dispatch_in_txn(txn, stage_id).await })
        })
        .await;

        if let Err(e) = &result {
            warn!(stage_id, code = %e.code(), error = %e, "Round generation rejected");
        }
        result
    }

    /// Whether the next round of a stage may be generated now.
    pub async fn can_generate_next_round(&self, stage_id: i64) -> Result<Readiness, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { readiness_in_txn(txn, stage_id).await })
        })
        .await
    }

    /// Move the top finishers of a completed round robin stage into the next stage.
    pub async fn advance_after_round_robin(&self, stage_id: i64) -> Result<AdvanceOutcome, AppError> {
        let result = with_txn(&self.db, |txn| {
            Box::pin(async move { advance_in_txn(txn, stage_id).await })
        })
        .await;

        if let Err(e) = &result {
            warn!(stage_id, code = %e.code(), error = %e, "Stage advancement rejected");
        }
        result
    }

    /// Declare the champion of a completed competition and mark it finished.
    pub async fn finish_competition(&self, competition_id: i64) -> Result<Champion, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { finish_in_txn(txn, competition_id).await })
        })
        .await
    }

    /// Roster, rounds and matches of a stage as currently stored.
    pub async fn stage_overview(&self, stage_id: i64) -> Result<StageOverview, AppError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move { Ok(load_stage_overview(txn, stage_id).await?) })
        })
        .await
    }
}

async fn dispatch_in_txn(
    txn: &DatabaseTransaction,
    stage_id: i64,
) -> Result<GenerationOutcome, AppError> {
    let stage = stages::require_stage(txn, stage_id).await?;
    debug!(stage_id, format = ?stage.format, "Dispatching round generation");

    match stage.format {
        StageFormat::RoundRobin => Ok(GenerationOutcome::RoundRobin {
            round_ids: RoundRobinGenerator::generate_in_txn(txn, stage_id).await?,
        }),
        StageFormat::SingleElimination => Ok(GenerationOutcome::SingleElimination {
            round: SingleEliminationGenerator::generate_in_txn(txn, stage_id).await?,
        }),
        StageFormat::DoubleElimination => Ok(GenerationOutcome::DoubleElimination {
            result: DoubleEliminationGenerator::generate_in_txn(txn, stage_id).await?,
        }),
    }
}

async fn readiness_in_txn(txn: &DatabaseTransaction, stage_id: i64) -> Result<Readiness, AppError> {
    let stage = stages::require_stage(txn, stage_id).await?;
    let competition = competitions::require_competition(txn, stage.competition_id).await?;

    if competition.status != CompetitionStatus::Ongoing {
        return Ok(Readiness::Blocked {
            reason: format!(
                "competition {} is {:?}, not ongoing",
                competition.id, competition.status
            ),
        });
    }

    if rounds::latest_created(txn, stage_id).await?.is_none() {
        return Ok(Readiness::Ready);
    }
    if stage.format == StageFormat::RoundRobin {
        return Ok(Readiness::Blocked {
            reason: format!("round robin schedule for stage {stage_id} is already generated"),
        });
    }
    if stage.format == StageFormat::DoubleElimination
        && rounds::find_by_number(txn, stage_id, Bracket::Grand, 1)
            .await?
            .is_some()
    {
        return Ok(Readiness::Blocked {
            reason: format!("grand final for stage {stage_id} is already generated"),
        });
    }

    let open = matches::count_incomplete_in_stage(txn, stage_id).await?;
    if open > 0 {
        return Ok(Readiness::Blocked {
            reason: format!("stage {stage_id} still has {open} incomplete matches"),
        });
    }
    Ok(Readiness::Ready)
}

async fn require_stage_complete(
    txn: &DatabaseTransaction,
    stage_id: i64,
) -> Result<(), DomainError> {
    let open = matches::count_incomplete_in_stage(txn, stage_id).await?;
    if open > 0 {
        return Err(DomainError::validation(
            ValidationKind::MatchesIncomplete,
            format!("stage {stage_id} still has {open} incomplete matches"),
        ));
    }
    Ok(())
}

async fn advance_in_txn(
    txn: &DatabaseTransaction,
    stage_id: i64,
) -> Result<AdvanceOutcome, AppError> {
    let stage = stages::require_stage(txn, stage_id).await?;
    if stage.format != StageFormat::RoundRobin {
        return Err(DomainError::validation(
            ValidationKind::FormatMismatch,
            format!("stage {stage_id} is {:?}, expected round robin", stage.format),
        )
        .into());
    }
    require_stage_complete(txn, stage_id).await?;

    let Some(next) = stages::find_next(txn, &stage).await? else {
        competitions::set_status(txn, stage.competition_id, CompetitionStatus::Finished).await?;
        info!(
            stage_id,
            competition_id = stage.competition_id,
            "Last stage complete, competition finished"
        );
        return Ok(AdvanceOutcome::CompetitionFinished {
            competition_id: stage.competition_id,
        });
    };

    let quota = usize::try_from(next.participants_at_start).unwrap_or(0);
    let advancing = top_n_in(txn, next.id, quota).await?;
    let present = participants::list_entrants(txn, next.id).await?;

    let mut inserted = Vec::new();
    for entrant in &advancing {
        if present.contains(entrant) {
            continue;
        }
        participants::add_entrant(txn, next.id, *entrant).await?;
        inserted.push(*entrant);
    }

    info!(
        stage_id,
        next_stage_id = next.id,
        quota,
        inserted = inserted.len(),
        "Advanced stage finishers"
    );
    Ok(AdvanceOutcome::Advanced {
        next_stage_id: next.id,
        already_present: advancing.len() - inserted.len(),
        inserted,
    })
}

async fn finish_in_txn(
    txn: &DatabaseTransaction,
    competition_id: i64,
) -> Result<Champion, AppError> {
    competitions::require_competition(txn, competition_id).await?;
    let last = stages::list_by_competition(txn, competition_id)
        .await?
        .pop()
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Stage,
                format!("competition {competition_id} has no stages"),
            )
        })?;
    require_stage_complete(txn, last.id).await?;

    let entrant = match last.format {
        StageFormat::RoundRobin => stage_standings_in(txn, last.id)
            .await?
            .first()
            .map(|s| s.entrant),
        StageFormat::SingleElimination => {
            let round = rounds::latest_created(txn, last.id).await?.ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Round,
                    format!("stage {} has no rounds", last.id),
                )
            })?;
            single_final_winner(txn, &round).await?
        }
        StageFormat::DoubleElimination => {
            let round = rounds::find_by_number(txn, last.id, Bracket::Grand, 1)
                .await?
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Round,
                        format!("stage {} has no grand final", last.id),
                    )
                })?;
            single_final_winner(txn, &round).await?
        }
    };
    let entrant = entrant.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Participants,
            format!("no winner recorded for the final of stage {}", last.id),
        )
    })?;

    competitions::set_status(txn, competition_id, CompetitionStatus::Finished).await?;
    info!(competition_id, stage_id = last.id, champion = %entrant, "Competition finished");
    Ok(Champion {
        competition_id,
        stage_id: last.id,
        entrant,
    })
}

/// Winner of a round that must consist of exactly one match.
async fn single_final_winner(
    txn: &DatabaseTransaction,
    round: &rounds::Round,
) -> Result<Option<Entrant>, DomainError> {
    let round_matches = matches::list_by_round(txn, round.id).await?;
    if round_matches.len() != 1 {
        return Err(DomainError::validation(
            ValidationKind::Other("NO_SINGLE_FINAL".into()),
            format!(
                "round {} of stage {} has {} matches, expected a single final",
                round.round_number,
                round.stage_id,
                round_matches.len()
            ),
        ));
    }
    Ok(matches::winners_of_round(txn, round.id).await?.first().copied())
}

//! Services: bracket generators, standings and the progression controller.
//!
//! Each public entry point owns exactly one transaction via
//! [`crate::db::txn::with_txn`]; the `*_in_txn` functions run inside a
//! caller-supplied transaction so the controller can compose them.

pub mod double_elim;
pub mod entrant_resolver;
pub mod overview;
pub mod progression;
pub mod round_robin;
pub mod single_elim;
pub mod standings;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::{Bracket, Pairing};
use crate::errors::domain::DomainError;
use crate::repos::{matches, rounds};

pub use double_elim::{DoubleEliminationGenerator, DoubleElimOutcome};
pub use entrant_resolver::EntrantResolver;
pub use overview::StageOverview;
pub use progression::{AdvanceOutcome, Champion, GenerationOutcome, ProgressionService, Readiness};
pub use round_robin::RoundRobinGenerator;
pub use single_elim::SingleEliminationGenerator;
pub use standings::StandingsService;

/// A round created by a generator together with its match ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRound {
    pub round_id: i64,
    pub bracket: Bracket,
    pub round_number: i32,
    pub match_ids: Vec<i64>,
}

/// Insert a round and one match per pairing.
pub(crate) async fn persist_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
    round_number: i32,
    pairings: &[Pairing],
) -> Result<CreatedRound, DomainError> {
    let round = rounds::create_round(conn, stage_id, bracket, round_number).await?;
    let scheduled_at = OffsetDateTime::now_utc();

    let mut match_ids = Vec::with_capacity(pairings.len());
    for pairing in pairings {
        let m = matches::create_match(conn, round.id, *pairing, scheduled_at).await?;
        match_ids.push(m.id);
    }

    Ok(CreatedRound {
        round_id: round.id,
        bracket,
        round_number,
        match_ids,
    })
}

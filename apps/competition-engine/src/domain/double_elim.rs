//! Double elimination round planning.
//!
//! The service layer reads bracket state inside its transaction, builds a
//! [`BracketState`] and asks [`plan_double_elim`] what to create.

use serde::Serialize;

use crate::domain::{pair_consecutive, Entrant, Pairing};
use crate::errors::domain::{DomainError, ValidationKind};

/// Snapshot of a double elimination stage before generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketState {
    pub next_winners_round: i32,
    pub next_losers_round: i32,
    pub winners_entrants: Vec<Entrant>,
    /// Empty while `next_winners_round == 1`.
    pub losers_entrants: Vec<Entrant>,
}

/// A round to create in one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRound {
    pub round_number: i32,
    pub pairings: Vec<Pairing>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketPlan {
    /// Both brackets are down to one entrant: a single grand final match.
    GrandFinal(Pairing),
    Rounds {
        winners: Option<PlannedRound>,
        losers: Option<PlannedRound>,
    },
}

/// Decide which rounds the next call creates.
pub fn plan_double_elim(state: &BracketState) -> Result<BracketPlan, DomainError> {
    let nw = state.winners_entrants.len();
    let nl = state.losers_entrants.len();

    if let ([champion_side], [survivor]) = (&state.winners_entrants[..], &state.losers_entrants[..]) {
        return Ok(BracketPlan::GrandFinal(Pairing::new(*champion_side, *survivor)));
    }

    // A lone round-1 entrant still goes through pairing so it fails as odd.
    let winners = if nw > 1 || state.next_winners_round == 1 {
        let context = format!("winners bracket round {}", state.next_winners_round);
        Some(PlannedRound {
            round_number: state.next_winners_round,
            pairings: pair_consecutive(&state.winners_entrants, &context)?,
        })
    } else {
        None
    };

    let losers = if state.next_winners_round > 1 && nl > 0 {
        let context = format!("losers bracket round {}", state.next_losers_round);
        Some(PlannedRound {
            round_number: state.next_losers_round,
            pairings: pair_consecutive(&state.losers_entrants, &context)?,
        })
    } else {
        None
    };

    if winners.is_none() && losers.is_none() {
        return Err(DomainError::validation(
            ValidationKind::Other("BRACKETS_SETTLED".into()),
            format!(
                "nothing to generate: {nw} winners-bracket and {nl} losers-bracket entrants remain"
            ),
        ));
    }

    Ok(BracketPlan::Rounds { winners, losers })
}

/// Merge newly dropped entrants with losers-bracket survivors.
///
/// `dropped` are the losers of the previous winners round; those already
/// placed in a losers round (`already_in_losers`) are skipped so repeated
/// calls converge. Dropped entrants come first, then `survivors`.
pub fn merge_losers_entrants(
    dropped: &[Entrant],
    already_in_losers: &[Entrant],
    survivors: &[Entrant],
) -> Vec<Entrant> {
    dropped
        .iter()
        .filter(|e| !already_in_losers.contains(e))
        .chain(survivors.iter())
        .copied()
        .collect()
}

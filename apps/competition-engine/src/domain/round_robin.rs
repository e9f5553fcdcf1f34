//! Circle-method round robin scheduling.
//!
//! Position 0 stays fixed; after each round the remaining positions rotate
//! one step to the right (the last slot moves to position 1). For entrants
//! `[1, 2, 3, 4]` this yields `(1,4),(2,3)`, then `(1,3),(4,2)`, then
//! `(1,2),(3,4)`.
//!
//! Rotating left instead gives the same set of rounds, with rounds `2..n-1`
//! in reverse order.

use crate::domain::{Entrant, Pairing};
use crate::errors::domain::{DomainError, ValidationKind};

/// Index pairs for all `n - 1` rounds of an `n`-entrant round robin.
pub fn circle_schedule(n: usize) -> Result<Vec<Vec<(usize, usize)>>, DomainError> {
    if n == 0 {
        return Err(DomainError::validation(
            ValidationKind::NoParticipants,
            "round robin needs at least two participants, got 0",
        ));
    }
    if n % 2 != 0 {
        return Err(DomainError::odd_participants(n, "round robin stage"));
    }

    let mut idx: Vec<usize> = (0..n).collect();
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let round = (0..n / 2).map(|i| (idx[i], idx[n - 1 - i])).collect();
        rounds.push(round);
        idx[1..].rotate_right(1);
    }
    Ok(rounds)
}

/// Entrant pairings per round, in round order.
pub fn round_robin_schedule(entrants: &[Entrant]) -> Result<Vec<Vec<Pairing>>, DomainError> {
    let rounds = circle_schedule(entrants.len())?;
    Ok(rounds
        .into_iter()
        .map(|round| {
            round
                .into_iter()
                .map(|(a, b)| Pairing::new(entrants[a], entrants[b]))
                .collect()
        })
        .collect())
}

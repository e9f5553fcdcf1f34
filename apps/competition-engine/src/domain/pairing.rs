use serde::Serialize;

use crate::domain::Entrant;
use crate::errors::domain::{DomainError, ValidationKind};

/// One match to be created: first and second participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first: Entrant,
    pub second: Entrant,
}

impl Pairing {
    pub fn new(first: Entrant, second: Entrant) -> Self {
        Self { first, second }
    }
}

/// Pair entrants by consecutive index: `(e0, e1), (e2, e3), ...`.
///
/// No byes: an odd count is rejected. `context` names the bracket or round
/// in the error detail.
pub fn pair_consecutive(entrants: &[Entrant], context: &str) -> Result<Vec<Pairing>, DomainError> {
    if entrants.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoParticipants,
            format!("no participants to pair in {context}"),
        ));
    }
    if entrants.len() % 2 != 0 {
        return Err(DomainError::odd_participants(entrants.len(), context));
    }
    Ok(entrants
        .chunks_exact(2)
        .map(|pair| Pairing::new(pair[0], pair[1]))
        .collect())
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A competitor within a stage: exactly one of a user or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Entrant {
    User(i64),
    Team(i64),
}

impl Entrant {
    /// Build from the nullable column pair used by entrant-bearing tables.
    ///
    /// `row` names the offending record in the error detail.
    pub fn try_from_columns(
        user_id: Option<i64>,
        team_id: Option<i64>,
        row: &str,
    ) -> Result<Self, DomainError> {
        match (user_id, team_id) {
            (Some(user), None) => Ok(Entrant::User(user)),
            (None, Some(team)) => Ok(Entrant::Team(team)),
            (None, None) => Err(DomainError::malformed_entrant(format!(
                "{row} references neither a user nor a team"
            ))),
            (Some(_), Some(_)) => Err(DomainError::malformed_entrant(format!(
                "{row} references both a user and a team"
            ))),
        }
    }

    /// Column values `(user_id, team_id)` for persisting this entrant.
    pub fn columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            Entrant::User(id) => (Some(id), None),
            Entrant::Team(id) => (None, Some(id)),
        }
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entrant::User(id) => write!(f, "user:{id}"),
            Entrant::Team(id) => write!(f, "team:{id}"),
        }
    }
}

//! Competition repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::competitions_sea as competitions_adapter;
use crate::entities::competitions::{self, CompetitionStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub status: CompetitionStatus,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<Competition>, DomainError> {
    let competition = competitions_adapter::find_by_id(conn, competition_id).await?;
    Ok(competition.map(Competition::from))
}

/// Load a competition or fail with `NotFound(Competition)`
pub async fn require_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Competition, DomainError> {
    find_by_id(conn, competition_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Competition,
            format!("competition {competition_id} not found"),
        )
    })
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
    status: CompetitionStatus,
) -> Result<Competition, DomainError> {
    let dto = competitions_adapter::CompetitionUpdateStatus {
        competition_id,
        status,
    };
    let updated = competitions_adapter::update_status(conn, dto).await?;
    Ok(Competition::from(updated))
}

impl From<competitions::Model> for Competition {
    fn from(model: competitions::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
        }
    }
}

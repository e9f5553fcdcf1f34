//! Match and match-participant repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::match_participants_sea as participants_adapter;
use crate::adapters::matches_sea as matches_adapter;
use crate::domain::{Bracket, Entrant, MatchRecord, Pairing};
use crate::entities::{match_participants, matches};
use crate::errors::domain::DomainError;
use crate::repos::rounds;

/// Match domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i64,
    pub round_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Match {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchParticipant {
    pub id: i64,
    pub match_id: i64,
    pub entrant: Entrant,
    pub is_winner: bool,
    pub score: Option<i32>,
}

/// Matches of a round ordered by id
pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let rows = matches_adapter::find_all_by_round(conn, round_id).await?;
    Ok(rows.into_iter().map(Match::from).collect())
}

/// Matches of every round of a stage ordered by id
pub async fn list_by_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<Match>, DomainError> {
    let rows = matches_adapter::find_all_by_stage(conn, stage_id).await?;
    Ok(rows.into_iter().map(Match::from).collect())
}

/// Participants of the given matches ordered by match id, then participant id
pub async fn list_participants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<Vec<MatchParticipant>, DomainError> {
    let rows = participants_adapter::find_all_by_matches(conn, match_ids).await?;
    rows.into_iter().map(MatchParticipant::try_from).collect()
}

pub async fn count_incomplete_in_stage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<u64, DomainError> {
    Ok(matches_adapter::count_incomplete_by_stage(conn, stage_id).await?)
}

/// Create one match with both participants seated, no result recorded
pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    pairing: Pairing,
    scheduled_at: OffsetDateTime,
) -> Result<Match, DomainError> {
    let m = matches_adapter::create_match(
        conn,
        matches_adapter::MatchCreate {
            round_id,
            scheduled_at,
        },
    )
    .await?;

    for entrant in [pairing.first, pairing.second] {
        let (user_id, team_id) = entrant.columns();
        participants_adapter::create_participant(
            conn,
            participants_adapter::MatchParticipantCreate {
                match_id: m.id,
                user_id,
                team_id,
            },
        )
        .await?;
    }

    Ok(Match::from(m))
}

/// Entrants flagged as winners in a round, by match id then participant id
pub async fn winners_of_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Entrant>, DomainError> {
    let participants = round_participants(conn, round_id).await?;
    Ok(participants
        .into_iter()
        .filter(|p| p.is_winner)
        .map(|p| p.entrant)
        .collect())
}

/// Non-winners of the round's decided matches, by match id then participant id
pub async fn losers_of_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Entrant>, DomainError> {
    let participants = round_participants(conn, round_id).await?;
    let decided: Vec<i64> = participants
        .iter()
        .filter(|p| p.is_winner)
        .map(|p| p.match_id)
        .collect();
    Ok(participants
        .into_iter()
        .filter(|p| !p.is_winner && decided.contains(&p.match_id))
        .map(|p| p.entrant)
        .collect())
}

/// Every entrant seated in any round of `bracket` within the stage
pub async fn entrants_in_bracket<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
    bracket: Bracket,
) -> Result<Vec<Entrant>, DomainError> {
    let mut match_ids = Vec::new();
    for round in rounds::list_by_bracket(conn, stage_id, bracket).await? {
        match_ids.extend(list_by_round(conn, round.id).await?.into_iter().map(|m| m.id));
    }
    let participants = list_participants(conn, &match_ids).await?;
    Ok(participants.into_iter().map(|p| p.entrant).collect())
}

/// Results of every match of a stage, for standings
pub async fn stage_match_records<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<Vec<MatchRecord>, DomainError> {
    let match_ids: Vec<i64> = list_by_stage(conn, stage_id)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    let participants = list_participants(conn, &match_ids).await?;

    let mut records: Vec<MatchRecord> = Vec::with_capacity(match_ids.len());
    let mut current: Option<i64> = None;
    for p in participants {
        if current != Some(p.match_id) {
            records.push(MatchRecord {
                participants: Vec::with_capacity(2),
            });
            current = Some(p.match_id);
        }
        if let Some(last) = records.last_mut() {
            last.participants.push((p.entrant, p.is_winner));
        }
    }
    Ok(records)
}

async fn round_participants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<MatchParticipant>, DomainError> {
    let match_ids: Vec<i64> = list_by_round(conn, round_id)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    list_participants(conn, &match_ids).await
}

impl From<matches::Model> for Match {
    fn from(model: matches::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            scheduled_at: model.scheduled_at,
            completed_at: model.completed_at,
        }
    }
}

impl TryFrom<match_participants::Model> for MatchParticipant {
    type Error = DomainError;

    fn try_from(model: match_participants::Model) -> Result<Self, Self::Error> {
        let entrant = Entrant::try_from_columns(
            model.user_id,
            model.team_id,
            &format!("match participant {}", model.id),
        )?;
        Ok(Self {
            id: model.id,
            match_id: model.match_id,
            entrant,
            is_winner: model.is_winner,
            score: model.score,
        })
    }
}

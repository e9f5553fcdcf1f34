use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::repos::matches::{self, Match, MatchParticipant};
use crate::repos::participants::{self, StageParticipant};
use crate::repos::rounds::{self, Round};
use crate::repos::stages::{self, Stage};

#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub fixture: Match,
    pub participants: Vec<MatchParticipant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    #[serde(flatten)]
    pub round: Round,
    pub matches: Vec<MatchView>,
}

/// Everything stored for a stage: roster, rounds, matches and participants.
#[derive(Debug, Clone, Serialize)]
pub struct StageOverview {
    pub stage: Stage,
    pub roster: Vec<StageParticipant>,
    pub rounds: Vec<RoundView>,
}

pub async fn load_stage_overview<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stage_id: i64,
) -> Result<StageOverview, DomainError> {
    let stage = stages::require_stage(conn, stage_id).await?;
    let roster = participants::list_roster(conn, stage_id).await?;

    let mut round_views = Vec::new();
    for round in rounds::list_by_stage(conn, stage_id).await? {
        let fixtures = matches::list_by_round(conn, round.id).await?;
        let ids: Vec<i64> = fixtures.iter().map(|m| m.id).collect();
        let mut seated = matches::list_participants(conn, &ids).await?;

        let mut match_views = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            let (mine, rest): (Vec<_>, Vec<_>) =
                seated.into_iter().partition(|p| p.match_id == fixture.id);
            seated = rest;
            match_views.push(MatchView {
                fixture,
                participants: mine,
            });
        }
        round_views.push(RoundView {
            round,
            matches: match_views,
        });
    }

    Ok(StageOverview {
        stage,
        roster,
        rounds: round_views,
    })
}

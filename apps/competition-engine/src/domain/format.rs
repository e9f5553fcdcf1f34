use serde::{Deserialize, Serialize};

use crate::entities::competition_stages::DbStageFormat;
use crate::entities::rounds::DbBracket;

/// Scheduling format of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageFormat {
    RoundRobin,
    SingleElimination,
    DoubleElimination,
}

/// Bracket tag of a round. Round robin and single elimination rounds are `Unbracketed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    Unbracketed,
    Winners,
    Losers,
    Grand,
}

impl Bracket {
    pub fn label(self) -> &'static str {
        match self {
            Bracket::Unbracketed => "none",
            Bracket::Winners => "winners bracket",
            Bracket::Losers => "losers bracket",
            Bracket::Grand => "grand final",
        }
    }
}

impl From<DbStageFormat> for StageFormat {
    fn from(v: DbStageFormat) -> Self {
        match v {
            DbStageFormat::SingleElimination => StageFormat::SingleElimination,
            DbStageFormat::DoubleElimination => StageFormat::DoubleElimination,
            DbStageFormat::RoundRobin => StageFormat::RoundRobin,
        }
    }
}

impl From<StageFormat> for DbStageFormat {
    fn from(v: StageFormat) -> Self {
        match v {
            StageFormat::SingleElimination => DbStageFormat::SingleElimination,
            StageFormat::DoubleElimination => DbStageFormat::DoubleElimination,
            StageFormat::RoundRobin => DbStageFormat::RoundRobin,
        }
    }
}

impl From<DbBracket> for Bracket {
    fn from(v: DbBracket) -> Self {
        match v {
            DbBracket::NoBracket => Bracket::Unbracketed,
            DbBracket::Winners => Bracket::Winners,
            DbBracket::Losers => Bracket::Losers,
            DbBracket::Grand => Bracket::Grand,
        }
    }
}

impl From<Bracket> for DbBracket {
    fn from(v: Bracket) -> Self {
        match v {
            Bracket::Unbracketed => DbBracket::NoBracket,
            Bracket::Winners => DbBracket::Winners,
            Bracket::Losers => DbBracket::Losers,
            Bracket::Grand => DbBracket::Grand,
        }
    }
}

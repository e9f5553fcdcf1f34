use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted tournament format code (`tourney_format_id` upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DbStageFormat {
    #[sea_orm(num_value = 1)]
    SingleElimination,
    #[sea_orm(num_value = 2)]
    DoubleElimination,
    #[sea_orm(num_value = 3)]
    RoundRobin,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "competition_stages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "competition_id")]
    pub competition_id: i64,
    #[sea_orm(column_name = "stage_name")]
    pub stage_name: String,
    #[sea_orm(column_name = "stage_order")]
    pub stage_order: i32,
    pub format: DbStageFormat,
    #[sea_orm(column_name = "participants_at_start")]
    pub participants_at_start: i32,
    #[sea_orm(column_name = "participants_at_end")]
    pub participants_at_end: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competitions::Entity",
        from = "Column::CompetitionId",
        to = "super::competitions::Column::Id"
    )]
    Competition,
    #[sea_orm(has_many = "super::stage_participants::Entity")]
    StageParticipants,
    #[sea_orm(has_many = "super::rounds::Entity")]
    Rounds,
}

impl Related<super::competitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competition.def()
    }
}

impl Related<super::stage_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StageParticipants.def()
    }
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rounds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

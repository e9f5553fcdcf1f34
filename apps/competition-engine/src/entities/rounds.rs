use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum DbBracket {
    #[sea_orm(string_value = "N")]
    NoBracket,
    #[sea_orm(string_value = "W")]
    Winners,
    #[sea_orm(string_value = "L")]
    Losers,
    #[sea_orm(string_value = "G")]
    Grand,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "stage_id")]
    pub stage_id: i64,
    #[sea_orm(column_name = "round_number")]
    pub round_number: i32,
    pub bracket: DbBracket,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competition_stages::Entity",
        from = "Column::StageId",
        to = "super::competition_stages::Column::Id"
    )]
    Stage,
    #[sea_orm(has_many = "super::matches::Entity")]
    Matches,
}

impl Related<super::competition_stages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stage.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

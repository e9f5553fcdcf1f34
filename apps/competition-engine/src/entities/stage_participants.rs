use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stage_participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "stage_id")]
    pub stage_id: i64,
    #[sea_orm(column_name = "user_id")]
    pub user_id: Option<i64>,
    #[sea_orm(column_name = "team_id")]
    pub team_id: Option<i64>,
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
}

impl Related<super::competition_stages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Competitions {
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CompetitionStages {
    Table,
    Id,
    CompetitionId,
    StageName,
    StageOrder,
    Format,
    ParticipantsAtStart,
    ParticipantsAtEnd,
}

#[derive(Iden)]
enum StageParticipants {
    Table,
    Id,
    StageId,
    UserId,
    TeamId,
    CreatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    StageId,
    RoundNumber,
    Bracket,
    CreatedAt,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    RoundId,
    ScheduledAt,
    CompletedAt,
}

#[derive(Iden)]
enum MatchParticipants {
    Table,
    Id,
    MatchId,
    UserId,
    TeamId,
    IsWinner,
    Score,
}

/// Exactly one of user_id / team_id must be set on entrant-bearing rows.
fn exactly_one_entrant_ref() -> SimpleExpr {
    Expr::cust("(user_id IS NULL) <> (team_id IS NULL)")
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // competitions
        manager
            .create_table(
                Table::create()
                    .table(Competitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Competitions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Competitions::Name).string().not_null())
                    .col(
                        ColumnDef::new(Competitions::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Competitions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Competitions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // competition_stages
        manager
            .create_table(
                Table::create()
                    .table(CompetitionStages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompetitionStages::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(CompetitionStages::CompetitionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompetitionStages::StageName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompetitionStages::StageOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompetitionStages::Format).integer().not_null())
                    .col(
                        ColumnDef::new(CompetitionStages::ParticipantsAtStart)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompetitionStages::ParticipantsAtEnd)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_competition_stages_competition_id")
                            .from(CompetitionStages::Table, CompetitionStages::CompetitionId)
                            .to(Competitions::Table, Competitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_competition_stages_competition_order")
                    .table(CompetitionStages::Table)
                    .col(CompetitionStages::CompetitionId)
                    .col(CompetitionStages::StageOrder)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // stage_participants
        manager
            .create_table(
                Table::create()
                    .table(StageParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StageParticipants::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(StageParticipants::StageId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StageParticipants::UserId).big_integer().null())
                    .col(ColumnDef::new(StageParticipants::TeamId).big_integer().null())
                    .col(
                        ColumnDef::new(StageParticipants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .check(exactly_one_entrant_ref())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_participants_stage_id")
                            .from(StageParticipants::Table, StageParticipants::StageId)
                            .to(CompetitionStages::Table, CompetitionStages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_stage_participants_stage_id")
                    .table(StageParticipants::Table)
                    .col(StageParticipants::StageId)
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rounds::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rounds::StageId).big_integer().not_null())
                    .col(ColumnDef::new(Rounds::RoundNumber).integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::Bracket)
                            .string_len(1)
                            .not_null()
                            .default("N"),
                    )
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_stage_id")
                            .from(Rounds::Table, Rounds::StageId)
                            .to(CompetitionStages::Table, CompetitionStages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backstop against concurrent or repeated generation for one stage.
        manager
            .create_index(
                Index::create()
                    .name("ux_rounds_stage_bracket_number")
                    .table(Rounds::Table)
                    .col(Rounds::StageId)
                    .col(Rounds::Bracket)
                    .col(Rounds::RoundNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Matches::RoundId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Matches::ScheduledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_round_id")
                            .from(Matches::Table, Matches::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_matches_round_id")
                    .table(Matches::Table)
                    .col(Matches::RoundId)
                    .to_owned(),
            )
            .await?;

        // match_participants
        manager
            .create_table(
                Table::create()
                    .table(MatchParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchParticipants::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(MatchParticipants::MatchId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MatchParticipants::UserId).big_integer().null())
                    .col(ColumnDef::new(MatchParticipants::TeamId).big_integer().null())
                    .col(
                        ColumnDef::new(MatchParticipants::IsWinner)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(MatchParticipants::Score).integer().null())
                    .check(exactly_one_entrant_ref())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_participants_match_id")
                            .from(MatchParticipants::Table, MatchParticipants::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_match_participants_match_id")
                    .table(MatchParticipants::Table)
                    .col(MatchParticipants::MatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(
                Table::drop()
                    .table(MatchParticipants::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(StageParticipants::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CompetitionStages::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Competitions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

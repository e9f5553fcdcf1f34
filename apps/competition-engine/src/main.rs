use std::process::ExitCode;

use clap::{Parser, Subcommand};
use competition_engine::db::txn_policy::{set_txn_policy, TxnPolicy};
use competition_engine::{
    bootstrap_db, connect_db, AppError, DbKind, DbProfile, ProgressionService, StandingsService,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

mod telemetry;

use telemetry::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "competition-engine", about = "Operate tournament stage progression")]
struct Cli {
    /// Database engine: postgres | sqlite | memory
    #[arg(long, default_value = "postgres")]
    db: DbKind,

    /// Database profile: prod | test
    #[arg(long = "env", default_value = "prod")]
    profile: DbProfile,

    /// Run pending migrations before the command (always on for memory)
    #[arg(long)]
    migrate: bool,

    /// Roll back every transaction instead of committing
    #[arg(long)]
    dry_run: bool,

    #[arg(long, value_enum, default_value = "json")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the next round(s) of a stage according to its format
    Generate {
        #[arg(long)]
        stage: i64,
    },
    /// Move the top finishers of a completed round robin stage into the next stage
    Advance {
        #[arg(long)]
        stage: i64,
    },
    /// Ranked standings of a stage; with --top, the N entrants that would
    /// advance into this stage from the round robin stage before it
    Standings {
        #[arg(long)]
        stage: i64,
        #[arg(long)]
        top: Option<usize>,
    },
    /// Whether the next round of a stage can be generated
    Status {
        #[arg(long)]
        stage: i64,
    },
    /// Roster, rounds and matches of a stage
    Show {
        #[arg(long)]
        stage: i64,
    },
    /// Declare the champion and mark the competition finished
    Finish {
        #[arg(long)]
        competition: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_format);

    if cli.dry_run {
        set_txn_policy(TxnPolicy::RollbackOnOk);
    }

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let db = open(cli.db, cli.profile, cli.migrate).await?;
    let progression = ProgressionService::new(db.clone());

    match cli.command {
        Command::Generate { stage } => render(&progression.generate_next_round(stage).await?),
        Command::Advance { stage } => render(&progression.advance_after_round_robin(stage).await?),
        Command::Standings { stage, top } => {
            let standings = StandingsService::new(db);
            match top {
                Some(n) => render(&standings.top_n_from_completed_round_robin(stage, n).await?),
                None => render(&standings.stage_standings(stage).await?),
            }
        }
        Command::Status { stage } => render(&progression.can_generate_next_round(stage).await?),
        Command::Show { stage } => render(&progression.stage_overview(stage).await?),
        Command::Finish { competition } => {
            render(&progression.finish_competition(competition).await?)
        }
    }
}

async fn open(kind: DbKind, profile: DbProfile, migrate: bool) -> Result<DatabaseConnection, AppError> {
    if migrate || kind == DbKind::SqliteMemory {
        bootstrap_db(kind, profile).await
    } else {
        connect_db(kind, profile).await
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("failed to serialize output: {e}")))
}

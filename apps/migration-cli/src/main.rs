use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use competition_engine::{connect_db, AppError, DbKind, DbProfile};
use migration::{count_applied_migrations, migrate, MigrationCommand};
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Competition database migration tool")]
struct Args {
    #[arg(value_enum)]
    command: Command,

    /// Database profile: prod | test
    #[arg(short, long = "env", default_value = "test")]
    profile: DbProfile,

    /// Database engine: postgres | sqlite
    #[arg(short, long, default_value = "postgres")]
    db: DbKind,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    // A fresh in-memory database is gone when the process exits.
    if args.db == DbKind::SqliteMemory {
        eprintln!("in-memory SQLite is not supported here; use --db postgres or --db sqlite");
        return ExitCode::from(2);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "Migration failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let db = connect_db(args.db, args.profile).await?;
    migrate(&db, args.command.into()).await?;

    let applied = count_applied_migrations(&db).await?;
    info!(command = ?args.command, applied, "Migration finished");
    Ok(())
}

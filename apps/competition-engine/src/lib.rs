#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use config::db::{db_url, DbKind, DbProfile};
pub use db::txn::with_txn;
pub use domain::{Bracket, Entrant, Standing, StageFormat};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use services::{
    AdvanceOutcome, Champion, CreatedRound, DoubleElimOutcome, DoubleEliminationGenerator,
    EntrantResolver, GenerationOutcome, ProgressionService, Readiness, RoundRobinGenerator,
    SingleEliminationGenerator, StandingsService,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}

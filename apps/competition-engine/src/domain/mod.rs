//! Domain layer: pure pairing, bracket and standings logic. No I/O.

pub mod double_elim;
pub mod entrant;
pub mod format;
pub mod pairing;
pub mod round_robin;
pub mod standings;

#[cfg(test)]
mod tests_props_pairing;

pub use double_elim::{plan_double_elim, BracketPlan, BracketState};
pub use entrant::Entrant;
pub use format::{Bracket, StageFormat};
pub use pairing::{pair_consecutive, Pairing};
pub use round_robin::{circle_schedule, round_robin_schedule};
pub use standings::{rank_standings, MatchRecord, Standing};

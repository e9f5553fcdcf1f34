#![allow(dead_code)]

pub mod db;
pub mod results;

pub use db::test_db;
pub use fixtures::{entrant_pairs, teams, users};

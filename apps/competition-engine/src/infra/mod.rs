//! Infrastructure layer - database connections and error translation.

pub mod db;
pub mod db_errors;

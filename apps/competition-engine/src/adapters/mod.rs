//! SeaORM adapters: raw queries over the entities, returning `DbErr`.

pub mod competitions_sea;
pub mod match_participants_sea;
pub mod matches_sea;
pub mod rounds_sea;
pub mod stage_participants_sea;
pub mod stages_sea;

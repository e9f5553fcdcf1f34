//! Repository layer: domain-typed functions generic over `ConnectionTrait`.

pub mod competitions;
pub mod matches;
pub mod participants;
pub mod rounds;
pub mod stages;

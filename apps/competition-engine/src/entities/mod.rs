pub mod competition_stages;
pub mod competitions;
pub mod match_participants;
pub mod matches;
pub mod rounds;
pub mod stage_participants;

pub use competition_stages::Entity as CompetitionStages;
pub use competition_stages::Model as CompetitionStage;
pub use competitions::Entity as Competitions;
pub use competitions::Model as Competition;
pub use match_participants::Entity as MatchParticipants;
pub use match_participants::Model as MatchParticipant;
pub use matches::Entity as Matches;
pub use matches::Model as Match;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use stage_participants::Entity as StageParticipants;
pub use stage_participants::Model as StageParticipant;

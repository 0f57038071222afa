pub mod assignments;
pub mod auth;
pub mod entries;
pub mod evaluations;
pub mod rubric;
pub mod scoreboard;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use entries::EntryService;
pub use evaluations::EvaluationService;
pub use rubric::RubricService;
pub use scoreboard::ScoreboardService;
pub use users::UserService;

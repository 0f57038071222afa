pub mod assignments;

pub mod auth;

pub mod entries;

pub mod evaluations;

pub mod rubric;

pub mod scoreboard;

pub mod users;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use entries::configure_entries_routes;
pub use evaluations::configure_evaluations_routes;
pub use rubric::configure_rubric_routes;
pub use scoreboard::configure_scoreboard_routes;
pub use users::configure_user_routes;

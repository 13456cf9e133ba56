// Public API - what other modules can use
pub use handlers::{get_random_stadium, get_sports, get_stadiums};
pub use models::{Coordinate, LeagueFilter, StadiumRecord};
pub use repository::{JsonStadiumRepository, StadiumProvider};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;

// Public API - what other modules can use
pub use handlers::{get_config, get_high_scores, get_last_result, set_map_token};
pub use models::{push_high_score, HighScoreEntry, LastGameResult, MAX_HIGH_SCORES};
pub use store::{GameStore, InMemoryGameStore, JsonFileStore};

// Internal modules
mod handlers;
pub mod models;
pub mod store;

// Public API - what other modules can use
pub use cleanup_task::{start_cleanup_task, CleanupConfig};
pub use controller::GameController;
pub use handlers::{
    create_game, get_game, next_round, place_guess, reveal_hint, skip_round, start_round,
    submit_guess,
};
pub use manager::GameManager;
pub use session::{
    GameError, GameSession, NextStep, RoundOutcome, RoundPhase, RoundResult, SessionConfig,
};
pub use types::{GameSummary, NextOutcome, RoundView, SessionView, StadiumProfile};

// Internal modules
mod cleanup_task;
mod controller;
mod handlers;
mod manager;
pub mod session;
mod timer;
mod types;

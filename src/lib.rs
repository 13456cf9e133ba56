// Library crate for the Groundhopper guessing game server
// This file exposes the public API for integration tests

pub mod game;
pub mod map;
pub mod scoring;
pub mod shared;
pub mod stadium;
pub mod storage;

// Re-export commonly used types for easier access in tests
pub use game::{GameController, GameManager, GameSession, RoundPhase, SessionConfig};
pub use map::{MapSurface, NoopMapSurface, RecordingMapSurface};
pub use shared::{AppError, AppState};
pub use stadium::{JsonStadiumRepository, LeagueFilter, StadiumProvider, StadiumRecord};
pub use storage::{GameStore, InMemoryGameStore, JsonFileStore};

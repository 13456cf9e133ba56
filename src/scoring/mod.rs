// Public API
pub use engine::{
    compute_score, Breakdown, Difficulty, DifficultyProfile, HintKind, ScoreBreakdown,
    DEFAULT_PERFECT_ZONE_RADIUS_M,
};
pub use format::{format_distance, format_time};
pub use geo::haversine_distance_m;

// Internal modules
mod engine;
mod format;
mod geo;

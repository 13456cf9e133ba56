use serde::{Deserialize, Serialize};

use super::session::{GameSession, RoundPhase, RoundResult};
use crate::scoring::{Difficulty, HintKind};
use crate::stadium::StadiumRecord;

/// What the player sees about the stadium in play: enough to guess from,
/// never the answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StadiumProfile {
    pub team: String,
    pub league: String,
    pub sport: String,
}

impl From<&StadiumRecord> for StadiumProfile {
    fn from(stadium: &StadiumRecord) -> Self {
        Self {
            team: stadium.team.clone(),
            league: stadium.league.clone(),
            sport: stadium.sport.clone(),
        }
    }
}

/// Snapshot handed out when a round starts.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub round: u32,
    pub total_rounds: u32,
    pub total_score: u32,
    pub stadium: StadiumProfile,
}

/// End-of-game summary: the cumulative score plus every round's result.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub total_score: u32,
    pub results: Vec<RoundResult>,
}

/// What `next_round` produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextOutcome {
    NextRound(RoundView),
    GameOver(GameSummary),
}

/// Full read-only view of a session for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: RoundPhase,
    pub round: u32,
    pub total_rounds: u32,
    pub total_score: u32,
    pub league: String,
    pub difficulty: Difficulty,
    pub elapsed_seconds: u64,
    pub hints_revealed: Vec<HintKind>,
    pub has_pending_guess: bool,
    pub stadium: Option<StadiumProfile>,
    pub results: Vec<RoundResult>,
}

impl SessionView {
    pub fn from_session(session: &GameSession, elapsed_seconds: u64) -> Self {
        Self {
            phase: session.phase(),
            round: session.current_round(),
            total_rounds: session.total_rounds(),
            total_score: session.total_score(),
            league: session.league().to_string(),
            difficulty: session.difficulty(),
            elapsed_seconds,
            hints_revealed: session.hints_used().to_vec(),
            has_pending_guess: session.pending_guess().is_some(),
            stadium: session.current_stadium().map(StadiumProfile::from),
            results: session.round_results().to_vec(),
        }
    }
}

/// Request payload for creating a new game session
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub league: Option<String>,
    pub rounds: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

/// Response for game session creation
#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub session_id: String,
    pub round: RoundView,
}

/// Request payload for revealing a hint
#[derive(Debug, Deserialize)]
pub struct HintRequest {
    pub hint: HintKind,
}

/// Response carrying a revealed hint value (null when the record has none)
#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub hint: HintKind,
    pub value: Option<serde_json::Value>,
}

/// Request payload for the map surface's guess-placed callback
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub lat: f64,
    pub lng: f64,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{self, Difficulty, HintKind, ScoreBreakdown};
use crate::stadium::{Coordinate, LeagueFilter, StadiumRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A state-machine guard rejected the operation. Nothing was mutated.
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No round in flight; the next stadium fetch may begin.
    Idle,
    /// A stadium is on display, the timer is running.
    RoundActive,
    /// The round was submitted or skipped; awaiting advance.
    RoundResolved,
    /// Terminal. Results are persisted, no further transitions.
    GameOver,
}

/// Session parameters read once at game start.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub league: LeagueFilter,
    pub total_rounds: u32,
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            league: LeagueFilter::All,
            total_rounds: 5,
            difficulty: Difficulty::Medium,
        }
    }
}

/// Outcome of one finished round. Created exactly once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub stadium: String,
    pub team: String,
    pub score: u32,
    /// None means the round was skipped.
    pub distance_m: Option<f64>,
    pub time_seconds: u64,
    pub hints_used: u32,
    pub skipped: bool,
}

/// What a resolved round hands back to the caller: the recorded result,
/// the true location for the map to reveal, and the score breakdown
/// (absent for skips).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub actual: Coordinate,
    pub breakdown: Option<ScoreBreakdown>,
}

/// Where `advance` landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    NextRound,
    GameOver,
}

/// The owned, explicit state of one game: round sequencing, accumulated
/// score, and the per-round scratch state. Pure data with pure transitions;
/// fetching, timing, rendering, and persistence live in the controller.
///
/// Every transition either fully completes or is rejected before any
/// mutation occurs.
#[derive(Debug, Clone)]
pub struct GameSession {
    league: LeagueFilter,
    difficulty: Difficulty,
    total_rounds: u32,
    current_round: u32,
    total_score: u32,
    phase: RoundPhase,
    round_results: Vec<RoundResult>,
    used_stadium_ids: Vec<String>,
    current_stadium: Option<StadiumRecord>,
    hints_used: Vec<HintKind>,
    pending_guess: Option<Coordinate>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            league: config.league,
            difficulty: config.difficulty,
            // A game is at least one round long
            total_rounds: config.total_rounds.max(1),
            current_round: 1,
            total_score: 0,
            phase: RoundPhase::Idle,
            round_results: Vec::new(),
            used_stadium_ids: Vec::new(),
            current_stadium: None,
            hints_used: Vec::new(),
            pending_guess: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn league(&self) -> LeagueFilter {
        self.league
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn round_results(&self) -> &[RoundResult] {
        &self.round_results
    }

    pub fn used_stadium_ids(&self) -> &[String] {
        &self.used_stadium_ids
    }

    pub fn current_stadium(&self) -> Option<&StadiumRecord> {
        self.current_stadium.as_ref()
    }

    pub fn hints_used(&self) -> &[HintKind] {
        &self.hints_used
    }

    pub fn pending_guess(&self) -> Option<Coordinate> {
        self.pending_guess
    }

    /// Enters `RoundActive` with the given stadium, resetting all per-round
    /// state and marking the stadium id as used for the rest of the session.
    pub fn begin_round(&mut self, stadium: StadiumRecord) -> Result<(), GameError> {
        if self.phase != RoundPhase::Idle {
            return Err(GameError::InvalidTransition(
                "a round can only start from idle",
            ));
        }

        self.hints_used.clear();
        self.pending_guess = None;
        self.used_stadium_ids.push(stadium.id.clone());
        self.current_stadium = Some(stadium);
        self.phase = RoundPhase::RoundActive;
        Ok(())
    }

    /// Reveals a hint kind, at most once per round; re-revealing the same
    /// kind is a no-op that returns the value again. The difficulty's hint
    /// budget caps how many distinct kinds may be revealed.
    pub fn reveal_hint(
        &mut self,
        kind: HintKind,
    ) -> Result<Option<serde_json::Value>, GameError> {
        if self.phase != RoundPhase::RoundActive {
            return Err(GameError::InvalidTransition(
                "hints can only be revealed during an active round",
            ));
        }

        if !self.hints_used.contains(&kind) {
            if self.hints_used.len() >= self.difficulty.profile().max_hints {
                return Err(GameError::InvalidTransition(
                    "hint limit reached for this difficulty",
                ));
            }
            self.hints_used.push(kind);
        }

        Ok(self
            .current_stadium
            .as_ref()
            .and_then(|s| s.hint(kind))
            .cloned())
    }

    /// Records the player's pin position. Only the latest placement counts.
    pub fn place_guess(&mut self, guess: Coordinate) -> Result<(), GameError> {
        if self.phase != RoundPhase::RoundActive {
            return Err(GameError::InvalidTransition(
                "a guess can only be placed during an active round",
            ));
        }

        self.pending_guess = Some(guess);
        Ok(())
    }

    /// Scores the pending guess and resolves the round.
    pub fn submit_guess(&mut self, elapsed_seconds: u64) -> Result<RoundOutcome, GameError> {
        if self.phase != RoundPhase::RoundActive {
            return Err(GameError::InvalidTransition(
                "only an active round can be submitted",
            ));
        }
        let guess = self
            .pending_guess
            .ok_or(GameError::InvalidTransition("no guess has been placed"))?;
        let stadium = self
            .current_stadium
            .as_ref()
            .ok_or(GameError::InvalidTransition("no stadium in play"))?;

        let breakdown = scoring::compute_score(
            guess.lat,
            guess.lng,
            stadium.coordinates.lat,
            stadium.coordinates.lng,
            elapsed_seconds,
            &self.hints_used,
            self.difficulty,
            stadium.perfect_zone_radius_m(),
        );

        let result = RoundResult {
            stadium: stadium.name.clone(),
            team: stadium.team.clone(),
            score: breakdown.score,
            distance_m: Some(breakdown.distance_m),
            time_seconds: elapsed_seconds,
            hints_used: self.hints_used.len() as u32,
            skipped: false,
        };
        let actual = stadium.coordinates;

        self.total_score += result.score;
        self.round_results.push(result.clone());
        self.phase = RoundPhase::RoundResolved;

        Ok(RoundOutcome {
            result,
            actual,
            breakdown: Some(breakdown),
        })
    }

    /// Resolves the round without scoring it.
    pub fn skip(&mut self, elapsed_seconds: u64) -> Result<RoundOutcome, GameError> {
        if self.phase != RoundPhase::RoundActive {
            return Err(GameError::InvalidTransition(
                "only an active round can be skipped",
            ));
        }
        let stadium = self
            .current_stadium
            .as_ref()
            .ok_or(GameError::InvalidTransition("no stadium in play"))?;

        let result = RoundResult {
            stadium: stadium.name.clone(),
            team: stadium.team.clone(),
            score: 0,
            distance_m: None,
            time_seconds: elapsed_seconds,
            hints_used: self.hints_used.len() as u32,
            skipped: true,
        };
        let actual = stadium.coordinates;

        self.round_results.push(result.clone());
        self.phase = RoundPhase::RoundResolved;

        Ok(RoundOutcome {
            result,
            actual,
            breakdown: None,
        })
    }

    /// Leaves `RoundResolved`: either back to `Idle` for the next round's
    /// stadium fetch, or into terminal `GameOver` after the final round.
    pub fn advance(&mut self) -> Result<NextStep, GameError> {
        match self.phase {
            RoundPhase::RoundResolved => {}
            RoundPhase::GameOver => {
                return Err(GameError::InvalidTransition("the game is already over"))
            }
            _ => {
                return Err(GameError::InvalidTransition(
                    "only a resolved round can be advanced",
                ))
            }
        }

        if self.current_round < self.total_rounds {
            self.current_round += 1;
            self.phase = RoundPhase::Idle;
            Ok(NextStep::NextRound)
        } else {
            self.phase = RoundPhase::GameOver;
            Ok(NextStep::GameOver)
        }
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::session::{GameSession, NextStep, RoundOutcome, RoundPhase, SessionConfig};
use super::timer::RoundTimer;
use super::types::{GameSummary, NextOutcome, RoundView, SessionView, StadiumProfile};
use crate::map::MapSurface;
use crate::scoring::{format_distance, format_time, HintKind};
use crate::shared::AppError;
use crate::stadium::{Coordinate, StadiumProvider};
use crate::storage::{push_high_score, GameStore, HighScoreEntry, LastGameResult};

/// Session state plus the one live timer, guarded together.
struct ControllerInner {
    session: GameSession,
    timer: Option<RoundTimer>,
}

/// Orchestrates one game session against the injected collaborators: the
/// stadium provider, the map surface, and the persistence store.
///
/// Every operation funnels through a single lock, so racing calls (two
/// round starts, a submit against a skip) serialize, and the session's
/// phase gates reject the loser instead of corrupting state.
pub struct GameController {
    inner: Mutex<ControllerInner>,
    stadiums: Arc<dyn StadiumProvider + Send + Sync>,
    map: Arc<dyn MapSurface>,
    store: Arc<dyn GameStore + Send + Sync>,
    last_activity: std::sync::Mutex<Instant>,
}

impl GameController {
    pub fn new(
        config: SessionConfig,
        stadiums: Arc<dyn StadiumProvider + Send + Sync>,
        map: Arc<dyn MapSurface>,
        store: Arc<dyn GameStore + Send + Sync>,
    ) -> Self {
        Self {
            inner: Mutex::new(ControllerInner {
                session: GameSession::new(config),
                timer: None,
            }),
            stadiums,
            map,
            store,
            last_activity: std::sync::Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_activity.lock().unwrap() = Instant::now();
    }

    /// Time since the last player-driven operation, for stale-session cleanup.
    pub fn idle_for(&self) -> Duration {
        self.last_activity.lock().unwrap().elapsed()
    }

    /// Starts the current round: resets the map, fetches an unused stadium,
    /// and starts the elapsed-time counter. Only valid from `Idle`, which
    /// also serializes racing start attempts.
    #[instrument(skip(self))]
    pub async fn start_round(&self) -> Result<RoundView, AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        self.begin_round_locked(&mut inner).await
    }

    async fn begin_round_locked(
        &self,
        inner: &mut ControllerInner,
    ) -> Result<RoundView, AppError> {
        if inner.session.phase() != RoundPhase::Idle {
            return Err(AppError::InvalidTransition(
                "a round can only start from idle".to_string(),
            ));
        }

        let league = inner.session.league();
        self.map.reset(league);

        let stadium = self
            .stadiums
            .random_stadium(league, inner.session.used_stadium_ids())
            .await?
            .ok_or_else(|| {
                AppError::DataUnavailable(format!("no unused stadium left for league {}", league))
            })?;

        debug!(
            stadium_id = %stadium.id,
            round = inner.session.current_round(),
            "Starting round"
        );

        let profile = StadiumProfile::from(&stadium);
        inner.session.begin_round(stadium)?;

        // One live ticker per round; a stale one from a failed path is
        // stopped before the replacement starts.
        if let Some(mut stale) = inner.timer.take() {
            stale.stop();
        }
        inner.timer = Some(RoundTimer::start());

        Ok(RoundView {
            round: inner.session.current_round(),
            total_rounds: inner.session.total_rounds(),
            total_score: inner.session.total_score(),
            stadium: profile,
        })
    }

    /// Reveals a hint for the active round. Re-revealing a kind is a no-op.
    #[instrument(skip(self))]
    pub async fn reveal_hint(
        &self,
        kind: HintKind,
    ) -> Result<Option<serde_json::Value>, AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        let value = inner.session.reveal_hint(kind)?;
        debug!(hint = %kind, "Hint revealed");
        Ok(value)
    }

    /// Callback target for the map surface: the player placed or dragged the
    /// pin. Only the latest placement counts.
    pub async fn place_guess(&self, lat: f64, lng: f64) -> Result<(), AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        inner.session.place_guess(Coordinate { lat, lng })?;
        debug!(lat, lng, "Guess placed");
        Ok(())
    }

    /// Scores the pending guess and resolves the round. Rejected without
    /// side effects when no guess is pending.
    #[instrument(skip(self))]
    pub async fn submit_guess(&self) -> Result<RoundOutcome, AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;

        let elapsed = inner.timer.as_ref().map_or(0, RoundTimer::elapsed_seconds);
        let outcome = inner.session.submit_guess(elapsed)?;

        // The round is resolved; the ticker must not outlive it.
        if let Some(mut timer) = inner.timer.take() {
            timer.stop();
        }

        self.map
            .show_correct_location(outcome.actual.lat, outcome.actual.lng);

        let distance_display = outcome
            .result
            .distance_m
            .map(format_distance)
            .unwrap_or_default();
        info!(
            round = inner.session.current_round(),
            score = outcome.result.score,
            distance = %distance_display,
            time = %format_time(outcome.result.time_seconds),
            "Round submitted"
        );

        Ok(outcome)
    }

    /// Resolves the round without scoring. The correct location is still
    /// revealed on the map.
    #[instrument(skip(self))]
    pub async fn skip_round(&self) -> Result<RoundOutcome, AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;

        let elapsed = inner.timer.as_ref().map_or(0, RoundTimer::elapsed_seconds);
        let outcome = inner.session.skip(elapsed)?;

        if let Some(mut timer) = inner.timer.take() {
            timer.stop();
        }

        self.map
            .show_correct_location(outcome.actual.lat, outcome.actual.lng);

        info!(
            round = inner.session.current_round(),
            time = %format_time(outcome.result.time_seconds),
            "Round skipped"
        );

        Ok(outcome)
    }

    /// Advances past a resolved round: either starts the next one or ends
    /// the game and persists the results. `GameOver` is terminal, so repeat
    /// calls are rejected and never write twice.
    #[instrument(skip(self))]
    pub async fn next_round(&self) -> Result<NextOutcome, AppError> {
        self.touch();
        let mut inner = self.inner.lock().await;
        let inner = &mut *inner;

        match inner.session.advance()? {
            NextStep::NextRound => {
                let view = self.begin_round_locked(inner).await?;
                Ok(NextOutcome::NextRound(view))
            }
            NextStep::GameOver => {
                let summary = GameSummary {
                    total_score: inner.session.total_score(),
                    results: inner.session.round_results().to_vec(),
                };

                // A failed write must not block the summary.
                if let Err(err) = self.persist_results(&inner.session).await {
                    warn!(error = %err, "Failed to persist game results");
                }

                info!(total_score = summary.total_score, "Game over");
                Ok(NextOutcome::GameOver(summary))
            }
        }
    }

    async fn persist_results(&self, session: &GameSession) -> Result<(), AppError> {
        let entry = HighScoreEntry {
            score: session.total_score(),
            rounds: session.total_rounds(),
            league: session.league().to_string(),
            date: Utc::now(),
        };

        let mut scores = self.store.high_scores().await?;
        push_high_score(&mut scores, entry);
        self.store.save_high_scores(&scores).await?;

        self.store
            .save_last_game_result(&LastGameResult {
                total_score: session.total_score(),
                rounds: session.round_results().to_vec(),
            })
            .await
    }

    /// Read-only view of the session for the status endpoint.
    pub async fn snapshot(&self) -> SessionView {
        let inner = self.inner.lock().await;
        let elapsed = inner.timer.as_ref().map_or(0, RoundTimer::elapsed_seconds);
        SessionView::from_session(&inner.session, elapsed)
    }
}

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use groundhopper::shared::AppError;
use groundhopper::stadium::{LeagueFilter, StadiumProvider, StadiumRecord};
use groundhopper::storage::{GameStore, HighScoreEntry, InMemoryGameStore, LastGameResult};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Stadium provider serving scripted records in order, honoring the
/// exclusion list, and logging every request it sees.
pub struct ScriptedStadiumProvider {
    stadiums: Mutex<Vec<StadiumRecord>>,
    requests: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedStadiumProvider {
    pub fn new(stadiums: Vec<StadiumRecord>) -> Self {
        Self {
            stadiums: Mutex::new(stadiums),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, stadium: StadiumRecord) {
        self.stadiums.lock().unwrap().push(stadium);
    }

    /// Every (league, exclusions) pair the controller asked for, in order
    pub fn requests(&self) -> Vec<(String, Vec<String>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StadiumProvider for ScriptedStadiumProvider {
    async fn random_stadium(
        &self,
        league: LeagueFilter,
        exclude: &[String],
    ) -> Result<Option<StadiumRecord>, AppError> {
        self.requests
            .lock()
            .unwrap()
            .push((league.to_string(), exclude.to_vec()));

        let mut stadiums = self.stadiums.lock().unwrap();
        let position = stadiums.iter().position(|s| !exclude.contains(&s.id));
        Ok(position.map(|p| stadiums.remove(p)))
    }

    async fn all_stadiums(&self) -> Result<Vec<StadiumRecord>, AppError> {
        Ok(self.stadiums.lock().unwrap().clone())
    }

    async fn sports(&self) -> Result<Vec<String>, AppError> {
        Ok(Vec::new())
    }
}

/// Store wrapper that counts high-score writes
pub struct CountingStore {
    inner: InMemoryGameStore,
    high_score_saves: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryGameStore::new(),
            high_score_saves: AtomicUsize::new(0),
        }
    }

    pub fn high_score_saves(&self) -> usize {
        self.high_score_saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameStore for CountingStore {
    async fn high_scores(&self) -> Result<Vec<HighScoreEntry>, AppError> {
        self.inner.high_scores().await
    }

    async fn save_high_scores(&self, scores: &[HighScoreEntry]) -> Result<(), AppError> {
        self.high_score_saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_high_scores(scores).await
    }

    async fn map_token(&self) -> Result<Option<String>, AppError> {
        self.inner.map_token().await
    }

    async fn set_map_token(&self, token: &str) -> Result<(), AppError> {
        self.inner.set_map_token(token).await
    }

    async fn save_last_game_result(&self, result: &LastGameResult) -> Result<(), AppError> {
        self.inner.save_last_game_result(result).await
    }

    async fn last_game_result(&self) -> Result<Option<LastGameResult>, AppError> {
        self.inner.last_game_result().await
    }
}

/// Store whose writes always fail
pub struct FailingStore;

#[async_trait]
impl GameStore for FailingStore {
    async fn high_scores(&self) -> Result<Vec<HighScoreEntry>, AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }

    async fn save_high_scores(&self, _scores: &[HighScoreEntry]) -> Result<(), AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }

    async fn map_token(&self) -> Result<Option<String>, AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }

    async fn set_map_token(&self, _token: &str) -> Result<(), AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }

    async fn save_last_game_result(&self, _result: &LastGameResult) -> Result<(), AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }

    async fn last_game_result(&self) -> Result<Option<LastGameResult>, AppError> {
        Err(AppError::Persistence("store offline".to_string()))
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, instrument};

use super::models::{HighScoreEntry, LastGameResult};
use crate::shared::AppError;

/// Trait for the durable key-value store the game writes results into.
/// Mirrors what the browser build kept in local/session storage: the
/// high-score table, the map provider credential, and the transient
/// last-game payload.
#[async_trait]
pub trait GameStore {
    async fn high_scores(&self) -> Result<Vec<HighScoreEntry>, AppError>;
    async fn save_high_scores(&self, scores: &[HighScoreEntry]) -> Result<(), AppError>;

    async fn map_token(&self) -> Result<Option<String>, AppError>;
    async fn set_map_token(&self, token: &str) -> Result<(), AppError>;

    async fn save_last_game_result(&self, result: &LastGameResult) -> Result<(), AppError>;
    async fn last_game_result(&self) -> Result<Option<LastGameResult>, AppError>;
}

/// Everything the store holds, as one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    high_scores: Vec<HighScoreEntry>,
    #[serde(default)]
    map_token: Option<String>,
    #[serde(default)]
    last_game_result: Option<LastGameResult>,
}

/// In-memory implementation of GameStore for development and testing
pub struct InMemoryGameStore {
    document: Mutex<StoreDocument>,
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self {
            document: Mutex::new(StoreDocument::default()),
        }
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn high_scores(&self) -> Result<Vec<HighScoreEntry>, AppError> {
        Ok(self.document.lock().unwrap().high_scores.clone())
    }

    async fn save_high_scores(&self, scores: &[HighScoreEntry]) -> Result<(), AppError> {
        self.document.lock().unwrap().high_scores = scores.to_vec();
        Ok(())
    }

    async fn map_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.document.lock().unwrap().map_token.clone())
    }

    async fn set_map_token(&self, token: &str) -> Result<(), AppError> {
        self.document.lock().unwrap().map_token = Some(token.to_string());
        Ok(())
    }

    async fn save_last_game_result(&self, result: &LastGameResult) -> Result<(), AppError> {
        self.document.lock().unwrap().last_game_result = Some(result.clone());
        Ok(())
    }

    async fn last_game_result(&self) -> Result<Option<LastGameResult>, AppError> {
        Ok(self.document.lock().unwrap().last_game_result.clone())
    }
}

/// GameStore implementation persisting the whole document to one JSON file.
/// Reads tolerate a missing file (empty defaults); every write rewrites the
/// full document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<StoreDocument, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Persistence(format!("failed to parse {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreDocument::default()),
            Err(e) => Err(AppError::Persistence(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_document(&self, document: &StoreDocument) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let raw = serde_json::to_string_pretty(document)
            .map_err(|e| AppError::Persistence(format!("failed to serialize store: {}", e)))?;
        std::fs::write(&self.path, raw).map_err(|e| {
            AppError::Persistence(format!("failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "Store document written");
        Ok(())
    }
}

#[async_trait]
impl GameStore for JsonFileStore {
    async fn high_scores(&self) -> Result<Vec<HighScoreEntry>, AppError> {
        Ok(self.read_document()?.high_scores)
    }

    #[instrument(skip(self, scores))]
    async fn save_high_scores(&self, scores: &[HighScoreEntry]) -> Result<(), AppError> {
        let mut document = self.read_document()?;
        document.high_scores = scores.to_vec();
        self.write_document(&document)
    }

    async fn map_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.read_document()?.map_token)
    }

    #[instrument(skip(self, token))]
    async fn set_map_token(&self, token: &str) -> Result<(), AppError> {
        let mut document = self.read_document()?;
        document.map_token = Some(token.to_string());
        self.write_document(&document)
    }

    #[instrument(skip(self, result))]
    async fn save_last_game_result(&self, result: &LastGameResult) -> Result<(), AppError> {
        let mut document = self.read_document()?;
        document.last_game_result = Some(result.clone());
        self.write_document(&document)
    }

    async fn last_game_result(&self) -> Result<Option<LastGameResult>, AppError> {
        Ok(self.read_document()?.last_game_result)
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::{GameError, GameManager};
use crate::stadium::StadiumProvider;
use crate::storage::GameStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub stadiums: Arc<dyn StadiumProvider + Send + Sync>,
    pub store: Arc<dyn GameStore + Send + Sync>,
    pub games: Arc<GameManager>,
}

impl AppState {
    pub fn new(
        stadiums: Arc<dyn StadiumProvider + Send + Sync>,
        store: Arc<dyn GameStore + Send + Sync>,
        games: Arc<GameManager>,
    ) -> Self {
        Self {
            stadiums,
            store,
            games,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Stadium fetch failed or the league filter is exhausted. Recoverable:
    /// the session stays in its prior phase and the attempt can be retried.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A state-machine guard rejected the operation before any mutation.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// A durable read or write failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidTransition(msg) => AppError::InvalidTransition(msg.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DataUnavailable(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidTransition(msg) => (StatusCode::CONFLICT, msg),
            AppError::Persistence(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Persistence error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

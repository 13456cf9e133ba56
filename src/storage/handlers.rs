use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::models::{HighScoreEntry, LastGameResult};
use crate::shared::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub map_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

/// HTTP handler for the persisted high-score table
///
/// GET /api/highscores
#[instrument(name = "get_high_scores", skip(state))]
pub async fn get_high_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<HighScoreEntry>>, AppError> {
    let scores = state.store.high_scores().await?;
    Ok(Json(scores))
}

/// HTTP handler for the most recent game summary
///
/// GET /api/results/last
/// Returns null when no game has finished yet
#[instrument(name = "get_last_result", skip(state))]
pub async fn get_last_result(
    State(state): State<AppState>,
) -> Result<Json<Option<LastGameResult>>, AppError> {
    let result = state.store.last_game_result().await?;
    Ok(Json(result))
}

/// HTTP handler for client configuration
///
/// GET /api/config
/// The MAPBOX_TOKEN environment variable takes precedence over the stored
/// credential, matching how deployments inject the token
#[instrument(name = "get_config", skip(state))]
pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigResponse>, AppError> {
    let env_token = std::env::var("MAPBOX_TOKEN").ok().filter(|t| !t.is_empty());
    let map_token = match env_token {
        Some(token) => Some(token),
        None => state.store.map_token().await?,
    };

    Ok(Json(ConfigResponse { map_token }))
}

/// HTTP handler for storing the map provider credential
///
/// PUT /api/config/token
#[instrument(name = "set_map_token", skip(state, request))]
pub async fn set_map_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<StatusCode, AppError> {
    if request.token.trim().is_empty() {
        return Err(AppError::BadRequest("Token cannot be empty".to_string()));
    }

    state.store.set_map_token(request.token.trim()).await?;
    info!("Map token updated");

    Ok(StatusCode::NO_CONTENT)
}

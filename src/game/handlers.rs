use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::controller::GameController;
use super::session::{RoundOutcome, SessionConfig};
use super::types::{
    CreateGameRequest, CreateGameResponse, GuessRequest, HintRequest, HintResponse, NextOutcome,
    RoundView, SessionView,
};
use crate::map::NoopMapSurface;
use crate::shared::{AppError, AppState};
use crate::stadium::LeagueFilter;

async fn controller_for(
    state: &AppState,
    session_id: &str,
) -> Result<Arc<GameController>, AppError> {
    state
        .games
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))
}

/// HTTP handler creating a game session and starting round 1
///
/// POST /api/game
/// The server renders nothing, so sessions created here run against the
/// no-op map surface; the browser map draws from the response payloads
#[instrument(name = "create_game", skip(state, request))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, AppError> {
    let config = SessionConfig {
        league: LeagueFilter::parse(request.league.as_deref().unwrap_or("all")),
        total_rounds: request.rounds.unwrap_or(5),
        difficulty: request.difficulty.unwrap_or_default(),
    };

    info!(
        league = %config.league,
        rounds = config.total_rounds,
        difficulty = %config.difficulty,
        "Creating game session"
    );

    let controller = Arc::new(GameController::new(
        config,
        Arc::clone(&state.stadiums),
        Arc::new(NoopMapSurface),
        Arc::clone(&state.store),
    ));

    let round = controller.start_round().await?;
    let session_id = state.games.insert(controller).await;

    Ok(Json(CreateGameResponse { session_id, round }))
}

/// HTTP handler for the session status view
///
/// GET /api/game/:id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    Ok(Json(controller.snapshot().await))
}

/// HTTP handler retrying a round start after a DataUnavailable failure
///
/// POST /api/game/:id/start
#[instrument(name = "start_round", skip(state))]
pub async fn start_round(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<RoundView>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    let round = controller.start_round().await?;
    Ok(Json(round))
}

/// HTTP handler revealing a hint for the active round
///
/// POST /api/game/:id/hint
#[instrument(name = "reveal_hint", skip(state))]
pub async fn reveal_hint(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<HintRequest>,
) -> Result<Json<HintResponse>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    let value = controller.reveal_hint(request.hint).await?;
    Ok(Json(HintResponse {
        hint: request.hint,
        value,
    }))
}

/// HTTP handler for the map surface's guess-placed callback
///
/// POST /api/game/:id/guess
#[instrument(name = "place_guess", skip(state))]
pub async fn place_guess(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<GuessRequest>,
) -> Result<StatusCode, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    controller.place_guess(request.lat, request.lng).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// HTTP handler resolving the active round by scoring the pending guess
///
/// POST /api/game/:id/submit
#[instrument(name = "submit_guess", skip(state))]
pub async fn submit_guess(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<RoundOutcome>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    let outcome = controller.submit_guess().await?;
    Ok(Json(outcome))
}

/// HTTP handler resolving the active round without scoring
///
/// POST /api/game/:id/skip
#[instrument(name = "skip_round", skip(state))]
pub async fn skip_round(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<RoundOutcome>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    let outcome = controller.skip_round().await?;
    Ok(Json(outcome))
}

/// HTTP handler advancing past a resolved round
///
/// POST /api/game/:id/next
/// Returns the next round view, or the final summary on the last round
#[instrument(name = "next_round", skip(state))]
pub async fn next_round(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<NextOutcome>, AppError> {
    let controller = controller_for(&state, &session_id).await?;
    let outcome = controller.next_round().await?;
    Ok(Json(outcome))
}

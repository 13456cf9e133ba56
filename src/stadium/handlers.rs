use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::models::{LeagueFilter, StadiumRecord};
use crate::shared::{AppError, AppState};

/// Query parameters for the random stadium endpoint. `exclude` is a
/// comma-separated list of stadium ids already used this session.
#[derive(Debug, Deserialize)]
pub struct RandomStadiumQuery {
    pub league: Option<String>,
    pub exclude: Option<String>,
}

/// HTTP handler returning the full stadium list
///
/// GET /api/stadiums
#[instrument(name = "get_stadiums", skip(state))]
pub async fn get_stadiums(
    State(state): State<AppState>,
) -> Result<Json<Vec<StadiumRecord>>, AppError> {
    let stadiums = state.stadiums.all_stadiums().await?;
    info!(count = stadiums.len(), "Stadiums listed");
    Ok(Json(stadiums))
}

/// HTTP handler returning one unused stadium for the given league filter
///
/// GET /api/stadium/random?league=MLB&exclude=id1,id2
/// Returns 404 when the filter has no unused stadiums left
#[instrument(name = "get_random_stadium", skip(state))]
pub async fn get_random_stadium(
    State(state): State<AppState>,
    Query(query): Query<RandomStadiumQuery>,
) -> Result<Json<StadiumRecord>, AppError> {
    let league = LeagueFilter::parse(query.league.as_deref().unwrap_or("all"));
    let exclude: Vec<String> = query
        .exclude
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let stadium = state
        .stadiums
        .random_stadium(league, &exclude)
        .await?
        .ok_or_else(|| AppError::DataUnavailable("No stadiums available".to_string()))?;

    info!(stadium_id = %stadium.id, league = %league, "Random stadium selected");

    Ok(Json(stadium))
}

/// HTTP handler returning the distinct sport categories
///
/// GET /api/sports
#[instrument(name = "get_sports", skip(state))]
pub async fn get_sports(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let sports = state.stadiums.sports().await?;
    Ok(Json(sports))
}

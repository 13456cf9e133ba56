use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use groundhopper::game::{self, start_cleanup_task, CleanupConfig, GameManager};
use groundhopper::shared::AppState;
use groundhopper::stadium::{self, JsonStadiumRepository};
use groundhopper::storage::{self, JsonFileStore};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groundhopper=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Groundhopper game server");

    // Stadium data set and the durable store, both overridable via env
    let data_path =
        std::env::var("STADIUM_DATA").unwrap_or_else(|_| "data/stadiums.json".to_string());
    let stadiums =
        Arc::new(JsonStadiumRepository::from_file(&data_path).expect("Failed to load stadium data"));
    info!(path = %data_path, count = stadiums.len(), "Stadium data loaded");

    let store_path =
        std::env::var("GROUNDHOPPER_STORE").unwrap_or_else(|_| "data/store.json".to_string());
    let store = Arc::new(JsonFileStore::new(store_path));

    let games = Arc::new(GameManager::new());
    let app_state = AppState::new(stadiums, store, Arc::clone(&games));

    // Drop abandoned sessions in the background
    tokio::spawn(start_cleanup_task(games, CleanupConfig::default()));

    let app = Router::new()
        .route("/api/stadiums", get(stadium::get_stadiums))
        .route("/api/stadium/random", get(stadium::get_random_stadium))
        .route("/api/sports", get(stadium::get_sports))
        .route("/api/game", post(game::create_game))
        .route("/api/game/:id", get(game::get_game))
        .route("/api/game/:id/start", post(game::start_round))
        .route("/api/game/:id/hint", post(game::reveal_hint))
        .route("/api/game/:id/guess", post(game::place_guess))
        .route("/api/game/:id/submit", post(game::submit_guess))
        .route("/api/game/:id/skip", post(game::skip_round))
        .route("/api/game/:id/next", post(game::next_round))
        .route("/api/highscores", get(storage::get_high_scores))
        .route("/api/results/last", get(storage::get_last_result))
        .route("/api/config", get(storage::get_config))
        .route("/api/config/token", put(storage::set_map_token))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // run our app with hyper, listening globally on port 3000
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

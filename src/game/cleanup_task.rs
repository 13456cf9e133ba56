use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, instrument};

use super::manager::GameManager;

/// Configuration for the session cleanup task
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// How often to run the cleanup task
    pub cleanup_interval: Duration,
    /// How long a session must sit untouched before it is dropped
    pub idle_threshold: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(10 * 60), // 10 minutes
            idle_threshold: Duration::from_secs(60 * 60),   // 1 hour
        }
    }
}

/// Starts the background task that periodically drops abandoned sessions.
/// Abandonment discards in-memory state only; no partial round is ever
/// persisted.
#[instrument(skip(manager))]
pub async fn start_cleanup_task(manager: Arc<GameManager>, config: CleanupConfig) {
    info!(
        cleanup_interval_secs = config.cleanup_interval.as_secs(),
        idle_threshold_secs = config.idle_threshold.as_secs(),
        "Starting session cleanup background task"
    );

    let mut cleanup_interval = interval(config.cleanup_interval);

    loop {
        cleanup_interval.tick().await;

        let removed = cleanup_idle_sessions(&manager, config.idle_threshold).await;
        info!(removed_count = removed, "Session cleanup completed");
    }
}

/// Removes sessions whose last activity is older than the threshold
async fn cleanup_idle_sessions(manager: &Arc<GameManager>, idle_threshold: Duration) -> usize {
    let mut removed = 0;

    for session_id in manager.session_ids().await {
        let Some(controller) = manager.get(&session_id).await else {
            continue;
        };

        if controller.idle_for() >= idle_threshold {
            manager.remove(&session_id).await;
            removed += 1;
            info!(session_id = %session_id, "Removed idle session");
        }
    }

    removed
}

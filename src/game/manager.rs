use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::controller::GameController;

/// Registry of live game sessions keyed by session id.
pub struct GameManager {
    sessions: RwLock<HashMap<String, Arc<GameController>>>,
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

impl GameManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a controller under a fresh session id and returns the id.
    pub async fn insert(&self, controller: Arc<GameController>) -> String {
        let session_id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), controller);
        info!(session_id = %session_id, "Game session registered");
        session_id
    }

    pub async fn get(&self, session_id: &str) -> Option<Arc<GameController>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    pub async fn remove(&self, session_id: &str) -> Option<Arc<GameController>> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(session_id);
        if removed.is_some() {
            debug!(session_id = %session_id, "Game session removed");
        }
        removed
    }

    pub async fn session_ids(&self) -> Vec<String> {
        let sessions = self.sessions.read().await;
        sessions.keys().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

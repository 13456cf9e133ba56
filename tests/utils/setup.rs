use std::collections::HashMap;
use std::sync::Arc;

use groundhopper::game::{GameController, SessionConfig};
use groundhopper::map::{MapSurface, RecordingMapSurface};
use groundhopper::scoring::HintKind;
use groundhopper::stadium::{Coordinate, StadiumProvider, StadiumRecord};
use groundhopper::storage::{GameStore, InMemoryGameStore};

use super::mocks::ScriptedStadiumProvider;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// One test stadium with plausible hints
pub fn stadium_at(id: &str, lat: f64, lng: f64) -> StadiumRecord {
    StadiumRecord {
        id: id.to_string(),
        name: format!("{} Park", id),
        team: format!("{} Team", id),
        league: "MLB".to_string(),
        sport: "baseball".to_string(),
        coordinates: Coordinate { lat, lng },
        radius: None,
        hints: HashMap::from([
            (HintKind::Country, serde_json::json!("USA")),
            (HintKind::City, serde_json::json!(format!("{} City", id))),
            (HintKind::Capacity, serde_json::json!(40000)),
            (HintKind::Opened, serde_json::json!(1990)),
        ]),
    }
}

pub struct TestGame {
    pub controller: GameController,
    pub map: Arc<RecordingMapSurface>,
    pub store: Arc<InMemoryGameStore>,
    pub provider: Arc<ScriptedStadiumProvider>,
}

pub struct TestGameBuilder {
    stadiums: Vec<StadiumRecord>,
    total_rounds: u32,
}

impl TestGameBuilder {
    pub fn new() -> Self {
        Self {
            stadiums: Vec::new(),
            total_rounds: 5,
        }
    }

    pub fn with_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds;
        self
    }

    pub fn with_stadiums(mut self, stadiums: Vec<StadiumRecord>) -> Self {
        self.stadiums = stadiums;
        self
    }

    /// Queues `count` distinct stadiums spread along the equator
    pub fn with_generated_stadiums(mut self, count: usize) -> Self {
        self.stadiums = (0..count)
            .map(|i| stadium_at(&format!("stadium-{}", i), 0.0, i as f64 * 10.0))
            .collect();
        self
    }

    pub fn build(self) -> TestGame {
        let provider = Arc::new(ScriptedStadiumProvider::new(self.stadiums));
        let map = Arc::new(RecordingMapSurface::new());
        let store = Arc::new(InMemoryGameStore::new());

        let controller = GameController::new(
            SessionConfig {
                total_rounds: self.total_rounds,
                ..SessionConfig::default()
            },
            Arc::clone(&provider) as Arc<dyn StadiumProvider + Send + Sync>,
            Arc::clone(&map) as Arc<dyn MapSurface>,
            Arc::clone(&store) as Arc<dyn GameStore + Send + Sync>,
        );

        TestGame {
            controller,
            map,
            store,
            provider,
        }
    }
}

impl Default for TestGameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Mutex;

use crate::stadium::LeagueFilter;

/// Rendering directives the game controller issues to the interactive map
/// widget. This crate never renders anything itself; implementations forward
/// the directives to whatever map the frontend runs. Guess placement flows
/// the opposite way, into [`crate::game::GameController::place_guess`].
pub trait MapSurface: Send + Sync {
    /// Clear all markers and recenter to the league's typical view.
    fn reset(&self, league: LeagueFilter);

    /// Reveal the true location after a round resolves, along with the
    /// guess-to-answer connector line.
    fn show_correct_location(&self, lat: f64, lng: f64);
}

/// Map surface for headless operation. The HTTP client drives its own map
/// from response payloads, so the server side has nothing to draw.
pub struct NoopMapSurface;

impl MapSurface for NoopMapSurface {
    fn reset(&self, _league: LeagueFilter) {}
    fn show_correct_location(&self, _lat: f64, _lng: f64) {}
}

/// A map directive captured by [`RecordingMapSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Reset { league: LeagueFilter },
    ShowCorrectLocation { lat: f64, lng: f64 },
}

/// Test double that records the directive stream in order.
#[derive(Default)]
pub struct RecordingMapSurface {
    events: Mutex<Vec<MapEvent>>,
}

impl RecordingMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MapEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl MapSurface for RecordingMapSurface {
    fn reset(&self, league: LeagueFilter) {
        self.events.lock().unwrap().push(MapEvent::Reset { league });
    }

    fn show_correct_location(&self, lat: f64, lng: f64) {
        self.events
            .lock()
            .unwrap()
            .push(MapEvent::ShowCorrectLocation { lat, lng });
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::scoring::{HintKind, DEFAULT_PERFECT_ZONE_RADIUS_M};

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// One venue as served by the stadium data set. Immutable once fetched;
/// a game session owns it for the duration of one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumRecord {
    pub id: String,
    pub name: String,
    pub team: String,
    pub league: String,
    pub sport: String,
    pub coordinates: Coordinate,
    /// Perfect-zone radius in meters; absent records fall back to 150.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default)]
    pub hints: HashMap<HintKind, serde_json::Value>,
}

impl StadiumRecord {
    /// Radius within which a guess counts as inside the venue footprint.
    pub fn perfect_zone_radius_m(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_PERFECT_ZONE_RADIUS_M)
    }

    pub fn hint(&self, kind: HintKind) -> Option<&serde_json::Value> {
        self.hints.get(&kind)
    }
}

/// League selection for a game session or a stadium query.
///
/// The data set stores full league names ("Triple-A West", "Double-A
/// Central", ...); filters group them the way players pick them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum LeagueFilter {
    #[default]
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "MLB")]
    Mlb,
    #[strum(serialize = "AAA")]
    TripleA,
    #[strum(serialize = "AA")]
    DoubleA,
    #[strum(serialize = "High-A")]
    HighA,
    #[strum(serialize = "Low-A")]
    LowA,
    #[strum(serialize = "Spring")]
    Spring,
    #[strum(serialize = "other")]
    Other,
}

impl LeagueFilter {
    /// Parses a query value; anything unrecognized selects everything.
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn matches(&self, stadium: &StadiumRecord) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Mlb => stadium.league == "MLB",
            LeagueFilter::TripleA => {
                stadium.league.contains("Triple-A") || stadium.league == "Arizona Fall League"
            }
            LeagueFilter::DoubleA => stadium.league.contains("Double-A"),
            LeagueFilter::HighA => stadium.league.contains("High-A"),
            LeagueFilter::LowA => stadium.league.contains("Low-A"),
            LeagueFilter::Spring => stadium.league == "Spring Training",
            LeagueFilter::Other => stadium.sport != "baseball",
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::RoundResult;

/// The high-score table never holds more than this many entries.
pub const MAX_HIGH_SCORES: usize = 10;

/// One row of the persisted high-score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub rounds: u32,
    pub league: String,
    pub date: DateTime<Utc>,
}

/// Inserts an entry, keeping the table sorted descending by score and
/// truncated to [`MAX_HIGH_SCORES`]. Ties keep earlier entries first.
pub fn push_high_score(scores: &mut Vec<HighScoreEntry>, entry: HighScoreEntry) {
    scores.push(entry);
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(MAX_HIGH_SCORES);
}

/// Transient payload for the results view of the most recent game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastGameResult {
    pub total_score: u32,
    pub rounds: Vec<RoundResult>,
}

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::geo::haversine_distance_m;

const BASE_SCORE: f64 = 5000.0;
const TIME_BONUS: u32 = 500;
const DISTANCE_PENALTY_PER_10M: f64 = 1.0;
const MAX_DISTANCE_PENALTY: f64 = 5000.0;

/// Fallback perfect-zone radius when a stadium record does not carry one.
pub const DEFAULT_PERFECT_ZONE_RADIUS_M: f64 = 150.0;

/// Hint categories a player can reveal during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HintKind {
    Country,
    City,
    Capacity,
    Opened,
}

impl HintKind {
    /// Score-multiplier penalty for revealing this hint kind.
    pub fn penalty(self) -> f64 {
        match self {
            HintKind::Country => 0.10,
            HintKind::City => 0.15,
            HintKind::Capacity => 0.10,
            HintKind::Opened => 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Per-difficulty scoring knobs.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyProfile {
    pub distance_multiplier: f64,
    pub time_bonus_threshold: u64,
    pub max_hints: usize,
}

impl Difficulty {
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                distance_multiplier: 0.5,
                time_bonus_threshold: 60,
                max_hints: 4,
            },
            Difficulty::Medium => DifficultyProfile {
                distance_multiplier: 1.0,
                time_bonus_threshold: 30,
                max_hints: 4,
            },
            Difficulty::Hard => DifficultyProfile {
                distance_multiplier: 1.5,
                time_bonus_threshold: 20,
                max_hints: 2,
            },
        }
    }
}

/// Human-readable decomposition of a round score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub base: u32,
    pub distance_lost: i64,
    pub time_gained: u32,
    pub hint_reduction: String,
}

/// Full output of scoring one round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub distance_m: f64,
    pub distance_penalty: u32,
    pub time_bonus: u32,
    pub hint_multiplier: f64,
    pub breakdown: Breakdown,
}

/// Scores a single guess. Pure and deterministic: identical inputs always
/// produce identical outputs.
///
/// Guesses inside the stadium's perfect zone incur no distance penalty; the
/// penalty beyond it is capped at 5000 so distance alone can never push the
/// pre-multiplier score negative.
pub fn compute_score(
    guess_lat: f64,
    guess_lng: f64,
    actual_lat: f64,
    actual_lng: f64,
    elapsed_seconds: u64,
    hints_used: &[HintKind],
    difficulty: Difficulty,
    perfect_zone_radius_m: f64,
) -> ScoreBreakdown {
    let distance_m = haversine_distance_m(guess_lat, guess_lng, actual_lat, actual_lng);
    let profile = difficulty.profile();

    let effective_distance = (distance_m - perfect_zone_radius_m).max(0.0);

    let distance_penalty = ((effective_distance / 10.0)
        * DISTANCE_PENALTY_PER_10M
        * profile.distance_multiplier)
        .min(MAX_DISTANCE_PENALTY);

    // Flat bonus, boundary inclusive. No sliding scale.
    let time_bonus = if elapsed_seconds <= profile.time_bonus_threshold {
        TIME_BONUS
    } else {
        0
    };

    // Each occurrence counts; de-duplication is the caller's responsibility.
    let mut hint_multiplier = 1.0;
    for hint in hints_used {
        hint_multiplier -= hint.penalty();
    }
    let hint_multiplier = hint_multiplier.max(0.0);

    let score = ((BASE_SCORE - distance_penalty + f64::from(time_bonus)) * hint_multiplier)
        .max(0.0)
        .round() as u32;

    ScoreBreakdown {
        score,
        distance_m,
        distance_penalty: distance_penalty.round() as u32,
        time_bonus,
        hint_multiplier,
        breakdown: Breakdown {
            base: BASE_SCORE as u32,
            distance_lost: -(distance_penalty.round() as i64),
            time_gained: time_bonus,
            hint_reduction: format!("{}%", ((1.0 - hint_multiplier) * 100.0).round() as i64),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Roughly 1000m of effective distance at medium difficulty: 1150m raw
    // with the default 150m perfect zone. 1 degree of longitude on the
    // equator is ~111,195m, so scale accordingly.
    fn lng_offset_for_meters(meters: f64) -> f64 {
        meters / 111_195.0
    }

    #[test]
    fn test_perfect_guess_with_time_bonus_scores_5500() {
        let result = compute_score(0.0, 0.0, 0.0, 0.0, 10, &[], Difficulty::Medium, 150.0);

        assert_eq!(result.distance_m, 0.0);
        assert_eq!(result.distance_penalty, 0);
        assert_eq!(result.time_bonus, 500);
        assert_eq!(result.score, 5500);
    }

    #[test]
    fn test_exact_coordinate_has_no_penalty_for_any_radius() {
        for radius in [0.0, 150.0, 400.0] {
            let result =
                compute_score(48.2188, 11.6247, 48.2188, 11.6247, 90, &[], Difficulty::Medium, radius);
            assert_eq!(result.distance_m, 0.0);
            assert_eq!(result.distance_penalty, 0);
        }
    }

    #[test]
    fn test_guess_inside_perfect_zone_is_not_penalized() {
        // ~100m east of the actual location, inside the 150m zone
        let result = compute_score(
            0.0,
            lng_offset_for_meters(100.0),
            0.0,
            0.0,
            10,
            &[],
            Difficulty::Medium,
            150.0,
        );

        assert!(result.distance_m > 0.0);
        assert_eq!(result.distance_penalty, 0);
        assert_eq!(result.score, 5500);
    }

    #[test]
    fn test_thousand_meters_effective_costs_one_hundred_points() {
        // 1150m raw, minus the 150m perfect zone: 1000m effective, penalty 100
        let result = compute_score(
            0.0,
            lng_offset_for_meters(1150.0),
            0.0,
            0.0,
            40,
            &[],
            Difficulty::Medium,
            150.0,
        );

        assert_eq!(result.distance_penalty, 100);
        assert_eq!(result.time_bonus, 0);
        assert_eq!(result.score, 4900);
    }

    #[test]
    fn test_zero_perfect_zone_degenerates_to_raw_distance() {
        let with_zone = compute_score(
            0.0,
            lng_offset_for_meters(1000.0),
            0.0,
            0.0,
            40,
            &[],
            Difficulty::Medium,
            150.0,
        );
        let without_zone = compute_score(
            0.0,
            lng_offset_for_meters(1000.0),
            0.0,
            0.0,
            40,
            &[],
            Difficulty::Medium,
            0.0,
        );

        assert!(without_zone.distance_penalty > with_zone.distance_penalty);
        assert_eq!(without_zone.distance_penalty, 100);
    }

    #[rstest]
    #[case(Difficulty::Easy, 50)]
    #[case(Difficulty::Medium, 100)]
    #[case(Difficulty::Hard, 150)]
    fn test_difficulty_scales_distance_penalty(
        #[case] difficulty: Difficulty,
        #[case] expected_penalty: u32,
    ) {
        let result = compute_score(
            0.0,
            lng_offset_for_meters(1000.0),
            0.0,
            0.0,
            90,
            &[],
            difficulty,
            0.0,
        );
        assert_eq!(result.distance_penalty, expected_penalty);
    }

    #[rstest]
    #[case(Difficulty::Easy, 60)]
    #[case(Difficulty::Medium, 30)]
    #[case(Difficulty::Hard, 20)]
    fn test_time_bonus_boundary_is_inclusive(#[case] difficulty: Difficulty, #[case] threshold: u64) {
        let at_threshold = compute_score(0.0, 0.0, 0.0, 0.0, threshold, &[], difficulty, 150.0);
        let over_threshold =
            compute_score(0.0, 0.0, 0.0, 0.0, threshold + 1, &[], difficulty, 150.0);

        assert_eq!(at_threshold.time_bonus, 500);
        assert_eq!(over_threshold.time_bonus, 0);
    }

    #[test]
    fn test_all_four_hints_reduce_multiplier_to_055() {
        let hints = [
            HintKind::Country,
            HintKind::City,
            HintKind::Capacity,
            HintKind::Opened,
        ];
        let result = compute_score(0.0, 0.0, 0.0, 0.0, 10, &hints, Difficulty::Medium, 150.0);

        assert!((result.hint_multiplier - 0.55).abs() < 1e-9);
        assert_eq!(result.score, 3025); // 5500 * 0.55
        assert_eq!(result.breakdown.hint_reduction, "45%");
    }

    #[test]
    fn test_duplicate_hints_are_applied_per_occurrence() {
        // The engine does not de-duplicate; the session enforces set semantics
        let hints = [HintKind::City, HintKind::City];
        let result = compute_score(0.0, 0.0, 0.0, 0.0, 10, &hints, Difficulty::Medium, 150.0);

        assert!((result.hint_multiplier - 0.70).abs() < 1e-9);
    }

    #[test]
    fn test_distance_penalty_is_capped_at_5000() {
        // Antipodal-ish guess: tens of thousands of kilometers off
        let result = compute_score(40.0, -74.0, -40.0, 106.0, 90, &[], Difficulty::Hard, 150.0);

        assert_eq!(result.distance_penalty, 5000);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_never_exceeds_5500_or_goes_negative() {
        let best = compute_score(0.0, 0.0, 0.0, 0.0, 0, &[], Difficulty::Medium, 150.0);
        assert_eq!(best.score, 5500);

        let worst = compute_score(
            40.0,
            -74.0,
            -40.0,
            106.0,
            90,
            &[HintKind::Country, HintKind::City, HintKind::Capacity, HintKind::Opened],
            Difficulty::Hard,
            0.0,
        );
        assert_eq!(worst.score, 0);
    }

    #[test]
    fn test_breakdown_fields_match_components() {
        let result = compute_score(
            0.0,
            lng_offset_for_meters(1150.0),
            0.0,
            0.0,
            10,
            &[HintKind::Country],
            Difficulty::Medium,
            150.0,
        );

        assert_eq!(result.breakdown.base, 5000);
        assert_eq!(result.breakdown.distance_lost, -100);
        assert_eq!(result.breakdown.time_gained, 500);
        assert_eq!(result.breakdown.hint_reduction, "10%");
        // (5000 - 100 + 500) * 0.9 = 4860
        assert_eq!(result.score, 4860);
    }

    #[test]
    fn test_identical_inputs_produce_identical_outputs() {
        let a = compute_score(51.556, -0.2796, 48.2188, 11.6247, 25, &[HintKind::City], Difficulty::Medium, 150.0);
        let b = compute_score(51.556, -0.2796, 48.2188, 11.6247, 25, &[HintKind::City], Difficulty::Medium, 150.0);
        assert_eq!(a, b);
    }
}

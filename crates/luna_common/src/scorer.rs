//! Sleep quality scorer - additive penalty model over a nightly observation.

use tracing::debug;

use crate::observation::SleepObservation;

/// Every observation starts from a perfect score.
pub const BASE_SCORE: i32 = 100;

/// Lower bound of the ideal bedroom temperature range, in Celsius.
pub const TEMP_IDEAL_LOW: f64 = 18.0;
/// Upper bound of the ideal bedroom temperature range, in Celsius.
pub const TEMP_IDEAL_HIGH: f64 = 24.0;

const SHORT_SLEEP_PENALTY: i32 = 30;
const MODERATE_SLEEP_PENALTY: i32 = 15;
const PER_DISTURBANCE_PENALTY: i32 = 5;
const DISTURBANCE_GRACE: u32 = 2;
const TEMPERATURE_PENALTY: i32 = 10;
const LIGHT_PENALTY: i32 = 20;
const NOISE_PENALTY: i32 = 15;

/// Compute the quality score for one observation.
///
/// Deterministic and total over validated input. Penalties are independent
/// subtractions from [`BASE_SCORE`]; the result is floored at 0 and can
/// never exceed 100.
pub fn compute_score(obs: &SleepObservation) -> u8 {
    let mut score = BASE_SCORE;

    if obs.sleep_hours < 6.0 {
        score -= SHORT_SLEEP_PENALTY;
    } else if obs.sleep_hours < 7.0 {
        score -= MODERATE_SLEEP_PENALTY;
    }

    if obs.disturbances > DISTURBANCE_GRACE {
        // Scales with the raw count, not a capped tier: a night with 10
        // interruptions loses 50 points.
        score -= obs.disturbances as i32 * PER_DISTURBANCE_PENALTY;
    }

    if !ideal_temperature(obs.temperature) {
        score -= TEMPERATURE_PENALTY;
    }

    if obs.light_exposure.is_yes() {
        score -= LIGHT_PENALTY;
    }

    if obs.noise_level.is_yes() {
        score -= NOISE_PENALTY;
    }

    let score = score.max(0) as u8;
    debug!(score, "scored sleep observation");
    score
}

/// Whether a bedroom temperature falls inside the ideal 18-24°C range.
pub fn ideal_temperature(celsius: f64) -> bool {
    (TEMP_IDEAL_LOW..=TEMP_IDEAL_HIGH).contains(&celsius)
}

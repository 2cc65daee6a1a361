//! Analysis report - renders a session context into the structured
//! multi-section text the responder returns for an analysis request.
//!
//! Section order is fixed: band commentary, per-field detail, personalized
//! recommendations, then 3 randomly sampled general tips. Collaborators
//! render the joined lines verbatim, so the line structure is the contract.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::knowledge::{self, GENERAL_TIPS};
use crate::scorer;
use crate::session_context::SessionContext;

/// Number of general tips sampled (without replacement) per report.
pub const TIPS_PER_ANALYSIS: usize = 3;

/// Target bedroom temperature quoted in the recommendation bullet.
const RECOMMENDED_TEMP: f64 = 21.0;

/// Build the full analysis text for a scored observation.
pub fn format_analysis<R: Rng + ?Sized>(ctx: &SessionContext, rng: &mut R) -> String {
    let obs = &ctx.observation;
    let mut lines: Vec<String> = Vec::new();

    match knowledge::band_for_score(ctx.score) {
        Some(band) => {
            lines.push(format!(
                "📊 Your sleep score is {} - {}",
                ctx.score, band.rating
            ));
            lines.push(format!("💡 {}", band.message));
            lines.push(format!("🌟 Tip: {}", band.tip));
        }
        None => {
            lines.push(format!(
                "Your sleep score is {}. Let's look at the details.",
                ctx.score
            ));
        }
    }

    lines.push("\n🔍 Detailed Analysis:".to_string());

    if obs.sleep_hours < 6.0 {
        lines.push(format!(
            "⏳ Sleep Duration: Only {} hours (very low) - Adults typically need 7-9 hours",
            obs.sleep_hours
        ));
    } else if obs.sleep_hours < 7.0 {
        lines.push(format!(
            "⏳ Sleep Duration: {} hours (moderate) - Aim for at least 7 hours",
            obs.sleep_hours
        ));
    } else {
        lines.push(format!(
            "⏳ Sleep Duration: {} hours (excellent) - Great job!",
            obs.sleep_hours
        ));
    }

    match obs.disturbances {
        0 => lines.push("🌙 Disturbances: None reported - Perfect sleep environment!".to_string()),
        1..=2 => lines.push(format!(
            "🌙 Disturbances: {} (mild) - Your sleep was slightly interrupted",
            obs.disturbances
        )),
        3..=5 => lines.push(format!(
            "🌙 Disturbances: {} (moderate) - Consider ways to reduce interruptions",
            obs.disturbances
        )),
        _ => lines.push(format!(
            "🌙 Disturbances: {} (severe) - This significantly impacts sleep quality",
            obs.disturbances
        )),
    }

    if scorer::ideal_temperature(obs.temperature) {
        lines.push(format!(
            "🌡️ Temperature: {}°C (ideal) - Perfect range for sleep",
            obs.temperature
        ));
    } else {
        lines.push(format!(
            "🌡️ Temperature: {}°C (suboptimal) - Try to keep between 18-24°C",
            obs.temperature
        ));
    }

    if obs.light_exposure.is_yes() {
        lines.push(
            "💡 Light Exposure: Yes (problematic) - Light disrupts melatonin production"
                .to_string(),
        );
    } else {
        lines.push("💡 Light Exposure: No (good) - Darkness promotes better sleep".to_string());
    }

    if obs.noise_level.is_yes() {
        lines.push("🔊 Noise Level: Yes (problematic) - Consider white noise or earplugs".to_string());
    } else {
        lines.push(
            "🔊 Noise Level: No (good) - Quiet environments improve sleep quality".to_string(),
        );
    }

    lines.push("\n🎯 Personalized Recommendations:".to_string());

    if obs.sleep_hours < 7.0 {
        lines.push("- Prioritize getting at least 7 hours of sleep".to_string());
    }

    if obs.disturbances > 2 {
        lines.push("- Identify sources of disturbances and eliminate them".to_string());
        if obs.noise_level.is_yes() {
            lines.push("  - Try white noise or earplugs to mask external sounds".to_string());
        }
        if obs.light_exposure.is_yes() {
            lines.push("  - Use blackout curtains or a sleep mask".to_string());
        }
    }

    if !scorer::ideal_temperature(obs.temperature) {
        lines.push(format!(
            "- Adjust room temperature closer to {}°C (currently {}°C)",
            RECOMMENDED_TEMP, obs.temperature
        ));
    }

    lines.push("\n💡 General Sleep Tips:".to_string());
    for tip in GENERAL_TIPS.choose_multiple(rng, TIPS_PER_ANALYSIS) {
        lines.push((*tip).to_string());
    }

    lines.join("\n")
}

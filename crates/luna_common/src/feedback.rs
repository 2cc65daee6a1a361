//! Submission feedback - the quality verdict shown right after scoring.
//!
//! Three tiers keyed on the fresh score; rendering (colors, layout) is the
//! caller's job.

/// Verdict plus the fixed advice list for its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFeedback {
    /// Short heading, e.g. "Excellent Sleep Quality".
    pub verdict: &'static str,

    /// One-line summary under the heading.
    pub summary: &'static str,

    /// Improvement bullets; empty for the top tier.
    pub advice: &'static [&'static str],
}

/// Map a fresh score to its feedback tier. Boundaries are exclusive:
/// 81-100 excellent, 51-80 moderate, 0-50 poor.
pub fn submission_feedback(score: u8) -> SubmissionFeedback {
    if score > 80 {
        SubmissionFeedback {
            verdict: "Excellent Sleep Quality",
            summary: "Keep up the good habits! Your sleep environment and duration are optimal.",
            advice: &[],
        }
    } else if score > 50 {
        SubmissionFeedback {
            verdict: "Moderate Sleep Quality",
            summary: "Consider these improvements:",
            advice: &[
                "Aim for 7-9 hours of sleep",
                "Reduce disturbances in your sleep environment",
                "Maintain room temperature between 18-24°C",
                "Minimize light and noise exposure",
            ],
        }
    } else {
        SubmissionFeedback {
            verdict: "Poor Sleep Quality",
            summary: "Immediate improvements needed:",
            advice: &[
                "Increase sleep duration to at least 7 hours",
                "Identify and eliminate disturbance sources",
                "Adjust room temperature to optimal range",
                "Use blackout curtains and white noise if needed",
                "Consider a consistent bedtime routine",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(submission_feedback(100).verdict, "Excellent Sleep Quality");
        assert_eq!(submission_feedback(81).verdict, "Excellent Sleep Quality");
        assert_eq!(submission_feedback(80).verdict, "Moderate Sleep Quality");
        assert_eq!(submission_feedback(51).verdict, "Moderate Sleep Quality");
        assert_eq!(submission_feedback(50).verdict, "Poor Sleep Quality");
        assert_eq!(submission_feedback(0).verdict, "Poor Sleep Quality");
    }

    #[test]
    fn test_top_tier_has_no_advice() {
        assert!(submission_feedback(95).advice.is_empty());
        assert_eq!(submission_feedback(60).advice.len(), 4);
        assert_eq!(submission_feedback(30).advice.len(), 5);
    }
}

//! Static sleep-hygiene knowledge base.
//!
//! Advice topics, score bands, general tips, and the fixed phrase pools the
//! responder draws from. Everything here is immutable `'static` data with no
//! lazy initialization, safe for concurrent readers. Band order and topic
//! order are part of the lookup contract: first match in table order wins.

/// One contiguous score range with qualitative commentary.
///
/// Bands share boundary values (80 belongs to both the 70-80 and 80-90
/// entries); [`band_for_score`] resolves ties to the earliest entry.
#[derive(Debug)]
pub struct ScoreBand {
    pub low: u8,
    pub high: u8,
    pub rating: &'static str,
    pub message: &'static str,
    pub tip: &'static str,
}

/// A canned answer keyed by a canonical lower-case phrase.
#[derive(Debug)]
pub struct Topic {
    pub key: &'static str,
    pub answer: &'static str,
    pub followup: Option<&'static str>,
}

/// General advice pool; the analysis report samples 3 of these at random.
pub const GENERAL_TIPS: &[&str] = &[
    "Maintain a consistent sleep schedule, even on weekends",
    "Create a relaxing bedtime routine (reading, meditation, warm bath)",
    "Make your bedroom quiet, dark, and cool (18-24°C)",
    "Avoid caffeine, alcohol, and large meals before bedtime",
    "Get regular exercise but not too close to bedtime",
    "Limit screen time 1 hour before bed - blue light disrupts melatonin",
    "Try relaxation techniques like deep breathing or progressive muscle relaxation",
    "Use your bed only for sleep and intimacy to strengthen the mental association",
    "If you can't sleep, get up and do something relaxing until you feel sleepy",
    "Consider keeping a sleep diary to track patterns and improvements",
];

/// Score commentary bands, best first. Inclusive on both ends.
pub const SCORE_BANDS: &[ScoreBand] = &[
    ScoreBand {
        low: 90,
        high: 100,
        rating: "Excellent",
        message: "Your sleep habits are outstanding! Keep maintaining these healthy routines.",
        tip: "Consider sharing your strategies with others who struggle with sleep.",
    },
    ScoreBand {
        low: 80,
        high: 90,
        rating: "Very Good",
        message: "You have great sleep habits with just minor areas for refinement.",
        tip: "Focus on consistency - try to keep the same schedule every day.",
    },
    ScoreBand {
        low: 70,
        high: 80,
        rating: "Good",
        message: "Your sleep is decent but could benefit from some improvements.",
        tip: "Identify your weakest area (duration, disturbances, etc.) and focus there.",
    },
    ScoreBand {
        low: 50,
        high: 70,
        rating: "Fair",
        message: "Your sleep quality needs attention in several areas.",
        tip: "Start with one or two key changes like setting a fixed wake-up time.",
    },
    ScoreBand {
        low: 0,
        high: 50,
        rating: "Poor",
        message: "Your sleep quality is significantly impacting your health and wellbeing.",
        tip: "Consider consulting a sleep specialist if problems persist after making changes.",
    },
];

/// Question topics in lookup order. Keys are canonical lower-case phrases.
pub const TOPICS: &[Topic] = &[
    Topic {
        key: "ideal sleep duration",
        answer: "Most adults need 7-9 hours of sleep per night. Teenagers need 8-10 hours, and older adults (65+) may need 7-8 hours.",
        followup: Some("The exact amount varies by individual. You know you're getting enough if you wake up feeling refreshed."),
    },
    Topic {
        key: "best temperature",
        answer: "The ideal bedroom temperature is between 18-24°C (65-75°F). Cooler temperatures signal your body it's time to sleep.",
        followup: Some("Experiment within this range to find your personal ideal temperature."),
    },
    Topic {
        key: "reduce disturbances",
        answer: "Try these disturbance reducers:\n- White noise machines or earplugs for noise\n- Blackout curtains or sleep mask for light\n- Comfortable, breathable bedding\n- Keeping pets out of the bedroom if they disrupt sleep",
        followup: Some("Even small improvements to your sleep environment can make a big difference."),
    },
    Topic {
        key: "fall asleep faster",
        answer: "To fall asleep faster:\n1. Establish a relaxing pre-sleep routine\n2. Avoid screens before bed\n3. Try the 4-7-8 breathing technique\n4. Use visualization or progressive muscle relaxation\n5. Get out of bed if not asleep in 20 minutes",
        followup: Some("Consistency is key - practice these techniques regularly."),
    },
    Topic {
        key: "sleep tracking benefits",
        answer: "Sleep tracking helps you:\n- Identify patterns in your sleep habits\n- Understand how behaviors affect sleep quality\n- Measure improvements from changes you make\n- Recognize sleep disorders that may need professional help",
        followup: Some("But don't become obsessed with the numbers - how you feel matters most."),
    },
    Topic {
        key: "naps",
        answer: "Short naps (20-30 minutes) can be refreshing without affecting nighttime sleep. Avoid napping after 3pm and keep naps under 1 hour.",
        followup: Some("If you have insomnia, it's often better to avoid naps altogether."),
    },
    Topic {
        key: "insomnia",
        answer: "For insomnia:\n1. Maintain a consistent sleep schedule\n2. Create a comfortable sleep environment\n3. Limit caffeine and alcohol\n4. Manage stress through relaxation techniques\n5. Consider cognitive behavioral therapy for insomnia (CBT-I)",
        followup: Some("If insomnia persists more than a few weeks, consult a healthcare provider."),
    },
    Topic {
        key: "alcohol",
        answer: "Alcohol may help you fall asleep but reduces sleep quality. It disrupts REM sleep and can cause nighttime awakenings. Avoid alcohol within 3 hours of bedtime.",
        followup: Some("Even small amounts can affect sleep architecture."),
    },
    Topic {
        key: "caffeine",
        answer: "Caffeine can stay in your system for 6-8 hours. Avoid caffeine after 2pm or at least 6 hours before bedtime. Some people are more sensitive and need to cut off earlier.",
        followup: Some("Remember caffeine is in coffee, tea, chocolate, soda, and some medications."),
    },
    Topic {
        key: "sleep positions",
        answer: "Best sleep positions:\n- Back: Best for spine alignment, may reduce acid reflux\n- Side: Good for snorers and sleep apnea, helps digestion\n- Stomach: Generally not recommended as it strains neck and back",
        followup: Some("Use pillows to support your preferred position - between knees for side sleepers, under knees for back sleepers."),
    },
    Topic {
        key: "melatonin",
        answer: "Melatonin is a hormone that regulates sleep-wake cycles. Supplements may help with jet lag or shift work but aren't a long-term solution. Typical dose is 0.5-5mg taken 1-2 hours before bedtime.",
        followup: Some("Consult your doctor before using melatonin, especially if taking other medications."),
    },
    Topic {
        key: "sleep apnea",
        answer: "Sleep apnea symptoms include loud snoring, gasping for air, daytime sleepiness, and morning headaches. Risk factors include obesity, large neck size, and family history. Treatment may involve CPAP machines, oral devices, or lifestyle changes.",
        followup: Some("If you suspect sleep apnea, see a sleep specialist for evaluation."),
    },
    Topic {
        key: "dreams",
        answer: "Dreams occur during REM sleep. Remembering dreams varies by person. More vivid dreams may occur during stress, pregnancy, or with certain medications. Nightmares may indicate stress or trauma.",
        followup: Some("Keeping a dream journal can help identify patterns or stressors."),
    },
    Topic {
        key: "exercise",
        answer: "Regular exercise improves sleep quality but timing matters:\n- Morning/afternoon exercise is ideal\n- Evening exercise should finish 2-3 hours before bed\n- Gentle yoga or stretching before bed can be relaxing",
        followup: Some("Even light activity like walking can improve sleep."),
    },
    Topic {
        key: "mattress",
        answer: "Choose a mattress based on:\n1. Sleeping position\n2. Body type and weight\n3. Personal comfort preferences\n4. Support needs (back pain, etc.)\nReplace every 7-10 years or when uncomfortable.",
        followup: Some("Test mattresses in store if possible - what feels good for 5 minutes may not work all night."),
    },
    Topic {
        key: "clock watching",
        answer: "Clock watching increases sleep anxiety. Turn clocks away from view or remove them from the bedroom. If you wake at night, avoid checking the time.",
        followup: Some("Trust your body's internal clock rather than constantly monitoring time."),
    },
    Topic {
        key: "shift work",
        answer: "For shift workers:\n- Maintain a consistent sleep schedule even on days off\n- Use blackout curtains and white noise for daytime sleep\n- Limit caffeine in the second half of your shift\n- Take strategic naps when possible\n- Consider melatonin under medical supervision",
        followup: Some("It may take several weeks to adjust to a new shift schedule."),
    },
    Topic {
        key: "jet lag",
        answer: "To minimize jet lag:\n- Adjust your sleep schedule before traveling\n- Stay hydrated and avoid alcohol during flight\n- Seek sunlight at destination to reset circadian rhythm\n- Consider melatonin for eastward travel\n- Allow 1 day recovery per time zone crossed",
        followup: Some("Eastward travel (losing time) is typically harder to adjust to than westward."),
    },
    Topic {
        key: "pregnancy",
        answer: "During pregnancy:\n- Sleep on your side (especially left) improves circulation\n- Use pillows for support between knees and under belly\n- Elevate head slightly to reduce heartburn\n- Practice relaxation techniques for comfort",
        followup: Some("Frequent urination and discomfort are common - limit fluids before bed and nap when possible."),
    },
    Topic {
        key: "aging",
        answer: "Sleep changes with age:\n- Total sleep time may decrease\n- More nighttime awakenings\n- Earlier bedtimes and wake times\n- Reduced deep sleep\nMaintain good sleep habits and consult a doctor if sleep problems affect quality of life.",
        followup: Some("Older adults still need 7-8 hours of sleep - the 'need less sleep with age' myth isn't true."),
    },
];

/// Words that mark a message as a greeting. Substring containment.
pub const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "greetings"];

/// Words that mark a message as thanks. Substring containment.
pub const THANKS_WORDS: &[&str] = &["thanks", "thank you", "appreciate"];

/// Phrases that request a score analysis. Substring containment.
pub const ANALYSIS_TRIGGERS: &[&str] = &[
    "analyze my sleep",
    "my sleep score",
    "how did i sleep",
    "sleep analysis",
];

/// Greeting reply pool; one is chosen at random per greeting.
pub const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm your Sleep Assistant. How can I help you with your sleep today?",
    "Hi there! Ready to improve your sleep? What would you like to know?",
    "Greetings! I'm here to help with all your sleep-related questions.",
];

/// Acknowledgement pool for thanks.
pub const THANKS_REPLIES: &[&str] = &[
    "You're welcome! Let me know if you have any other sleep questions.",
    "Happy to help! Sweet dreams!",
    "Glad I could assist. Sleep well!",
];

/// Reply to an analysis request when no entry has been submitted yet.
pub const NO_DATA_PROMPT: &str =
    "I need your sleep data to analyze. Please submit a sleep entry first.";

/// Reply when the stored session payload cannot be read back.
pub const ANALYSIS_APOLOGY: &str =
    "Sorry, I had trouble analyzing your sleep data. Please try again.";

/// First band whose inclusive range contains the score.
pub fn band_for_score(score: u8) -> Option<&'static ScoreBand> {
    SCORE_BANDS
        .iter()
        .find(|band| band.low <= score && score <= band.high)
}

/// First topic whose key appears as a substring of the lower-cased message.
pub fn exact_topic_match(message: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| message.contains(topic.key))
}

/// The fallback help menu: every supported topic plus the analysis hint.
pub fn default_help_menu() -> String {
    let mut menu = String::from("I'm here to help with sleep-related questions. You can ask me about:\n");
    for topic in TOPICS {
        menu.push_str("- ");
        menu.push_str(topic.key);
        menu.push('\n');
    }
    menu.push_str("\nOr ask me to 'analyze my sleep' after submitting your sleep data.");
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_cover_full_range_without_gaps() {
        for score in 0..=100u8 {
            assert!(
                band_for_score(score).is_some(),
                "score {} has no band",
                score
            );
        }
    }

    #[test]
    fn test_shared_boundaries_resolve_to_earliest_band() {
        // 80 and 90 each sit in two bands; table order decides.
        assert_eq!(band_for_score(90).unwrap().rating, "Excellent");
        assert_eq!(band_for_score(80).unwrap().rating, "Very Good");
        assert_eq!(band_for_score(70).unwrap().rating, "Good");
        assert_eq!(band_for_score(50).unwrap().rating, "Fair");
        assert_eq!(band_for_score(0).unwrap().rating, "Poor");
    }

    #[test]
    fn test_band_examples() {
        assert_eq!(band_for_score(85).unwrap().rating, "Very Good");
        assert_eq!(band_for_score(95).unwrap().rating, "Excellent");
        assert_eq!(band_for_score(60).unwrap().rating, "Fair");
        assert_eq!(band_for_score(30).unwrap().rating, "Poor");
    }

    #[test]
    fn test_topic_keys_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for topic in TOPICS {
            assert!(seen.insert(topic.key), "duplicate topic key {}", topic.key);
            assert_eq!(topic.key, topic.key.to_lowercase());
        }
    }

    #[test]
    fn test_exact_topic_match_uses_table_order() {
        let topic = exact_topic_match("tell me about the best temperature for my bedroom").unwrap();
        assert_eq!(topic.key, "best temperature");
    }

    #[test]
    fn test_pools_are_populated() {
        assert_eq!(GENERAL_TIPS.len(), 10);
        assert_eq!(SCORE_BANDS.len(), 5);
        assert_eq!(TOPICS.len(), 20);
        assert!(!GREETING_REPLIES.is_empty());
        assert!(!THANKS_REPLIES.is_empty());
    }

    #[test]
    fn test_help_menu_lists_every_topic() {
        let menu = default_help_menu();
        for topic in TOPICS {
            assert!(menu.contains(topic.key), "menu missing {}", topic.key);
        }
        assert!(menu.contains("analyze my sleep"));
    }
}

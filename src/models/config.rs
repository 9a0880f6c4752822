use crate::types::{SentimentWeight, Strength, WordCount};

/// Bonus thresholds, penalty and display divisors used by the phrase scorer.
#[derive(Debug)]
pub struct PhraseScorerConfig {
    pub base_strength: Strength,
    pub long_phrase_min_words: WordCount,
    pub sentiment_magnitude_threshold: SentimentWeight,
    pub negative_balance_threshold: SentimentWeight,
    pub negative_penalty: Strength,
    pub strength_position_divisor: f32,
    pub length_position_divisor: f32,
    pub sentiment_position_divisor: f32,
    pub category_position_divisor: f32,
}

/// Minimum word count required before category feedback is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// At least 7 words.
    Strict,
    /// At least 5 words.
    Lenient,
}

impl LengthPolicy {
    pub fn min_word_count(&self) -> WordCount {
        match self {
            LengthPolicy::Strict => 7,
            LengthPolicy::Lenient => 5,
        }
    }
}

/// Length policy and success affirmations used by the feedback generator.
#[derive(Debug)]
pub struct FeedbackConfig {
    pub length_policy: LengthPolicy,
    pub affirmations: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use crate::{DEFAULT_FEEDBACK_CONFIG, DEFAULT_PHRASE_SCORER_CONFIG};

    #[test]
    fn test_configs_are_debuggable() {
        assert!(format!("{:?}", DEFAULT_FEEDBACK_CONFIG).contains("Strict"));
        assert!(format!("{:?}", DEFAULT_PHRASE_SCORER_CONFIG).contains("base_strength: 5"));
    }
}

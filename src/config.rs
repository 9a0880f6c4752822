use crate::constants::AFFIRMATIONS;
use crate::models::{FeedbackConfig, LengthPolicy, PhraseScorerConfig};

pub const DEFAULT_PHRASE_SCORER_CONFIG: &PhraseScorerConfig = &PhraseScorerConfig {
    base_strength: 5,
    long_phrase_min_words: 7,
    sentiment_magnitude_threshold: 4,
    negative_balance_threshold: -3,
    negative_penalty: 6,
    strength_position_divisor: 10.0,
    length_position_divisor: 15.0,
    sentiment_position_divisor: 4.0,
    category_position_divisor: 2.0,
};

pub const DEFAULT_FEEDBACK_CONFIG: &FeedbackConfig = &FeedbackConfig {
    length_policy: LengthPolicy::Strict,
    affirmations: AFFIRMATIONS,
};

pub const LENIENT_FEEDBACK_CONFIG: &FeedbackConfig = &FeedbackConfig {
    length_policy: LengthPolicy::Lenient,
    affirmations: AFFIRMATIONS,
};

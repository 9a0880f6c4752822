use crate::models::{CategoryCount, PhraseScorerConfig};
use crate::types::{Position, Strength};

/// Normalized `0.0..=1.0` values per category, for progress-bar style display.
///
/// These are presentation values only and never feed back into the strength.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryPositions {
    pub strength: Position,
    pub length: Position,
    pub concrete: Position,
    pub abstract_noun: Position,
    pub first_person: Position,
    pub second_person: Position,
    pub positive: Position,
    pub negative: Position,
}

pub struct PhraseScorer<'a> {
    config: &'a PhraseScorerConfig,
}

fn clamp_position(value: f32) -> Position {
    value.clamp(0.0, 1.0)
}

impl<'a> PhraseScorer<'a> {
    pub fn new(config: &'a PhraseScorerConfig) -> Self {
        Self { config }
    }

    /// Aggregates the category counts into a single strength.
    ///
    /// The negative-balance penalty is applied before the floor, so a penalized phrase
    /// lands exactly on `base_strength`.
    pub fn score(&self, counts: &CategoryCount) -> Strength {
        let config = self.config;
        let mut strength = config.base_strength;

        if counts.word_count >= config.long_phrase_min_words {
            strength += 1;
        }
        if counts.concrete_count >= 1 {
            strength += 1;
        }
        if counts.first_person_count >= 1 {
            strength += 1;
        }
        if counts.second_person_count >= 1 {
            strength += 1;
        }
        if counts.sentiment_magnitude() >= config.sentiment_magnitude_threshold {
            strength += 1;
        }
        if counts.sentiment_balance() <= config.negative_balance_threshold {
            strength -= config.negative_penalty;
        }

        strength.max(config.base_strength)
    }

    pub fn positions(&self, counts: &CategoryCount, strength: Strength) -> CategoryPositions {
        let config = self.config;
        let category = |count: usize| clamp_position(count as f32 / config.category_position_divisor);

        CategoryPositions {
            strength: clamp_position(strength as f32 / config.strength_position_divisor),
            length: clamp_position(counts.word_count as f32 / config.length_position_divisor),
            concrete: category(counts.concrete_count),
            abstract_noun: category(counts.abstract_count),
            first_person: category(counts.first_person_count),
            second_person: category(counts.second_person_count),
            positive: clamp_position(
                counts.positive_score.saturating_abs() as f32 / config.sentiment_position_divisor,
            ),
            negative: clamp_position(
                counts.negative_score.saturating_abs() as f32 / config.sentiment_position_divisor,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PHRASE_SCORER_CONFIG;

    fn full_marks() -> CategoryCount {
        CategoryCount {
            word_count: 9,
            concrete_count: 1,
            first_person_count: 1,
            second_person_count: 1,
            positive_score: 4,
            ..CategoryCount::default()
        }
    }

    #[test]
    fn test_empty_counts_score_at_floor() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);
        assert_eq!(scorer.score(&CategoryCount::default()), 5);
    }

    #[test]
    fn test_all_bonuses_score_maximum() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);
        assert_eq!(scorer.score(&full_marks()), 10);
    }

    #[test]
    fn test_negative_penalty_is_clamped_to_floor() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);
        let counts = CategoryCount {
            positive_score: 1,
            negative_score: -5,
            ..full_marks()
        };

        // 5 + 5 bonuses - 6 = 4, clamped back up to 5
        assert_eq!(scorer.score(&counts), 5);
    }

    #[test]
    fn test_negative_balance_boundary() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);

        let just_above = CategoryCount {
            positive_score: 0,
            negative_score: -2,
            ..full_marks()
        };
        let at_threshold = CategoryCount {
            positive_score: 0,
            negative_score: -3,
            ..full_marks()
        };

        assert_eq!(scorer.score(&just_above), 9);
        assert_eq!(scorer.score(&at_threshold), 5);
    }

    #[test]
    fn test_sentiment_magnitude_counts_both_directions() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);
        let counts = CategoryCount {
            positive_score: 2,
            negative_score: -2,
            ..CategoryCount::default()
        };

        assert_eq!(scorer.score(&counts), 6);
    }

    #[test]
    fn test_positions_are_clamped() {
        let scorer = PhraseScorer::new(DEFAULT_PHRASE_SCORER_CONFIG);
        let counts = CategoryCount {
            word_count: 30,
            concrete_count: 1,
            abstract_count: 5,
            positive_score: 2,
            negative_score: -9,
            ..CategoryCount::default()
        };

        let positions = scorer.positions(&counts, 8);
        assert_eq!(positions.strength, 0.8);
        assert_eq!(positions.length, 1.0);
        assert_eq!(positions.concrete, 0.5);
        assert_eq!(positions.abstract_noun, 1.0);
        assert_eq!(positions.first_person, 0.0);
        assert_eq!(positions.positive, 0.5);
        assert_eq!(positions.negative, 1.0);
    }
}

use crate::types::{SentimentWeight, WordCount};

/// Per-category tallies produced by one classification pass over an utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCount {
    pub word_count: WordCount,
    pub concrete_count: WordCount,
    pub abstract_count: WordCount,
    pub first_person_count: WordCount,
    pub second_person_count: WordCount,
    /// Sum of positive weights (`>= 0`).
    pub positive_score: SentimentWeight,
    /// Sum of negative weights (`<= 0`).
    pub negative_score: SentimentWeight,
    pub repeated_word_count: WordCount,
    pub unclassified_count: WordCount,
}

impl CategoryCount {
    /// Total emotional content, regardless of direction.
    pub fn sentiment_magnitude(&self) -> SentimentWeight {
        self.positive_score
            .saturating_add(self.negative_score.saturating_abs())
    }

    /// Net emotional direction. Negative when negative words outweigh positive ones.
    pub fn sentiment_balance(&self) -> SentimentWeight {
        self.positive_score.saturating_add(self.negative_score)
    }
}

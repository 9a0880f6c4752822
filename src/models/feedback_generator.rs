use crate::models::{CategoryCount, FeedbackConfig, ReferenceLists};
use crate::types::Word;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

/// The rule that produced a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    NotEnoughContent,
    MissingConcrete,
    MissingSecondPerson,
    MissingFirstPerson,
    MissingEmotion,
    NegativeOutweighsPositive,
    Success,
}

pub struct FeedbackGenerator<'a> {
    config: &'a FeedbackConfig,
    reference_lists: &'a ReferenceLists,
}

impl<'a> FeedbackGenerator<'a> {
    pub fn new(config: &'a FeedbackConfig, reference_lists: &'a ReferenceLists) -> Self {
        Self {
            config,
            reference_lists,
        }
    }

    /// Picks the first rule the counts trip.
    ///
    /// Prompts are aimed at the partner, so a missing second-person word is reported
    /// before a missing first-person word. Replies check first-person first.
    pub fn evaluate(&self, counts: &CategoryCount, is_prompt: bool) -> FeedbackKind {
        if counts.word_count < self.config.length_policy.min_word_count() {
            return FeedbackKind::NotEnoughContent;
        }
        if counts.concrete_count == 0 {
            return FeedbackKind::MissingConcrete;
        }

        let (person_first, person_second) = if is_prompt {
            (
                (counts.second_person_count, FeedbackKind::MissingSecondPerson),
                (counts.first_person_count, FeedbackKind::MissingFirstPerson),
            )
        } else {
            (
                (counts.first_person_count, FeedbackKind::MissingFirstPerson),
                (counts.second_person_count, FeedbackKind::MissingSecondPerson),
            )
        };

        for (count, kind) in [person_first, person_second] {
            if count == 0 {
                return kind;
            }
        }

        if counts.sentiment_magnitude() == 0 {
            return FeedbackKind::MissingEmotion;
        }
        if counts.negative_score.saturating_abs() > counts.positive_score {
            return FeedbackKind::NegativeOutweighsPositive;
        }

        FeedbackKind::Success
    }

    /// Renders the message for the rule the counts trip.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        counts: &CategoryCount,
        is_prompt: bool,
        rng: &mut R,
    ) -> (FeedbackKind, String) {
        let kind = self.evaluate(counts, is_prompt);
        (kind, self.render(kind, rng))
    }

    pub fn render<R: Rng + ?Sized>(&self, kind: FeedbackKind, rng: &mut R) -> String {
        let lists = self.reference_lists;

        match kind {
            FeedbackKind::NotEnoughContent => format!(
                "Try adding more to your phrase. Aim for at least {} words.",
                self.config.length_policy.min_word_count()
            ),
            FeedbackKind::MissingConcrete => with_example(
                "Try adding a specific detail",
                lists.concrete_nouns.iter().choose(rng),
            ),
            FeedbackKind::MissingSecondPerson => with_example(
                "Try including your partner with a word",
                lists.second_person.iter().choose(rng),
            ),
            FeedbackKind::MissingFirstPerson => with_example(
                "Try sharing something about yourself with a word",
                lists.first_person.iter().choose(rng),
            ),
            FeedbackKind::MissingEmotion => with_example(
                "Try adding some emotion",
                lists.positive_words.keys().choose(rng),
            ),
            FeedbackKind::NegativeOutweighsPositive => with_example(
                "Your phrase leans negative. Try balancing it with a word",
                lists.positive_words.keys().choose(rng),
            ),
            FeedbackKind::Success => match self.config.affirmations.choose(rng) {
                Some(affirmation) => format!("{} That's a strong phrase.", affirmation),
                None => "That's a strong phrase.".to_string(),
            },
        }
    }
}

fn with_example(message: &str, example: Option<&Word>) -> String {
    match example {
        Some(word) => format!("{} like \"{}\".", message, word),
        None => format!("{}.", message),
    }
}

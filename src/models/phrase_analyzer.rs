use crate::models::{
    CategoryCount, CategoryPositions, Classifier, FeedbackConfig, FeedbackGenerator, FeedbackKind,
    PhraseScorer, PhraseScorerConfig, ReferenceLists, Tokenizer, UnclassifiedWordQueue,
    UnclassifiedWordSink,
};
use crate::types::{Strength, WordRef};
use log::debug;
use rand::Rng;

/// The result of scoring one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseScore {
    pub strength: Strength,
    pub counts: CategoryCount,
    pub positions: CategoryPositions,
    pub feedback_kind: FeedbackKind,
    pub feedback: String,
}

/// Runs the full tokenize, classify, score and feedback pipeline.
///
/// The analyzer owns the session's unclassified word queue; reference lists are passed
/// in per call so a fresh snapshot can be used after every reload.
pub struct PhraseAnalyzer<'a> {
    tokenizer: Tokenizer,
    unclassified_words: UnclassifiedWordQueue,
    scorer_config: &'a PhraseScorerConfig,
    feedback_config: &'a FeedbackConfig,
}

impl<'a> PhraseAnalyzer<'a> {
    pub fn new(
        tokenizer: Tokenizer,
        scorer_config: &'a PhraseScorerConfig,
        feedback_config: &'a FeedbackConfig,
    ) -> Self {
        Self {
            tokenizer,
            unclassified_words: UnclassifiedWordQueue::new(),
            scorer_config,
            feedback_config,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn unclassified_words(&self) -> &UnclassifiedWordQueue {
        &self.unclassified_words
    }

    /// Tallies the categories of an utterance without scoring it.
    pub fn count(&self, text: &WordRef, reference_lists: &ReferenceLists) -> CategoryCount {
        let tokens = self.tokenizer.tokenize(text);
        Classifier::new(reference_lists).count(&tokens, Some(&self.unclassified_words))
    }

    pub fn analyze<R: Rng + ?Sized>(
        &self,
        text: &WordRef,
        reference_lists: &ReferenceLists,
        is_prompt: bool,
        rng: &mut R,
    ) -> PhraseScore {
        let counts = self.count(text, reference_lists);

        let scorer = PhraseScorer::new(self.scorer_config);
        let strength = scorer.score(&counts);
        let positions = scorer.positions(&counts, strength);

        let (feedback_kind, feedback) =
            FeedbackGenerator::new(self.feedback_config, reference_lists)
                .generate(&counts, is_prompt, rng);

        debug!(
            "Scored {} words at strength {} ({:?})",
            counts.word_count, strength, feedback_kind
        );

        PhraseScore {
            strength,
            counts,
            positions,
            feedback_kind,
            feedback,
        }
    }

    /// Hands queued unclassified words to the sink. Failures are logged, never returned.
    pub fn flush_unclassified_words(&self, sink: &dyn UnclassifiedWordSink) -> usize {
        self.unclassified_words.flush(sink)
    }
}

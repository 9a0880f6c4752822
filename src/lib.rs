mod config;
pub use config::{DEFAULT_FEEDBACK_CONFIG, DEFAULT_PHRASE_SCORER_CONFIG, LENIENT_FEEDBACK_CONFIG};
mod constants;
pub use constants::AFFIRMATIONS;
pub mod models;
pub use models::{
    Category, CategoryCount, CategoryPositions, Classifier, CsvUnclassifiedWordSink, Error,
    FeedbackConfig, FeedbackGenerator, FeedbackKind, LengthPolicy, MemoryUnclassifiedWordSink,
    PartOfSpeech, PhraseAnalyzer, PhraseScore, PhraseScorer, PhraseScorerConfig, ReferenceLists,
    ReferenceSnapshot, ReferenceStatus, ReferenceStore, RuleBasedTagger, ScoredWord, Tagger,
    Token, Tokenizer, UnclassifiedWordQueue, UnclassifiedWordSink,
};
pub mod types;
pub use types::{Position, SentimentWeight, Strength, Word, WordCount, WordRef};
use rand::Rng;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Scores a prompt with the default configuration and the built-in tagger.
///
/// Unclassified nouns found along the way are discarded; use a long-lived
/// `PhraseAnalyzer` to collect them for upload.
pub fn score_phrase(text: &WordRef, reference_lists: &ReferenceLists) -> PhraseScore {
    score_phrase_with_custom_config(
        DEFAULT_PHRASE_SCORER_CONFIG,
        DEFAULT_FEEDBACK_CONFIG,
        text,
        reference_lists,
        true,
        &mut rand::thread_rng(),
    )
}

pub fn score_phrase_with_custom_config<R: Rng + ?Sized>(
    phrase_scorer_config: &PhraseScorerConfig,
    feedback_config: &FeedbackConfig,
    text: &WordRef,
    reference_lists: &ReferenceLists,
    is_prompt: bool,
    rng: &mut R,
) -> PhraseScore {
    let phrase_analyzer =
        PhraseAnalyzer::new(Tokenizer::new(), phrase_scorer_config, feedback_config);

    phrase_analyzer.analyze(text, reference_lists, is_prompt, rng)
}

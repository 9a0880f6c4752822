pub mod category_count;
pub use category_count::CategoryCount;

pub mod classifier;
pub use classifier::{Category, Classifier};

pub mod config;
pub use config::{FeedbackConfig, LengthPolicy, PhraseScorerConfig};

pub mod error;
pub use error::Error;

pub mod feedback_generator;
pub use feedback_generator::{FeedbackGenerator, FeedbackKind};

pub mod phrase_analyzer;
pub use phrase_analyzer::{PhraseAnalyzer, PhraseScore};

pub mod phrase_scorer;
pub use phrase_scorer::{CategoryPositions, PhraseScorer};

pub mod reference_lists;
pub use reference_lists::{ReferenceLists, ReferenceSnapshot, ScoredWord};

pub mod reference_store;
pub use reference_store::{ReferenceStatus, ReferenceStore};

pub mod tagger;
pub use tagger::{RuleBasedTagger, Tagger};

pub mod token;
pub use token::{PartOfSpeech, Token};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod unclassified_word_queue;
pub use unclassified_word_queue::{
    CsvUnclassifiedWordSink, MemoryUnclassifiedWordSink, UnclassifiedWordQueue,
    UnclassifiedWordSink,
};

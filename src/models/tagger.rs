use crate::constants::{
    FUNCTION_WORDS, NON_NOUN_SUFFIXES, NOUN_SUFFIX_EXCEPTIONS, VERBS_AND_ADJECTIVES,
};
use crate::models::PartOfSpeech;
use crate::types::WordRef;
use std::collections::HashSet;

/// Assigns a part-of-speech tag to a single word.
///
/// Any `Fn(&str) -> PartOfSpeech` closure is a `Tagger`, which makes it easy to plug
/// in an external NLP tagger or a fixed table in tests.
pub trait Tagger {
    fn tag(&self, word: &WordRef) -> PartOfSpeech;
}

impl<F> Tagger for F
where
    F: Fn(&WordRef) -> PartOfSpeech,
{
    fn tag(&self, word: &WordRef) -> PartOfSpeech {
        self(word)
    }
}

/// A lightweight rule-based tagger.
///
/// Closed-class function words (pronouns, determiners, prepositions, conjunctions,
/// auxiliaries), common verbs and adjectives, numbers, contractions, and words with a
/// verb, adjective or adverb suffix (`-ing`, `-ed`, `-ous`, `-ly`, ...) are tagged
/// `Other`. Every remaining alphabetic word is assumed to be a noun.
pub struct RuleBasedTagger {
    non_nouns: HashSet<String>,
    noun_exceptions: HashSet<String>,
}

impl RuleBasedTagger {
    pub fn new() -> Self {
        Self {
            non_nouns: FUNCTION_WORDS
                .iter()
                .chain(VERBS_AND_ADJECTIVES.iter())
                .map(|word| word.to_string())
                .collect(),
            noun_exceptions: NOUN_SUFFIX_EXCEPTIONS
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }

    fn has_non_noun_suffix(&self, word: &WordRef) -> bool {
        let length = word.chars().count();

        NON_NOUN_SUFFIXES
            .iter()
            .any(|(suffix, min_length)| length >= *min_length && word.ends_with(suffix))
    }
}

impl Default for RuleBasedTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for RuleBasedTagger {
    fn tag(&self, word: &WordRef) -> PartOfSpeech {
        let lowercased = word.to_lowercase();

        if lowercased.is_empty()
            || self.non_nouns.contains(&lowercased)
            || lowercased.contains('\'')
        {
            return PartOfSpeech::Other;
        }

        if !lowercased.chars().all(|c| c.is_alphabetic()) {
            return PartOfSpeech::Other;
        }

        if !self.noun_exceptions.contains(&lowercased) && self.has_non_noun_suffix(&lowercased) {
            return PartOfSpeech::Other;
        }

        PartOfSpeech::Noun
    }
}

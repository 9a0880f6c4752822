use crate::types::Word;

/// A best-effort lexical category for a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Other,
}

/// A word extracted from an utterance, along with its part-of-speech tag.
///
/// Note: The word is kept verbatim (original case). Classification performs its own
/// case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: Word,
    pub part_of_speech: PartOfSpeech,
}

impl Token {
    pub fn new(word: impl Into<Word>, part_of_speech: PartOfSpeech) -> Self {
        Self {
            word: word.into(),
            part_of_speech,
        }
    }

    pub fn is_noun(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Noun
    }
}

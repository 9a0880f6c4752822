use crate::models::{RuleBasedTagger, Tagger, Token};
use crate::types::{Word, WordRef};

/// Splits utterances into words and tags each word with a part of speech.
pub struct Tokenizer {
    tagger: Box<dyn Tagger + Send + Sync>,
}

impl Tokenizer {
    /// Tokenizer backed by the built-in `RuleBasedTagger`
    pub fn new() -> Self {
        Self::with_tagger(RuleBasedTagger::new())
    }

    /// Tokenizer backed by a custom part-of-speech tagger
    pub fn with_tagger<T>(tagger: T) -> Self
    where
        T: Tagger + Send + Sync + 'static,
    {
        Self {
            tagger: Box::new(tagger),
        }
    }

    /// Splits the text into words on whitespace and punctuation boundaries.
    ///
    /// Apostrophes and hyphens are kept when they sit between two alphanumeric
    /// characters (`don't`, `well-known`) and treated as boundaries otherwise.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn split_words(text: &WordRef) -> Vec<Word> {
        let chars: Vec<char> = text.chars().collect();
        let mut words = Vec::new();
        let mut current = String::new();

        for (idx, &c) in chars.iter().enumerate() {
            if c.is_alphanumeric() {
                current.push(c);
                continue;
            }

            let is_joiner = matches!(c, '\'' | '\u{2019}' | '-');
            let joins_word = is_joiner
                && !current.is_empty()
                && chars
                    .get(idx + 1)
                    .map_or(false, |next| next.is_alphanumeric());

            if joins_word {
                // Normalize curly apostrophes so "don’t" and "don't" compare equal
                current.push(if c == '\u{2019}' { '\'' } else { c });
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            words.push(current);
        }

        words
    }

    /// Tokenizer function to split the text into tagged tokens.
    pub fn tokenize(&self, text: &WordRef) -> Vec<Token> {
        Self::split_words(text)
            .into_iter()
            .map(|word| {
                let part_of_speech = self.tagger.tag(&word);
                Token::new(word, part_of_speech)
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

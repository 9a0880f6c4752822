use crate::models::Error;
use crate::types::{SentimentWeight, Word, WordRef};
use flate2::read::GzDecoder;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A scored sentiment entry, as delivered by the reference data backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: Word,
    pub score: SentimentWeight,
}

/// The wire shape of a reference data snapshot.
///
/// Every list is optional; missing lists are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSnapshot {
    #[serde(default)]
    pub concrete_nouns: Vec<Word>,
    #[serde(default)]
    pub abstract_nouns: Vec<Word>,
    #[serde(default)]
    pub first_person: Vec<Word>,
    #[serde(default)]
    pub second_person: Vec<Word>,
    #[serde(default)]
    pub positive_words: Vec<ScoredWord>,
    #[serde(default)]
    pub negative_words: Vec<ScoredWord>,
}

/// In-memory, read-only category word sets used for classification.
///
/// All words are stored trimmed and lowercase. Ordered collections are used so that
/// random example-word selection is reproducible for a seeded random source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLists {
    pub concrete_nouns: BTreeSet<Word>,
    pub abstract_nouns: BTreeSet<Word>,
    pub first_person: BTreeSet<Word>,
    pub second_person: BTreeSet<Word>,
    pub positive_words: BTreeMap<Word, SentimentWeight>,
    pub negative_words: BTreeMap<Word, SentimentWeight>,
}

fn normalize_word(word: &WordRef) -> Option<Word> {
    let normalized = word.trim().to_lowercase();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

impl ReferenceLists {
    /// Empty lists. Classification against these never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ReferenceSnapshot) -> Self {
        let mut lists = Self::empty();

        for word in &snapshot.concrete_nouns {
            lists.insert_concrete_noun(word);
        }
        for word in &snapshot.abstract_nouns {
            lists.insert_abstract_noun(word);
        }
        for word in &snapshot.first_person {
            lists.insert_first_person(word);
        }
        for word in &snapshot.second_person {
            lists.insert_second_person(word);
        }
        for scored_word in &snapshot.positive_words {
            lists.insert_positive_word(&scored_word.word, scored_word.score);
        }
        for scored_word in &snapshot.negative_words {
            lists.insert_negative_word(&scored_word.word, scored_word.score);
        }

        lists
    }

    /// Converts the lists back into their wire shape.
    pub fn to_snapshot(&self) -> ReferenceSnapshot {
        let scored = |map: &BTreeMap<Word, SentimentWeight>| {
            map.iter()
                .map(|(word, score)| ScoredWord {
                    word: word.clone(),
                    score: *score,
                })
                .collect()
        };

        ReferenceSnapshot {
            concrete_nouns: self.concrete_nouns.iter().cloned().collect(),
            abstract_nouns: self.abstract_nouns.iter().cloned().collect(),
            first_person: self.first_person.iter().cloned().collect(),
            second_person: self.second_person.iter().cloned().collect(),
            positive_words: scored(&self.positive_words),
            negative_words: scored(&self.negative_words),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let snapshot: ReferenceSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let snapshot: ReferenceSnapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Loads lists from CSV with a `category,word,score` header.
    ///
    /// Recognized categories are `concrete`, `abstract`, `first_person`,
    /// `second_person`, `positive` and `negative`. The `score` column is only read for
    /// `positive` and `negative` rows.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut lists = Self::empty();
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;

            let (category, word) = match (record.get(0), record.get(1)) {
                (Some(category), Some(word)) => (category, word),
                _ => {
                    warn!("Skipping incomplete reference row {}: {:?}", row_idx, record);
                    continue;
                }
            };

            let parse_score = || -> Result<SentimentWeight, Error> {
                record
                    .get(2)
                    .unwrap_or("")
                    .parse::<SentimentWeight>()
                    .map_err(|err| {
                        Error::ParserError(format!(
                            "Invalid score for \"{}\" on row {}: {}",
                            word, row_idx, err
                        ))
                    })
            };

            match category.to_lowercase().as_str() {
                "concrete" => lists.insert_concrete_noun(word),
                "abstract" => lists.insert_abstract_noun(word),
                "first_person" => lists.insert_first_person(word),
                "second_person" => lists.insert_second_person(word),
                "positive" => lists.insert_positive_word(word, parse_score()?),
                "negative" => lists.insert_negative_word(word, parse_score()?),
                other => warn!("Skipping unknown reference category \"{}\"", other),
            }
        }

        Ok(lists)
    }

    /// Loads lists from a CSV file. Paths ending in `.gz` are decompressed on the fly.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let lists = if path.extension().map_or(false, |ext| ext == "gz") {
            Self::from_csv_reader(GzDecoder::new(file))?
        } else {
            Self::from_csv_reader(file)?
        };

        info!(
            "Loaded {} reference words from {:?}",
            lists.total_word_count(),
            path
        );

        Ok(lists)
    }

    /// Loads lists from a JSON or CSV (optionally gzip-compressed) file, chosen by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        if path.extension().map_or(false, |ext| ext == "json") {
            Self::from_json_path(path)
        } else {
            Self::from_csv_path(path)
        }
    }

    pub fn insert_concrete_noun(&mut self, word: &WordRef) {
        if let Some(word) = normalize_word(word) {
            self.concrete_nouns.insert(word);
        }
    }

    pub fn insert_abstract_noun(&mut self, word: &WordRef) {
        if let Some(word) = normalize_word(word) {
            self.abstract_nouns.insert(word);
        }
    }

    pub fn insert_first_person(&mut self, word: &WordRef) {
        if let Some(word) = normalize_word(word) {
            self.first_person.insert(word);
        }
    }

    pub fn insert_second_person(&mut self, word: &WordRef) {
        if let Some(word) = normalize_word(word) {
            self.second_person.insert(word);
        }
    }

    /// Positive weights are stored as `>= 0` regardless of the sign they were authored with.
    pub fn insert_positive_word(&mut self, word: &WordRef, score: SentimentWeight) {
        if let Some(word) = normalize_word(word) {
            self.positive_words.insert(word, score.saturating_abs());
        }
    }

    /// Negative weights are stored as `<= 0` regardless of the sign they were authored with.
    pub fn insert_negative_word(&mut self, word: &WordRef, score: SentimentWeight) {
        if let Some(word) = normalize_word(word) {
            self.negative_words
                .insert(word, score.saturating_abs().saturating_neg());
        }
    }

    pub fn total_word_count(&self) -> usize {
        self.concrete_nouns.len()
            + self.abstract_nouns.len()
            + self.first_person.len()
            + self.second_person.len()
            + self.positive_words.len()
            + self.negative_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_word_count() == 0
    }
}

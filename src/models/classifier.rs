use crate::models::{CategoryCount, ReferenceLists, Token, UnclassifiedWordQueue};
use crate::types::SentimentWeight;
use log::debug;
use std::collections::HashSet;

/// A single category a token belongs to.
///
/// Categories are not mutually exclusive: one token may yield several of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Concrete,
    Abstract,
    FirstPerson,
    SecondPerson,
    Positive(SentimentWeight),
    Negative(SentimentWeight),
    /// A noun found in neither noun list. Always accompanied by a provisional `Concrete`.
    Unclassified,
}

pub struct Classifier<'a> {
    reference_lists: &'a ReferenceLists,
}

impl<'a> Classifier<'a> {
    pub fn new(reference_lists: &'a ReferenceLists) -> Self {
        Self { reference_lists }
    }

    /// Determines every category the token belongs to.
    ///
    /// The noun lists are checked independently, so a word present in both the concrete
    /// and abstract lists is reported as both. Only noun-tagged words found in no
    /// reference list at all fall back to `Unclassified`.
    pub fn classify(&self, token: &Token) -> Vec<Category> {
        let lists = self.reference_lists;
        let word = token.word.to_lowercase();
        let mut categories = Vec::new();

        let is_concrete = lists.concrete_nouns.contains(&word);
        let is_abstract = lists.abstract_nouns.contains(&word);
        let is_first_person = lists.first_person.contains(&word);
        let is_second_person = lists.second_person.contains(&word);
        let positive_weight = lists.positive_words.get(&word).copied();
        let negative_weight = lists.negative_words.get(&word).copied();

        let is_known_word = is_concrete
            || is_abstract
            || is_first_person
            || is_second_person
            || positive_weight.is_some()
            || negative_weight.is_some();

        if is_concrete {
            categories.push(Category::Concrete);
        }
        if is_abstract {
            categories.push(Category::Abstract);
        }
        if token.is_noun() && !is_known_word {
            categories.push(Category::Unclassified);
            categories.push(Category::Concrete);
        }

        if is_first_person {
            categories.push(Category::FirstPerson);
        }
        if is_second_person {
            categories.push(Category::SecondPerson);
        }

        if let Some(weight) = positive_weight {
            categories.push(Category::Positive(weight));
        }
        if let Some(weight) = negative_weight {
            categories.push(Category::Negative(weight));
        }

        debug!("Classified \"{}\" as {:?}", token.word, categories);

        categories
    }

    /// Classifies every token and tallies the categories.
    ///
    /// Unclassified nouns are handed to the queue, which keeps only the first
    /// occurrence of each lowercase word.
    pub fn count(&self, tokens: &[Token], queue: Option<&UnclassifiedWordQueue>) -> CategoryCount {
        let mut counts = CategoryCount {
            word_count: tokens.len(),
            ..CategoryCount::default()
        };
        let mut seen_words: HashSet<String> = HashSet::with_capacity(tokens.len());

        for token in tokens {
            if !seen_words.insert(token.word.to_lowercase()) {
                counts.repeated_word_count += 1;
            }

            for category in self.classify(token) {
                match category {
                    Category::Concrete => counts.concrete_count += 1,
                    Category::Abstract => counts.abstract_count += 1,
                    Category::FirstPerson => counts.first_person_count += 1,
                    Category::SecondPerson => counts.second_person_count += 1,
                    Category::Positive(weight) => {
                        counts.positive_score = counts.positive_score.saturating_add(weight)
                    }
                    Category::Negative(weight) => {
                        counts.negative_score = counts.negative_score.saturating_add(weight)
                    }
                    Category::Unclassified => {
                        counts.unclassified_count += 1;
                        if let Some(queue) = queue {
                            if queue.enqueue(&token.word) {
                                debug!("Queued unclassified noun \"{}\"", token.word);
                            }
                        }
                    }
                }
            }
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartOfSpeech;

    fn lists() -> ReferenceLists {
        let mut lists = ReferenceLists::empty();
        lists.insert_concrete_noun("dog");
        lists.insert_concrete_noun("light");
        lists.insert_abstract_noun("light");
        lists.insert_abstract_noun("freedom");
        lists.insert_first_person("i");
        lists.insert_second_person("you");
        lists.insert_positive_word("love", 2);
        lists.insert_negative_word("hate", -2);
        lists
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let lists = lists();
        let classifier = Classifier::new(&lists);

        assert_eq!(
            classifier.classify(&Token::new("Dog", PartOfSpeech::Noun)),
            classifier.classify(&Token::new("dog", PartOfSpeech::Noun))
        );
        assert_eq!(
            classifier.classify(&Token::new("DOG", PartOfSpeech::Other)),
            vec![Category::Concrete]
        );
    }

    #[test]
    fn test_word_in_both_noun_lists_counts_twice() {
        let lists = lists();
        let classifier = Classifier::new(&lists);

        assert_eq!(
            classifier.classify(&Token::new("light", PartOfSpeech::Noun)),
            vec![Category::Concrete, Category::Abstract]
        );
    }

    #[test]
    fn test_unknown_noun_is_provisionally_concrete() {
        let lists = lists();
        let classifier = Classifier::new(&lists);

        assert_eq!(
            classifier.classify(&Token::new("giraffe", PartOfSpeech::Noun)),
            vec![Category::Unclassified, Category::Concrete]
        );
        assert!(classifier
            .classify(&Token::new("giraffe", PartOfSpeech::Other))
            .is_empty());
    }

    #[test]
    fn test_sentiment_combines_with_other_categories() {
        let mut lists = lists();
        lists.insert_positive_word("dog", 1);
        let classifier = Classifier::new(&lists);

        assert_eq!(
            classifier.classify(&Token::new("dog", PartOfSpeech::Noun)),
            vec![Category::Concrete, Category::Positive(1)]
        );
    }

    #[test]
    fn test_listed_words_never_fall_back_to_unclassified() {
        let lists = lists();
        let classifier = Classifier::new(&lists);

        assert_eq!(
            classifier.classify(&Token::new("Love", PartOfSpeech::Noun)),
            vec![Category::Positive(2)]
        );
        assert_eq!(
            classifier.classify(&Token::new("hate", PartOfSpeech::Noun)),
            vec![Category::Negative(-2)]
        );
        assert_eq!(
            classifier.classify(&Token::new("you", PartOfSpeech::Noun)),
            vec![Category::SecondPerson]
        );
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let mut lists = lists();
        lists.insert_positive_word("big", i32::MAX);
        lists.insert_negative_word("doom", i32::MIN);
        let classifier = Classifier::new(&lists);

        let tokens = vec![
            Token::new("big", PartOfSpeech::Other),
            Token::new("big", PartOfSpeech::Other),
            Token::new("doom", PartOfSpeech::Other),
            Token::new("doom", PartOfSpeech::Other),
        ];

        let counts = classifier.count(&tokens, None);
        assert_eq!(counts.positive_score, i32::MAX);
        assert_eq!(counts.negative_score, -i32::MAX - 1);
        assert_eq!(counts.sentiment_magnitude(), i32::MAX);
        assert_eq!(counts.sentiment_balance(), -1);
    }

    #[test]
    fn test_count_tracks_repeats_and_unclassified() {
        let lists = lists();
        let classifier = Classifier::new(&lists);
        let queue = UnclassifiedWordQueue::new();

        let tokens = vec![
            Token::new("Giraffe", PartOfSpeech::Noun),
            Token::new("giraffe", PartOfSpeech::Noun),
            Token::new("hate", PartOfSpeech::Other),
        ];

        let counts = classifier.count(&tokens, Some(&queue));
        assert_eq!(counts.word_count, 3);
        assert_eq!(counts.repeated_word_count, 1);
        assert_eq!(counts.unclassified_count, 2);
        assert_eq!(counts.concrete_count, 2);
        assert_eq!(counts.negative_score, -2);
        assert_eq!(queue.pending(), vec!["giraffe"]);
    }

    #[test]
    fn test_empty_lists_never_match() {
        let lists = ReferenceLists::empty();
        let classifier = Classifier::new(&lists);

        let counts = classifier.count(&[Token::new("you", PartOfSpeech::Other)], None);
        assert_eq!(
            counts,
            CategoryCount {
                word_count: 1,
                ..CategoryCount::default()
            }
        );
    }
}

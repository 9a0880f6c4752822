use phrase_coach::{
    score_phrase_with_custom_config, FeedbackKind, PartOfSpeech, PhraseScore, ReferenceLists,
    Strength, Tagger, DEFAULT_FEEDBACK_CONFIG, DEFAULT_PHRASE_SCORER_CONFIG,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{fs, path::Path};
pub mod constants;
use constants::{TEST_REFERENCE_LISTS_JSON_PATH, TEST_RNG_SEED};

/// The reference lists from the worked scoring example.
pub fn sample_reference_lists() -> ReferenceLists {
    let mut lists = ReferenceLists::empty();
    lists.insert_concrete_noun("dog");
    lists.insert_concrete_noun("table");
    lists.insert_first_person("i");
    lists.insert_first_person("me");
    lists.insert_second_person("you");
    lists.insert_positive_word("love", 2);
    lists.insert_negative_word("hate", -2);
    lists
}

/// A tagger that treats only the given words (case-insensitively) as nouns.
pub fn fixed_noun_tagger(nouns: &'static [&'static str]) -> impl Tagger + Send + Sync {
    move |word: &str| {
        if nouns.iter().any(|noun| noun.eq_ignore_ascii_case(word)) {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Other
        }
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(TEST_RNG_SEED)
}

/// Loads the JSON reference list fixture.
pub fn load_reference_lists_fixture() -> ReferenceLists {
    ReferenceLists::from_json_path(&*TEST_REFERENCE_LISTS_JSON_PATH)
        .expect("Failed to load reference list fixture")
}

fn find_directive(file_path: &Path, directive: &str) -> Option<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        let line = line.trim();
        line.strip_prefix(directive)
            .map(|value| value.trim().to_string())
    })
}

// Helper function to get the expected strength from the text file
pub fn get_expected_strength(file_path: &Path) -> Option<Strength> {
    find_directive(file_path, "EXPECTED_STRENGTH:").map(|value| {
        value
            .parse::<Strength>()
            .expect("EXPECTED_STRENGTH must be an integer")
    })
}

// Helper function to get the expected feedback rule from the text file
pub fn get_expected_feedback_kind(file_path: &Path) -> Option<FeedbackKind> {
    find_directive(file_path, "EXPECTED_FEEDBACK:").map(|value| match value.as_str() {
        "NotEnoughContent" => FeedbackKind::NotEnoughContent,
        "MissingConcrete" => FeedbackKind::MissingConcrete,
        "MissingSecondPerson" => FeedbackKind::MissingSecondPerson,
        "MissingFirstPerson" => FeedbackKind::MissingFirstPerson,
        "MissingEmotion" => FeedbackKind::MissingEmotion,
        "NegativeOutweighsPositive" => FeedbackKind::NegativeOutweighsPositive,
        "Success" => FeedbackKind::Success,
        other => panic!("Unknown EXPECTED_FEEDBACK value: {}", other),
    })
}

/// Reads the utterance from a test file, dropping directive and comment lines.
pub fn read_utterance(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with("EXPECTED_STRENGTH:")
                && !line.starts_with("EXPECTED_FEEDBACK:")
                && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to score the utterance in a test file against the fixture lists
pub fn run_test_for_file(file_path: &Path, reference_lists: &ReferenceLists) -> PhraseScore {
    let utterance = read_utterance(file_path);

    score_phrase_with_custom_config(
        DEFAULT_PHRASE_SCORER_CONFIG,
        DEFAULT_FEEDBACK_CONFIG,
        &utterance,
        reference_lists,
        true,
        &mut seeded_rng(),
    )
}

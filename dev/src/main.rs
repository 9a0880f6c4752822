use log::info;
use phrase_coach::{
    MemoryUnclassifiedWordSink, PhraseAnalyzer, ReferenceLists, Tokenizer,
    DEFAULT_FEEDBACK_CONFIG, DEFAULT_PHRASE_SCORER_CONFIG,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let reference_lists = match ReferenceLists::from_path("tests/test_data_files/reference_lists.json") {
        Ok(reference_lists) => reference_lists,
        Err(e) => {
            eprintln!("Failed to load reference lists: {}", e);
            std::process::exit(1);
        }
    };

    let phrase_analyzer = PhraseAnalyzer::new(
        Tokenizer::new(),
        DEFAULT_PHRASE_SCORER_CONFIG,
        DEFAULT_FEEDBACK_CONFIG,
    );
    let mut rng = StdRng::seed_from_u64(0);

    let phrases = [
        "I would love to hear about your amazing trip to the beach",
        "My weekend at the park with my dog was great fun",
        "I hate this awful weather and I think you hate it too",
    ];

    for phrase in phrases {
        let score = phrase_analyzer.analyze(phrase, &reference_lists, true, &mut rng);
        println!("{:>2} {:?}", score.strength, score.positions);
        println!("   {}", score.feedback);
    }

    let sink = MemoryUnclassifiedWordSink::new();
    phrase_analyzer.flush_unclassified_words(&sink);
    info!("Unclassified: {:?}", sink.words());
}

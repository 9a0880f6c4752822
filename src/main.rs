use log::error;
use phrase_coach::{
    CsvUnclassifiedWordSink, PhraseAnalyzer, ReferenceLists, ReferenceStore, Tokenizer,
    DEFAULT_FEEDBACK_CONFIG, DEFAULT_PHRASE_SCORER_CONFIG, LENIENT_FEEDBACK_CONFIG,
};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const UNCLASSIFIED_NOUNS_FILE_NAME: &str = "unclassified_nouns.csv";

fn print_usage() {
    eprintln!("Usage: phrase-coach-cli [--lenient] [--response] <reference-lists.{{json,csv,csv.gz}}>");
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let mut lenient = false;
    let mut is_prompt = true;
    let mut reference_path: Option<PathBuf> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--lenient" => lenient = true,
            "--response" => is_prompt = false,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => reference_path = Some(PathBuf::from(arg)),
        }
    }

    let reference_path = match reference_path {
        Some(path) => path,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    let reference_store = ReferenceStore::new();
    if let Err(e) = reference_store.load_with(|| ReferenceLists::from_path(&reference_path)) {
        error!("Failed to load reference lists: {}", e);
        eprintln!("Failed to load reference lists: {}", e);
        std::process::exit(1);
    }

    let reference_lists = match reference_store.snapshot() {
        Ok(reference_lists) => reference_lists,
        Err(e) => {
            error!("Reference lists unavailable: {}", e);
            std::process::exit(1);
        }
    };

    let feedback_config = if lenient {
        LENIENT_FEEDBACK_CONFIG
    } else {
        DEFAULT_FEEDBACK_CONFIG
    };
    let phrase_analyzer = PhraseAnalyzer::new(
        Tokenizer::new(),
        DEFAULT_PHRASE_SCORER_CONFIG,
        feedback_config,
    );
    let mut rng = rand::thread_rng();

    // Score each line read from stdin
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        let score = phrase_analyzer.analyze(&line, &reference_lists, is_prompt, &mut rng);
        println!("{}\t{}", score.strength, score.feedback);
    }

    let sink_path = reference_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(UNCLASSIFIED_NOUNS_FILE_NAME);
    let sink = CsvUnclassifiedWordSink::new(sink_path);

    phrase_analyzer.flush_unclassified_words(&sink);
}

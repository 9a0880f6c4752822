#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_REFERENCE_LISTS_JSON_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "reference_lists.json"));

pub static TEST_REFERENCE_LISTS_CSV_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_data_files", "reference_lists.csv"));

pub const TEST_RNG_SEED: u64 = 1234;

use flate2::write::GzEncoder;
use flate2::Compression;
use phrase_coach::{Error, ReferenceLists, ReferenceStatus, ReferenceStore};
use std::fs;
use std::io::Write;
use test_utils::constants::{TEST_REFERENCE_LISTS_CSV_PATH, TEST_REFERENCE_LISTS_JSON_PATH};
use test_utils::load_reference_lists_fixture;

#[cfg(test)]
mod reference_lists_tests {
    use super::*;

    #[test]
    fn test_json_fixture_loads_every_list() {
        let lists = load_reference_lists_fixture();

        assert!(lists.concrete_nouns.contains("dog"));
        assert!(lists.abstract_nouns.contains("freedom"));
        assert!(lists.first_person.contains("i"));
        assert!(lists.second_person.contains("you"));
        assert_eq!(lists.positive_words.get("amazing"), Some(&3));
        assert_eq!(lists.negative_words.get("awful"), Some(&-3));
    }

    #[test]
    fn test_csv_and_json_fixtures_agree() {
        let from_json = ReferenceLists::from_path(&*TEST_REFERENCE_LISTS_JSON_PATH)
            .expect("Failed to load JSON fixture");
        let from_csv = ReferenceLists::from_path(&*TEST_REFERENCE_LISTS_CSV_PATH)
            .expect("Failed to load CSV fixture");

        assert_eq!(from_json, from_csv);
    }

    #[test]
    fn test_gzipped_csv_loads() {
        let csv = fs::read(&*TEST_REFERENCE_LISTS_CSV_PATH).expect("Failed to read CSV fixture");
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let gz_path = temp_dir.path().join("reference_lists.csv.gz");

        let mut encoder = GzEncoder::new(
            fs::File::create(&gz_path).expect("Failed to create gz file"),
            Compression::default(),
        );
        encoder.write_all(&csv).expect("Failed to compress CSV");
        encoder.finish().expect("Failed to finalize compression");

        let lists = ReferenceLists::from_path(&gz_path).expect("Failed to load gz fixture");
        assert_eq!(lists, load_reference_lists_fixture());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ReferenceLists::from_path("tests/test_data_files/does_not_exist.json");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let result = ReferenceLists::from_json_str("{ \"concreteNouns\": 42 }");
        assert!(matches!(result, Err(Error::JsonError(_))));
    }

    #[test]
    fn test_store_loads_fixture() {
        let store = ReferenceStore::new();
        store
            .load_with(|| ReferenceLists::from_path(&*TEST_REFERENCE_LISTS_JSON_PATH))
            .expect("Failed to load fixture into store");

        assert_eq!(store.status(), ReferenceStatus::Loaded);
        assert_eq!(
            *store.snapshot().expect("Snapshot should be loaded"),
            load_reference_lists_fixture()
        );
    }
}

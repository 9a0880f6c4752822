use crate::models::Error;
use crate::types::{Word, WordRef};
use log::{info, warn};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Receives newly observed unclassified nouns for merging into the backend collection.
pub trait UnclassifiedWordSink {
    fn upload(&self, words: &[Word]) -> Result<(), Error>;
}

#[derive(Default)]
struct QueueState {
    seen: HashSet<Word>,
    pending: Vec<Word>,
}

/// Session-wide, append-only queue of unclassified nouns awaiting upload.
///
/// Each distinct lowercase word is accepted at most once per queue lifetime, even after
/// it has been drained.
#[derive(Default)]
pub struct UnclassifiedWordQueue {
    state: Mutex<QueueState>,
}

impl UnclassifiedWordQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueState> {
        // Appends are single pushes, so a poisoned lock still holds consistent sets
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns `true` if the word had not been seen before and was queued.
    pub fn enqueue(&self, word: &WordRef) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }

        let mut state = self.lock();
        if state.seen.insert(word.clone()) {
            state.pending.push(word);
            true
        } else {
            false
        }
    }

    /// Words queued but not yet drained, in arrival order.
    pub fn pending(&self) -> Vec<Word> {
        self.lock().pending.clone()
    }

    pub fn drain(&self) -> Vec<Word> {
        std::mem::take(&mut self.lock().pending)
    }

    /// Total number of distinct words accepted so far this session.
    pub fn seen_count(&self) -> usize {
        self.lock().seen.len()
    }

    /// Drains pending words and hands them to the sink.
    ///
    /// Upload failures are logged and swallowed. Drained words are never re-queued.
    /// Returns the number of words handed to the sink.
    pub fn flush(&self, sink: &dyn UnclassifiedWordSink) -> usize {
        let words = self.drain();
        if words.is_empty() {
            return 0;
        }

        match sink.upload(&words) {
            Ok(()) => info!("Uploaded {} unclassified words", words.len()),
            Err(err) => warn!(
                "Failed to upload {} unclassified words: {}",
                words.len(),
                err
            ),
        }

        words.len()
    }
}

/// Keeps the union of every uploaded word in memory.
#[derive(Default)]
pub struct MemoryUnclassifiedWordSink {
    words: Mutex<BTreeSet<Word>>,
}

impl MemoryUnclassifiedWordSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> BTreeSet<Word> {
        self.words
            .lock()
            .map(|words| words.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl UnclassifiedWordSink for MemoryUnclassifiedWordSink {
    fn upload(&self, words: &[Word]) -> Result<(), Error> {
        let mut stored = self
            .words
            .lock()
            .map_err(|err| Error::UploadError(err.to_string()))?;
        stored.extend(words.iter().cloned());
        Ok(())
    }
}

/// Merges uploaded words into a single-column CSV file (`word` header).
///
/// The file is read, unioned with the new words and rewritten in full. The rewrite goes
/// to a temporary file in the same directory which then replaces the original, so a
/// failed upload leaves the previous contents intact. Concurrent writers are not
/// coordinated; the last writer wins.
pub struct CsvUnclassifiedWordSink {
    path: PathBuf,
}

impl CsvUnclassifiedWordSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every word currently stored in the file. A missing file yields no words.
    pub fn stored_words(&self) -> Result<BTreeSet<Word>, Error> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut words = BTreeSet::new();

        for record in reader.records() {
            let record = record?;
            if let Some(word) = record.get(0) {
                let word = word.trim().to_lowercase();
                if !word.is_empty() {
                    words.insert(word);
                }
            }
        }

        Ok(words)
    }
}

impl UnclassifiedWordSink for CsvUnclassifiedWordSink {
    fn upload(&self, words: &[Word]) -> Result<(), Error> {
        let mut merged = self.stored_words()?;
        merged.extend(words.iter().map(|word| word.to_lowercase()));

        persist_words(&self.path, &merged)
    }
}

fn persist_words(path: &Path, words: &BTreeSet<Word>) -> Result<(), Error> {
    let parent_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = csv::Writer::from_writer(&temp_file);
        writer.write_record(["word"])?;
        for word in words {
            writer.write_record([word])?;
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl UnclassifiedWordSink for FailingSink {
        fn upload(&self, _words: &[Word]) -> Result<(), Error> {
            Err(Error::UploadError("backend offline".to_string()))
        }
    }

    #[test]
    fn test_enqueue_dedups_case_insensitively() {
        let queue = UnclassifiedWordQueue::new();

        assert!(queue.enqueue("Giraffe"));
        assert!(!queue.enqueue("giraffe"));
        assert!(!queue.enqueue(" GIRAFFE "));
        assert!(queue.enqueue("zebra"));

        assert_eq!(queue.pending(), vec!["giraffe", "zebra"]);
    }

    #[test]
    fn test_drained_words_are_not_requeued() {
        let queue = UnclassifiedWordQueue::new();
        queue.enqueue("giraffe");

        assert_eq!(queue.drain(), vec!["giraffe"]);
        assert!(!queue.enqueue("giraffe"));
        assert!(queue.pending().is_empty());
        assert_eq!(queue.seen_count(), 1);
    }

    #[test]
    fn test_flush_to_memory_sink() {
        let queue = UnclassifiedWordQueue::new();
        let sink = MemoryUnclassifiedWordSink::new();

        queue.enqueue("giraffe");
        queue.enqueue("zebra");

        assert_eq!(queue.flush(&sink), 2);
        assert_eq!(queue.flush(&sink), 0);
        assert_eq!(sink.words().len(), 2);
    }

    #[test]
    fn test_failed_persist_leaves_target_and_no_temp_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("unclassified.csv");
        std::fs::create_dir(&target).expect("Failed to create blocking dir");
        std::fs::write(target.join("keep.txt"), "keep").expect("Failed to write file");

        let words: BTreeSet<Word> = ["giraffe".to_string()].into_iter().collect();
        assert!(persist_words(&target, &words).is_err());

        assert!(target.is_dir());
        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).expect("Failed to read file"),
            "keep"
        );
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("Failed to list dir")
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_flush_failure_is_swallowed() {
        let queue = UnclassifiedWordQueue::new();
        queue.enqueue("giraffe");

        assert_eq!(queue.flush(&FailingSink), 1);
        assert!(queue.pending().is_empty());
    }
}

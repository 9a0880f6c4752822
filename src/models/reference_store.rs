use crate::models::{Error, ReferenceLists};
use log::{info, warn};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceStatus {
    Loading,
    Loaded,
    Failed(String),
}

struct StoreState {
    status: ReferenceStatus,
    snapshot: Option<Arc<ReferenceLists>>,
}

/// Holds the current reference list snapshot and its load status.
///
/// Snapshots are swapped wholesale. Callers hold an `Arc` to the snapshot they scored
/// against, so a reload never mutates lists in use.
pub struct ReferenceStore {
    state: RwLock<StoreState>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                status: ReferenceStatus::Loading,
                snapshot: None,
            }),
        }
    }

    /// A store that is already loaded with the given lists.
    pub fn with_lists(lists: ReferenceLists) -> Self {
        let store = Self::new();
        store.replace(lists);
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> ReferenceStatus {
        self.read().status.clone()
    }

    /// Replaces the current snapshot and marks the store as loaded.
    pub fn replace(&self, lists: ReferenceLists) {
        info!(
            "Swapping in reference lists with {} words",
            lists.total_word_count()
        );

        let mut state = self.write();
        state.snapshot = Some(Arc::new(lists));
        state.status = ReferenceStatus::Loaded;
    }

    /// Records a failed load or reload.
    ///
    /// If an earlier snapshot exists it keeps being served and the status stays `Loaded`.
    pub fn mark_failed(&self, reason: &str) {
        let mut state = self.write();

        if state.snapshot.is_some() {
            warn!("Reference list reload failed, keeping previous snapshot: {}", reason);
        } else {
            warn!("Reference list load failed: {}", reason);
            state.status = ReferenceStatus::Failed(reason.to_string());
        }
    }

    /// Loads lists with the given loader, recording the outcome.
    pub fn load_with<F>(&self, loader: F) -> Result<(), Error>
    where
        F: FnOnce() -> Result<ReferenceLists, Error>,
    {
        match loader() {
            Ok(lists) => {
                self.replace(lists);
                Ok(())
            }
            Err(err) => {
                self.mark_failed(&err.to_string());
                Err(err)
            }
        }
    }

    /// Returns the current snapshot, or why none is available.
    pub fn snapshot(&self) -> Result<Arc<ReferenceLists>, Error> {
        let state = self.read();

        match (&state.snapshot, &state.status) {
            (Some(snapshot), _) => Ok(Arc::clone(snapshot)),
            (None, ReferenceStatus::Failed(reason)) => {
                Err(Error::ReferenceListsUnavailable(reason.clone()))
            }
            (None, _) => Err(Error::ReferenceListsNotLoaded),
        }
    }

    /// Polls for a snapshot, sleeping `retry_delay` between attempts.
    ///
    /// Gives up early if the load has failed.
    pub fn wait_for_snapshot(
        &self,
        retry_delay: Duration,
        max_attempts: usize,
    ) -> Result<Arc<ReferenceLists>, Error> {
        let mut attempt = 0;

        loop {
            match self.snapshot() {
                Err(Error::ReferenceListsNotLoaded) if attempt + 1 < max_attempts => {
                    attempt += 1;
                    thread::sleep(retry_delay);
                }
                result => return result,
            }
        }
    }
}

impl Default for ReferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

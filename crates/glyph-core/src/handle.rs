//! Shared ownership of the current dataset snapshot.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde_json::Value;
use tracing::debug;

use glyph_ingest::LoadedSources;

use crate::index::DatasetIndex;

/// Publishes dataset snapshots to concurrent readers.
///
/// Readers take an `Arc` snapshot and query it without further locking.
/// Reloads are serialized: each one builds its index fully before a single
/// pointer swap, so a reader never sees a partially built index and keeps
/// its old snapshot for as long as it holds it.
#[derive(Debug)]
pub struct DatasetHandle {
    current: RwLock<Arc<DatasetIndex>>,
    writer: Mutex<()>,
}

impl Default for DatasetHandle {
    fn default() -> Self {
        Self::new(DatasetIndex::default())
    }
}

impl DatasetHandle {
    pub fn new(index: DatasetIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            writer: Mutex::new(()),
        }
    }

    /// The currently published index.
    pub fn snapshot(&self) -> Arc<DatasetIndex> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Rebuilds from raw rows with the current options and publishes the
    /// result.
    pub fn reload(&self, rows: &[Value]) -> Arc<DatasetIndex> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(self.snapshot().reload(rows));
        self.publish_locked(Arc::clone(&next));
        next
    }

    pub fn reload_from_sources(&self, sources: &LoadedSources) -> Arc<DatasetIndex> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(self.snapshot().reload_from_sources(sources));
        self.publish_locked(Arc::clone(&next));
        next
    }

    /// Runs a fallible rebuild under the writer lock. On error the
    /// published snapshot is left as it was.
    pub fn reload_with<F, E>(&self, rebuild: F) -> Result<Arc<DatasetIndex>, E>
    where
        F: FnOnce(&DatasetIndex) -> Result<DatasetIndex, E>,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let base = self.snapshot();
        let next = Arc::new(rebuild(&base)?);
        self.publish_locked(Arc::clone(&next));
        Ok(next)
    }

    /// Publishes an index built elsewhere.
    pub fn publish(&self, index: DatasetIndex) -> Arc<DatasetIndex> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(index);
        self.publish_locked(Arc::clone(&next));
        next
    }

    fn publish_locked(&self, next: Arc<DatasetIndex>) {
        let records = next.len();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = next;
        debug!(records, "dataset snapshot published");
    }
}

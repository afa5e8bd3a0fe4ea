use kotoba_types::TranslationRecord;

use crate::{Storage, StorageError};

const HISTORY_KEY: &str = "translation_history";

/// Translation history backed by a [`Storage`] capability.
///
/// Records are kept newest-first. Mutations persist immediately; a failed
/// write is logged and the in-memory state kept, so the session keeps
/// working with storage degraded.
pub struct HistoryStore {
    storage: Box<dyn Storage>,
    records: Vec<TranslationRecord>,
    limit: usize,
}

impl HistoryStore {
    pub fn new(storage: Box<dyn Storage>, limit: usize) -> Self {
        let records = match storage.get(HISTORY_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("discarding unreadable history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to load history: {}", e);
                Vec::new()
            }
        };

        Self {
            storage,
            records,
            limit,
        }
    }

    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn favorites(&self) -> Vec<TranslationRecord> {
        self.records
            .iter()
            .filter(|r| r.is_favorite)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record, evicting the oldest non-favorites past the limit
    pub fn add(&mut self, record: TranslationRecord) {
        self.records.insert(0, record);

        while self.records.len() > self.limit {
            let evict = self.records.iter().rposition(|r| !r.is_favorite);
            match evict {
                Some(idx) => {
                    self.records.remove(idx);
                }
                // every record is a favorite, let the list grow
                None => break,
            }
        }

        self.persist();
    }

    /// Flip the favorite flag; returns the new state, or None for an unknown id
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.is_favorite = !record.is_favorite;
        let state = record.is_favorite;
        self.persist();
        Some(state)
    }

    /// Remove a single record; returns false for an unknown id
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Drop all non-favorite records
    pub fn clear(&mut self) {
        self.records.retain(|r| r.is_favorite);
        self.persist();
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize history: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(HISTORY_KEY, &json) {
            tracing::warn!("failed to persist history: {}", e);
        }
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("records", &self.records.len())
            .field("limit", &self.limit)
            .finish()
    }
}

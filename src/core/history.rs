//! JSON-file-backed history of saved lotto sets
//!
//! The store owns the file path and a newest-first record list. Every
//! mutation rewrites the whole file; histories are small enough that
//! nothing cleverer is worth the failure modes. Records are immutable
//! after creation except for the memo and favorite fields.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use tracing::{debug, info};

use crate::types::{CoreError, LottoRecord, LottoSet};

/// Saved-set history, persisted as a JSON array
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<LottoRecord>,
}

fn nanos_now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

impl HistoryStore {
    /// Open a store at `path`, loading existing records if the file is
    /// there. A missing file is an empty history, not an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), records = records.len(), "history opened");
        Ok(Self { path, records })
    }

    fn persist(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// All records, newest first
    pub fn records(&self) -> &[LottoRecord] {
        &self.records
    }

    /// Favorite records only, newest first
    pub fn favorites(&self) -> Vec<&LottoRecord> {
        self.records.iter().filter(|r| r.favorite).collect()
    }

    /// Save one set at the front of the history
    pub fn append(&mut self, set: LottoSet, memo: Option<String>) -> Result<String, CoreError> {
        let id = format!("rec_{:x}", nanos_now());
        let record = LottoRecord {
            id: id.clone(),
            numbers: set,
            created_at: Utc::now(),
            memo,
            favorite: false,
            group_id: None,
            line_index: None,
        };
        self.records.insert(0, record);
        self.persist()?;
        info!(id = %id, "lotto set saved");
        Ok(id)
    }

    /// Save a batch of sets under one shared group id, preserving their
    /// generation order at the front of the history
    pub fn append_batch(&mut self, sets: &[LottoSet]) -> Result<Vec<String>, CoreError> {
        let stamp = nanos_now();
        let group_id = format!("grp_{:x}", stamp);
        let mut ids = Vec::with_capacity(sets.len());

        for (i, &set) in sets.iter().enumerate() {
            let id = format!("rec_{:x}_{}", stamp, i);
            let record = LottoRecord {
                id: id.clone(),
                numbers: set,
                created_at: Utc::now(),
                memo: None,
                favorite: false,
                group_id: Some(group_id.clone()),
                line_index: Some(i as u32),
            };
            self.records.insert(i, record);
            ids.push(id);
        }

        self.persist()?;
        info!(group = %group_id, sets = sets.len(), "lotto batch saved");
        Ok(ids)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut LottoRecord, CoreError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))
    }

    /// Delete one record by id
    pub fn delete(&mut self, id: &str) -> Result<(), CoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(CoreError::RecordNotFound(id.to_string()));
        }
        self.persist()?;
        info!(id = %id, "record deleted");
        Ok(())
    }

    /// Delete the whole history
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.records.clear();
        self.persist()?;
        info!("history cleared");
        Ok(())
    }

    /// Replace the memo on a record; `None` removes it
    pub fn set_memo(&mut self, id: &str, memo: Option<String>) -> Result<(), CoreError> {
        self.find_mut(id)?.memo = memo;
        self.persist()
    }

    /// Flip the favorite flag, returning the new state
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CoreError> {
        let record = self.find_mut(id)?;
        record.favorite = !record.favorite;
        let now = record.favorite;
        self.persist()?;
        Ok(now)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fortuna_history_{}_{:x}.json", tag, nanos_now()))
    }

    fn set(numbers: [u8; 6]) -> LottoSet {
        LottoSet::from_unsorted(numbers)
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let store = HistoryStore::open(temp_path("missing")).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_append_prepends_and_persists() {
        let path = temp_path("append");
        let mut store = HistoryStore::open(&path).unwrap();
        store.append(set([1, 2, 3, 4, 5, 6]), None).unwrap();
        store.append(set([7, 8, 9, 10, 11, 12]), Some("second".into())).unwrap();

        let reloaded = HistoryStore::open(&path).unwrap();
        assert_eq!(reloaded.records().len(), 2);
        assert_eq!(reloaded.records()[0].numbers, set([7, 8, 9, 10, 11, 12]));
        assert_eq!(reloaded.records()[0].memo.as_deref(), Some("second"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_batch_shares_group_and_keeps_order() {
        let path = temp_path("batch");
        let mut store = HistoryStore::open(&path).unwrap();
        store.append(set([40, 41, 42, 43, 44, 45]), None).unwrap();
        let sets = [set([1, 2, 3, 4, 5, 6]), set([7, 8, 9, 10, 11, 12])];
        let ids = store.append_batch(&sets).unwrap();
        assert_eq!(ids.len(), 2);

        let records = store.records();
        // batch lands at the front in generation order, older record after
        assert_eq!(records[0].numbers, sets[0]);
        assert_eq!(records[1].numbers, sets[1]);
        assert_eq!(records[0].group_id, records[1].group_id);
        assert!(records[0].group_id.is_some());
        assert_eq!(records[0].line_index, Some(0));
        assert_eq!(records[1].line_index, Some(1));
        assert_eq!(records[2].group_id, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delete_and_not_found() {
        let path = temp_path("delete");
        let mut store = HistoryStore::open(&path).unwrap();
        let id = store.append(set([1, 2, 3, 4, 5, 6]), None).unwrap();
        store.delete(&id).unwrap();
        assert!(store.records().is_empty());
        assert!(matches!(store.delete(&id), Err(CoreError::RecordNotFound(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_memo_and_favorite_updates() {
        let path = temp_path("update");
        let mut store = HistoryStore::open(&path).unwrap();
        let id = store.append(set([3, 9, 17, 25, 33, 41]), None).unwrap();

        store.set_memo(&id, Some("birthday picks".into())).unwrap();
        assert!(store.toggle_favorite(&id).unwrap());
        assert!(!store.toggle_favorite(&id).unwrap());
        assert!(store.toggle_favorite(&id).unwrap());

        let reloaded = HistoryStore::open(&path).unwrap();
        assert_eq!(reloaded.records()[0].memo.as_deref(), Some("birthday picks"));
        assert!(reloaded.records()[0].favorite);
        assert_eq!(reloaded.favorites().len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_clear() {
        let path = temp_path("clear");
        let mut store = HistoryStore::open(&path).unwrap();
        store.append(set([1, 2, 3, 4, 5, 6]), None).unwrap();
        store.clear().unwrap();
        assert!(store.records().is_empty());
        assert!(HistoryStore::open(&path).unwrap().records().is_empty());

        let _ = fs::remove_file(&path);
    }
}

use super::EntryStore;
use crate::dates::{format_date, parse_date};
use crate::error::{Result, StandupError};
use crate::model::DailyEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENTRIES_FILENAME: &str = "entries.json";

/// Keyed by ISO date string so the file reads sorted.
type EntryMap = BTreeMap<String, DailyEntry>;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entries_file(&self) -> PathBuf {
        self.root.join(ENTRIES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StandupError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<EntryMap> {
        let path = self.entries_file();
        if !path.exists() {
            return Ok(EntryMap::new());
        }
        let content = fs::read_to_string(&path).map_err(StandupError::Io)?;
        let entries: EntryMap =
            serde_json::from_str(&content).map_err(StandupError::Serialization)?;
        debug!(count = entries.len(), path = %path.display(), "loaded entries");
        Ok(entries)
    }

    fn persist(&self, entries: &EntryMap) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(StandupError::Serialization)?;
        fs::write(self.entries_file(), content).map_err(StandupError::Io)?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn get_entry(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        Ok(self.load()?.remove(&format_date(date)))
    }

    fn save_entry(&mut self, entry: &DailyEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(format_date(entry.date), entry.clone());
        self.persist(&entries)
    }

    fn delete_entry(&mut self, date: NaiveDate) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(&format_date(date)).is_none() {
            return Err(StandupError::EntryNotFound(date));
        }
        self.persist(&entries)
    }

    fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates = self
            .load()?
            .keys()
            .map(|key| {
                parse_date(key)
                    .map_err(|_| StandupError::Store(format!("Malformed entry key: {}", key)))
            })
            .collect::<Result<Vec<_>>>()?;
        dates.sort_by(|a, b| b.cmp(a));
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoNode;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(store.list_dates().unwrap().is_empty());
        assert_eq!(store.get_entry(d("2025-01-06")).unwrap(), None);
    }

    #[test]
    fn save_then_get_survives_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut entry = DailyEntry::new(d("2025-01-06"));
        entry.today = vec![TodoNode::new("write tests").with_children(vec![TodoNode::new("more")])];

        FileStore::new(dir.path().to_path_buf())
            .save_entry(&entry)
            .unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(reopened.get_entry(entry.date).unwrap(), Some(entry));
    }

    #[test]
    fn dates_are_listed_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        for date in ["2025-01-06", "2024-12-31", "2025-01-08"] {
            store.save_entry(&DailyEntry::new(d(date))).unwrap();
        }
        assert_eq!(
            store.list_dates().unwrap(),
            vec![d("2025-01-08"), d("2025-01-06"), d("2024-12-31")]
        );
        assert_eq!(
            store.most_recent_before(d("2025-01-07")).unwrap().map(|e| e.date),
            Some(d("2025-01-06"))
        );
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_entry(&DailyEntry::new(d("2025-01-06"))).unwrap();

        store.delete_entry(d("2025-01-06")).unwrap();
        assert!(store.list_dates().unwrap().is_empty());
        assert!(matches!(
            store.delete_entry(d("2025-01-06")),
            Err(StandupError::EntryNotFound(_))
        ));
    }

    #[test]
    fn file_is_keyed_by_iso_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_entry(&DailyEntry::new(d("2025-01-06"))).unwrap();

        let raw = fs::read_to_string(dir.path().join(ENTRIES_FILENAME)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["2025-01-06"]["date"], "2025-01-06");
    }
}

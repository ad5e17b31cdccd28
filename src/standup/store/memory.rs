use super::EntryStore;
use crate::error::{Result, StandupError};
use crate::model::DailyEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: BTreeMap<NaiveDate, DailyEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for InMemoryStore {
    fn get_entry(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        Ok(self.entries.get(&date).cloned())
    }

    fn save_entry(&mut self, entry: &DailyEntry) -> Result<()> {
        self.entries.insert(entry.date, entry.clone());
        Ok(())
    }

    fn delete_entry(&mut self, date: NaiveDate) -> Result<()> {
        if self.entries.remove(&date).is_none() {
            return Err(StandupError::EntryNotFound(date));
        }
        Ok(())
    }

    fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.entries.keys().rev().copied().collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::TodoNode;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, entry: DailyEntry) -> Self {
            self.store.save_entry(&entry).unwrap();
            self
        }

        /// Entry whose sections hold one flat node per given content.
        pub fn with_tasks(self, date: NaiveDate, previously: &[&str], today: &[&str]) -> Self {
            let mut entry = DailyEntry::new(date);
            entry.previously = previously.iter().map(|c| TodoNode::new(*c)).collect();
            entry.today = today.iter().map(|c| TodoNode::new(*c)).collect();
            self.with_entry(entry)
        }
    }
}

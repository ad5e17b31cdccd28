//! # Storage Layer
//!
//! Entries are persisted behind the [`EntryStore`] trait so the command layer
//! never knows where they live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document keyed by date
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── entries.json     # { "2025-01-06": { date, previously, today }, ... }
//! └── settings.json    # see config.rs
//! ```
//!
//! ## Contract
//!
//! Callers save after every accepted edit. The store is last-write-wins per
//! date; nothing here arbitrates between concurrent writers.

use crate::error::Result;
use crate::model::DailyEntry;
use chrono::NaiveDate;

pub mod fs;
pub mod memory;

pub trait EntryStore {
    fn get_entry(&self, date: NaiveDate) -> Result<Option<DailyEntry>>;

    /// Create or replace the entry for `entry.date`
    fn save_entry(&mut self, entry: &DailyEntry) -> Result<()>;

    /// Remove an entry. Fails with `EntryNotFound` if there is none.
    fn delete_entry(&mut self, date: NaiveDate) -> Result<()>;

    /// All dates with an entry, newest first
    fn list_dates(&self) -> Result<Vec<NaiveDate>>;

    /// The newest entry strictly before `date`
    fn most_recent_before(&self, date: NaiveDate) -> Result<Option<DailyEntry>> {
        match self.list_dates()?.into_iter().find(|d| *d < date) {
            Some(found) => self.get_entry(found),
            None => Ok(None),
        }
    }
}

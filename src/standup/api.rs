//! # API Facade
//!
//! Single entry point for every standup operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: display positions become node ids, a missing
//!   export format falls back to the saved setting
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what the store and settings file do, and
//! never formats anything for a terminal.
//!
//! `StandupApi<S: EntryStore>` is generic over storage: `FileStore` in the
//! binary, `InMemoryStore` in tests.

use crate::clipboard::Clipboard;
use crate::commands;
use crate::commands::edit::EditOp;
use crate::config::Settings;
use crate::error::{Result, StandupError};
use crate::export::ExportFormat;
use crate::index::{self, Position};
use crate::model::{NodeId, Section};
use crate::store::EntryStore;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub struct StandupApi<S: EntryStore> {
    store: S,
    settings_dir: PathBuf,
}

impl<S: EntryStore> StandupApi<S> {
    pub fn new(store: S, settings_dir: PathBuf) -> Self {
        Self {
            store,
            settings_dir,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    pub fn settings(&self) -> Result<Settings> {
        Settings::load(&self.settings_dir)
    }

    pub fn open_entry(&self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::entry::open(&self.store, date)
    }

    pub fn start_entry(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        let settings = self.settings()?;
        commands::entry::start(&mut self.store, &settings, date)
    }

    /// Edits by node id. UIs that hold ids (rather than positions) call this directly.
    pub fn edit(
        &mut self,
        date: NaiveDate,
        section: Section,
        op: EditOp,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, date, section, op)
    }

    pub fn append(
        &mut self,
        date: NaiveDate,
        section: Section,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        self.edit(date, section, EditOp::Append(content))
    }

    pub fn insert_after(
        &mut self,
        date: NaiveDate,
        section: Section,
        position: Position,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        self.edit(date, section, EditOp::InsertAfter(id, content))
    }

    pub fn set_content(
        &mut self,
        date: NaiveDate,
        section: Section,
        position: Position,
        content: String,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        self.edit(date, section, EditOp::SetContent(id, content))
    }

    pub fn indent(
        &mut self,
        date: NaiveDate,
        section: Section,
        position: Position,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        self.edit(date, section, EditOp::Indent(id))
    }

    pub fn outdent(
        &mut self,
        date: NaiveDate,
        section: Section,
        position: Position,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        self.edit(date, section, EditOp::Outdent(id))
    }

    pub fn delete_node(
        &mut self,
        date: NaiveDate,
        section: Section,
        position: Position,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        self.edit(date, section, EditOp::Delete(id))
    }

    pub fn copy_node<C: Clipboard>(
        &self,
        clipboard: &mut C,
        date: NaiveDate,
        section: Section,
        position: Position,
    ) -> Result<commands::CmdResult> {
        let id = self.resolve(date, section, position)?;
        commands::edit::copy(&self.store, clipboard, date, section, &id)
    }

    pub fn export(
        &self,
        date: NaiveDate,
        format: Option<ExportFormat>,
    ) -> Result<commands::CmdResult> {
        let format = self.format_or_default(format)?;
        commands::export::run(&self.store, date, format)
    }

    pub fn copy_export<C: Clipboard>(
        &self,
        clipboard: &mut C,
        date: NaiveDate,
        format: Option<ExportFormat>,
    ) -> Result<commands::CmdResult> {
        let format = self.format_or_default(format)?;
        commands::export::copy(&self.store, clipboard, date, format)
    }

    pub fn list_entries(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn delete_entry(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, date)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.settings_dir, action)
    }

    fn format_or_default(&self, format: Option<ExportFormat>) -> Result<ExportFormat> {
        match format {
            Some(format) => Ok(format),
            None => Ok(self.settings()?.export_format),
        }
    }

    /// Turns a display position into the id of the node currently there.
    fn resolve(&self, date: NaiveDate, section: Section, position: Position) -> Result<NodeId> {
        let entry = self
            .store
            .get_entry(date)?
            .ok_or(StandupError::EntryNotFound(date))?;
        index::resolve(entry.section(section), position).ok_or_else(|| {
            StandupError::Api(format!("No item {} in {} for {}", position, section, date))
        })
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StandupError};
use crate::model::{DailyEntry, NodeId, Section, TodoNode};
use crate::outline::{self, Edit};
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// A structural change to one section of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    SetContent(NodeId, String),
    Delete(NodeId),
    Indent(NodeId),
    Outdent(NodeId),
    /// New sibling after the node, optionally filled in straight away
    InsertAfter(NodeId, Option<String>),
    /// New root node at the end, optionally filled in straight away
    Append(Option<String>),
}

/// Runs the matching engine operation. New nodes that come with text get it
/// set in the same step, so callers see a single change.
pub fn apply(forest: &[TodoNode], op: &EditOp) -> Edit {
    match op {
        EditOp::SetContent(id, text) => outline::set_content(forest, id, text),
        EditOp::Delete(id) => outline::delete(forest, id),
        EditOp::Indent(id) => outline::indent(forest, id),
        EditOp::Outdent(id) => outline::outdent(forest, id),
        EditOp::InsertAfter(id, content) => {
            fill_new_node(outline::insert_sibling_after(forest, id), content.as_deref())
        }
        EditOp::Append(content) => fill_new_node(outline::append(forest), content.as_deref()),
    }
}

fn fill_new_node(edit: Edit, content: Option<&str>) -> Edit {
    let (Some(text), Some(id)) = (content, edit.focus.clone()) else {
        return edit;
    };
    Edit {
        forest: outline::set_content(&edit.forest, &id, text).forest,
        focus: Some(id),
    }
}

fn load<S: EntryStore>(store: &S, date: NaiveDate) -> Result<DailyEntry> {
    store
        .get_entry(date)?
        .ok_or(StandupError::EntryNotFound(date))
}

/// Applies `op` to one section and saves the entry if the outline changed.
pub fn run<S: EntryStore>(
    store: &mut S,
    date: NaiveDate,
    section: Section,
    op: EditOp,
) -> Result<CmdResult> {
    let entry = load(store, date)?;
    let edit = apply(entry.section(section), &op);

    if edit.forest.as_slice() == entry.section(section) {
        debug!(%date, %section, ?op, "edit left the outline unchanged");
        return Ok(CmdResult::default().with_entry(entry));
    }

    let updated = entry.with_section(section, edit.forest);
    store.save_entry(&updated)?;
    debug!(%date, %section, ?op, "saved edit");

    Ok(CmdResult::default()
        .with_entry(updated)
        .with_focus(edit.focus))
}

pub fn read<S: EntryStore>(
    store: &S,
    date: NaiveDate,
    section: Section,
    id: &NodeId,
) -> Result<Option<String>> {
    let entry = load(store, date)?;
    Ok(outline::read_content(entry.section(section), id).map(str::to_string))
}

/// Puts a single node's text on the clipboard.
pub fn copy<S: EntryStore, C: Clipboard>(
    store: &S,
    clipboard: &mut C,
    date: NaiveDate,
    section: Section,
    id: &NodeId,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(content) = read(store, date, section, id)? else {
        return Ok(result);
    };

    match clipboard.write_text(&content) {
        Ok(()) => result.add_message(CmdMessage::success("Copied to clipboard.")),
        Err(e) => result.add_message(CmdMessage::warning(format!(
            "Failed to copy to clipboard: {}",
            e
        ))),
    }
    Ok(result.with_text(content))
}

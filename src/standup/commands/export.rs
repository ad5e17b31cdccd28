use crate::clipboard::Clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StandupError};
use crate::export::{render, ExportFormat};
use crate::store::EntryStore;
use chrono::NaiveDate;

/// Renders the entry for `date`. An empty entry still renders its headers,
/// with a note that there is nothing in it.
pub fn run<S: EntryStore>(store: &S, date: NaiveDate, format: ExportFormat) -> Result<CmdResult> {
    let entry = store
        .get_entry(date)?
        .ok_or(StandupError::EntryNotFound(date))?;

    let mut result = CmdResult::default();
    if entry.is_empty() {
        result.add_message(CmdMessage::info("Nothing to export yet."));
    }
    let text = render(format, &entry.previously, &entry.today);
    Ok(result.with_entry(entry).with_text(text))
}

/// Renders and writes the text to the clipboard. A clipboard failure is
/// downgraded to a warning; the rendered text is returned either way.
pub fn copy<S: EntryStore, C: Clipboard>(
    store: &S,
    clipboard: &mut C,
    date: NaiveDate,
    format: ExportFormat,
) -> Result<CmdResult> {
    let mut result = run(store, date, format)?;
    let Some(text) = result.text.as_deref() else {
        return Ok(result);
    };

    let message = match clipboard.write_text(text) {
        Ok(()) => CmdMessage::success(format!("Copied as {}.", format.label())),
        Err(e) => CmdMessage::warning(format!("Failed to copy to clipboard: {}", e)),
    };
    result.add_message(message);
    Ok(result)
}

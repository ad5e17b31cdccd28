use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::info;

pub fn run<S: EntryStore>(store: &mut S, date: NaiveDate) -> Result<CmdResult> {
    store.delete_entry(date)?;
    info!(%date, "deleted entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry deleted: {}", date)));
    Ok(result)
}

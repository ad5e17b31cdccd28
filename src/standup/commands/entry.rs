use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::Result;
use crate::model::DailyEntry;
use crate::outline;
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::info;

/// Looks an entry up without creating it.
pub fn open<S: EntryStore>(store: &S, date: NaiveDate) -> Result<CmdResult> {
    match store.get_entry(date)? {
        Some(entry) => Ok(CmdResult::default().with_entry(entry)),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No entry for {} yet. Run `standup start` to begin one.",
                date
            )));
            Ok(result)
        }
    }
}

/// Returns the entry for `date`, creating and saving it first if needed.
///
/// A new entry starts with "Previously" copied from the newest earlier
/// entry's "Today" when `copy_previous_entry` is on.
pub fn start<S: EntryStore>(
    store: &mut S,
    settings: &Settings,
    date: NaiveDate,
) -> Result<CmdResult> {
    if let Some(existing) = store.get_entry(date)? {
        return Ok(CmdResult::default().with_entry(existing));
    }

    let prior = if settings.copy_previous_entry {
        store.most_recent_before(date)?
    } else {
        None
    };
    let entry = DailyEntry::seeded_from(date, prior.as_ref());
    store.save_entry(&entry)?;
    info!(%date, seeded_from = ?prior.as_ref().map(|p| p.date), "created entry");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Started entry for {}", date)));
    if let Some(prior) = prior.filter(|p| !p.today.is_empty()) {
        result.add_message(CmdMessage::info(format!(
            "Copied {} task(s) from {}",
            outline::count(&prior.today),
            prior.date
        )));
    }
    Ok(result.with_entry(entry))
}

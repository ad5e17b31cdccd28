use crate::commands::{CmdMessage, CmdResult};
use crate::dates::matches_search;
use crate::error::Result;
use crate::store::EntryStore;

/// Entry dates, newest first, narrowed by an optional search query.
pub fn run<S: EntryStore>(store: &S, query: Option<&str>) -> Result<CmdResult> {
    let dates: Vec<_> = store
        .list_dates()?
        .into_iter()
        .filter(|date| query.map_or(true, |q| matches_search(*date, q)))
        .collect();

    let mut result = CmdResult::default();
    if dates.is_empty() {
        result.add_message(CmdMessage::info("No entries found."));
    }
    Ok(result.with_dates(dates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_tasks(d("2024-12-30"), &[], &[])
            .with_tasks(d("2025-01-06"), &[], &[])
            .with_tasks(d("2025-02-03"), &[], &[])
    }

    #[test]
    fn lists_newest_first() {
        let result = run(&fixture().store, None).unwrap();
        assert_eq!(
            result.dates,
            vec![d("2025-02-03"), d("2025-01-06"), d("2024-12-30")]
        );
    }

    #[test]
    fn filters_by_search_terms() {
        let result = run(&fixture().store, Some("jan monday")).unwrap();
        assert_eq!(result.dates, vec![d("2025-01-06")]);

        let result = run(&fixture().store, Some("2024")).unwrap();
        assert_eq!(result.dates, vec![d("2024-12-30")]);
    }

    #[test]
    fn empty_result_has_message() {
        let result = run(&fixture().store, Some("august")).unwrap();
        assert!(result.dates.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}

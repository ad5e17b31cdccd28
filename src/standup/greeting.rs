use crate::dates::ordinal_suffix;
use chrono::{Datelike, NaiveDate};

struct Template {
    prefix: &'static str,
    suffix: &'static str,
}

const TODAY: &[Template] = &[
    Template {
        prefix: "So what did you do ",
        suffix: "?",
    },
    Template {
        prefix: "Tell me about ",
        suffix: "!",
    },
    Template {
        prefix: "How was ",
        suffix: "?",
    },
    Template {
        prefix: "What's the plan for ",
        suffix: "?",
    },
    Template {
        prefix: "Let's talk about ",
        suffix: "!",
    },
    Template {
        prefix: "Ready to capture ",
        suffix: "?",
    },
];

const OTHER_DAY: &[Template] = &[
    Template {
        prefix: "So how was ",
        suffix: "?",
    },
    Template {
        prefix: "What happened on ",
        suffix: "?",
    },
    Template {
        prefix: "Let's revisit ",
        suffix: "!",
    },
    Template {
        prefix: "Looking back at ",
        suffix: "...",
    },
    Template {
        prefix: "Notes from ",
        suffix: "",
    },
];

const EMPTY_STATE: &[Template] = &[
    Template {
        prefix: "Some say, ",
        suffix: " is a present!",
    },
    Template {
        prefix: "Every ",
        suffix: " is a fresh start!",
    },
    Template {
        prefix: "Make ",
        suffix: " count!",
    },
];

/// `6th January '25, Monday`, or `today`.
fn date_text(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "today".to_string();
    }
    format!(
        "{}{} {} '{}, {}",
        date.day(),
        ordinal_suffix(date.day()),
        date.format("%B"),
        date.format("%y"),
        date.format("%A")
    )
}

/// A greeting line that is stable for a given date.
///
/// The template is picked by `year + month + day`, so revisiting a date always
/// shows the same phrasing. With no date selected the pick follows today's day
/// of the month.
pub fn greeting(current: Option<NaiveDate>, today: NaiveDate) -> String {
    let (template, text) = match current {
        None => (
            &EMPTY_STATE[today.day() as usize % EMPTY_STATE.len()],
            "today".to_string(),
        ),
        Some(date) => {
            let templates = if date == today { TODAY } else { OTHER_DAY };
            let seed = date.year().unsigned_abs() as usize
                + date.month() as usize
                + date.day() as usize;
            (&templates[seed % templates.len()], date_text(date, today))
        }
    };
    format!("{}{}{}", template.prefix, text, template.suffix)
}

use chrono::NaiveDate;
use colored::Colorize;
use standup::api::{CmdMessage, MessageLevel};
use standup::config::Settings;
use standup::dates::format_display;
use standup::index::index_nodes;
use standup::model::{DailyEntry, NodeId, Section};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDENT: &str = "   ";
const FOCUS_MARKER: &str = "›";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_greeting(greeting: &str, subtitle: &str) {
    println!("{}", greeting.bold());
    println!("{}", subtitle.dimmed());
    println!();
}

pub(super) fn print_entry(entry: &DailyEntry, focus: Option<&NodeId>) {
    for (i, section) in [Section::Previously, Section::Today].into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_section(entry, section, focus);
    }
}

/// One section with each item's position, indented by depth.
pub(super) fn print_section(entry: &DailyEntry, section: Section, focus: Option<&NodeId>) {
    println!("{}", section.title().bold());

    let indexed = index_nodes(entry.section(section));
    if indexed.is_empty() {
        println!("{}", "  (nothing yet)".dimmed());
        return;
    }

    let width = indexed.len().to_string().len();
    for item in indexed {
        let is_focused = focus == Some(&item.node.id);
        let marker = if is_focused { FOCUS_MARKER } else { " " };
        let idx = format!("{:>width$}.", item.position.get(), width = width);
        let indent = INDENT.repeat(item.depth);

        let available = LINE_WIDTH.saturating_sub(3 + idx.width() + indent.width());
        let content = if item.node.content.is_empty() {
            "…".dimmed().to_string()
        } else {
            truncate_to_width(&item.node.content, available)
        };

        let idx = if is_focused { idx.yellow() } else { idx.dimmed() };
        println!("{} {} {}{}", marker, idx, indent, content);
    }
}

pub(super) fn print_dates(dates: &[NaiveDate], today: NaiveDate) {
    for date in dates {
        let label = format_display(*date, today);
        println!("  {}  {}", date.to_string().dimmed(), label);
    }
}

pub(super) fn print_settings(settings: &Settings) {
    for key in Settings::keys() {
        if let Some(value) = settings.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

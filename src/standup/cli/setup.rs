use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use standup::dates::{parse_date, path_to_date};
use standup::export::ExportFormat;
use standup::index::Position;
use standup::model::Section;

/// `0.3.2`, or `0.3.2@abc1234` when built from a git checkout.
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        version_string(env!("CARGO_PKG_VERSION"), env!("STANDUP_GIT_HASH"))
    })
}

fn version_string(version: &str, git_hash: &str) -> String {
    if git_hash.is_empty() {
        version.to_string()
    } else {
        format!("{}@{}", version, git_hash)
    }
}

/// Accepts `today`, `yesterday`, `YYYY-MM-DD` or `YYYY/M/D`.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }
    let parts: Vec<&str> = s.trim_matches('/').split('/').collect();
    let parsed = match parts.as_slice() {
        [year, month, day] => path_to_date(year, month, day),
        _ => parse_date(s),
    };
    parsed.map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "standup", bin_name = "standup", version = get_version())]
#[command(about = "Daily standup journal: what you did, what you're doing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Entry date (YYYY-MM-DD, YYYY/MM/DD, today, yesterday). Defaults to today.
    #[arg(short, long, global = true, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    #[command(flatten)]
    Item(ItemCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (copy-previous, export-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Show the entry (default)
    #[command(alias = "s", display_order = 1)]
    Show,

    /// Start the entry, importing yesterday's "Today" if enabled
    #[command(display_order = 2)]
    Start,

    /// List entries, newest first
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Search terms (e.g. jan 12, monday)
        #[arg(trailing_var_arg = true)]
        search: Vec<String>,
    },

    /// Copy the entry to the clipboard as formatted text
    #[command(display_order = 4)]
    Export {
        /// plain, slack-markup or markdown (defaults to the configured format)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Print instead of copying
        #[arg(short, long)]
        print: bool,
    },

    /// Delete an entry
    #[command(display_order = 5)]
    Drop {
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add an item at the end of a section
    #[command(alias = "a", display_order = 10)]
    Add {
        section: Section,

        /// Item text (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Add an item right after another one, at the same level
    #[command(display_order = 11)]
    After {
        section: Section,
        position: Position,

        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Replace an item's text
    #[command(alias = "e", display_order = 12)]
    Set {
        section: Section,
        position: Position,

        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },

    /// Nest an item under the one above it
    #[command(alias = "in", display_order = 13)]
    Indent { section: Section, position: Position },

    /// Move an item out one level
    #[command(alias = "out", display_order = 14)]
    Outdent { section: Section, position: Position },

    /// Delete an item and everything nested under it
    #[command(display_order = 15)]
    Rm { section: Section, position: Position },

    /// Copy an item's text to the clipboard
    #[command(alias = "cp", display_order = 16)]
    Copy { section: Section, position: Position },
}

/// Joins trailing words; `None` when there are none.
pub fn join_text(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("standup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn version_carries_git_hash_when_known() {
        assert_eq!(version_string("0.3.2", ""), "0.3.2");
        assert_eq!(version_string("0.3.2", "abc1234"), "0.3.2@abc1234");
        assert!(get_version().starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn no_args_means_show_today() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.date.is_none());
    }

    #[test]
    fn add_joins_words() {
        let cli = parse(&["add", "today", "ship", "the", "release"]);
        match cli.command {
            Some(Commands::Item(ItemCommands::Add { section, text })) => {
                assert_eq!(section, Section::Today);
                assert_eq!(join_text(text).as_deref(), Some("ship the release"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn date_accepts_path_form_and_keywords() {
        let cli = parse(&["--date", "2025/1/6", "show"]);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 1, 6));

        let cli = parse(&["show", "-d", "today"]);
        assert_eq!(cli.date, Some(Local::now().date_naive()));

        assert!(Cli::try_parse_from(["standup", "-d", "6th jan"]).is_err());
    }

    #[test]
    fn positions_and_formats_are_typed() {
        let cli = parse(&["indent", "p", "3"]);
        match cli.command {
            Some(Commands::Item(ItemCommands::Indent { section, position })) => {
                assert_eq!(section, Section::Previously);
                assert_eq!(position.get(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }

        let cli = parse(&["export", "--format", "slack-markup", "--print"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Entry(EntryCommands::Export {
                format: Some(ExportFormat::SlackMarkup),
                print: true
            }))
        ));

        assert!(Cli::try_parse_from(["standup", "rm", "today", "0"]).is_err());
    }
}

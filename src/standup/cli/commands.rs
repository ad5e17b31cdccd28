//! # CLI Layer
//!
//! One possible client for the standup library. This is the only place that
//! touches stdout/stderr, reads the environment, or picks the data directory.
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `handle_*()`: call the API and print the `CmdResult`

use super::print::{
    print_dates, print_entry, print_greeting, print_messages, print_section, print_settings,
};
use super::setup::{join_text, Cli, Commands, EntryCommands, ItemCommands};
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use standup::api::{CmdResult, ConfigAction, MessageLevel, StandupApi};
use standup::clipboard::SystemClipboard;
use standup::dates::format_journal;
use standup::error::{Result, StandupError};
use standup::export::ExportFormat;
use standup::greeting::greeting;
use standup::index::Position;
use standup::model::Section;
use standup::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "STANDUP_HOME";
const LOG_ENV: &str = "STANDUP_LOG";

struct AppContext {
    api: StandupApi<FileStore>,
    date: NaiveDate,
    today: NaiveDate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_show(&ctx),
        Some(Commands::Entry(cmd)) => match cmd {
            EntryCommands::Show => handle_show(&ctx),
            EntryCommands::Start => handle_start(&mut ctx),
            EntryCommands::List { search } => handle_list(&ctx, join_text(search)),
            EntryCommands::Export { format, print } => handle_export(&ctx, format, print),
            EntryCommands::Drop { date } => handle_drop(&mut ctx, date),
        },
        Some(Commands::Item(cmd)) => handle_item(&mut ctx, cmd),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("standup=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "standup", "standup")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StandupError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");

    let today = Local::now().date_naive();
    let api = StandupApi::new(FileStore::new(dir.clone()), dir);

    Ok(AppContext {
        api,
        date: cli.date.unwrap_or(today),
        today,
    })
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.open_entry(ctx.date)?;
    print_greeting(
        &greeting(Some(ctx.date), ctx.today),
        &format_journal(ctx.date, ctx.today),
    );
    if let Some(entry) = &result.entry {
        print_entry(entry, None);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_start(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.start_entry(ctx.date)?;
    print_messages(&result.messages);
    if let Some(entry) = &result.entry {
        println!();
        print_entry(entry, None);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_entries(search.as_deref())?;
    print_dates(&result.dates, ctx.today);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, format: Option<ExportFormat>, print: bool) -> Result<()> {
    if print {
        let result = ctx.api.export(ctx.date, format)?;
        if let Some(text) = &result.text {
            println!("{}", text);
        }
        return Ok(());
    }

    let result = ctx.api.copy_export(&mut SystemClipboard, ctx.date, format)?;
    print_messages(&result.messages);
    // Clipboard unavailable: hand the text over on stdout instead
    let failed = result
        .messages
        .iter()
        .any(|m| m.level == MessageLevel::Warning);
    if failed {
        if let Some(text) = &result.text {
            println!("{}", text);
        }
    }
    Ok(())
}

fn handle_drop(ctx: &mut AppContext, date: NaiveDate) -> Result<()> {
    let result = ctx.api.delete_entry(date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_item(ctx: &mut AppContext, cmd: ItemCommands) -> Result<()> {
    let date = ctx.date;
    let (section, result) = match cmd {
        ItemCommands::Add { section, text } => {
            (section, ctx.api.append(date, section, join_text(text))?)
        }
        ItemCommands::After {
            section,
            position,
            text,
        } => (
            section,
            ctx.api.insert_after(date, section, position, join_text(text))?,
        ),
        ItemCommands::Set {
            section,
            position,
            text,
        } => (
            section,
            ctx.api.set_content(date, section, position, text.join(" "))?,
        ),
        ItemCommands::Indent { section, position } => {
            (section, ctx.api.indent(date, section, position)?)
        }
        ItemCommands::Outdent { section, position } => {
            (section, ctx.api.outdent(date, section, position)?)
        }
        ItemCommands::Rm { section, position } => {
            (section, ctx.api.delete_node(date, section, position)?)
        }
        ItemCommands::Copy { section, position } => {
            return handle_copy(ctx, section, position);
        }
    };
    print_edit(&result, section);
    Ok(())
}

fn handle_copy(ctx: &AppContext, section: Section, position: Position) -> Result<()> {
    let result = ctx
        .api
        .copy_node(&mut SystemClipboard, ctx.date, section, position)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_edit(result: &CmdResult, section: Section) {
    if let Some(entry) = &result.entry {
        print_section(entry, section, result.focus.as_ref());
    }
    print_messages(&result.messages);
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(settings), true) = (&result.settings, result.messages.is_empty()) {
        print_settings(settings);
    }
    print_messages(&result.messages);
    Ok(())
}

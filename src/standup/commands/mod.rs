use crate::config::Settings;
use crate::model::{DailyEntry, NodeId};
use chrono::NaiveDate;

pub mod config;
pub mod delete;
pub mod edit;
pub mod entry;
pub mod export;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The entry as it stands after the command
    pub entry: Option<DailyEntry>,
    pub dates: Vec<NaiveDate>,
    /// Node that should be focused next, for editors that track one
    pub focus: Option<NodeId>,
    /// Rendered or copied text
    pub text: Option<String>,
    pub settings: Option<Settings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entry(mut self, entry: DailyEntry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_focus(mut self, focus: Option<NodeId>) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

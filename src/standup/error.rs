use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StandupError {
    #[error("No entry for {0}")]
    EntryNotFound(NaiveDate),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StandupError>;

//! # Standup
//!
//! A daily standup journal. Each day holds two outlines, *Previously* and
//! *Today*, that can be edited as trees and exported as text for a chat
//! message or a markdown document.
//!
//! Like any other client, the bundled CLI only talks to the library through [`api`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions → node ids)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads an entry, applies outline/export logic, saves      │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EntryStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tree engine ([`outline`]) and the serializer ([`export`]) are pure
//! functions over [`model`] types, so most of the behaviour is tested there
//! without any store at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per user-facing action
//! - [`outline`]: Structural edits on a section's tree, with focus results
//! - [`export`]: Plain, Slack-markup and markdown rendering
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `DailyEntry`, `TodoNode`, `Section`
//! - [`index`]: 1-based display positions for CLI addressing
//! - [`dates`]: Date parsing, display labels and search matching
//! - [`greeting`]: The daily greeting line
//! - [`config`]: Persisted settings
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod greeting;
pub mod index;
pub mod model;
pub mod outline;
pub mod store;

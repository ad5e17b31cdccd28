//! # Export
//!
//! Renders an entry's two sections as one block of text for pasting elsewhere.
//!
//! Node content is written in a small markdown subset (`**bold**`, `*italic*`,
//! `[text](url)`, `` `code` ``). Each format decides what to do with it:
//!
//! | Format        | Bullet | Indent   | Inline markup                 |
//! |---------------|--------|----------|-------------------------------|
//! | `plain`       | `- `   | 4 spaces | stripped to readable text     |
//! | `slack-markup`| `* `   | 4 spaces | bold and links become mrkdwn  |
//! | `markdown`    | `- `   | tab      | passed through                |
//!
//! The rewrites are single-pass regex substitutions. Anything that does not
//! match (a lone `**`, a bracket without a url) stays as literal text.

use crate::model::TodoNode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));
static ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic regex"));
static ITALIC_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(.+?)_").expect("valid underscore italic regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").expect("valid code regex"));

const TITLE: &str = "Daily Standup";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Dash bullets with all markup stripped. Reads fine in a Slack message.
    #[default]
    #[serde(rename = "plain", alias = "slack-default")]
    Plain,
    #[serde(rename = "slack-markup")]
    SlackMarkup,
    #[serde(rename = "markdown")]
    Markdown,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Plain,
            ExportFormat::SlackMarkup,
            ExportFormat::Markdown,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Plain => "Slack (plain text)",
            ExportFormat::SlackMarkup => "Slack (with markup)",
            ExportFormat::Markdown => "Markdown",
        }
    }

    fn bullet(&self) -> &'static str {
        match self {
            ExportFormat::Plain | ExportFormat::Markdown => "-",
            ExportFormat::SlackMarkup => "*",
        }
    }

    fn indent_unit(&self) -> &'static str {
        match self {
            ExportFormat::Plain | ExportFormat::SlackMarkup => "    ",
            ExportFormat::Markdown => "\t",
        }
    }

    fn heading(&self, text: &str) -> String {
        match self {
            ExportFormat::Plain => text.to_string(),
            ExportFormat::SlackMarkup => format!("*{}*", text),
            ExportFormat::Markdown => format!("**{}**", text),
        }
    }

    fn inline(&self, content: &str) -> String {
        match self {
            ExportFormat::Plain => to_plain_text(content),
            ExportFormat::SlackMarkup => to_slack_mrkdwn(content),
            ExportFormat::Markdown => content.to_string(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Plain => write!(f, "plain"),
            ExportFormat::SlackMarkup => write!(f, "slack-markup"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "slack-default" | "text" => Ok(ExportFormat::Plain),
            "slack-markup" | "slack" | "mrkdwn" => Ok(ExportFormat::SlackMarkup),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(format!(
                "Unknown export format: {} (expected plain, slack-markup or markdown)",
                other
            )),
        }
    }
}

/// Strips markup down to something readable without a renderer.
pub fn to_plain_text(content: &str) -> String {
    let result = BOLD.replace_all(content, "${1}");
    let result = ITALIC_STAR.replace_all(&result, "${1}");
    let result = ITALIC_UNDERSCORE.replace_all(&result, "${1}");
    let result = LINK.replace_all(&result, "${1} (${2})");
    let result = CODE.replace_all(&result, "${1}");
    result.into_owned()
}

/// Slack mrkdwn: `*bold*`, `<url|text>`. Italics and code already match.
pub fn to_slack_mrkdwn(content: &str) -> String {
    let result = BOLD.replace_all(content, "*${1}*");
    let result = LINK.replace_all(&result, "<${2}|${1}>");
    result.into_owned()
}

/// Renders the outline lines for one forest, children right under their parent.
pub fn render_tree(format: ExportFormat, nodes: &[TodoNode]) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(format, nodes, 0, &mut lines);
    lines
}

fn render_into(format: ExportFormat, nodes: &[TodoNode], depth: usize, lines: &mut Vec<String>) {
    let prefix = format.indent_unit().repeat(depth);
    for node in nodes {
        lines.push(format!(
            "{}{} {}",
            prefix,
            format.bullet(),
            format.inline(&node.content)
        ));
        render_into(format, &node.children, depth + 1, lines);
    }
}

/// Title, then each section header followed by its outline.
pub fn render(format: ExportFormat, previously: &[TodoNode], today: &[TodoNode]) -> String {
    let mut lines = vec![format.heading(TITLE)];

    lines.push(String::new());
    lines.push(format.heading("Previously"));
    lines.extend(render_tree(format, previously));

    lines.push(String::new());
    lines.push(format.heading("Today"));
    lines.extend(render_tree(format, today));

    lines.join("\n")
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable handle for a node. Survives every structural edit; positions do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// A fresh, never-before-used id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoNode {
    pub id: NodeId,
    pub content: String,
    #[serde(default)]
    pub children: Vec<TodoNode>,
}

impl TodoNode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: NodeId::generate(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// A placeholder row awaiting input.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn with_children(mut self, children: Vec<TodoNode>) -> Self {
        self.children = children;
        self
    }
}

/// Ordered root-level nodes.
pub type Forest = Vec<TodoNode>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Previously,
    Today,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Previously => "Previously",
            Section::Today => "Today",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Previously => write!(f, "previously"),
            Section::Today => write!(f, "today"),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "previously" | "prev" | "p" => Ok(Section::Previously),
            "today" | "t" => Ok(Section::Today),
            other => Err(format!("Unknown section: {} (use previously or today)", other)),
        }
    }
}

/// One date's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub previously: Forest,
    #[serde(default)]
    pub today: Forest,
}

impl DailyEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            previously: Vec::new(),
            today: Vec::new(),
        }
    }

    /// New entry whose `previously` is an independent copy of `prior.today`.
    pub fn seeded_from(date: NaiveDate, prior: Option<&DailyEntry>) -> Self {
        let mut entry = Self::new(date);
        if let Some(prior) = prior {
            entry.previously = prior.today.clone();
        }
        entry
    }

    pub fn section(&self, section: Section) -> &[TodoNode] {
        match section {
            Section::Previously => &self.previously,
            Section::Today => &self.today,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Forest {
        match section {
            Section::Previously => &mut self.previously,
            Section::Today => &mut self.today,
        }
    }

    /// Copy of the entry with one section replaced.
    pub fn with_section(&self, section: Section, forest: Forest) -> Self {
        let mut next = self.clone();
        *next.section_mut(section) = forest;
        next
    }

    pub fn is_empty(&self) -> bool {
        self.previously.is_empty() && self.today.is_empty()
    }
}

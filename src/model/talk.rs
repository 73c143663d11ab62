use serde::{Deserialize, Serialize};

use super::Content;

/// Category label for weekly in-house sessions.
pub const WEEKLY_NERD: &str = "Weekly Nerd";
/// Category label for guest lectures.
pub const GUEST_TEACHER: &str = "Guest Teacher";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Speaker {
    One(String),
    Many(Vec<String>),
}

impl Speaker {
    /// First-listed speaker; used as the alphabetical sort key.
    pub fn primary(&self) -> &str {
        match self {
            Speaker::One(name) => name,
            Speaker::Many(names) => names.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Speaker::One(name) => vec![name.as_str()],
            Speaker::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn display(&self) -> String {
        self.names().join(", ")
    }
}

impl Default for Speaker {
    fn default() -> Self {
        Speaker::One(String::new())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TalkRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub speaker: Speaker,

    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable date, shown as-is.
    pub date: String,

    /// Machine-readable date used only for ordering.
    #[serde(rename = "dateObj")]
    pub date_obj: String,

    #[serde(default)]
    pub content: Content,
}

/// Parse the JSON document served as the talk collection.
pub fn parse_talks(bytes: &[u8]) -> serde_json::Result<Vec<TalkRecord>> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
#[path = "../tests/model/talk_tests.rs"]
mod tests;

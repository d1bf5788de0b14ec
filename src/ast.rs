/// Intermediate data produced by block processing
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Footnote definitions keyed by their numeric label.
///
/// Keys are kept as strings in an ordered map, so iteration is ascending
/// lexical order: `"10"` comes before `"2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Footnotes(BTreeMap<String, String>);

impl Footnotes {
    pub fn new() -> Self {
        Footnotes(BTreeMap::new())
    }

    /// Record a definition. A later definition for the same label replaces
    /// the earlier one.
    pub fn insert(&mut self, label: impl Into<String>, body: impl Into<String>) {
        self.0.insert(label.into(), body.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Which list, if any, is currently open during block processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    None,
    Unordered,
    Ordered,
}

impl ListState {
    /// Closing tag for the open list, if there is one.
    pub fn closing_tag(self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::Unordered => Some("</ul>"),
            ListState::Ordered => Some("</ol>"),
        }
    }
}

/// Result of the block pass: text with block tags resolved, plus the
/// footnote definitions that were pulled out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOutput {
    pub body: String,
    pub footnotes: Footnotes,
}

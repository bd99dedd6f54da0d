//! Linked-issue status classification

use serde::Deserialize;
use std::fmt;

/// Progress state of a linked issue, as far as rollups are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueState {
    /// Still being worked on, or a status we don't recognize.
    Open,
    /// Finished work; counts towards the numerator.
    Done,
    /// Dropped work; excluded from every rollup.
    Obsolete,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Done => "done",
            IssueState::Obsolete => "obsolete",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status and resolution names that decide an [`IssueState`].
///
/// Names are compared case-insensitively. Obsolete names are checked first and
/// match either the status or the resolution, so a "Closed" issue resolved as
/// "Duplicate" is obsolete rather than done.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusSets {
    pub done: Vec<String>,
    pub obsolete: Vec<String>,
}

impl Default for StatusSets {
    fn default() -> Self {
        Self {
            done: ["Done", "Closed", "Resolved", "Verified"].iter().map(|s| s.to_string()).collect(),
            obsolete: ["Obsolete", "Won't Do", "Won't Fix", "Duplicate"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl StatusSets {
    pub fn classify(&self, status: &str, resolution: Option<&str>) -> IssueState {
        let in_set = |set: &[String], name: &str| {
            let name = name.trim();
            !name.is_empty() && set.iter().any(|s| s.trim().eq_ignore_ascii_case(name))
        };

        if in_set(&self.obsolete, status) || resolution.is_some_and(|r| in_set(&self.obsolete, r)) {
            IssueState::Obsolete
        } else if in_set(&self.done, status) {
            IssueState::Done
        } else {
            IssueState::Open
        }
    }
}

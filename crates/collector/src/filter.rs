//! Content selection flag consumed by an external filtering stage.
//!
//! This core never produces or interprets the flag; it is carried so that a
//! downstream viewer can decide whether a matching record is kept or
//! suppressed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSelection {
    Include,
    Exclude,
}

impl ContentSelection {
    /// Whether a record that matched the external filter is kept.
    pub fn keeps(&self, matched: bool) -> bool {
        match self {
            ContentSelection::Include => matched,
            ContentSelection::Exclude => !matched,
        }
    }
}

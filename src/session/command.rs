use crate::*;
use std::time::Duration;

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the database at a URL and load its schema.
    LoadDatabase(String),
    /// Replace the editor text.
    Edit(String),
    Execute,
    /// Replace the editor text with the validator's repaired candidate.
    ApplyRepair,
    /// Replace the editor text with the rewrite of a suggestion (zero-based)
    /// from the last execution.
    ApplySuggestion(usize),
    Explain,
    Generate(String),
    PreviousQuery,
    NextQuery,
    Clear,
}

/// What a command produced, for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Notice(String),
    DatabaseLoaded {
        id: String,
        tables: usize,
        default_query: Option<String>,
    },
    Edited,
    Executed {
        query: String,
        results: Vec<ResultSet>,
        elapsed: Duration,
        /// Present when validation found issues; applied when auto-applicable.
        repair: Option<RepairResult>,
        suggestions: Suggestions,
    },
    Failed {
        query: String,
        message: String,
        hint: Option<String>,
        repair: Option<RepairResult>,
    },
    Repaired {
        query: String,
        issues: Vec<Issue>,
    },
    /// The editor now holds `query`; `note` says where it came from.
    Editor {
        query: String,
        note: String,
    },
    Explained {
        text: String,
        parts: Vec<String>,
    },
    Cleared,
}

impl Outcome {
    pub fn notice(text: impl Into<String>) -> Self {
        Outcome::Notice(text.into())
    }
}

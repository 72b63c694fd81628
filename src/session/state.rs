use crate::*;
use std::sync::Arc;

/// Everything the editor session knows. Commands never mutate a state in
/// place; the dispatcher returns a new one.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub engine: Option<Engine>,
    /// Name the loaded database is recognised by, see [`Catalog::detect`].
    pub database_id: String,
    pub schema: Arc<Schema>,
    /// Current editor text.
    pub query: String,
    pub history: History,
    pub last: Option<LastExecution>,
}

/// The most recent successful execution and the follow-ups offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastExecution {
    pub query: String,
    pub suggestions: Suggestions,
}

impl SessionState {
    /// The schema for schema-aware checks, absent until a database with at
    /// least one table is loaded.
    pub fn schema(&self) -> Option<&Schema> {
        (self.engine.is_some() && !self.schema.is_empty()).then_some(&*self.schema)
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }
}

/// Executed and generated queries, oldest first, with a browsing cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Record a query and move the cursor to it. Empty text and a repeat of
    /// the newest entry are ignored.
    pub fn push(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query.is_empty() || self.entries.last() == Some(&query) {
            return;
        }
        self.entries.push(query);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry; `None` at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry; `None` at the newest.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Index of the entry under the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(queries: &[&str]) -> History {
        let mut history = History::default();
        for query in queries {
            history.push(*query);
        }
        history
    }

    #[test]
    fn consecutive_duplicates_are_skipped() {
        let history = history(&["a", "a", "b", "a", ""]);
        assert_eq!(history.entries(), ["a", "b", "a"]);
        assert_eq!(history.position(), 2);
    }

    #[test]
    fn browsing_does_not_wrap() {
        let mut history = history(&["a", "b", "c"]);
        assert_eq!(history.next(), None);
        assert_eq!(history.previous(), Some("b"));
        assert_eq!(history.previous(), Some("a"));
        assert_eq!(history.previous(), None);
        assert_eq!(history.position(), 0);
        assert_eq!(history.next(), Some("b"));
        assert_eq!(history.next(), Some("c"));
        assert_eq!(history.next(), None);
    }

    #[test]
    fn push_moves_cursor_to_newest() {
        let mut history = history(&["a", "b"]);
        history.previous();
        history.push("c");
        assert_eq!(history.position(), 2);
        assert_eq!(history.previous(), Some("b"));
    }

    #[test]
    fn empty_history_has_nothing_to_browse() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.previous(), None);
        assert_eq!(history.next(), None);
        assert_eq!(history.position(), 0);
    }
}

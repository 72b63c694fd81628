use derive_more::Display;

/// One problem detected in a query, in detection order.
///
/// The rendered form is the human-readable description shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Issue {
    #[display("Unterminated string: odd number of {quote} characters")]
    UnterminatedQuote { quote: char },
    #[display("Missing {missing} closing parenthesis")]
    UnclosedParenthesis { missing: usize },
    #[display("Found {extra} closing parenthesis without a matching opening one")]
    UnmatchedClosingParenthesis { extra: usize },
    #[display("Found {select} SELECT keyword(s) but {from} FROM keyword(s)")]
    KeywordMismatch { select: usize, from: usize },
    #[display("Table '{found}' is spelled '{canonical}' in the schema")]
    TableNameCase { found: String, canonical: String },
    #[display("Unknown table '{found}', did you mean '{suggestion}'?")]
    UnknownTable {
        found: String,
        suggestion: String,
        distance: usize,
    },
}

impl Issue {
    /// Whether the validator applied a mechanical, unambiguous fix for this issue.
    pub fn is_fixable(&self) -> bool {
        !matches!(
            self,
            Issue::UnmatchedClosingParenthesis { .. } | Issue::KeywordMismatch { .. }
        )
    }
}

/// Outcome of one validation pass.
///
/// `repaired_query` carries the best available candidate whenever issues were
/// found, even when some of them could not be fixed; `auto_applicable` says
/// whether that candidate may replace the user's text without confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairResult {
    pub issues: Vec<Issue>,
    pub repaired_query: Option<String>,
    pub auto_applicable: bool,
}

impl RepairResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_context() {
        assert_eq!(
            Issue::UnknownTable {
                found: "custmer".into(),
                suggestion: "Customer".into(),
                distance: 1
            }
            .to_string(),
            "Unknown table 'custmer', did you mean 'Customer'?"
        );
        assert_eq!(
            Issue::UnterminatedQuote { quote: '\'' }.to_string(),
            "Unterminated string: odd number of ' characters"
        );
        assert_eq!(
            Issue::KeywordMismatch { select: 2, from: 1 }.to_string(),
            "Found 2 SELECT keyword(s) but 1 FROM keyword(s)"
        );
    }

    #[test]
    fn only_structural_ambiguities_are_unfixable() {
        assert!(Issue::UnclosedParenthesis { missing: 1 }.is_fixable());
        assert!(Issue::UnterminatedQuote { quote: '"' }.is_fixable());
        assert!(!Issue::UnmatchedClosingParenthesis { extra: 1 }.is_fixable());
        assert!(!Issue::KeywordMismatch { select: 1, from: 0 }.is_fixable());
    }

    #[test]
    fn default_result_is_valid() {
        let result = RepairResult::valid();
        assert!(result.is_valid());
        assert!(result.repaired_query.is_none());
    }
}

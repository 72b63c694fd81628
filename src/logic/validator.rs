//! Validator module: detects common structural mistakes in SQL text and
//! proposes a mechanically repaired candidate.
//!
//! Passes run in a fixed order and never short-circuit. Each pass works on the
//! progressively repaired text, so later passes see the fixes of earlier ones:
//!
//! 1. Unbalanced `'` / `"` quotes (closing quote appended).
//! 2. Unbalanced parentheses (missing `)` appended; surplus `)` reported only).
//! 3. Missing `;` terminator (appended silently, never an issue).
//! 4. `SELECT` / `FROM` occurrence count mismatch (reported only). Words are
//!    counted anywhere in the text, comments and literals included.
//! 5. Table names after `FROM` / `JOIN` checked against the schema, when one
//!    is loaded: wrong casing and near misses are rewritten.
use crate::sql::{Token, TokenKind, cte_names, table_references, tokenize};
use crate::*;
use regex::Regex;
use std::{cmp::Ordering, sync::LazyLock};

static SELECT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bselect\b").expect("valid pattern"));
static FROM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfrom\b").expect("valid pattern"));

pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    fuzzy_threshold: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

/// Validate with the default fuzzy-match threshold.
pub fn validate(query: &str, schema: Option<&Schema>) -> RepairResult {
    Validator::default().validate(query, schema)
}

impl Validator {
    pub fn new(fuzzy_threshold: usize) -> Self {
        Self { fuzzy_threshold }
    }

    pub fn fuzzy_threshold(&self) -> usize {
        self.fuzzy_threshold
    }

    pub fn validate(&self, query: &str, schema: Option<&Schema>) -> RepairResult {
        let mut issues = Vec::new();
        // Closers go before the user's terminator, which pass 3 restores.
        let mut repaired = query.trim().trim_end_matches(';').trim_end().to_string();

        for quote in ['\'', '"'] {
            if query.matches(quote).count() % 2 == 1 {
                issues.push(Issue::UnterminatedQuote { quote });
                repaired.push(quote);
            }
        }

        let depth = query.chars().fold(0i64, |depth, c| match c {
            '(' => depth + 1,
            ')' => depth - 1,
            _ => depth,
        });
        match depth.cmp(&0) {
            Ordering::Greater => {
                let missing = depth.unsigned_abs() as usize;
                issues.push(Issue::UnclosedParenthesis { missing });
                repaired.push_str(&")".repeat(missing));
            }
            Ordering::Less => issues.push(Issue::UnmatchedClosingParenthesis {
                extra: depth.unsigned_abs() as usize,
            }),
            Ordering::Equal => {}
        }

        repaired.push(';');

        let select = SELECT_WORD.find_iter(&repaired).count();
        let from = FROM_WORD.find_iter(&repaired).count();
        if select != from {
            issues.push(Issue::KeywordMismatch { select, from });
        }

        if let Some(schema) = schema {
            let tokens = tokenize(&repaired);
            repaired = self.correct_tables(&repaired, &tokens, schema, &mut issues);
        }

        if issues.is_empty() {
            return RepairResult::valid();
        }

        let auto_applicable = issues.iter().all(Issue::is_fixable);
        debug!(
            "Validation found {} issue(s), auto-applicable: {auto_applicable}",
            issues.len()
        );
        RepairResult {
            issues,
            repaired_query: Some(repaired),
            auto_applicable,
        }
    }

    /// Rewrite table names following `FROM` / `JOIN` to their schema spelling.
    ///
    /// Replacements are collected against the token offsets of `sql` and applied
    /// back to front so earlier offsets stay valid.
    fn correct_tables(
        &self,
        sql: &str,
        tokens: &[Token],
        schema: &Schema,
        issues: &mut Vec<Issue>,
    ) -> String {
        let ctes = cte_names(tokens);
        let mut fixes: Vec<(usize, usize, String)> = Vec::new();

        for reference in table_references(tokens) {
            let token = &tokens[reference.name];
            let TokenKind::Ident(found) = &token.kind else {
                continue; // quoted names are taken literally
            };
            if ctes.iter().any(|cte| cte.eq_ignore_ascii_case(found)) {
                continue;
            }

            if let Some(table) = schema.lookup(found) {
                if table.name != *found {
                    issues.push(Issue::TableNameCase {
                        found: found.clone(),
                        canonical: table.name.clone(),
                    });
                    fixes.push((token.start, token.end, table.name.clone()));
                }
                continue;
            }

            match closest(found, schema.table_names(), self.fuzzy_threshold) {
                Some((suggestion, distance)) => {
                    trace!("Correcting table {found} -> {suggestion} (distance {distance})");
                    issues.push(Issue::UnknownTable {
                        found: found.clone(),
                        suggestion: suggestion.to_string(),
                        distance,
                    });
                    fixes.push((token.start, token.end, suggestion.to_string()));
                }
                None => trace!("No table close enough to {found}"),
            }
        }

        fixes.sort_by(|a, b| b.0.cmp(&a.0));
        let mut out = sql.to_string();
        for (start, end, replacement) in fixes {
            out.replace_range(start..end, &replacement);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chinook() -> Schema {
        [
            Table::new_with_ordered("Album", [("AlbumId", "INTEGER"), ("Title", "NVARCHAR(160)")]),
            Table::new_with_ordered("Artist", [("ArtistId", "INTEGER"), ("Name", "NVARCHAR(120)")]),
            Table::new_with_ordered("Customer", [("CustomerId", "INTEGER"), ("Name", "NVARCHAR(40)")]),
            Table::new_with_ordered("Invoice", [("InvoiceId", "INTEGER"), ("CustomerId", "INTEGER")]),
            Table::new_with_ordered("InvoiceLine", [("InvoiceLineId", "INTEGER")]),
            Table::new_with_ordered("Track", [("TrackId", "INTEGER"), ("AlbumId", "INTEGER")]),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    #[case("SELECT * FROM Customer;")]
    #[case("SELECT * FROM Customer")]
    #[case("  select Name from Customer where Name = 'O''Brien'  ")]
    #[case("SELECT COUNT(*) FROM (SELECT AlbumId FROM Album) AS a")]
    #[case("INSERT INTO Artist (Name) VALUES ('Queen')")]
    #[case("SELECT t.Name FROM Track t JOIN Album a ON (t.AlbumId = a.AlbumId)")]
    #[case("WITH Recent AS (SELECT * FROM Invoice) SELECT * FROM Recent")]
    #[case("SELECT * FROM \"customer\"")]
    #[case("SELECT * FROM Orders")]
    fn accepts_well_formed_queries(#[case] sql: &str) {
        let result = validate(sql, Some(&chinook()));
        assert!(result.is_valid(), "unexpected issues: {:?}", result.issues);
        assert_eq!(result.repaired_query, None);
    }

    #[test]
    fn closes_unterminated_single_quote() {
        let result = validate("SELECT * FROM Customer WHERE Name = 'Bob", Some(&chinook()));
        assert!(!result.is_valid());
        assert_eq!(result.issues, vec![Issue::UnterminatedQuote { quote: '\'' }]);
        assert_eq!(
            result.repaired_query.as_deref(),
            Some("SELECT * FROM Customer WHERE Name = 'Bob';")
        );
        assert!(result.auto_applicable);
    }

    #[test]
    fn both_quote_kinds_fire_independently() {
        let result = validate("SELECT * FROM t WHERE a = \"x AND b = 'y", None);
        assert_eq!(
            result.issues,
            vec![
                Issue::UnterminatedQuote { quote: '\'' },
                Issue::UnterminatedQuote { quote: '"' },
            ]
        );
        assert_eq!(
            result.repaired_query.as_deref(),
            Some("SELECT * FROM t WHERE a = \"x AND b = 'y'\";")
        );
        assert!(result.auto_applicable);
    }

    #[test]
    fn corrects_misspelled_table() {
        let result = validate("SELECT * FROM custmer", Some(&chinook()));
        assert_eq!(
            result.issues,
            vec![Issue::UnknownTable {
                found: "custmer".into(),
                suggestion: "Customer".into(),
                distance: 1
            }]
        );
        assert_eq!(result.repaired_query.as_deref(), Some("SELECT * FROM Customer;"));
        assert!(result.auto_applicable);
    }

    #[test]
    fn corrects_table_casing() {
        let result = validate("SELECT * FROM invoice;", Some(&chinook()));
        assert_eq!(
            result.issues,
            vec![Issue::TableNameCase {
                found: "invoice".into(),
                canonical: "Invoice".into()
            }]
        );
        assert_eq!(result.repaired_query.as_deref(), Some("SELECT * FROM Invoice;"));
        assert!(result.auto_applicable);
    }

    #[test]
    fn multiple_corrections_apply_back_to_front() {
        let result = validate(
            "SELECT * FROM albm a JOIN artst ar ON a.ArtistId = ar.ArtistId JOIN track t ON t.AlbumId = a.AlbumId",
            Some(&chinook()),
        );
        assert_eq!(result.issues.len(), 3);
        assert_eq!(
            result.repaired_query.as_deref(),
            Some(
                "SELECT * FROM Album a JOIN Artist ar ON a.ArtistId = ar.ArtistId JOIN Track t ON t.AlbumId = a.AlbumId;"
            )
        );
        assert!(result.auto_applicable);
    }

    #[test]
    fn extra_closing_parenthesis_blocks_auto_apply() {
        let result = validate("SELECT * FROM Orders WHERE id = 1))", Some(&chinook()));
        assert_eq!(
            result.issues,
            vec![Issue::UnmatchedClosingParenthesis { extra: 2 }]
        );
        assert!(!result.auto_applicable);
        assert_eq!(
            result.repaired_query.as_deref(),
            Some("SELECT * FROM Orders WHERE id = 1));")
        );
    }

    #[test]
    fn unclosed_parentheses_are_appended_before_terminator() {
        let result = validate("SELECT COUNT(*), MAX((Total FROM Invoice;", Some(&chinook()));
        assert_eq!(result.issues, vec![Issue::UnclosedParenthesis { missing: 2 }]);
        assert_eq!(
            result.repaired_query.as_deref(),
            Some("SELECT COUNT(*), MAX((Total FROM Invoice));")
        );
        assert!(result.auto_applicable);
    }

    #[rstest]
    #[case::word_in_line_comment("SELECT 1 -- FROM nowhere")]
    #[case::word_in_literal("SELECT 'from'")]
    #[case::mixed_case("select Name From Artist")]
    #[case::identifier_parts_do_not_count("SELECT from_date FROM selection")]
    fn keyword_balance_counts_every_occurrence(#[case] sql: &str) {
        assert!(validate(sql, None).is_valid());
    }

    #[rstest]
    #[case::literal_select("SELECT a FROM t WHERE n = 'select'", 2, 1)]
    #[case::commented_from("SELECT a /* FROM b */ FROM t", 1, 2)]
    fn keyword_balance_mismatches(#[case] sql: &str, #[case] select: usize, #[case] from: usize) {
        let result = validate(sql, None);
        assert_eq!(result.issues, vec![Issue::KeywordMismatch { select, from }]);
        assert!(!result.auto_applicable);
    }

    #[test]
    fn keyword_mismatch_is_unfixable() {
        let result = validate("SELECT 1", None);
        assert_eq!(result.issues, vec![Issue::KeywordMismatch { select: 1, from: 0 }]);
        assert!(!result.auto_applicable);
        assert_eq!(result.repaired_query.as_deref(), Some("SELECT 1;"));
    }

    #[test]
    fn unfixable_issue_poisons_otherwise_fixed_result() {
        let result = validate("SELECT (SELECT Name FROM custmer", Some(&chinook()));
        assert_eq!(
            result.issues,
            vec![
                Issue::UnclosedParenthesis { missing: 1 },
                Issue::KeywordMismatch { select: 2, from: 1 },
                Issue::UnknownTable {
                    found: "custmer".into(),
                    suggestion: "Customer".into(),
                    distance: 1
                },
            ]
        );
        assert!(!result.auto_applicable);
        assert_eq!(
            result.repaired_query.as_deref(),
            Some("SELECT (SELECT Name FROM Customer);")
        );
    }

    #[test]
    fn distant_names_are_left_alone() {
        let result = validate("SELECT * FROM playlist_history", Some(&chinook()));
        assert!(result.is_valid());
    }

    #[test]
    fn schema_passes_are_skipped_without_schema() {
        let result = validate("SELECT * FROM custmer", None);
        assert!(result.is_valid());
    }

    #[test]
    fn cte_names_are_never_corrected() {
        let result = validate("WITH Albums AS (SELECT * FROM Album) SELECT * FROM Albums", Some(&chinook()));
        assert!(result.is_valid(), "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn threshold_is_tunable() {
        let strict = Validator::new(0);
        assert!(strict.validate("SELECT * FROM custmer", Some(&chinook())).is_valid());

        assert!(validate("SELECT * FROM invc", Some(&chinook())).is_valid());
        let loose = Validator::new(4);
        let result = loose.validate("SELECT * FROM invc", Some(&chinook()));
        assert_eq!(result.repaired_query.as_deref(), Some("SELECT * FROM Invoice;"));
    }

    #[test]
    fn repaired_query_validates_cleanly() {
        let schema = chinook();
        for sql in [
            "SELECT * FROM custmer WHERE Name = 'Bob",
            "SELECT COUNT(( FROM albm",
            "select * from INVOICE",
        ] {
            let first = validate(sql, Some(&schema));
            assert!(first.auto_applicable, "{sql}: {:?}", first.issues);
            let repaired = first.repaired_query.expect("repair");
            assert!(validate(&repaired, Some(&schema)).is_valid(), "{repaired}");
        }
    }

    #[test]
    fn valid_queries_stay_valid() {
        let schema = chinook();
        let sql = "SELECT a.Title FROM Album a WHERE a.AlbumId IN (SELECT AlbumId FROM Track)";
        assert!(validate(sql, Some(&schema)).is_valid());
        assert!(validate(sql, Some(&schema)).is_valid());
    }

    #[test]
    fn empty_input_is_valid() {
        assert!(validate("", None).is_valid());
        assert!(validate("   ;", None).is_valid());
    }
}

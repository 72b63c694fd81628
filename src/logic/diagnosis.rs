//! Hints for failures reported by the embedded database.
//!
//! SQLite messages are short and regular (`no such table: x`,
//! `near "x": syntax error`), so a handful of patterns cover the errors users
//! actually hit while typing. Schema-aware hints reuse the validator's fuzzy
//! matching.
use crate::sql::Keyword;
use crate::*;
use itertools::Itertools as _;
use regex::Regex;
use std::sync::LazyLock;

static NO_SUCH_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no such table: ([\w.]+)").expect("valid pattern"));
static NO_SUCH_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no such column: ([\w.]+)").expect("valid pattern"));
static AMBIGUOUS_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ambiguous column name: ([\w.]+)").expect("valid pattern"));
static SYNTAX_NEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"near "([^"]*)": syntax error"#).expect("valid pattern"));

/// Turn a database error message into a user-facing hint, or `None` when the
/// message is not one we know how to explain.
pub fn diagnose(message: &str, schema: Option<&Schema>, threshold: usize) -> Option<String> {
    if let Some(name) = capture(&NO_SUCH_TABLE, message) {
        let name = unqualified(name);
        let hint = match schema {
            Some(schema) => match closest(name, schema.table_names(), threshold) {
                Some((table, _)) => format!("Table '{name}' does not exist. Did you mean '{table}'?"),
                None if !schema.is_empty() => format!(
                    "Table '{name}' does not exist. Available tables: {}",
                    schema.table_names().join(", ")
                ),
                None => format!("Table '{name}' does not exist."),
            },
            None => format!("Table '{name}' does not exist."),
        };
        return Some(hint);
    }

    if let Some(name) = capture(&NO_SUCH_COLUMN, message) {
        let column = unqualified(name);
        let candidate = schema.and_then(|schema| closest_column(schema, column, threshold));
        return Some(match candidate {
            Some((table, found)) => {
                format!("Column '{name}' does not exist. Did you mean '{table}.{found}'?")
            }
            None => format!("Column '{name}' does not exist in the referenced tables."),
        });
    }

    if let Some(name) = capture(&AMBIGUOUS_COLUMN, message) {
        return Some(format!(
            "Column '{name}' exists in more than one table; qualify it with a table name or alias."
        ));
    }

    if let Some(token) = capture(&SYNTAX_NEAR, message) {
        let keyword = (token.len() >= 3)
            .then(|| closest(token, Keyword::ALL.iter().map(|k| k.as_str()), threshold))
            .flatten()
            .filter(|(_, distance)| *distance > 0);
        return Some(match keyword {
            Some((kw, _)) => format!("Syntax error near '{token}'. Did you mean '{kw}'?"),
            None => format!("Syntax error near '{token}'. Check the clause order and punctuation around it."),
        });
    }

    if message.contains("incomplete input") {
        return Some("The query looks incomplete. Check for unclosed quotes or parentheses.".into());
    }
    if message.contains("unrecognized token") {
        return Some("Unrecognized token. Check for stray quotes or special characters.".into());
    }

    None
}

fn capture<'a>(pattern: &Regex, message: &'a str) -> Option<&'a str> {
    pattern
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn unqualified(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn closest_column<'a>(schema: &'a Schema, column: &str, threshold: usize) -> Option<(&'a str, &'a str)> {
    let pairs = schema
        .tables()
        .iter()
        .flat_map(|t| t.column_names().map(move |c| (t.name.as_str(), c)))
        .collect_vec();
    let (found, _) = closest(column, pairs.iter().map(|(_, c)| *c), threshold)?;
    pairs.into_iter().find(|(_, c)| *c == found)
}

//! Table references introduced by `FROM` and `JOIN`.
//!
//! A reference is the identifier immediately following the keyword (the part
//! after the dot for `schema.table`), plus its alias when one follows in the
//! `table AS alias` or `table alias` form.
use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Index of the table-name token.
    pub name: usize,
    pub alias: Option<String>,
    /// Parenthesis depth at which the reference appears (0 = top level).
    pub depth: i32,
}

impl TableRef {
    /// The name the rest of the query must use for this table.
    pub fn qualifier<'a>(&'a self, tokens: &'a [Token]) -> &'a str {
        self.alias
            .as_deref()
            .or_else(|| tokens[self.name].ident())
            .unwrap_or_default()
    }
}

pub fn table_references(tokens: &[Token]) -> Vec<TableRef> {
    let mut out = Vec::new();
    let mut depth = 0;
    for (i, t) in tokens.iter().enumerate() {
        match t.kind {
            TokenKind::ParenOpen => depth += 1,
            TokenKind::ParenClose => depth -= 1,
            _ => {}
        }
        if !(t.is_keyword(Keyword::From) || t.is_keyword(Keyword::Join)) {
            continue;
        }
        let Some(mut name) = tokens.get(i + 1).filter(|n| n.ident().is_some()).map(|_| i + 1)
        else {
            continue;
        };
        // schema.table
        if tokens.get(name + 1).is_some_and(|d| d.kind == TokenKind::Dot)
            && tokens.get(name + 2).is_some_and(|n| n.ident().is_some())
        {
            name += 2;
        }
        out.push(TableRef {
            name,
            alias: alias_after(tokens, name),
            depth,
        });
    }
    out
}

/// Names defined as common table expressions (`name AS (`).
pub fn cte_names(tokens: &[Token]) -> Vec<&str> {
    tokens
        .windows(3)
        .filter(|w| w[1].is_keyword(Keyword::As) && w[2].kind == TokenKind::ParenOpen)
        .filter_map(|w| w[0].ident())
        .collect()
}

fn alias_after(tokens: &[Token], name: usize) -> Option<String> {
    match tokens.get(name + 1) {
        Some(t) if t.is_keyword(Keyword::As) => tokens
            .get(name + 2)
            .and_then(|a| a.ident())
            .map(str::to_string),
        Some(t) if t.kind.is_ident() => t.ident().map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::tokenize;

    fn refs(sql: &str) -> Vec<(String, Option<String>, i32)> {
        let tokens = tokenize(sql);
        table_references(&tokens)
            .into_iter()
            .map(|r| {
                (
                    tokens[r.name].ident().unwrap_or_default().to_string(),
                    r.alias,
                    r.depth,
                )
            })
            .collect()
    }

    #[test]
    fn from_and_join_with_aliases() {
        assert_eq!(
            refs("SELECT * FROM Customer C INNER JOIN Invoice AS I ON C.CustomerId = I.CustomerId"),
            vec![
                ("Customer".into(), Some("C".into()), 0),
                ("Invoice".into(), Some("I".into()), 0),
            ]
        );
    }

    #[test]
    fn keyword_after_table_is_not_an_alias() {
        assert_eq!(
            refs("SELECT * FROM Track LEFT JOIN Genre WHERE 1"),
            vec![("Track".into(), None, 0), ("Genre".into(), None, 0)]
        );
    }

    #[test]
    fn schema_qualified_reference_uses_table_part() {
        assert_eq!(
            refs("SELECT * FROM Sales.SalesOrderHeader AS soh"),
            vec![("SalesOrderHeader".into(), Some("soh".into()), 0)]
        );
    }

    #[test]
    fn subquery_references_record_depth() {
        assert_eq!(
            refs("SELECT * FROM a WHERE EXISTS (SELECT 1 FROM b)"),
            vec![("a".into(), None, 0), ("b".into(), None, 1)]
        );
    }

    #[test]
    fn derived_tables_are_skipped() {
        assert_eq!(refs("SELECT * FROM (SELECT 1) x"), vec![]);
    }

    #[test]
    fn qualifier_prefers_alias() {
        let tokens = tokenize("SELECT * FROM Album A JOIN Artist");
        let found = table_references(&tokens);
        assert_eq!(found[0].qualifier(&tokens), "A");
        assert_eq!(found[1].qualifier(&tokens), "Artist");
    }

    #[test]
    fn finds_cte_names() {
        let tokens = tokenize("WITH Sales AS (SELECT 1), Ranked AS (SELECT 2) SELECT * FROM Ranked");
        assert_eq!(cte_names(&tokens), vec!["Sales", "Ranked"]);
    }
}

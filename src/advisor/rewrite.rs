//! Structural edits used by suggestion rewrites.
//!
//! Clauses are placed by scanning for the first later clause keyword at the
//! right parenthesis depth, so an `ORDER BY` lands before an existing `LIMIT`
//! and a `JOIN` added to a subquery stays inside its parentheses.
use crate::sql::{Keyword, Token, TokenKind, tokenize};

/// Split a query into its body and its tail: the final `;` with any comment
/// after it, or nothing when the last token is not a `;`.
pub(crate) fn split_terminator(query: &str) -> (&str, &str) {
    let query = query.trim();
    match tokenize(query).last() {
        Some(last) if last.kind == TokenKind::Semicolon => {
            (query[..last.start].trim_end(), &query[last.start..])
        }
        _ => (query, ""),
    }
}

/// Byte offset of the first token at or after `from` that is one of
/// `stoppers` at `depth`, or that closes the parenthesis enclosing `depth`.
pub(crate) fn clause_boundary(
    tokens: &[Token],
    from: usize,
    depth: i32,
    stoppers: &[Keyword],
) -> Option<usize> {
    let mut current = depth;
    for t in tokens.iter().skip(from) {
        match t.kind {
            TokenKind::ParenOpen => current += 1,
            TokenKind::ParenClose => {
                current -= 1;
                if current < depth {
                    return Some(t.start);
                }
            }
            _ => {}
        }
        if current == depth && t.keyword().is_some_and(|kw| stoppers.contains(&kw)) {
            return Some(t.start);
        }
    }
    None
}

/// Insert `clause` on its own line at byte offset `at`.
pub(crate) fn splice(body: &str, at: usize, clause: &str) -> String {
    let (head, tail) = body.split_at(at);
    let head = head.trim_end();
    if tail.is_empty() {
        format!("{head}\n{clause}")
    } else {
        format!("{head}\n{clause}\n{tail}")
    }
}

/// Insert a top-level clause before the first of `stoppers`, or at the end.
pub(crate) fn insert_clause(body: &str, tokens: &[Token], clause: &str, stoppers: &[Keyword]) -> String {
    let at = clause_boundary(tokens, 0, 0, stoppers).unwrap_or(body.len());
    splice(body, at, clause)
}

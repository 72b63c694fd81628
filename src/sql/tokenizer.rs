use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient SQL tokenizer producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Feeds the query validator and the follow-up advisor, both of which look at
///   broken or half-typed SQL (e.g. `SELECT * FROM t WHERE name = 'Bob`).
/// - Classifies only the minimal keyword set defined in `keyword.rs`.
///
/// Behavior:
/// - Skips ASCII whitespace, `--` line comments and `/* */` block comments.
/// - Aggregates `[A-Za-z_][A-Za-z0-9_]*` runs into identifiers, preserving case.
/// - Runs starting with a digit become `Number`.
/// - `'...'` becomes `Literal` (`''` is an escaped quote); `"..."` becomes
///   `QuotedIdent`. Unterminated quotes run to the end of input.
/// - Emits single-character tokens for comma, dot, parentheses and semicolon;
///   everything else is `Other(char)`.
///
/// Guarantees:
/// - Never panics, including on multi-byte input.
/// - Never returns an error (malformed constructs still yield tokens).
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        // Comments
        if b == b'-' && bytes.get(i + 1) == Some(&b'-') {
            i = sql[i..].find('\n').map_or(bytes.len(), |p| i + p);
            continue;
        }
        if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            i = sql[i + 2..].find("*/").map_or(bytes.len(), |p| i + 2 + p + 2);
            continue;
        }

        // Quoted runs
        if b == b'\'' {
            let (end, _) = skip_quoted(bytes, i, b'\'');
            out.push(Token::new(TokenKind::Literal, start, end));
            i = end;
            continue;
        }
        if b == b'"' {
            let (end, terminated) = skip_quoted(bytes, i, b'"');
            let inner_end = if terminated { end - 1 } else { end };
            let name = sql[start + 1..inner_end].replace("\"\"", "\"");
            out.push(Token::new(TokenKind::QuotedIdent(name), start, end));
            i = end;
            continue;
        }

        // Identifier / keyword
        if b.is_ascii_alphabetic() || b == b'_' {
            i = scan_word(bytes, i + 1, false);
            let text = &sql[start..i];
            let kind = Keyword::from_lower(&text.to_ascii_lowercase())
                .map(TokenKind::Keyword)
                .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
            out.push(Token::new(kind, start, i));
            continue;
        }

        if b.is_ascii_digit() {
            i = scan_word(bytes, i + 1, true);
            out.push(Token::new(TokenKind::Number, start, i));
            continue;
        }

        // Single-character tokens
        let Some(c) = sql[i..].chars().next() else {
            break;
        };
        i += c.len_utf8();
        let kind = match c {
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            ';' => TokenKind::Semicolon,
            other => TokenKind::Other(other),
        };
        out.push(Token::new(kind, start, i));
    }

    out
}

/// Advance past word characters (and dots for numbers).
fn scan_word(bytes: &[u8], mut i: usize, numeric: bool) -> usize {
    while let Some(&b) = bytes.get(i) {
        if b.is_ascii_alphanumeric() || b == b'_' || (numeric && b == b'.') {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// Returns the offset just past the closing quote, and whether one was found.
fn skip_quoted(bytes: &[u8], open: usize, quote: u8) -> (usize, bool) {
    let mut j = open + 1;
    while j < bytes.len() {
        if bytes[j] == quote {
            if bytes.get(j + 1) == Some(&quote) {
                j += 2;
                continue;
            }
            return (j + 1, true);
        }
        j += 1;
    }
    (bytes.len(), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;
    use crate::sql::token_kind::TokenKind;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT a, b FROM t");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(toks.iter().any(|t| t.ident() == Some("a")));
        assert!(toks.iter().any(|t| t.ident() == Some("b")));
        assert!(toks.iter().any(|t| t.ident() == Some("t")));
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = tokenize("From MyTable");
        assert!(toks[0].is_keyword(Keyword::From));
        assert_eq!(toks[1].ident(), Some("MyTable"));
        assert_eq!((toks[1].start, toks[1].end), (5, 12));
    }

    #[test]
    fn literals_hide_keywords() {
        assert_eq!(
            kinds("SELECT 'from' FROM t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Literal,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Ident("t".into()),
            ]
        );
    }

    #[test]
    fn escaped_quote_stays_inside_literal() {
        let toks = tokenize("'it''s' x");
        assert_eq!(toks[0].kind, TokenKind::Literal);
        assert_eq!((toks[0].start, toks[0].end), (0, 7));
        assert_eq!(toks[1].ident(), Some("x"));
    }

    #[test]
    fn unterminated_literal_runs_to_end() {
        let toks = tokenize("WHERE name = 'Bob");
        let last = toks.last().expect("literal token");
        assert_eq!(last.kind, TokenKind::Literal);
        assert_eq!(last.end, 17);
    }

    #[test]
    fn quoted_identifier_strips_quotes() {
        assert_eq!(
            kinds(r#"FROM "Order ""X""""#),
            vec![
                TokenKind::Keyword(Keyword::From),
                TokenKind::QuotedIdent(r#"Order "X""#.into()),
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        let toks = kinds("SELECT 1 -- FROM nowhere\n/* FROM\n anywhere */ FROM t");
        assert_eq!(
            toks,
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Number,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Ident("t".into()),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_swallows_rest() {
        assert_eq!(
            kinds("SELECT /* FROM t"),
            vec![TokenKind::Keyword(Keyword::Select)]
        );
    }

    #[test]
    fn numbers_are_not_identifiers() {
        assert_eq!(
            kinds("LIMIT 10 1.5"),
            vec![
                TokenKind::Keyword(Keyword::Limit),
                TokenKind::Number,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn punctuation_tokens() {
        let toks = tokenize("(a.b,c);");
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::ParenOpen)));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Dot)));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Comma)));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::ParenClose)));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Semicolon)));
    }

    #[test]
    fn multibyte_characters_do_not_panic() {
        let toks = tokenize("SELECT «x» FROM café");
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Other('«'))));
        assert!(toks.iter().any(|t| t.ident() == Some("caf")));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Other('é'))));
    }
}

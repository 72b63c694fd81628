//! Token kind definitions for the lenient SQL tokenizer.
//!
//! Each `TokenKind` variant represents a syntactic atom discovered during the
//! scanning phase. The tokenizer avoids strict SQL rules; anything
//! unrecognized becomes `Other(char)`.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted table / alias / column / function name, original casing kept.
    Ident(String),
    /// Double-quoted identifier, quotes stripped.
    QuotedIdent(String),
    /// Recognized SQL keyword.
    Keyword(Keyword),
    /// Numeric literal (any run of word characters starting with a digit).
    Number,
    /// Single-quoted string literal, including unterminated ones.
    Literal,
    /// Comma `,`.
    Comma,
    /// Dot `.` (qualified names like `schema.table` or `alias.column`).
    Dot,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// Statement terminator `;`.
    Semicolon,
    /// Any other symbol we do not specially classify.
    Other(char),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Returns the identifier text for quoted and unquoted identifiers.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) | TokenKind::QuotedIdent(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True only for unquoted identifiers.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;

    #[test]
    fn keyword_detection() {
        let tk = TokenKind::Keyword(Keyword::Select);
        assert!(tk.is_keyword(Keyword::Select));
        assert!(!tk.is_keyword(Keyword::From));
        assert!(tk.ident().is_none());
    }

    #[test]
    fn ident_access() {
        let tk = TokenKind::Ident("MyTable".into());
        assert!(tk.is_ident());
        assert_eq!(tk.ident(), Some("MyTable"));
    }

    #[test]
    fn quoted_ident_is_named_but_not_plain() {
        let tk = TokenKind::QuotedIdent("Order Details".into());
        assert_eq!(tk.ident(), Some("Order Details"));
        assert!(!tk.is_ident());
    }

    #[test]
    fn other_variant() {
        let tk = TokenKind::Other('*');
        assert!(!tk.is_ident());
        assert!(tk.ident().is_none());
    }
}

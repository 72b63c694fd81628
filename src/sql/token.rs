//! Token model tying a `TokenKind` to its source span.
//!
//! Offsets let the validator splice corrections into the original text and let
//! the advisor find clause boundaries without reconstructing the query.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token and the byte range `[start, end)` it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Identifier text, quoted or not.
    pub fn ident(&self) -> Option<&str> {
        self.kind.ident()
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}

//! Lightweight, lenient SQL tokenization.
//!
//! This module groups the lexical building blocks used by the query validator
//! and the follow-up advisor to reason about a SQL query without a full parser:
//!
//! - `keyword`    : Small enum of only the keywords the analyses need.
//! - `token_kind` : Classification of lexical atoms (identifiers, literals, punctuation, keywords).
//! - `token`      : Token struct pairing a `TokenKind` with source span offsets.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>` from raw SQL.
//! - `reference`  : Table references (and aliases) following `FROM` / `JOIN`.
//!
//! Broken input is the normal case here: an unclosed quote or a half-typed
//! clause still yields a token stream, and identifier casing is kept so the
//! validator can compare it with the schema's spelling. No AST is built.

pub mod keyword;
pub mod reference;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use reference::{TableRef, cte_names, table_references};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// True if `first` is immediately followed by `second` anywhere in the stream
/// (e.g. `ORDER` `BY`).
pub fn has_keyword_pair(tokens: &[Token], first: Keyword, second: Keyword) -> bool {
    tokens
        .windows(2)
        .any(|w| w[0].is_keyword(first) && w[1].is_keyword(second))
}

/// True if the keyword appears anywhere in the stream.
pub fn has_keyword(tokens: &[Token], kw: Keyword) -> bool {
    tokens.iter().any(|t| t.is_keyword(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_cover_a_validator_scan() {
        let tokens = tokenize("SELECT Name FROM Artist");
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        let references = table_references(&tokens);
        assert_eq!(references.len(), 1);
        assert_eq!(tokens[references[0].name].ident(), Some("Artist"));
    }

    #[test]
    fn keyword_pairs_must_be_adjacent() {
        let toks = tokenize("SELECT a FROM t ORDER BY a");
        assert!(has_keyword_pair(&toks, Keyword::Order, Keyword::By));
        assert!(!has_keyword_pair(&toks, Keyword::Group, Keyword::By));

        let toks = tokenize("SELECT a AS \"order\" FROM t GROUP x BY");
        assert!(!has_keyword_pair(&toks, Keyword::Group, Keyword::By));
    }

    #[test]
    fn keyword_presence_ignores_literals_and_comments() {
        let toks = tokenize("select 'where' -- WHERE\nFROM b");
        assert!(has_keyword(&toks, Keyword::From));
        assert!(!has_keyword(&toks, Keyword::Where));
    }
}

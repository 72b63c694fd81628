//! SQL keyword model used by the lenient tokenizer.
//!
//! Only the keywords the validator and the follow-up advisor reason about are
//! classified. Everything else (function names, `DESC`, `IS`, ...) stays an
//! identifier, which is what both consumers expect from a lexical scan.
//!
//! Design notes:
//! - Keywords are matched case‑insensitively via `from_lower` using a pre‑lower‑cased
//!   string slice.
//! - `as_str` provides the canonical uppercase spelling used when rendering
//!   clauses back into query text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    Natural,
    On,
    Using,
    As,
    With,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Offset,
    Union,
    Except,
    Intersect,
}

impl Keyword {
    /// Keywords that end the `FROM ... JOIN ...` part of a select.
    pub const TERMINATORS: [Self; 9] = [
        Keyword::Where,
        Keyword::Group,
        Keyword::Having,
        Keyword::Order,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Union,
        Keyword::Except,
        Keyword::Intersect,
    ];

    /// Every keyword, in declaration order.
    pub const ALL: [Self; 24] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Outer,
        Keyword::Cross,
        Keyword::Natural,
        Keyword::On,
        Keyword::Using,
        Keyword::As,
        Keyword::With,
        Keyword::Where,
        Keyword::Group,
        Keyword::By,
        Keyword::Having,
        Keyword::Order,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Union,
        Keyword::Except,
        Keyword::Intersect,
    ];

    /// Attempt to classify a *lower‑cased* word slice into a `Keyword`.
    /// Returns `None` if the word is not a recognized keyword.
    ///
    /// NOTE: The caller is responsible for lower‑casing the input.
    pub fn from_lower(word: &str) -> Option<Self> {
        use Keyword::*;
        let kw = match word {
            "select" => Select,
            "from" => From,
            "join" => Join,
            "inner" => Inner,
            "left" => Left,
            "right" => Right,
            "full" => Full,
            "outer" => Outer,
            "cross" => Cross,
            "natural" => Natural,
            "on" => On,
            "using" => Using,
            "as" => As,
            "with" => With,
            "where" => Where,
            "group" => Group,
            "by" => By,
            "having" => Having,
            "order" => Order,
            "limit" => Limit,
            "offset" => Offset,
            "union" => Union,
            "except" => Except,
            "intersect" => Intersect,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical uppercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            From => "FROM",
            Join => "JOIN",
            Inner => "INNER",
            Left => "LEFT",
            Right => "RIGHT",
            Full => "FULL",
            Outer => "OUTER",
            Cross => "CROSS",
            Natural => "NATURAL",
            On => "ON",
            Using => "USING",
            As => "AS",
            With => "WITH",
            Where => "WHERE",
            Group => "GROUP",
            By => "BY",
            Having => "HAVING",
            Order => "ORDER",
            Limit => "LIMIT",
            Offset => "OFFSET",
            Union => "UNION",
            Except => "EXCEPT",
            Intersect => "INTERSECT",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_keywords() {
        for kw in Keyword::ALL {
            let lower = kw.as_str().to_ascii_lowercase();
            assert_eq!(Keyword::from_lower(&lower), Some(kw), "{lower} should be recognized");
        }
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["foo", "bar", "desc", "count", "exists", "random", "SELECT"] {
            assert!(
                Keyword::from_lower(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn join_conditions_do_not_terminate_the_table_list() {
        assert!(!Keyword::TERMINATORS.contains(&Keyword::On));
        assert!(!Keyword::TERMINATORS.contains(&Keyword::Join));
        assert!(Keyword::TERMINATORS.contains(&Keyword::Where));
    }

    #[test]
    fn display_matches_as_str() {
        for kw in Keyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
        }
    }
}

use crate::sql::{Keyword, Token, has_keyword, has_keyword_pair, table_references, tokenize};
use super::rewrite;
use crate::*;

/// Most suggestions returned for one result.
pub const MAX_SUGGESTIONS: usize = 3;
/// Row cap used by the "add limit" rewrite.
pub const ROW_LIMIT: usize = 10;
/// Grouping columns and aggregate conditions depend on what the user is after,
/// so these clauses are left for the user to complete.
pub const GROUPING_PLACEHOLDER: &str = "GROUP BY /* choose the grouping columns */";
pub const HAVING_PLACEHOLDER: &str = "HAVING /* aggregate condition */";

/// A follow-up query idea. Variants are ordered by how they are proposed; the
/// rendered form is the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Suggestion {
    #[display("Broaden your search")]
    Broaden,
    #[display("Check WHERE clause conditions")]
    CheckWhere,
    #[display("Add ordering")]
    AddOrdering,
    #[display("Add limit")]
    AddLimit,
    #[display("Add grouping")]
    AddGrouping,
    #[display("Add having filter")]
    AddHaving,
    #[display("Add filter")]
    AddFilter,
    #[display("Join with related table ({})", _0.partner)]
    JoinRelated(Relation),
}
pub type Suggestions = Vec<Suggestion>;

/// Rank follow-up suggestions for `query` given the shape of its result.
pub fn suggest(
    query: &str,
    shape: &ResultShape,
    schema: Option<&Schema>,
    database_id: &str,
) -> Suggestions {
    Suggestion::search(query, shape, schema, database_id)
}

impl Suggestion {
    /// Search for follow-ups.
    ///
    /// An empty result always yields exactly "broaden" then "check WHERE".
    /// Otherwise the rules below fire in order and the first
    /// [`MAX_SUGGESTIONS`] are kept:
    /// 1. more than one row and no `ORDER BY`
    /// 2. more than twenty rows and no `LIMIT`
    /// 3. a `JOIN` without `GROUP BY`
    /// 4. a `GROUP BY` without `HAVING`
    /// 5. no `WHERE` and more than a hundred rows
    /// 6. a known relation from the active sample database
    pub fn search(
        query: &str,
        shape: &ResultShape,
        schema: Option<&Schema>,
        database_id: &str,
    ) -> Suggestions {
        if shape.is_empty() {
            return vec![Suggestion::Broaden, Suggestion::CheckWhere];
        }

        let rows = shape.first_row_count();
        let tokens = tokenize(query);
        let has_order = has_keyword_pair(&tokens, Keyword::Order, Keyword::By);
        let has_group = has_keyword_pair(&tokens, Keyword::Group, Keyword::By);

        let mut out = Vec::new();
        if rows > 1 && !has_order {
            out.push(Suggestion::AddOrdering);
        }
        if rows > 20 && !has_keyword(&tokens, Keyword::Limit) {
            out.push(Suggestion::AddLimit);
        }
        if has_keyword(&tokens, Keyword::Join) && !has_group {
            out.push(Suggestion::AddGrouping);
        }
        if has_group && !has_keyword(&tokens, Keyword::Having) {
            out.push(Suggestion::AddHaving);
        }
        if !has_keyword(&tokens, Keyword::Where) && rows > 100 {
            out.push(Suggestion::AddFilter);
        }
        if let Some(relation) = schema.and_then(|s| Self::related(&tokens, s, database_id)) {
            out.push(Suggestion::JoinRelated(relation));
        }

        debug!("{} follow-up(s) for a {rows} row result", out.len());
        out.truncate(MAX_SUGGESTIONS);
        out
    }

    /// First catalog relation whose entity table is referenced by the query
    /// while its partner is not mentioned at all. Both tables must exist.
    fn related(tokens: &[Token], schema: &Schema, database_id: &str) -> Option<Relation> {
        let catalog = Catalog::detect(database_id)?;
        let mentions = |name: &str| {
            tokens
                .iter()
                .any(|t| t.ident().is_some_and(|i| i.eq_ignore_ascii_case(name)))
        };
        let references = table_references(tokens);
        let referenced = |name: &str| {
            references.iter().any(|r| {
                tokens[r.name]
                    .ident()
                    .is_some_and(|i| i.eq_ignore_ascii_case(name))
            })
        };

        catalog.relations().iter().copied().find(|r| {
            referenced(r.table)
                && !mentions(r.partner)
                && schema.contains(r.table)
                && schema.contains(r.partner)
        })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Produce the concrete query text for this suggestion. A trailing `;`
    /// is kept only if the original had one, along with any comment after it.
    pub fn rewrite(&self, query: &str) -> String {
        let (body, terminator) = rewrite::split_terminator(query);
        let tokens = tokenize(body);
        let text = match self {
            Suggestion::Broaden => {
                format!("-- No rows matched: relax or remove some conditions\n{body}")
            }
            Suggestion::CheckWhere => {
                format!("-- Check the values and operators used in the WHERE clause\n{body}")
            }
            Suggestion::AddOrdering => rewrite::insert_clause(
                body,
                &tokens,
                "ORDER BY 1 DESC",
                &[Keyword::Limit, Keyword::Offset],
            ),
            Suggestion::AddLimit => {
                rewrite::insert_clause(body, &tokens, &format!("LIMIT {ROW_LIMIT}"), &[])
            }
            Suggestion::AddGrouping => rewrite::insert_clause(
                body,
                &tokens,
                GROUPING_PLACEHOLDER,
                &[Keyword::Having, Keyword::Order, Keyword::Limit, Keyword::Offset],
            ),
            Suggestion::AddHaving => rewrite::insert_clause(
                body,
                &tokens,
                HAVING_PLACEHOLDER,
                &[Keyword::Order, Keyword::Limit, Keyword::Offset],
            ),
            Suggestion::AddFilter => rewrite::insert_clause(
                body,
                &tokens,
                "WHERE 1 = 1 /* add filter conditions */",
                &[
                    Keyword::Group,
                    Keyword::Having,
                    Keyword::Order,
                    Keyword::Limit,
                    Keyword::Offset,
                ],
            ),
            Suggestion::JoinRelated(relation) => {
                Self::join(body, &tokens, relation).unwrap_or_else(|| body.to_string())
            }
        };
        format!("{text}{terminator}")
    }

    /// Add `JOIN partner` right after the FROM/JOIN list that references the
    /// relation's table, at that reference's depth.
    fn join(body: &str, tokens: &[Token], relation: &Relation) -> Option<String> {
        let reference = table_references(tokens).into_iter().find(|r| {
            tokens[r.name]
                .ident()
                .is_some_and(|i| i.eq_ignore_ascii_case(relation.table))
        })?;
        let qualifier = reference.qualifier(tokens);

        let alias_taken = tokens
            .iter()
            .any(|t| t.ident().is_some_and(|i| i.eq_ignore_ascii_case(relation.alias)));
        let (partner, partner_qualifier) = if alias_taken {
            (relation.partner.to_string(), relation.partner)
        } else {
            (format!("{} {}", relation.partner, relation.alias), relation.alias)
        };

        let clause = format!(
            "JOIN {partner} ON {qualifier}.{} = {partner_qualifier}.{}",
            relation.column, relation.partner_column
        );
        let at = rewrite::clause_boundary(
            tokens,
            reference.name + 1,
            reference.depth,
            &Keyword::TERMINATORS,
        )
        .unwrap_or(body.len());
        Some(rewrite::splice(body, at, &clause))
    }
}

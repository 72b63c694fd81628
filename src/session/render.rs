//! Plain-text presentation of outcomes for the terminal.
use crate::*;
use itertools::Itertools as _;

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Notice(text) => text.clone(),
        Outcome::Edited => String::new(),
        Outcome::Cleared => "Editor cleared.".to_string(),
        Outcome::DatabaseLoaded {
            id,
            tables,
            default_query,
        } => {
            let loaded = format!("Loaded {id} with {tables} table(s).");
            match default_query {
                Some(query) => format!("{loaded}\n\n{query}"),
                None => loaded,
            }
        }
        Outcome::Executed {
            results,
            elapsed,
            repair,
            suggestions,
            ..
        } => {
            let mut sections = Vec::new();
            sections.extend(repair.as_ref().map(render_repair));
            if results.is_empty() {
                sections.push("No results returned.".to_string());
            }
            sections.extend(results.iter().map(render_table));
            sections.push(format!("Query executed successfully in {elapsed:.2?}."));
            if !suggestions.is_empty() {
                sections.push(render_suggestions(suggestions));
            }
            sections.join("\n\n")
        }
        Outcome::Failed {
            message,
            hint,
            repair,
            ..
        } => {
            let mut sections = Vec::new();
            sections.extend(repair.as_ref().map(render_repair));
            sections.push(format!("Query execution failed: {message}"));
            sections.extend(hint.as_ref().map(|hint| format!("Hint: {hint}")));
            sections.join("\n\n")
        }
        Outcome::Repaired { query, issues } => {
            format!("Repaired:\n{}\n\n{query}", render_issues(issues))
        }
        Outcome::Editor { query, note } => format!("{note}:\n{query}"),
        Outcome::Explained { text, parts } => {
            if parts.is_empty() {
                return text.clone();
            }
            let parts = parts
                .iter()
                .enumerate()
                .map(|(i, part)| format!("  {}. {part}", i + 1))
                .join("\n");
            format!("{text}\n\nParts:\n{parts}")
        }
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues.iter().map(|issue| format!("  - {issue}")).join("\n")
}

fn render_repair(repair: &RepairResult) -> String {
    let issues = render_issues(&repair.issues);
    match (&repair.repaired_query, repair.auto_applicable) {
        (Some(_), true) => format!("Auto-repaired before running:\n{issues}"),
        (Some(candidate), false) => format!(
            "Issues found, running the query as written:\n{issues}\nCandidate repair (\\repair to apply):\n{candidate}"
        ),
        (None, _) => format!("Issues found:\n{issues}"),
    }
}

fn render_suggestions(suggestions: &[Suggestion]) -> String {
    let items = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("  {}. {s}", i + 1))
        .join("\n");
    format!("Follow-ups (\\apply N):\n{items}")
}

/// Aligned text table followed by its row count.
pub fn render_table(set: &ResultSet) -> String {
    let cells = set
        .rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect_vec())
        .collect_vec();
    let widths = set
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .chain([column])
                .map(|text| text.chars().count())
                .max()
                .unwrap_or_default()
        })
        .collect_vec();

    let line = |values: &[String]| {
        values
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{value:<width$}"))
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let rule = widths.iter().map(|width| "-".repeat(*width)).join("-+-");

    [line(&set.columns), rule]
        .into_iter()
        .chain(cells.iter().map(|row| line(row)))
        .chain([format!("({} row(s))", set.row_count())])
        .join("\n")
}

pub fn render_schema(schema: &Schema) -> String {
    if schema.is_empty() {
        return "No tables.".to_string();
    }
    schema
        .tables()
        .iter()
        .map(|table| {
            let columns = table
                .columns
                .iter()
                .map(|c| format!("{} {}", c.name, c.data_type).trim_end().to_string())
                .join(", ");
            format!("{} ({columns})", table.name)
        })
        .join("\n")
}

//! Text utilities for assistant answers.
use regex::Regex;
use std::sync::LazyLock;

static SQL_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```sql\r?\n(.*?)```").expect("valid pattern"));

/// Segment separators tried in order; the first that splits the text wins.
static SEGMENTS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(?m)^[ \t]*\d+\.[ \t]+",
        r"(?m)^[ \t]*[•*-][ \t]+",
        r"\n[ \t]*\n",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid pattern"))
});

/// Shortest segment worth showing on its own, in characters.
const MIN_PART_LEN: usize = 10;

/// The first fenced ```sql block of `text`, or the whole text, trimmed.
pub fn extract_sql(text: &str) -> String {
    SQL_FENCE
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
        .trim()
        .to_string()
}

/// Split an answer into numbered items, bullets or paragraphs.
///
/// Returns nothing unless at least two parts longer than ten characters
/// survive, so single-paragraph answers are shown as they are.
pub fn decompose(text: &str) -> Vec<String> {
    let Some(pieces) = SEGMENTS.iter().find_map(|pattern| {
        let pieces: Vec<&str> = pattern.split(text).collect();
        (pieces.len() > 1).then_some(pieces)
    }) else {
        return Vec::new();
    };

    let parts: Vec<String> = pieces
        .into_iter()
        .map(str::trim)
        .filter(|part| part.chars().count() > MIN_PART_LEN)
        .map(str::to_string)
        .collect();
    if parts.len() > 1 { parts } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```sql\nSELECT * FROM Album;\n```", "SELECT * FROM Album;")]
    #[case("Here you go:\n```SQL\nSELECT 1;\n```\nand ```sql\nSELECT 2;\n```", "SELECT 1;")]
    #[case("  SELECT Name FROM Artist;  \n", "SELECT Name FROM Artist;")]
    #[case("```\nSELECT 3;\n```", "```\nSELECT 3;\n```")]
    fn extracts_fenced_sql(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract_sql(text), expected);
    }

    #[rstest]
    #[case::numbered(
        "This query does three things:\n1. Selects the customer names\n2. Joins invoices on customer id\n3. Orders by total spent",
        vec!["This query does three things:", "Selects the customer names", "Joins invoices on customer id", "Orders by total spent"]
    )]
    #[case::bullets(
        "- Filters tracks by genre\n- Sorts by name descending",
        vec!["Filters tracks by genre", "Sorts by name descending"]
    )]
    #[case::paragraphs(
        "The query lists every customer.\n\nIt then joins the invoice table.",
        vec!["The query lists every customer.", "It then joins the invoice table."]
    )]
    #[case::decimals_are_not_items("Version 2.5 is used here. It returns 3.5 rows.", vec![])]
    #[case::single_paragraph("Counts the tracks of every album.", vec![])]
    #[case::short_parts_dropped("1. a\n2. Lists all of the albums", vec![])]
    fn decomposes_answers(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(decompose(text), expected);
    }
}

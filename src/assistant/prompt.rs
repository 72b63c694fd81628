//! Prompt texts sent to the assistant.

const ANALYST_PREAMBLE: &str = "You are an expert SQL analyst. Provide clear, helpful explanations \
and decompositions of SQL queries. Be concise but thorough.";

const EXPLAIN_INSTRUCTION: &str = "Explain this SQL query in 1-3 sentences, breaking down what each \
part does and how it works:";

const DEVELOPER_PREAMBLE: &str = "You are an expert SQL developer. Given the existing SQL query and \
the user's instruction, return the revised SQL query only.";

pub fn explain_prompt(sql: &str) -> String {
    format!("{ANALYST_PREAMBLE}\n\n{EXPLAIN_INSTRUCTION}\n\nSQL Query:\n{sql}")
}

/// Ask for a revision of `existing_sql` (possibly empty) following `instruction`.
pub fn generate_prompt(instruction: &str, existing_sql: &str) -> String {
    format!(
        "{DEVELOPER_PREAMBLE}\n\nUser Instruction:\n{instruction}\n\nExisting SQL Query:\n{existing_sql}"
    )
}

use crate::*;
use std::{sync::Arc, time::Instant};

pub const ENTER_QUERY: &str = "Please enter a SQL query first.";
pub const SELECT_DATABASE: &str = "Please select a database first.";
pub const ENTER_PROMPT: &str = "Please enter a prompt to generate SQL.";
pub const NO_ASSISTANT: &str =
    "Set COQUERY_API_KEY to use the assistant. Keys can be created at https://aistudio.google.com/";
pub const NO_SQL_GENERATED: &str = "No SQL generated.";

/// Applies commands to session states.
///
/// The validator and the advisor only ever see the parts of the state they
/// need (editor text, schema, result shape). Database failures during
/// execution are outcomes, not errors; errors are reserved for failures to
/// open a database or reach the assistant, and leave the caller's state as it
/// was.
#[derive(Debug, Clone)]
pub struct Dispatcher<A> {
    validator: Validator,
    assistant: Option<A>,
}

impl<A: Assistant> Dispatcher<A> {
    pub fn new(validator: Validator, assistant: Option<A>) -> Self {
        Self {
            validator,
            assistant,
        }
    }

    pub async fn dispatch(
        &self,
        state: &SessionState,
        command: Command,
    ) -> Result<(SessionState, Outcome)> {
        trace!("Dispatching {command:?}");
        match command {
            Command::LoadDatabase(url) => {
                let engine = Engine::open(&url).await?;
                self.attach(state, engine).await
            }
            Command::Edit(text) => Ok((state.with_query(text), Outcome::Edited)),
            Command::Execute => Ok(self.execute(state).await),
            Command::ApplyRepair => Ok(self.apply_repair(state)),
            Command::ApplySuggestion(index) => Ok(Self::apply_suggestion(state, index)),
            Command::Explain => self.explain(state).await,
            Command::Generate(instruction) => self.generate(state, &instruction).await,
            Command::PreviousQuery => Ok(Self::browse(state, History::previous, "No earlier query in history.")),
            Command::NextQuery => Ok(Self::browse(state, History::next, "No later query in history.")),
            Command::Clear => Ok((
                SessionState {
                    query: String::new(),
                    last: None,
                    ..state.clone()
                },
                Outcome::Cleared,
            )),
        }
    }

    /// Make `engine` the session database, loading its schema and, for a
    /// known sample database, its showcase query.
    pub async fn attach(&self, state: &SessionState, engine: Engine) -> Result<(SessionState, Outcome)> {
        let schema = engine.schema().await?;
        let id = engine.id().to_string();
        let default_query = Catalog::detect(&id).map(|catalog| catalog.default_query().to_string());
        info!("Database {id} ready with {} table(s)", schema.len());

        let outcome = Outcome::DatabaseLoaded {
            id: id.clone(),
            tables: schema.len(),
            default_query: default_query.clone(),
        };
        let next = SessionState {
            engine: Some(engine),
            database_id: id,
            schema: Arc::new(schema),
            query: default_query.unwrap_or_else(|| state.query.clone()),
            last: None,
            ..state.clone()
        };
        Ok((next, outcome))
    }

    async fn execute(&self, state: &SessionState) -> (SessionState, Outcome) {
        let written = state.query.trim();
        if written.is_empty() {
            return (state.clone(), Outcome::notice(ENTER_QUERY));
        }
        let Some(engine) = &state.engine else {
            return (state.clone(), Outcome::notice(SELECT_DATABASE));
        };

        let schema = state.schema();
        let checked = self.validator.validate(written, schema);
        let (query, repair) = match checked.repaired_query.clone() {
            _ if checked.is_valid() => (written.to_string(), None),
            Some(repaired) if checked.auto_applicable => {
                info!("Executing auto-repaired query");
                (repaired, Some(checked))
            }
            _ => (written.to_string(), Some(checked)),
        };

        let mut next = state.with_query(query.clone());
        next.history.push(query.clone());

        let started = Instant::now();
        match engine.execute(&query).await {
            Ok(results) => {
                let elapsed = started.elapsed();
                let shape = ResultShape::from_results(&results);
                let suggestions = suggest(&query, &shape, schema, &state.database_id);
                info!("Query executed in {elapsed:.2?}");
                next.last = Some(LastExecution {
                    query: query.clone(),
                    suggestions: suggestions.clone(),
                });
                let outcome = Outcome::Executed {
                    query,
                    results,
                    elapsed,
                    repair,
                    suggestions,
                };
                (next, outcome)
            }
            Err(err) => {
                let message = err.database_message();
                warn!("Query execution error: {message}");
                let hint = diagnose(&message, schema, self.validator.fuzzy_threshold());
                next.last = None;
                let outcome = Outcome::Failed {
                    query,
                    message,
                    hint,
                    repair,
                };
                (next, outcome)
            }
        }
    }

    fn apply_repair(&self, state: &SessionState) -> (SessionState, Outcome) {
        if state.query.trim().is_empty() {
            return (state.clone(), Outcome::notice(ENTER_QUERY));
        }
        let checked = self.validator.validate(&state.query, state.schema());
        match checked.repaired_query {
            Some(query) => (
                state.with_query(query.clone()),
                Outcome::Repaired {
                    query,
                    issues: checked.issues,
                },
            ),
            None => (state.clone(), Outcome::notice("No issues found; nothing to repair.")),
        }
    }

    fn apply_suggestion(state: &SessionState, index: usize) -> (SessionState, Outcome) {
        let Some((last, suggestion)) = state
            .last
            .as_ref()
            .and_then(|last| last.suggestions.get(index).map(|s| (last, s)))
        else {
            return (state.clone(), Outcome::notice(format!("No suggestion {}.", index + 1)));
        };
        let query = suggestion.rewrite(&last.query);
        (
            state.with_query(query.clone()),
            Outcome::Editor {
                query,
                note: suggestion.label(),
            },
        )
    }

    fn browse(
        state: &SessionState,
        step: fn(&mut History) -> Option<&str>,
        exhausted: &str,
    ) -> (SessionState, Outcome) {
        let mut next = state.clone();
        match step(&mut next.history).map(str::to_string) {
            Some(query) => {
                next.query = query.clone();
                let note = format!("History {}/{}", next.history.position() + 1, next.history.len());
                (next, Outcome::Editor { query, note })
            }
            None => (state.clone(), Outcome::notice(exhausted)),
        }
    }

    fn assistant(&self) -> std::result::Result<&A, Outcome> {
        self.assistant.as_ref().ok_or_else(|| Outcome::notice(NO_ASSISTANT))
    }

    async fn explain(&self, state: &SessionState) -> Result<(SessionState, Outcome)> {
        let sql = state.query.trim();
        if sql.is_empty() {
            return Ok((state.clone(), Outcome::notice(ENTER_QUERY)));
        }
        let assistant = match self.assistant() {
            Ok(assistant) => assistant,
            Err(notice) => return Ok((state.clone(), notice)),
        };
        let text = assistant.complete(&explain_prompt(sql)).await?;
        let parts = decompose(&text);
        debug!("Explanation split into {} part(s)", parts.len());
        Ok((state.clone(), Outcome::Explained { text, parts }))
    }

    async fn generate(&self, state: &SessionState, instruction: &str) -> Result<(SessionState, Outcome)> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Ok((state.clone(), Outcome::notice(ENTER_PROMPT)));
        }
        let assistant = match self.assistant() {
            Ok(assistant) => assistant,
            Err(notice) => return Ok((state.clone(), notice)),
        };
        let text = assistant
            .complete(&generate_prompt(instruction, &state.query))
            .await?;
        let sql = extract_sql(&text);
        if sql.is_empty() || text == NO_TEXT_RESPONSE {
            return Ok((state.clone(), Outcome::notice(NO_SQL_GENERATED)));
        }

        let mut next = state.with_query(sql.clone());
        next.history.push(sql.clone());
        Ok((
            next,
            Outcome::Editor {
                query: sql,
                note: "Generated SQL".to_string(),
            },
        ))
    }
}

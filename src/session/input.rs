//! Line-oriented input for the terminal front end.
use crate::sql::{TokenKind, tokenize};
use crate::*;

pub const HELP: &str = "\
SQL lines are collected until one ends with ';', then run.
  \\open URL        open a SQLite database (sqlite://path/to/file.db)
  \\run             run the editor text
  \\repair          replace the editor text with the suggested repair
  \\apply N         replace the editor text with follow-up N
  \\explain         ask the assistant to explain the editor text
  \\generate TEXT   ask the assistant to rewrite the editor text
  \\prev, \\next     browse query history
  \\clear           clear the editor
  \\schema          list tables and columns
  \\help            show this help
  \\quit            leave";

/// One complete piece of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// A finished SQL statement to put in the editor and run.
    Sql(String),
    ShowSchema,
    Help,
    Quit,
    /// A meta command that could not be understood.
    Invalid(String),
}

/// Accumulates SQL lines until a statement is complete.
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: String,
}

impl LineReader {
    /// Feed one line; `None` while a statement is still being typed.
    pub fn feed(&mut self, line: &str) -> Option<Input> {
        let trimmed = line.trim();
        if let Some(meta) = trimmed.strip_prefix('\\') {
            return Some(Self::meta(meta));
        }
        if trimmed.is_empty() && self.buffer.is_empty() {
            return None;
        }

        self.buffer.push_str(line.trim_end());
        self.buffer.push('\n');
        self.is_complete()
            .then(|| Input::Sql(std::mem::take(&mut self.buffer).trim().to_string()))
    }

    /// A statement is complete once its last token is `;`. Comments after it
    /// do not count, while a `;` inside an open literal does not end anything.
    fn is_complete(&self) -> bool {
        tokenize(&self.buffer)
            .last()
            .is_some_and(|token| token.kind == TokenKind::Semicolon)
    }

    /// True while part of a statement has been typed.
    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    fn meta(text: &str) -> Input {
        let (name, argument) = text
            .split_once(char::is_whitespace)
            .map_or((text, ""), |(name, rest)| (name, rest.trim()));
        match (name, argument) {
            ("open", "") => Input::Invalid("usage: \\open URL".into()),
            ("open", url) => Input::Command(Command::LoadDatabase(url.into())),
            ("run", _) => Input::Command(Command::Execute),
            ("repair", _) => Input::Command(Command::ApplyRepair),
            ("apply", n) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Input::Command(Command::ApplySuggestion(n - 1)),
                _ => Input::Invalid("usage: \\apply N (N starts at 1)".into()),
            },
            ("explain", _) => Input::Command(Command::Explain),
            ("generate", instruction) => Input::Command(Command::Generate(instruction.into())),
            ("prev", _) => Input::Command(Command::PreviousQuery),
            ("next", _) => Input::Command(Command::NextQuery),
            ("clear", _) => Input::Command(Command::Clear),
            ("schema", _) => Input::ShowSchema,
            ("help" | "?", _) => Input::Help,
            ("quit" | "q", _) => Input::Quit,
            _ => Input::Invalid(format!("Unknown command \\{name}. Type \\help for a list.")),
        }
    }
}

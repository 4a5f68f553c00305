//! One full tokenize-and-parse pass over an editor buffer.
//!
//! A presentation layer calls [`Analysis::run`] after every edit and paints
//! the result: a highlight range per token, and either a "valid" status or the
//! diagnostic's message with its underline. Nothing is carried over between
//! runs.

#[cfg(test)]
mod tests;

use crate::error::{Diagnostic, Underline};
use crate::lexer::{filter_trivia, lex_with, LexerConfig, Token, TokenKind};
use crate::parser::ast::Program;
use crate::parser::parse;
use serde::Serialize;

/// A paintable `[line, column]..[line, column + length)` range. Tokens that
/// span lines are clipped to their first line, as diagnostics are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
    pub length: usize,
}

impl From<&Token> for Highlight {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            line: token.line,
            column: token.column,
            length: token.first_line_len(),
        }
    }
}

/// What the status bar shows after a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Valid,
    Invalid {
        message: String,
        line: Option<u32>,
        column: Option<u32>,
        underline: Option<Underline>,
    },
}

impl Status {
    /// Status-bar text.
    pub fn line(&self) -> String {
        match self {
            Status::Valid => "Syntax valid.".to_string(),
            Status::Invalid {
                message,
                line: Some(line),
                column: Some(column),
                ..
            } => format!("Syntax error (line {}, column {}): {}", line, column, message),
            Status::Invalid { message, .. } => format!("Syntax error: {}", message),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Status::Valid)
    }
}

impl From<&Diagnostic> for Status {
    fn from(diagnostic: &Diagnostic) -> Self {
        Status::Invalid {
            message: diagnostic.message.clone(),
            line: diagnostic.line(),
            column: diagnostic.column(),
            underline: diagnostic.underline(),
        }
    }
}

/// Tokens and parse outcome for one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Everything the lexer emitted; includes trivia when the config keeps it.
    pub tokens: Vec<Token>,
    pub outcome: Result<Program, Diagnostic>,
}

impl Analysis {
    pub fn run(source: &str, config: &LexerConfig) -> Self {
        let tokens = lex_with(source, config);
        let outcome = parse(filter_trivia(tokens.clone()));
        Self { tokens, outcome }
    }

    pub fn highlights(&self) -> Vec<Highlight> {
        self.tokens.iter().map(Highlight::from).collect()
    }

    pub fn status(&self) -> Status {
        match &self.outcome {
            Ok(_) => Status::Valid,
            Err(diagnostic) => Status::from(diagnostic),
        }
    }

    pub fn program(&self) -> Option<&Program> {
        self.outcome.as_ref().ok()
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

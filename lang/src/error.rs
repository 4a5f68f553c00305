//! Parse diagnostics.
//!
//! The lexer cannot fail, so every diagnostic comes from the parser. A
//! diagnostic carries the offending token, or `None` when the parser ran out
//! of input.


use crate::lexer::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Input ended where a statement, expression or terminal was required.
    UnexpectedEndOfInput,
    /// The current token did not match the kind/value the grammar required.
    UnexpectedToken,
    /// No statement form begins with the current token.
    UnrecognizedStatementStart,
    /// No expression operand begins with the current token.
    UnrecognizedFactor,
    /// An integer literal outside the 64-bit signed range.
    InvalidNumber,
    /// Blocks or parentheses nested past the parser's depth limit.
    NestingTooDeep,
}

/// The first syntax error found in a buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub token: Option<Token>,
}

/// A `[line, column]..[line, column + length)` range on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Underline {
    pub line: u32,
    pub column: u32,
    pub length: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, token: Option<Token>) -> Self {
        Self {
            kind,
            message: message.into(),
            token,
        }
    }

    pub fn end_of_input(expected: &str) -> Self {
        Self::new(
            DiagnosticKind::UnexpectedEndOfInput,
            format!("Unexpected end of input, expected {}", expected),
            None,
        )
    }

    /// A terminal mismatch. `found` is `None` at end of input.
    pub fn unexpected_token(expected: String, found: Option<&Token>) -> Self {
        let found_desc = match found {
            Some(token) => format!("{} '{}'", token.kind, token.text),
            None => "end of input".to_string(),
        };
        let kind = if found.is_some() {
            DiagnosticKind::UnexpectedToken
        } else {
            DiagnosticKind::UnexpectedEndOfInput
        };
        Self::new(
            kind,
            format!("Expected {} but found {}", expected, found_desc),
            found.cloned(),
        )
    }

    pub fn unrecognized_statement(token: &Token) -> Self {
        Self::new(
            DiagnosticKind::UnrecognizedStatementStart,
            format!("Unexpected start of statement: '{}' ({})", token.text, token.kind),
            Some(token.clone()),
        )
    }

    pub fn unrecognized_factor(token: &Token) -> Self {
        Self::new(
            DiagnosticKind::UnrecognizedFactor,
            format!("Unexpected factor: '{}' ({})", token.text, token.kind),
            Some(token.clone()),
        )
    }

    pub fn invalid_number(token: &Token) -> Self {
        Self::new(
            DiagnosticKind::InvalidNumber,
            format!("Integer literal '{}' does not fit in 64 bits", token.text),
            Some(token.clone()),
        )
    }

    pub fn nesting_too_deep(token: &Token, limit: usize) -> Self {
        Self::new(
            DiagnosticKind::NestingTooDeep,
            format!("Nesting exceeds the limit of {} levels", limit),
            Some(token.clone()),
        )
    }

    pub fn line(&self) -> Option<u32> {
        self.token.as_ref().map(|t| t.line)
    }

    pub fn column(&self) -> Option<u32> {
        self.token.as_ref().map(|t| t.column)
    }

    /// The range a presentation layer should underline, if the error has a
    /// position. Multi-line tokens are clipped to their first line.
    pub fn underline(&self) -> Option<Underline> {
        self.token.as_ref().map(|token| Underline {
            line: token.line,
            column: token.column,
            length: token.first_line_len().max(1),
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "Syntax error at {}:{}: {}",
                token.line, token.column, self.message
            ),
            None => write!(f, "Syntax error: {}", self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

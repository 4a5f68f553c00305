//! Rendering of analysis results for the terminal and for machine consumers.

use lang::analysis::{Highlight, Status};
use lang::error::Underline;
use lang::parser::ast::Program;
use lang::{Analysis, Token};
use serde::Serialize;

/// Output mode for CLI execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable status line and underline (default)
    Text,
    /// Single JSON object
    Json,
}

/// A token as reported in JSON: the highlight range plus its text.
#[derive(Debug, Clone, Serialize)]
pub struct JsonToken<'a> {
    #[serde(flatten)]
    pub highlight: Highlight,
    pub text: &'a str,
}

/// JSON report for one buffer.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<JsonToken<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<&'a Program>,
}

/// One line per token: `line:col..line:col+len KIND "text"`.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{}..{}:{} {} {:?}\n",
                token.line,
                token.column,
                token.line,
                token.column as usize + token.first_line_len(),
                token.kind,
                token.text
            )
        })
        .collect()
}

pub fn render_ast(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}

/// The offending source line with a caret run under the error range.
pub fn render_underline(source: &str, underline: &Underline) -> String {
    let Some(text) = source.lines().nth(underline.line.saturating_sub(1) as usize) else {
        return String::new();
    };

    // Keep tabs so the carets line up with the echoed source.
    let padding: String = text
        .chars()
        .take(underline.column as usize)
        .map(|ch| if ch == '\t' { '\t' } else { ' ' })
        .collect();
    let gutter = underline.line.to_string();
    let blank = " ".repeat(gutter.len());

    format!(
        "{} | {}\n{} | {}{}\n",
        gutter,
        text,
        blank,
        padding,
        "^".repeat(underline.length.max(1))
    )
}

pub fn format_json_report(
    analysis: &Analysis,
    include_tokens: bool,
    include_ast: bool,
) -> serde_json::Result<String> {
    let tokens = include_tokens.then(|| {
        analysis
            .tokens
            .iter()
            .map(|token| JsonToken {
                highlight: Highlight::from(token),
                text: &token.text,
            })
            .collect()
    });
    let ast = if include_ast { analysis.program() } else { None };

    let report = JsonReport {
        status: analysis.status(),
        tokens,
        ast,
    };
    serde_json::to_string(&report)
}

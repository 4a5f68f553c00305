//! Front end for the glint language: a table-driven tokenizer and a
//! recursive-descent parser, built to be rerun over the whole buffer on every
//! edit.

pub mod analysis;
pub mod error;
pub mod lexer;
pub mod parser;

pub use analysis::{Analysis, Highlight, Status};
pub use error::{Diagnostic, DiagnosticKind};
pub use lexer::{filter_trivia, lex, lex_with, LexerConfig, Token, TokenKind};
pub use parser::{ast::Program, parse, Parser};

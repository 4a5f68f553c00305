//! The recognizer table.
//!
//! Recognizers are tried in table order at the cursor and the first one that
//! matches wins. Order is the only disambiguation mechanism: keywords shadow
//! identifiers, floats shadow `NUMBER '.' NUMBER`, and `/* */` shadows the
//! `/` operator.

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::TokenKind;

/// A compiled pattern for one token kind.
pub(crate) struct Recognizer {
    pub kind: TokenKind,
    regex: Regex,
    /// The pattern opens with a word boundary. Since every such pattern starts
    /// with a word character, this holds iff the character before the cursor
    /// is not a word character.
    word_start: bool,
}

impl Recognizer {
    fn new(kind: TokenKind, pattern: &str, word_start: bool) -> Self {
        // Anchored: the match must begin exactly at the cursor.
        let regex = Regex::new(&format!("^(?:{pattern})"))
            .unwrap_or_else(|e| panic!("invalid {kind} pattern {pattern:?}: {e}"));
        Self {
            kind,
            regex,
            word_start,
        }
    }

    /// Length in bytes of the match starting at byte offset `pos`, if any.
    pub fn match_at(&self, input: &str, pos: usize) -> Option<usize> {
        if self.word_start && preceded_by_word_char(input, pos) {
            return None;
        }
        self.regex
            .find(&input[pos..])
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// The pattern table in scan order. Compiled once, shared by every lexer.
pub(crate) static PATTERNS: Lazy<Vec<Recognizer>> = Lazy::new(|| {
    vec![
        Recognizer::new(
            TokenKind::Keyword,
            r"(?:if|else|while|for|def|return|in|range)\b",
            true,
        ),
        // Lazy, so it stops at the nearest `*/`. The lexer only tries it while
        // a `*/` still lies ahead of the cursor.
        Recognizer::new(TokenKind::BlockComment, r"/\*(?s:.*?)\*/", false),
        Recognizer::new(
            TokenKind::Operator,
            r"==|!=|<=|>=|\+=|-=|\*=|/=|\+|-|\*|/|=|>|<|\(|\)|\{|\}|,",
            false,
        ),
        Recognizer::new(TokenKind::Float, r"[0-9]+\.[0-9]+\b", true),
        Recognizer::new(TokenKind::Number, r"[0-9]+\b", true),
        Recognizer::new(TokenKind::String, r#""[^"]*""#, false),
        Recognizer::new(TokenKind::Identifier, r"[a-zA-Z_][a-zA-Z0-9_]*\b", true),
        Recognizer::new(TokenKind::Comment, r"#.*", false),
        Recognizer::new(TokenKind::Whitespace, r"\s+", false),
        Recognizer::new(TokenKind::Unknown, r".", false),
    ]
});

fn preceded_by_word_char(input: &str, pos: usize) -> bool {
    input[..pos].chars().next_back().is_some_and(is_word_char)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

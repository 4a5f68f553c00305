use serde::Serialize;
use std::fmt;

/// Token classes, one per recognizer in the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Operator,
    Float,
    Number,
    String,
    Identifier,
    BlockComment, // /* ... */
    Comment,      // # to end of line
    Whitespace,
    Unknown,
}

impl TokenKind {
    /// Whitespace and comments: consumed by the lexer, never seen by the parser.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::BlockComment
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Float => "FLOAT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, positioned slice of the source buffer.
///
/// `start` and `end` are character offsets (end exclusive). `line` is
/// 1-indexed and `column` is 0-indexed, both taken at the first character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        start: usize,
        end: usize,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
            line,
            column,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Characters before the first line break. A range painted on one line
    /// stops here, so multi-line strings and block comments never run past
    /// the end of their opening line.
    pub fn first_line_len(&self) -> usize {
        self.text.chars().take_while(|&c| c != '\n').count()
    }

    /// True if this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

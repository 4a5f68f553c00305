mod patterns;
pub mod token;

pub use token::{Token, TokenKind};

use patterns::PATTERNS;
use tracing::{debug, trace};


/// Lexer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Recognize `/* ... */` block comments.
    pub block_comments: bool,
    /// Emit whitespace and comment tokens instead of consuming them silently.
    pub keep_trivia: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            block_comments: true,
            keep_trivia: false,
        }
    }
}

/// Tokenize `input` with the default configuration.
///
/// Never fails: characters no recognizer accepts come out as single-character
/// `Unknown` tokens.
pub fn lex(input: &str) -> Vec<Token> {
    lex_with(input, &LexerConfig::default())
}

pub fn lex_with(input: &str, config: &LexerConfig) -> Vec<Token> {
    let mut lexer = Lexer::new(input, config);
    let tokens = lexer.lex_all();
    debug!(
        chars = lexer.offset,
        lines = lexer.line,
        tokens = tokens.len(),
        "tokenized buffer"
    );
    tokens
}

/// Drop whitespace and comment tokens, leaving the parser's input alphabet.
pub fn filter_trivia(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect()
}

struct Lexer<'a> {
    input: &'a str,
    config: &'a LexerConfig,
    /// Cursor as a byte index into `input`.
    position: usize,
    /// Cursor as a character offset.
    offset: usize,
    line: u32,
    column: u32,
    /// Byte index of the last `*/` in `input`. A `/*` at or past it cannot be
    /// closed, so the block-comment pattern is not tried there.
    last_comment_close: Option<usize>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            input,
            config,
            position: 0,
            offset: 0,
            line: 1,
            column: 0,
            last_comment_close: input.rfind("*/"),
        }
    }

    fn lex_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let token = self.next_token();
            if self.config.keep_trivia || !token.kind.is_trivia() {
                tokens.push(token);
            }
        }

        tokens
    }

    fn next_token(&mut self) -> Token {
        let (start, line, column) = (self.offset, self.line, self.column);

        let (kind, len) = self.recognize().unwrap_or_else(|| {
            // Unreachable with the stock table (UNKNOWN accepts any character
            // except '\n', which WHITESPACE takes), but keep the scan total.
            let len = self.input[self.position..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            (TokenKind::Unknown, len)
        });

        let input = self.input;
        let text = &input[self.position..self.position + len];
        trace!(%kind, line, column, ?text, "matched");
        self.consume(text);

        Token::new(kind, text, start, self.offset, line, column)
    }

    fn recognize(&self) -> Option<(TokenKind, usize)> {
        PATTERNS
            .iter()
            .filter(|r| r.kind != TokenKind::BlockComment || self.block_comment_may_close())
            .find_map(|r| {
                r.match_at(self.input, self.position)
                    .map(|len| (r.kind, len))
            })
    }

    fn block_comment_may_close(&self) -> bool {
        self.config.block_comments
            && self
                .last_comment_close
                .is_some_and(|close| close >= self.position + 2)
    }

    /// Move the cursor past `text`, keeping line/column in step. Applies to
    /// every span alike, so strings and block comments containing newlines
    /// leave later tokens correctly positioned.
    fn consume(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            self.offset += 1;
        }
        self.position += text.len();
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

use crate::lexer::{Token, TokenKind};

/// Read position over the meaningful tokens of one buffer.
pub(crate) struct TokenCursor {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenCursor {
    /// Stray trivia is dropped here so lookahead never has to skip it.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| !token.kind.is_trivia())
            .collect();
        Self { tokens, current: 0 }
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// The token after `current`.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current + 1)
    }

    pub fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.current().is_some_and(|token| token.is(kind, text))
    }

    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }
}

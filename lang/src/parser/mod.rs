pub mod ast;
mod cursor;

use crate::error::Diagnostic;
use crate::lexer::{Token, TokenKind};
use ast::*;
use cursor::TokenCursor;
use tracing::debug;

/// How deep blocks, call arguments and parenthesised expressions may nest
/// before the parser gives up with a diagnostic instead of growing the stack
/// further.
pub const MAX_NESTING_DEPTH: usize = 64;

// Binary operator levels, loosest first. Comparison binds tighter than
// `+`/`-`: `a + b < c` parses as `a + (b < c)`.
const ADDITIVE: &[&str] = &["+", "-"];
const COMPARISON: &[&str] = &["==", "!=", "<", ">", "<=", ">="];
const MULTIPLICATIVE: &[&str] = &["*", "/"];

const AUGMENTED: &[&str] = &["+=", "-=", "*=", "/="];

type ParseResult<T> = Result<T, Diagnostic>;

/// Recursive-descent parser over the meaningful tokens of one buffer.
pub struct Parser {
    cursor: TokenCursor,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            depth: 0,
        }
    }

    /// Parse the whole token stream. Always starts from the first token, so a
    /// parser that failed once can be asked again.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.cursor.reset();
        self.depth = 0;

        let result = self.parse_statements();
        match &result {
            Ok(program) => debug!(statements = program.statements.len(), "parsed program"),
            Err(diagnostic) => debug!(kind = ?diagnostic.kind, line = ?diagnostic.line(), "parse failed"),
        }
        result
    }

    /// Statements up to end of input or an unconsumed `}`. The closing brace
    /// belongs to whichever construct opened the block.
    fn parse_statements(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() && !self.cursor.check(TokenKind::Operator, "}") {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    fn parse_statement(&mut self) -> ParseResult<Node> {
        let token = match self.cursor.current() {
            Some(token) => token.clone(),
            None => return Err(Diagnostic::end_of_input("a statement")),
        };

        match token.kind {
            TokenKind::Keyword => match token.text.as_str() {
                "if" => self.parse_if(),
                "while" => self.parse_while(),
                "for" => self.parse_for(),
                "def" => self.parse_function_definition(),
                "return" => self.parse_return(),
                _ => Err(Diagnostic::unrecognized_statement(&token)),
            },
            TokenKind::Identifier => {
                let next = self
                    .cursor
                    .peek()
                    .filter(|next| next.kind == TokenKind::Operator)
                    .map(|next| next.text.clone());

                match next.as_deref() {
                    Some("=") => self.parse_assignment(),
                    Some(op) if AUGMENTED.contains(&op) => self.parse_augmented_assignment(),
                    Some("(") => self.parse_function_call(),
                    _ => self.parse_expression(),
                }
            }
            _ => Err(Diagnostic::unrecognized_statement(&token)),
        }
    }

    fn parse_if(&mut self) -> ParseResult<Node> {
        self.expect_keyword("if")?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        let else_body = if self.cursor.check(TokenKind::Keyword, "else") {
            self.cursor.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Node::IfStatement {
            condition: Box::new(condition),
            body,
            else_body,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Node> {
        self.expect_keyword("while")?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(Node::WhileStatement {
            condition: Box::new(condition),
            body,
        })
    }

    fn parse_for(&mut self) -> ParseResult<Node> {
        self.expect_keyword("for")?;
        self.expect_operator("(")?;
        let iterator = self.expect_identifier()?;
        self.expect_keyword("in")?;
        let range = self.parse_range()?;
        self.expect_operator(")")?;
        let body = self.parse_block()?;

        Ok(Node::ForStatement {
            iterator,
            range,
            body,
        })
    }

    fn parse_range(&mut self) -> ParseResult<RangeExpression> {
        self.expect_keyword("range")?;
        self.expect_operator("(")?;
        let argument = self.parse_expression()?;
        self.expect_operator(")")?;

        Ok(RangeExpression {
            argument: Box::new(argument),
        })
    }

    fn parse_function_definition(&mut self) -> ParseResult<Node> {
        self.expect_keyword("def")?;
        let name = self.expect_identifier()?;
        self.expect_operator("(")?;

        let mut parameters = Vec::new();
        if self.cursor.check_kind(TokenKind::Identifier) {
            parameters.push(self.expect_identifier()?);
            while self.cursor.check(TokenKind::Operator, ",") {
                self.cursor.advance();
                parameters.push(self.expect_identifier()?);
            }
        }

        self.expect_operator(")")?;
        let body = self.parse_block()?;

        Ok(Node::FunctionDefinition {
            name,
            parameters,
            body,
        })
    }

    fn parse_return(&mut self) -> ParseResult<Node> {
        self.expect_keyword("return")?;

        // The value is optional; only tokens that can open an expression start one.
        let has_value = self.cursor.current().is_some_and(|token| {
            matches!(
                token.kind,
                TokenKind::Number | TokenKind::Float | TokenKind::String | TokenKind::Identifier
            ) || token.is(TokenKind::Operator, "(")
        });

        let expression = if has_value {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        Ok(Node::ReturnStatement { expression })
    }

    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;

        Ok(Node::Assignment {
            name,
            value: Box::new(value),
        })
    }

    fn parse_augmented_assignment(&mut self) -> ParseResult<Node> {
        let name = self.expect_identifier()?;
        let token = self.eat(TokenKind::Operator, None)?;
        let op = AugmentedOperator::from_symbol(&token.text).ok_or_else(|| {
            Diagnostic::unexpected_token("an augmented assignment operator".to_string(), Some(&token))
        })?;
        let value = self.parse_expression()?;

        Ok(Node::AugmentedAssignment {
            name,
            op,
            value: Box::new(value),
        })
    }

    fn parse_function_call(&mut self) -> ParseResult<Node> {
        let name = self.eat(TokenKind::Identifier, None)?;
        self.expect_operator("(")?;
        let arguments = self.nested(&name, Self::parse_arguments)?;
        self.expect_operator(")")?;

        Ok(Node::FunctionCall {
            name: name.text,
            arguments,
        })
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Node>> {
        let mut arguments = Vec::new();
        if self.cursor.current().is_some_and(|token| token.text != ")") {
            arguments.push(self.parse_expression()?);
            while self.cursor.check(TokenKind::Operator, ",") {
                self.cursor.advance();
                arguments.push(self.parse_expression()?);
            }
        }
        Ok(arguments)
    }

    /// `'(' expression ')'` heading an `if` or `while`.
    fn parse_condition(&mut self) -> ParseResult<Node> {
        self.expect_operator("(")?;
        let condition = self.parse_expression()?;
        self.expect_operator(")")?;
        Ok(condition)
    }

    /// `'{' statements '}'`
    fn parse_block(&mut self) -> ParseResult<Program> {
        let open = self.expect_operator("{")?;
        let body = self.nested(&open, Self::parse_statements)?;
        self.expect_operator("}")?;
        Ok(body)
    }

    fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_binary(ADDITIVE, Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> ParseResult<Node> {
        self.parse_binary(COMPARISON, Self::parse_term)
    }

    fn parse_term(&mut self) -> ParseResult<Node> {
        self.parse_binary(MULTIPLICATIVE, Self::parse_factor)
    }

    /// Left fold over one precedence level: `operand (op operand)*`.
    fn parse_binary(
        &mut self,
        operators: &[&str],
        operand: fn(&mut Self) -> ParseResult<Node>,
    ) -> ParseResult<Node> {
        let mut left = operand(self)?;

        while let Some(op) = self.binary_operator(operators) {
            self.cursor.advance();
            let right = operand(self)?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn binary_operator(&self, operators: &[&str]) -> Option<BinaryOperator> {
        let token = self.cursor.current()?;
        if token.kind == TokenKind::Operator && operators.contains(&token.text.as_str()) {
            BinaryOperator::from_symbol(&token.text)
        } else {
            None
        }
    }

    fn parse_factor(&mut self) -> ParseResult<Node> {
        let token = match self.cursor.current() {
            Some(token) => token.clone(),
            None => return Err(Diagnostic::end_of_input("an expression")),
        };

        match token.kind {
            TokenKind::Number => {
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| Diagnostic::invalid_number(&token))?;
                self.cursor.advance();
                Ok(Node::Number { value })
            }
            TokenKind::Float => {
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| Diagnostic::invalid_number(&token))?;
                self.cursor.advance();
                Ok(Node::Float { value })
            }
            TokenKind::String => {
                self.cursor.advance();
                Ok(Node::String {
                    value: token.text.trim_matches('"').to_string(),
                })
            }
            TokenKind::Identifier => {
                if self.cursor.peek().is_some_and(|next| next.is(TokenKind::Operator, "(")) {
                    return self.parse_function_call();
                }
                self.cursor.advance();
                Ok(Node::Identifier { value: token.text })
            }
            TokenKind::Operator if token.text == "(" => {
                self.cursor.advance();
                let expression = self.nested(&token, Self::parse_expression)?;
                self.expect_operator(")")?;
                Ok(Node::ParenthesizedExpression {
                    expression: Box::new(expression),
                })
            }
            _ => Err(Diagnostic::unrecognized_factor(&token)),
        }
    }

    /// Run `parse` one nesting level deeper, refusing past the limit.
    fn nested<T>(
        &mut self,
        opener: &Token,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Diagnostic::nesting_too_deep(opener, MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Consume the current token if it has `kind` and, when given, exactly
    /// `text`; otherwise report what was expected against what was found.
    fn eat(&mut self, kind: TokenKind, text: Option<&str>) -> ParseResult<Token> {
        match self.cursor.current() {
            Some(token) if token.kind == kind && text.map_or(true, |t| token.text == t) => {
                let token = token.clone();
                self.cursor.advance();
                Ok(token)
            }
            found => {
                let expected = match text {
                    Some(text) => format!("{} '{}'", kind, text),
                    None => kind.to_string(),
                };
                Err(Diagnostic::unexpected_token(expected, found))
            }
        }
    }

    fn expect_operator(&mut self, symbol: &str) -> ParseResult<Token> {
        self.eat(TokenKind::Operator, Some(symbol))
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        self.eat(TokenKind::Keyword, Some(keyword))
    }

    fn expect_identifier(&mut self) -> ParseResult<String> {
        self.eat(TokenKind::Identifier, None).map(|token| token.text)
    }
}

/// Parse a meaningful-token stream with a fresh parser.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

// src/parser/cursor.rs
//! Lookahead cursor over a token sequence

use super::lexer::{tokenize, Span, Token, TokenKind};
use std::fmt;

/// A failure to parse one style mapping, pointing at the offending token
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

impl ParseError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: token.clone(),
        }
    }

    pub fn span(&self) -> Span {
        self.token.span
    }

    /// Report the error against `line` of a larger source. Byte offsets stay
    /// relative to the mapping's own line.
    pub fn at_line(mut self, line: usize) -> Self {
        self.token.span.line = line;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {})",
            self.message, self.token.span.line, self.token.span.column
        )
    }
}

impl std::error::Error for ParseError {}

pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenCursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let span = tokens.last().map_or(
                Span { start: 0, end: 0, line: 1, column: 1 },
                |last| Span {
                    start: last.span.end,
                    end: last.span.end,
                    line: last.span.line,
                    column: last.span.column + last.value.chars().count(),
                },
            );
            tokens.push(Token {
                kind: TokenKind::Eof,
                value: String::new(),
                span,
            });
        }
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(tokenize(source))
    }

    /// Kind of the current token.
    pub fn peek(&self) -> TokenKind {
        self.peek_at(0)
    }

    /// Kind of the token `offset` places ahead. Reads past the end as `Eof`.
    pub fn peek_at(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.position + offset)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    pub fn current(&self) -> &Token {
        // The sequence always ends with Eof and advance() never moves past it.
        &self.tokens[self.position]
    }

    /// Consume the current token without checking it. Stays put at `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.peek() == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    pub fn expect_value(&mut self, kind: TokenKind) -> Result<String, ParseError> {
        self.expect(kind).map(|token| token.value)
    }

    /// Consume a token of `kind` whose literal value is exactly `value`.
    pub fn expect_literal(&mut self, kind: TokenKind, value: &str) -> Result<(), ParseError> {
        let token = self.current();
        if token.kind == kind && token.value == value {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("{} '{}'", kind, value)))
        }
    }

    /// Consume an optional run of whitespace.
    pub fn skip_whitespace(&mut self) {
        if self.peek() == TokenKind::Whitespace {
            self.advance();
        }
    }

    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Eof).map(|_| ())
    }

    pub fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        ParseError::new(token, format!("Expected {}, got {}", expected, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_ahead() {
        let cursor = TokenCursor::from_source("a > b");

        assert_eq!(cursor.peek(), TokenKind::Identifier);
        assert_eq!(cursor.peek_at(1), TokenKind::Whitespace);
        assert_eq!(cursor.peek_at(2), TokenKind::GreaterThan);
        assert_eq!(cursor.peek_at(10), TokenKind::Eof);
    }

    #[test]
    fn test_expect_value() {
        let mut cursor = TokenCursor::from_source("p.Heading1");

        assert_eq!(cursor.expect_value(TokenKind::Identifier).unwrap(), "p");
        assert_eq!(cursor.expect_value(TokenKind::ClassName).unwrap(), "Heading1");
        assert!(cursor.expect_end().is_ok());
    }

    #[test]
    fn test_expect_reports_offending_token() {
        let mut cursor = TokenCursor::from_source("p [");
        cursor.advance();

        let err = cursor.expect(TokenKind::Arrow).unwrap_err();
        assert_eq!(err.token.kind, TokenKind::Whitespace);
        assert_eq!(err.token.span.column, 2);
        assert_eq!(err.message, "Expected '->', got whitespace");
    }

    #[test]
    fn test_expect_literal_checks_value() {
        let mut cursor = TokenCursor::from_source("fresh");
        assert!(cursor.expect_literal(TokenKind::Identifier, "fresh").is_ok());

        let mut cursor = TokenCursor::from_source("stale");
        let err = cursor.expect_literal(TokenKind::Identifier, "fresh").unwrap_err();
        assert_eq!(err.token.value, "stale");
        assert!(err.to_string().contains("identifier 'fresh'"));
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let mut cursor = TokenCursor::from_source("b");
        cursor.advance();
        cursor.advance();
        cursor.advance();

        assert_eq!(cursor.peek(), TokenKind::Eof);
    }
}

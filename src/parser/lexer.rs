// src/parser/lexer.rs
//! Lexical analyzer (tokenizer) for the style mapping language
//!
//! The lexer never fails: characters it does not understand become
//! [`TokenKind::Unknown`] tokens, and the parser reports them with their
//! position. Whitespace is kept as a token because the path grammar uses it
//! to spell out the descendant combinator (` > `).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Identifiers and literals
    Identifier,
    ClassName,
    String,
    Integer,

    // Punctuation
    Colon,
    Equals,
    Bang,
    Choice,
    GreaterThan,
    OpenSquareBracket,
    CloseSquareBracket,
    OpenParen,
    CloseParen,
    Arrow,

    Whitespace,

    // Special
    Unknown,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::ClassName => "class name",
            TokenKind::String => "string",
            TokenKind::Integer => "integer",
            TokenKind::Colon => "':'",
            TokenKind::Equals => "'='",
            TokenKind::Bang => "'!'",
            TokenKind::Choice => "'|'",
            TokenKind::GreaterThan => "'>'",
            TokenKind::OpenSquareBracket => "'['",
            TokenKind::CloseSquareBracket => "']'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Arrow => "'->'",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unrecognised input",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// Where a token sits in the source text.
///
/// `start..end` is a byte range; `line` and `column` are 1-based and point at
/// the first character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal value. Class names drop their leading dot; strings keep their quotes.
    pub value: String,
    pub span: Span,
}

impl Token {
    /// The exact slice of `source` this token was read from.
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.value),
            TokenKind::ClassName => write!(f, "class name '.{}'", self.value),
            TokenKind::String => write!(f, "string {}", self.value),
            TokenKind::Integer => write!(f, "integer {}", self.value),
            TokenKind::Unknown => write!(f, "unrecognised input '{}'", self.value),
            TokenKind::Whitespace | TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "'{}'", self.value),
        }
    }
}

/// Tokenize a whole source string. The result always ends with one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

struct Mark {
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn next_token(&mut self) -> Token {
        let start = self.mark();

        if self.is_at_end() {
            return self.finish(&start, TokenKind::Eof);
        }

        let ch = self.current_char();

        let kind = match ch {
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '!' => Some(TokenKind::Bang),
            '|' => Some(TokenKind::Choice),
            '>' => Some(TokenKind::GreaterThan),
            '[' => Some(TokenKind::OpenSquareBracket),
            ']' => Some(TokenKind::CloseSquareBracket),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            _ => None,
        };
        if let Some(kind) = kind {
            self.advance();
            return self.finish(&start, kind);
        }

        if ch == '-' && self.peek() == Some('>') {
            self.advance();
            self.advance();
            return self.finish(&start, TokenKind::Arrow);
        }

        if ch.is_whitespace() {
            while !self.is_at_end() && self.current_char().is_whitespace() {
                self.advance();
            }
            return self.finish(&start, TokenKind::Whitespace);
        }

        if ch == '\'' {
            return self.read_string(&start);
        }

        if ch == '.' && self.peek().is_some_and(is_identifier_start) {
            self.advance();
            self.read_identifier_chars();
            let mut token = self.finish(&start, TokenKind::ClassName);
            token.value.remove(0);
            return token;
        }

        if ch.is_ascii_digit() {
            while !self.is_at_end() && self.current_char().is_ascii_digit() {
                self.advance();
            }
            return self.finish(&start, TokenKind::Integer);
        }

        if is_identifier_start(ch) {
            self.read_identifier_chars();
            return self.finish(&start, TokenKind::Identifier);
        }

        self.advance();
        self.finish(&start, TokenKind::Unknown)
    }

    fn read_identifier_chars(&mut self) {
        while !self.is_at_end() && is_identifier_char(self.current_char()) {
            // A hyphen followed by '>' starts an arrow.
            if self.current_char() == '-' && self.peek() == Some('>') {
                break;
            }
            self.advance();
        }
    }

    // No escape sequences: the string ends at the next single quote.
    // An unterminated string swallows the rest of the input as `Unknown`.
    fn read_string(&mut self, start: &Mark) -> Token {
        self.advance(); // consume opening '

        while !self.is_at_end() && self.current_char() != '\'' {
            self.advance();
        }

        if self.is_at_end() {
            return self.finish(start, TokenKind::Unknown);
        }

        self.advance(); // consume closing '
        self.finish(start, TokenKind::String)
    }

    fn finish(&self, start: &Mark, kind: TokenKind) -> Token {
        Token {
            kind,
            value: self.input[start.position..self.position].iter().collect(),
            span: Span {
                start: start.offset,
                end: self.offset,
                line: start.line,
                column: start.column,
            },
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            let ch = self.current_char();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += ch.len_utf8();
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            kinds(": = ! | > [ ] ( ) ->"),
            vec![
                TokenKind::Colon,
                TokenKind::Whitespace,
                TokenKind::Equals,
                TokenKind::Whitespace,
                TokenKind::Bang,
                TokenKind::Whitespace,
                TokenKind::Choice,
                TokenKind::Whitespace,
                TokenKind::GreaterThan,
                TokenKind::Whitespace,
                TokenKind::OpenSquareBracket,
                TokenKind::Whitespace,
                TokenKind::CloseSquareBracket,
                TokenKind::Whitespace,
                TokenKind::OpenParen,
                TokenKind::Whitespace,
                TokenKind::CloseParen,
                TokenKind::Whitespace,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers_allow_hyphens() {
        let tokens = tokenize("comment-reference ordered-list h1");

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value, "comment-reference");
        assert_eq!(tokens[2].value, "ordered-list");
        assert_eq!(tokens[4].value, "h1");
    }

    #[test]
    fn test_class_name_drops_dot() {
        let tokens = tokenize("p.Heading1");

        assert_eq!(tokens[0].value, "p");
        assert_eq!(tokens[1].kind, TokenKind::ClassName);
        assert_eq!(tokens[1].value, "Heading1");
        assert_eq!(tokens[1].source_text("p.Heading1"), ".Heading1");
    }

    #[test]
    fn test_strings_keep_quotes() {
        let tokens = tokenize("'Heading 1'");

        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, "'Heading 1'");
    }

    #[test]
    fn test_integers() {
        let tokens = tokenize("(12)");

        assert_eq!(tokens[1].kind, TokenKind::Integer);
        assert_eq!(tokens[1].value, "12");
    }

    #[test]
    fn test_arrow_is_not_an_identifier() {
        assert_eq!(
            kinds("b->strong"),
            vec![
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = tokenize("p % .");

        assert_eq!(tokens[2].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].value, "%");
        assert_eq!(tokens[4].kind, TokenKind::Unknown);
        assert_eq!(tokens[4].value, ".");
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize("[style-name='Quote]");

        assert_eq!(tokens[3].kind, TokenKind::Unknown);
        assert_eq!(tokens[3].value, "'Quote]");
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("p\n  -> h1");

        let arrow = &tokens[2];
        assert_eq!(arrow.kind, TokenKind::Arrow);
        assert_eq!(arrow.span.line, 2);
        assert_eq!(arrow.span.column, 3);
        assert_eq!(arrow.span.start, 4);
    }

    #[test]
    fn test_multibyte_offsets() {
        let source = "p[style-name='Überschrift'] -> h1";
        let tokens = tokenize(source);

        for token in &tokens {
            assert_eq!(token.source_text(source), token.value);
        }
    }

    #[test]
    fn test_ends_with_single_eof() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}

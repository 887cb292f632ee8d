// src/parser/document_matcher.rs
//! Parser for the left-hand side of a style mapping

use super::cursor::{ParseError, TokenCursor};
use super::lexer::TokenKind;
use crate::document::NumberingLevel;
use crate::styles::{DocumentMatcher, ParagraphMatcher, RunMatcher};

pub fn parse_document_matcher(tokens: &mut TokenCursor) -> Result<DocumentMatcher, ParseError> {
    let identifier = tokens.expect(TokenKind::Identifier)?;

    match identifier.value.as_str() {
        "p" => Ok(DocumentMatcher::Paragraph(parse_paragraph_matcher(tokens)?)),
        "r" => Ok(DocumentMatcher::Run(parse_run_matcher(tokens)?)),
        "b" => Ok(DocumentMatcher::Bold),
        "i" => Ok(DocumentMatcher::Italic),
        "u" => Ok(DocumentMatcher::Underline),
        "strike" => Ok(DocumentMatcher::Strikethrough),
        "comment-reference" => Ok(DocumentMatcher::CommentReference),
        _ => Err(ParseError::new(
            &identifier,
            format!("Unrecognised document element: {}", identifier),
        )),
    }
}

pub fn parse_paragraph_matcher(tokens: &mut TokenCursor) -> Result<ParagraphMatcher, ParseError> {
    let style_id = parse_style_id(tokens);
    let style_name = parse_style_name(tokens)?;
    let numbering = parse_numbering(tokens)?;

    Ok(ParagraphMatcher {
        style_id,
        style_name,
        numbering,
    })
}

pub fn parse_run_matcher(tokens: &mut TokenCursor) -> Result<RunMatcher, ParseError> {
    let style_id = parse_style_id(tokens);
    let style_name = parse_style_name(tokens)?;

    Ok(RunMatcher {
        style_id,
        style_name,
    })
}

fn parse_style_id(tokens: &mut TokenCursor) -> Option<String> {
    if tokens.peek() == TokenKind::ClassName {
        Some(tokens.advance().value)
    } else {
        None
    }
}

fn parse_style_name(tokens: &mut TokenCursor) -> Result<Option<String>, ParseError> {
    if tokens.peek() != TokenKind::OpenSquareBracket {
        return Ok(None);
    }

    tokens.advance();
    tokens.expect_literal(TokenKind::Identifier, "style-name")?;
    tokens.expect(TokenKind::Equals)?;
    let value = tokens.expect_value(TokenKind::String)?;
    tokens.expect(TokenKind::CloseSquareBracket)?;

    // The lexer only produces strings that open and close with a quote.
    Ok(Some(value[1..value.len() - 1].to_string()))
}

/// Parse `:ordered-list(n)` or `:unordered-list(n)`, if present.
///
/// Levels are written 1-based and stored 0-based.
pub fn parse_numbering(tokens: &mut TokenCursor) -> Result<Option<NumberingLevel>, ParseError> {
    if tokens.peek() != TokenKind::Colon {
        return Ok(None);
    }

    tokens.advance();
    let is_ordered = parse_list_type(tokens)?;
    tokens.expect(TokenKind::OpenParen)?;

    let level = tokens.expect(TokenKind::Integer)?;
    let level_index = match level.value.parse::<u32>() {
        Ok(0) => {
            return Err(ParseError::new(&level, "List level must be at least 1"));
        }
        Ok(n) => n - 1,
        Err(_) => {
            return Err(ParseError::new(
                &level,
                format!("List level is out of range: {}", level.value),
            ));
        }
    };

    tokens.expect(TokenKind::CloseParen)?;

    Ok(Some(NumberingLevel::new(level_index, is_ordered)))
}

fn parse_list_type(tokens: &mut TokenCursor) -> Result<bool, ParseError> {
    let list_type = tokens.expect(TokenKind::Identifier)?;

    match list_type.value.as_str() {
        "ordered-list" => Ok(true),
        "unordered-list" => Ok(false),
        _ => Err(ParseError::new(
            &list_type,
            format!("Unrecognised list type: {}", list_type),
        )),
    }
}

// src/parser/html_path.rs
//! Parser for the right-hand side of a style mapping

use super::cursor::{ParseError, TokenCursor};
use super::lexer::TokenKind;
use crate::styles::{HtmlPath, HtmlPathElement};

pub fn parse_html_path(tokens: &mut TokenCursor) -> Result<HtmlPath, ParseError> {
    if tokens.peek() == TokenKind::Bang {
        tokens.advance();
        return Ok(HtmlPath::Ignore);
    }

    let mut elements = Vec::new();

    if tokens.peek() == TokenKind::Identifier {
        elements.push(parse_element(tokens)?);

        // Elements are separated by exactly `<whitespace> > <whitespace>`.
        while tokens.peek() == TokenKind::Whitespace && tokens.peek_at(1) == TokenKind::GreaterThan
        {
            tokens.advance();
            tokens.advance();
            tokens.expect(TokenKind::Whitespace)?;
            elements.push(parse_element(tokens)?);
        }
    }

    Ok(HtmlPath::Elements(elements))
}

fn parse_element(tokens: &mut TokenCursor) -> Result<HtmlPathElement, ParseError> {
    let tag_names = parse_tag_names(tokens)?;
    let class_names = parse_class_names(tokens);
    let is_fresh = parse_is_fresh(tokens)?;

    Ok(HtmlPathElement::new(tag_names, !is_fresh).with_classes(&class_names))
}

fn parse_tag_names(tokens: &mut TokenCursor) -> Result<Vec<String>, ParseError> {
    let mut tag_names = vec![tokens.expect_value(TokenKind::Identifier)?];

    while tokens.peek() == TokenKind::Choice {
        tokens.advance();
        tag_names.push(tokens.expect_value(TokenKind::Identifier)?);
    }

    Ok(tag_names)
}

fn parse_class_names(tokens: &mut TokenCursor) -> Vec<String> {
    let mut class_names = Vec::new();

    while tokens.peek() == TokenKind::ClassName {
        class_names.push(tokens.advance().value);
    }

    class_names
}

fn parse_is_fresh(tokens: &mut TokenCursor) -> Result<bool, ParseError> {
    if tokens.peek() == TokenKind::Colon {
        tokens.advance();
        tokens.expect_literal(TokenKind::Identifier, "fresh")?;
        Ok(true)
    } else {
        Ok(false)
    }
}

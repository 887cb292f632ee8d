// src/parser/mod.rs
//! Parser for the style mapping language
//!
//! One mapping per line: `selector -> path`, e.g. `p.Heading1 -> h1:fresh`.

pub mod cursor;
pub mod document_matcher;
pub mod html_path;
pub mod lexer;

pub use cursor::{ParseError, TokenCursor};
pub use document_matcher::parse_document_matcher;
pub use html_path::parse_html_path;
pub use lexer::{tokenize, Span, Token, TokenKind};

use crate::styles::{DocumentMatcher, HtmlPath, MappingBuilder};

/// A parsed `selector -> path` pair, not yet registered anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMapping {
    pub matcher: DocumentMatcher,
    pub path: HtmlPath,
}

impl StyleMapping {
    /// Register this mapping with `builder`.
    pub fn apply<B: MappingBuilder + ?Sized>(self, builder: &mut B) {
        self.matcher.apply(builder, self.path);
    }
}

/// Parse a single style mapping.
pub fn parse_style_mapping(source: &str) -> Result<StyleMapping, ParseError> {
    let mut tokens = TokenCursor::from_source(source);

    tokens.skip_whitespace();
    let matcher = parse_document_matcher(&mut tokens)?;
    tokens.skip_whitespace();
    tokens.expect(TokenKind::Arrow)?;
    tokens.skip_whitespace();
    let path = parse_html_path(&mut tokens)?;
    tokens.skip_whitespace();
    tokens.expect_end()?;

    Ok(StyleMapping { matcher, path })
}

/// Parse a standalone HTML path such as `ul > li:fresh`.
pub fn parse_html_path_str(source: &str) -> Result<HtmlPath, ParseError> {
    let mut tokens = TokenCursor::from_source(source);
    let path = parse_html_path(&mut tokens)?;
    tokens.expect_end()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NumberingLevel;
    use crate::styles::{HtmlPathElement, ParagraphMatcher, RunMatcher};

    #[derive(Debug, PartialEq)]
    enum Call {
        Paragraph(ParagraphMatcher, HtmlPath),
        Run(RunMatcher, HtmlPath),
        Bold(HtmlPath),
        Italic(HtmlPath),
        Underline(HtmlPath),
        Strikethrough(HtmlPath),
        CommentReference(HtmlPath),
    }

    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<Call>,
    }

    impl MappingBuilder for RecordingBuilder {
        fn map_paragraph(&mut self, matcher: ParagraphMatcher, path: HtmlPath) {
            self.calls.push(Call::Paragraph(matcher, path));
        }
        fn map_run(&mut self, matcher: RunMatcher, path: HtmlPath) {
            self.calls.push(Call::Run(matcher, path));
        }
        fn bold(&mut self, path: HtmlPath) {
            self.calls.push(Call::Bold(path));
        }
        fn italic(&mut self, path: HtmlPath) {
            self.calls.push(Call::Italic(path));
        }
        fn underline(&mut self, path: HtmlPath) {
            self.calls.push(Call::Underline(path));
        }
        fn strikethrough(&mut self, path: HtmlPath) {
            self.calls.push(Call::Strikethrough(path));
        }
        fn comment_reference(&mut self, path: HtmlPath) {
            self.calls.push(Call::CommentReference(path));
        }
    }

    fn record(source: &str) -> Vec<Call> {
        let mut builder = RecordingBuilder::default();
        parse_style_mapping(source).unwrap().apply(&mut builder);
        builder.calls
    }

    #[test]
    fn test_heading_mapping() {
        let mapping = parse_style_mapping("p.Heading1 -> h1:fresh").unwrap();

        assert_eq!(
            mapping.matcher,
            DocumentMatcher::Paragraph(ParagraphMatcher {
                style_id: Some("Heading1".to_string()),
                style_name: None,
                numbering: None,
            })
        );
        assert_eq!(
            mapping.path,
            HtmlPath::Elements(vec![HtmlPathElement::new(vec!["h1".to_string()], false)])
        );
    }

    #[test]
    fn test_style_name_mapping() {
        let mapping = parse_style_mapping("p[style-name='Quote'] -> blockquote > p").unwrap();

        match &mapping.matcher {
            DocumentMatcher::Paragraph(matcher) => {
                assert_eq!(matcher.style_name.as_deref(), Some("Quote"));
            }
            other => panic!("Expected paragraph matcher, got {:?}", other),
        }

        let elements = mapping.path.elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].tag_names, vec!["blockquote"]);
        assert_eq!(elements[1].tag_names, vec!["p"]);
        assert!(elements.iter().all(|e| e.collapsible));
    }

    #[test]
    fn test_list_mapping() {
        let mapping = parse_style_mapping("p:ordered-list(1) -> ol > li").unwrap();

        match mapping.matcher {
            DocumentMatcher::Paragraph(matcher) => {
                assert_eq!(matcher.numbering, Some(NumberingLevel::new(0, true)));
            }
            other => panic!("Expected paragraph matcher, got {:?}", other),
        }
    }

    #[test]
    fn test_run_mapping_calls_map_run_once() {
        let calls = record("r.Emphasis -> em");

        assert_eq!(
            calls,
            vec![Call::Run(
                RunMatcher {
                    style_id: Some("Emphasis".to_string()),
                    style_name: None,
                },
                HtmlPath::collapsible("em"),
            )]
        );
    }

    #[test]
    fn test_bold_mapping_calls_bold_once() {
        assert_eq!(record("b -> strong"), vec![Call::Bold(HtmlPath::collapsible("strong"))]);
    }

    #[test]
    fn test_toggles_dispatch() {
        assert_eq!(record("i -> i"), vec![Call::Italic(HtmlPath::collapsible("i"))]);
        assert_eq!(record("u -> u"), vec![Call::Underline(HtmlPath::collapsible("u"))]);
        assert_eq!(record("strike -> del"), vec![Call::Strikethrough(HtmlPath::collapsible("del"))]);
        assert_eq!(record("comment-reference -> !"), vec![Call::CommentReference(HtmlPath::Ignore)]);
    }

    #[test]
    fn test_comment_reference_ignored() {
        let mapping = parse_style_mapping("comment-reference -> !").unwrap();
        assert_eq!(mapping.path, HtmlPath::Ignore);
    }

    #[test]
    fn test_unknown_element() {
        let err = parse_style_mapping("x -> span").unwrap_err();

        assert_eq!(err.token.value, "x");
        assert_eq!(err.token.span.column, 1);
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_whitespace_around_arrow_is_optional() {
        assert!(parse_style_mapping("b->strong").is_ok());
        assert!(parse_style_mapping("b  ->  strong  ").is_ok());
    }

    #[test]
    fn test_leading_whitespace_keeps_columns() {
        let err = parse_style_mapping("   y -> span").unwrap_err();
        assert_eq!(err.token.span.column, 4);
    }

    #[test]
    fn test_empty_path_after_arrow() {
        let mapping = parse_style_mapping("r[style-name='Hyperlink'] ->").unwrap();
        assert_eq!(mapping.path, HtmlPath::empty());
    }

    #[test]
    fn test_missing_arrow() {
        let err = parse_style_mapping("p.Heading1 h1").unwrap_err();
        assert_eq!(err.token.value, "h1");
    }

    #[test]
    fn test_trailing_garbage() {
        let err = parse_style_mapping("b -> strong em").unwrap_err();
        assert_eq!(err.token.value, "em");
    }

    #[test]
    fn test_standalone_path() {
        assert_eq!(parse_html_path_str("!").unwrap(), HtmlPath::Ignore);
        assert!(parse_html_path_str("ul >").is_err());
    }
}

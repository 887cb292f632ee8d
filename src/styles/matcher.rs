// src/styles/matcher.rs
//! Parsed selectors: which document elements a style mapping applies to

use super::builder::MappingBuilder;
use super::html_path::HtmlPath;
use crate::document::{NumberingLevel, Paragraph, Run, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParagraphMatcher {
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub numbering: Option<NumberingLevel>,
}

impl ParagraphMatcher {
    pub fn matches(&self, paragraph: &Paragraph) -> bool {
        matches_style(
            self.style_id.as_deref(),
            self.style_name.as_deref(),
            paragraph.style.as_ref(),
        ) && self
            .numbering
            .map_or(true, |numbering| paragraph.numbering == Some(numbering))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunMatcher {
    pub style_id: Option<String>,
    pub style_name: Option<String>,
}

impl RunMatcher {
    pub fn matches(&self, run: &Run) -> bool {
        matches_style(
            self.style_id.as_deref(),
            self.style_name.as_deref(),
            run.style.as_ref(),
        )
    }
}

// An element without a style fails any style filter.
fn matches_style(style_id: Option<&str>, style_name: Option<&str>, style: Option<&Style>) -> bool {
    let id_matches = style_id.map_or(true, |id| style.is_some_and(|s| s.style_id == id));
    let name_matches = style_name
        .map_or(true, |name| style.is_some_and(|s| s.name.as_deref() == Some(name)));
    id_matches && name_matches
}

/// The left-hand side of a style mapping.
///
/// Holding one of these is holding a deferred builder mutation: nothing is
/// registered until [`DocumentMatcher::apply`] is called with the mapping's
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentMatcher {
    Paragraph(ParagraphMatcher),
    Run(RunMatcher),
    Bold,
    Italic,
    Underline,
    Strikethrough,
    CommentReference,
}

impl DocumentMatcher {
    /// Register this matcher and `path` against `builder`. Exactly one builder
    /// call is made.
    pub fn apply<B: MappingBuilder + ?Sized>(self, builder: &mut B, path: HtmlPath) {
        match self {
            DocumentMatcher::Paragraph(matcher) => builder.map_paragraph(matcher, path),
            DocumentMatcher::Run(matcher) => builder.map_run(matcher, path),
            DocumentMatcher::Bold => builder.bold(path),
            DocumentMatcher::Italic => builder.italic(path),
            DocumentMatcher::Underline => builder.underline(path),
            DocumentMatcher::Strikethrough => builder.strikethrough(path),
            DocumentMatcher::CommentReference => builder.comment_reference(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(style: Option<Style>, numbering: Option<NumberingLevel>) -> Paragraph {
        Paragraph {
            style,
            numbering,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_empty_matcher_matches_everything() {
        let matcher = ParagraphMatcher::default();

        assert!(matcher.matches(&paragraph(None, None)));
        assert!(matcher.matches(&paragraph(Some(Style::named("Heading1", "Heading 1")), None)));
    }

    #[test]
    fn test_style_id_filter() {
        let matcher = ParagraphMatcher {
            style_id: Some("Heading1".to_string()),
            ..Default::default()
        };

        assert!(matcher.matches(&paragraph(Some(Style::new("Heading1", None)), None)));
        assert!(!matcher.matches(&paragraph(Some(Style::new("Heading2", None)), None)));
        assert!(!matcher.matches(&paragraph(None, None)));
    }

    #[test]
    fn test_style_name_filter() {
        let matcher = RunMatcher {
            style_id: None,
            style_name: Some("Strong".to_string()),
        };

        let strong = Run {
            style: Some(Style::named("StrongId", "Strong")),
            ..Default::default()
        };
        let unnamed = Run {
            style: Some(Style::new("StrongId", None)),
            ..Default::default()
        };

        assert!(matcher.matches(&strong));
        assert!(!matcher.matches(&unnamed));
        assert!(!matcher.matches(&Run::default()));
    }

    #[test]
    fn test_numbering_compares_index_and_kind() {
        let matcher = ParagraphMatcher {
            numbering: Some(NumberingLevel::ordered(0)),
            ..Default::default()
        };

        assert!(matcher.matches(&paragraph(None, Some(NumberingLevel::ordered(0)))));
        assert!(!matcher.matches(&paragraph(None, Some(NumberingLevel::unordered(0)))));
        assert!(!matcher.matches(&paragraph(None, Some(NumberingLevel::ordered(1)))));
        assert!(!matcher.matches(&paragraph(None, None)));
    }
}

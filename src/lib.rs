// src/lib.rs
//! # docx-style-map
//!
//! Style maps describe how a word-processing document's paragraphs and runs
//! become HTML. Each line of a style map is one mapping:
//!
//! ```text
//! p.Heading1 -> h1:fresh
//! p[style-name='Quote'] -> blockquote > p
//! p:unordered-list(1) -> ul > li:fresh
//! r.Emphasis -> em
//! b -> strong
//! comment-reference -> !
//! ```
//!
//! Mappings are compiled, in the order they are written, into an immutable
//! [`StyleMap`]. The first mapping that matches an element wins.
//!
//! ## Example
//!
//! ```rust
//! use docx_style_map::document::{Paragraph, Style};
//! use docx_style_map::StyleMap;
//!
//! let style_map = StyleMap::parse("p.Heading1 -> h1:fresh").unwrap();
//!
//! let paragraph = Paragraph {
//!     style: Some(Style::named("Heading1", "Heading 1")),
//!     ..Default::default()
//! };
//!
//! let path = style_map.paragraph_path(&paragraph).unwrap();
//! assert_eq!(path.elements()[0].tag_name(), "h1");
//! ```

pub mod config;
pub mod document;
pub mod docx;
pub mod parser;
pub mod results;
pub mod styles;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use config::{InvalidRulePolicy, StyleMapOptions};
pub use document::{DocumentElement, NumberingLevel, Style};
pub use parser::{parse_style_mapping, ParseError, StyleMapping};
pub use results::{Diagnosed, Warning};
pub use styles::{HtmlPath, HtmlPathElement, ParagraphRule, RunRule, StyleMapBuilder};

use document::{Paragraph, Run};
use styles::DEFAULT_STYLE_MAP;

/// Errors that can occur while compiling or loading a style map
#[derive(Error, Debug)]
pub enum StyleMapError {
    #[error("Invalid style mapping: {source}")]
    InvalidRule {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A compiled, immutable set of style mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    pub(crate) paragraph_rules: Vec<ParagraphRule>,
    pub(crate) run_rules: Vec<RunRule>,
    pub(crate) bold: HtmlPath,
    pub(crate) italic: HtmlPath,
    pub(crate) underline: HtmlPath,
    pub(crate) strikethrough: HtmlPath,
    pub(crate) comment_reference: HtmlPath,
}

impl StyleMap {
    /// Compile style map text, failing on the first invalid line.
    ///
    /// Blank lines and lines starting with `#` are skipped. No built-in
    /// mappings are added; see [`StyleMap::compile`] for that.
    pub fn parse(source: &str) -> Result<Self, StyleMapError> {
        let mut builder = StyleMapBuilder::new();
        register_lines(&mut builder, source, InvalidRulePolicy::Abort, &mut Vec::new())?;
        Ok(builder.build())
    }

    /// Compile style map text according to `options`.
    ///
    /// With [`InvalidRulePolicy::Skip`], invalid lines are left out and
    /// reported as warnings. Built-in mappings, when enabled, come after the
    /// user's and so only apply where none of the user's match.
    pub fn compile(
        source: &str,
        options: &StyleMapOptions,
    ) -> Result<Diagnosed<Self>, StyleMapError> {
        let mut builder = StyleMapBuilder::new();
        let mut warnings = Vec::new();

        register_lines(&mut builder, source, options.on_invalid_rule, &mut warnings)?;
        if options.include_default_style_map {
            register_lines(
                &mut builder,
                DEFAULT_STYLE_MAP,
                InvalidRulePolicy::Abort,
                &mut warnings,
            )?;
        }

        tracing::debug!(
            rules = builder.rule_count(),
            skipped = warnings.len(),
            "compiled style map"
        );

        Ok(Diagnosed::new(builder.build(), warnings))
    }

    /// The built-in mappings on their own.
    pub fn default_style_map() -> Self {
        let mut builder = StyleMapBuilder::new();
        let mut skipped = Vec::new();
        // Skipped lines are logged by register_lines; the built-in text has none.
        let _ = register_lines(
            &mut builder,
            DEFAULT_STYLE_MAP,
            InvalidRulePolicy::Skip,
            &mut skipped,
        );
        builder.build()
    }

    /// Check style map syntax without keeping the result.
    pub fn validate(source: &str) -> Result<(), StyleMapError> {
        Self::parse(source).map(|_| ())
    }

    /// Path of the first paragraph mapping that matches `paragraph`.
    pub fn paragraph_path(&self, paragraph: &Paragraph) -> Option<&HtmlPath> {
        self.paragraph_rules
            .iter()
            .find(|rule| rule.matcher.matches(paragraph))
            .map(|rule| &rule.path)
    }

    /// Path of the first run mapping that matches `run`.
    pub fn run_path(&self, run: &Run) -> Option<&HtmlPath> {
        self.run_rules
            .iter()
            .find(|rule| rule.matcher.matches(run))
            .map(|rule| &rule.path)
    }

    /// Path for any element that style mappings can select.
    pub fn element_path(&self, element: &DocumentElement) -> Option<&HtmlPath> {
        match element {
            DocumentElement::Paragraph(paragraph) => self.paragraph_path(paragraph),
            DocumentElement::Run(run) => self.run_path(run),
            DocumentElement::Text(_)
            | DocumentElement::Tab
            | DocumentElement::Table(_)
            | DocumentElement::TableRow(_)
            | DocumentElement::TableCell(_) => None,
        }
    }

    pub fn bold_path(&self) -> &HtmlPath {
        &self.bold
    }

    pub fn italic_path(&self) -> &HtmlPath {
        &self.italic
    }

    pub fn underline_path(&self) -> &HtmlPath {
        &self.underline
    }

    pub fn strikethrough_path(&self) -> &HtmlPath {
        &self.strikethrough
    }

    pub fn comment_reference_path(&self) -> &HtmlPath {
        &self.comment_reference
    }

    pub fn paragraph_rules(&self) -> &[ParagraphRule] {
        &self.paragraph_rules
    }

    pub fn run_rules(&self) -> &[RunRule] {
        &self.run_rules
    }

    /// Load a style map previously saved with [`StyleMap::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, StyleMapError> {
        bincode::deserialize(data).map_err(|e| StyleMapError::Serialization(e.to_string()))
    }

    /// Serialize the compiled style map for caching.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StyleMapError> {
        bincode::serialize(self).map_err(|e| StyleMapError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, StyleMapError> {
        serde_json::to_string_pretty(self).map_err(|e| StyleMapError::Serialization(e.to_string()))
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        StyleMapBuilder::new().build()
    }
}

fn register_lines(
    builder: &mut StyleMapBuilder,
    source: &str,
    policy: InvalidRulePolicy,
    warnings: &mut Vec<Warning>,
) -> Result<(), StyleMapError> {
    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_style_mapping(line) {
            Ok(mapping) => mapping.apply(builder),
            Err(err) => {
                let err = err.at_line(index + 1);
                match policy {
                    InvalidRulePolicy::Abort => {
                        return Err(StyleMapError::InvalidRule {
                            line: index + 1,
                            source: err,
                        });
                    }
                    InvalidRulePolicy::Skip => {
                        tracing::warn!(line = index + 1, error = %err, "skipping style mapping");
                        warnings.push(Warning::new(format!(
                            "Did not understand this style mapping, so ignored it: {}\n{}",
                            trimmed, err
                        )));
                    }
                }
            }
        }
    }
    Ok(())
}

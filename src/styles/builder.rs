// src/styles/builder.rs
//! Accumulates parsed style mappings into a [`StyleMap`](crate::StyleMap)

use super::html_path::HtmlPath;
use super::matcher::{ParagraphMatcher, RunMatcher};
use crate::StyleMap;
use serde::{Deserialize, Serialize};

/// Receiver for parsed style mappings.
///
/// The parser calls exactly one of these per mapping, in the order the
/// mappings were written.
pub trait MappingBuilder {
    fn map_paragraph(&mut self, matcher: ParagraphMatcher, path: HtmlPath);
    fn map_run(&mut self, matcher: RunMatcher, path: HtmlPath);
    fn bold(&mut self, path: HtmlPath);
    fn italic(&mut self, path: HtmlPath);
    fn underline(&mut self, path: HtmlPath);
    fn strikethrough(&mut self, path: HtmlPath);
    fn comment_reference(&mut self, path: HtmlPath);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphRule {
    pub matcher: ParagraphMatcher,
    pub path: HtmlPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRule {
    pub matcher: RunMatcher,
    pub path: HtmlPath,
}

#[derive(Debug, Clone, Default)]
struct TogglePaths {
    bold: Option<HtmlPath>,
    italic: Option<HtmlPath>,
    underline: Option<HtmlPath>,
    strikethrough: Option<HtmlPath>,
    comment_reference: Option<HtmlPath>,
}

#[derive(Debug, Clone, Default)]
pub struct StyleMapBuilder {
    paragraph_rules: Vec<ParagraphRule>,
    run_rules: Vec<RunRule>,
    toggles: TogglePaths,
}

impl StyleMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule_count(&self) -> usize {
        let toggles = [
            &self.toggles.bold,
            &self.toggles.italic,
            &self.toggles.underline,
            &self.toggles.strikethrough,
            &self.toggles.comment_reference,
        ];
        self.paragraph_rules.len()
            + self.run_rules.len()
            + toggles.iter().filter(|path| path.is_some()).count()
    }

    /// Freeze the registered rules. Toggles nobody configured get their
    /// default paths: `strong`, `em`, no wrapper for underline, `s`, and
    /// ignore for comment references.
    pub fn build(self) -> StyleMap {
        let toggles = self.toggles;
        StyleMap {
            paragraph_rules: self.paragraph_rules,
            run_rules: self.run_rules,
            bold: toggles.bold.unwrap_or_else(|| HtmlPath::collapsible("strong")),
            italic: toggles.italic.unwrap_or_else(|| HtmlPath::collapsible("em")),
            underline: toggles.underline.unwrap_or_else(HtmlPath::empty),
            strikethrough: toggles
                .strikethrough
                .unwrap_or_else(|| HtmlPath::collapsible("s")),
            comment_reference: toggles.comment_reference.unwrap_or(HtmlPath::Ignore),
        }
    }
}

// The first registration of a toggle wins, in line with how paragraph and
// run rules are resolved.
fn register(slot: &mut Option<HtmlPath>, path: HtmlPath) {
    if slot.is_none() {
        *slot = Some(path);
    }
}

impl MappingBuilder for StyleMapBuilder {
    fn map_paragraph(&mut self, matcher: ParagraphMatcher, path: HtmlPath) {
        self.paragraph_rules.push(ParagraphRule { matcher, path });
    }

    fn map_run(&mut self, matcher: RunMatcher, path: HtmlPath) {
        self.run_rules.push(RunRule { matcher, path });
    }

    fn bold(&mut self, path: HtmlPath) {
        register(&mut self.toggles.bold, path);
    }

    fn italic(&mut self, path: HtmlPath) {
        register(&mut self.toggles.italic, path);
    }

    fn underline(&mut self, path: HtmlPath) {
        register(&mut self.toggles.underline, path);
    }

    fn strikethrough(&mut self, path: HtmlPath) {
        register(&mut self.toggles.strikethrough, path);
    }

    fn comment_reference(&mut self, path: HtmlPath) {
        register(&mut self.toggles.comment_reference, path);
    }
}

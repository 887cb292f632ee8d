// src/document.rs
//! Typed element tree produced by the document reader
//!
//! Style mappings are matched against these nodes: paragraphs by their style
//! and numbering, runs by their style.

use serde::{Deserialize, Serialize};

/// A resolved paragraph or character style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub style_id: String,
    pub name: Option<String>,
}

impl Style {
    pub fn new(style_id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            style_id: style_id.into(),
            name,
        }
    }

    pub fn named(style_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(style_id, Some(name.into()))
    }
}

/// A list nesting depth (0-based) plus whether the list is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberingLevel {
    pub level_index: u32,
    pub is_ordered: bool,
}

impl NumberingLevel {
    pub fn new(level_index: u32, is_ordered: bool) -> Self {
        Self {
            level_index,
            is_ordered,
        }
    }

    pub fn ordered(level_index: u32) -> Self {
        Self::new(level_index, true)
    }

    pub fn unordered(level_index: u32) -> Self {
        Self::new(level_index, false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement {
    Paragraph(Paragraph),
    Run(Run),
    Text(Text),
    Tab,
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
}

impl DocumentElement {
    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[DocumentElement] {
        match self {
            DocumentElement::Paragraph(paragraph) => &paragraph.children,
            DocumentElement::Run(run) => &run.children,
            DocumentElement::Table(table) => &table.children,
            DocumentElement::TableRow(row) => &row.children,
            DocumentElement::TableCell(cell) => &cell.children,
            DocumentElement::Text(_) | DocumentElement::Tab => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub style: Option<Style>,
    pub numbering: Option<NumberingLevel>,
    pub children: Vec<DocumentElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Run {
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub is_strikethrough: bool,
    pub style: Option<Style>,
    pub children: Vec<DocumentElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub children: Vec<DocumentElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    pub children: Vec<DocumentElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableCell {
    pub children: Vec<DocumentElement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let element = DocumentElement::Text(Text::new("hi"));
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"text\""));
        assert!(json.contains("hi"));
    }

    #[test]
    fn test_children() {
        let table = DocumentElement::Table(Table {
            children: vec![DocumentElement::TableRow(TableRow::default())],
        });

        assert_eq!(table.children().len(), 1);
        assert!(DocumentElement::Tab.children().is_empty());
    }
}

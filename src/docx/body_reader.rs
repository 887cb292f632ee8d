// src/docx/body_reader.rs
//! Reads document body markup into the typed element tree
//!
//! Reading never fails. Unknown markup reads as nothing, and references to
//! undefined styles read as placeholder styles plus a warning.

use super::numbering::Numbering;
use super::styles::Styles;
use super::xml::{XmlElement, XmlNode};
use crate::document::{
    DocumentElement, NumberingLevel, Paragraph, Run, Style, Table, TableCell, TableRow, Text,
};
use crate::results::{Diagnosed, Warning};

pub type ReadResult = Diagnosed<Vec<DocumentElement>>;

fn success(element: DocumentElement) -> ReadResult {
    Diagnosed::success(vec![element])
}

pub struct BodyXmlReader<'a> {
    styles: &'a Styles,
    numbering: &'a Numbering,
}

impl<'a> BodyXmlReader<'a> {
    pub fn new(styles: &'a Styles, numbering: &'a Numbering) -> Self {
        Self { styles, numbering }
    }

    pub fn read_element(&self, element: &XmlElement) -> ReadResult {
        match element.name.as_str() {
            "w:t" => success(DocumentElement::Text(Text::new(element.inner_text()))),
            "w:r" => self.read_run(element),
            "w:p" => self.read_paragraph(element),

            "w:tab" => success(DocumentElement::Tab),

            "w:tbl" => self
                .read_elements(&element.children)
                .map(|children| vec![DocumentElement::Table(Table { children })]),
            "w:tr" => self
                .read_elements(&element.children)
                .map(|children| vec![DocumentElement::TableRow(TableRow { children })]),
            "w:tc" => self
                .read_elements(&element.children)
                .map(|children| vec![DocumentElement::TableCell(TableCell { children })]),

            // Properties are read by their parent run or paragraph.
            "w:pPr" | "w:rPr" => ReadResult::default(),

            name => {
                tracing::trace!(element = name, "skipping unrecognised element");
                ReadResult::default()
            }
        }
    }

    /// Read the element children of `nodes`, concatenating results in order.
    /// Text nodes between elements are skipped.
    pub fn read_elements(&self, nodes: &[XmlNode]) -> ReadResult {
        nodes
            .iter()
            .filter_map(|node| match node {
                XmlNode::Element(element) => Some(self.read_element(element)),
                XmlNode::Text(_) => None,
            })
            .collect()
    }

    fn read_run(&self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child("w:rPr");
        let has = |name: &str| properties.is_some_and(|p| p.has_child(name));

        let is_bold = has("w:b");
        let is_italic = has("w:i");
        let is_underline = has("w:u");
        let is_strikethrough = has("w:strike");

        self.read_run_style(properties)
            .combine(self.read_elements(&element.children), |style, children| {
                vec![DocumentElement::Run(Run {
                    is_bold,
                    is_italic,
                    is_underline,
                    is_strikethrough,
                    style,
                    children,
                })]
            })
    }

    fn read_paragraph(&self, element: &XmlElement) -> ReadResult {
        let properties = element.find_child("w:pPr");
        let numbering = self.read_numbering(properties);

        self.read_paragraph_style(properties)
            .combine(self.read_elements(&element.children), |style, children| {
                vec![DocumentElement::Paragraph(Paragraph {
                    style,
                    numbering,
                    children,
                })]
            })
    }

    fn read_run_style(&self, properties: Option<&XmlElement>) -> Diagnosed<Option<Style>> {
        read_style(properties, "w:rStyle", "Run", |id| {
            self.styles.find_character_style_by_id(id)
        })
    }

    fn read_paragraph_style(&self, properties: Option<&XmlElement>) -> Diagnosed<Option<Style>> {
        read_style(properties, "w:pStyle", "Paragraph", |id| {
            self.styles.find_paragraph_style_by_id(id)
        })
    }

    fn read_numbering(&self, properties: Option<&XmlElement>) -> Option<NumberingLevel> {
        let numbering_properties = properties?.find_child("w:numPr");
        let num_id = read_val(numbering_properties, "w:numId")?;
        let level = read_val(numbering_properties, "w:ilvl")?;
        self.numbering.find_level(num_id, level)
    }
}

fn read_style<'s>(
    properties: Option<&XmlElement>,
    style_tag_name: &str,
    style_type: &str,
    find_style_by_id: impl FnOnce(&str) -> Option<&'s Style>,
) -> Diagnosed<Option<Style>> {
    match read_val(properties, style_tag_name) {
        None => Diagnosed::success(None),
        Some(style_id) => match find_style_by_id(style_id) {
            Some(style) => Diagnosed::success(Some(style.clone())),
            None => Diagnosed::with_warning(
                Some(Style::new(style_id, None)),
                Warning::new(format!(
                    "{} style with ID {} was referenced but not defined in the document",
                    style_type, style_id
                )),
            ),
        },
    }
}

fn read_val<'x>(element: Option<&'x XmlElement>, name: &str) -> Option<&'x str> {
    element?.find_child(name)?.attribute("w:val")
}

// src/docx/xml.rs
//! Minimal in-memory XML tree consumed by the body reader
//!
//! Producing this tree from the package bytes is the job of the archive
//! layer; the reader only walks it.

use ahash::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XmlElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First child element called `name`.
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.find_child(name).is_some()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants, in document order.
    pub fn inner_text(&self) -> String {
        let mut text = String::new();
        collect_text(&self.children, &mut text);
        text
    }
}

fn collect_text(nodes: &[XmlNode], out: &mut String) {
    for node in nodes {
        match node {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_child() {
        let element = XmlElement::new("w:pPr")
            .with_text("ignored")
            .with_child(XmlElement::new("w:pStyle").with_attribute("w:val", "Heading1"));

        let style = element.find_child("w:pStyle").unwrap();
        assert_eq!(style.attribute("w:val"), Some("Heading1"));
        assert!(element.has_child("w:pStyle"));
        assert!(!element.has_child("w:numPr"));
    }

    #[test]
    fn test_inner_text() {
        let element = XmlElement::new("w:t")
            .with_text("Hello, ")
            .with_child(XmlElement::new("x").with_text("world"));

        assert_eq!(element.inner_text(), "Hello, world");
    }
}

// src/styles/html_path.rs
//! Target HTML structure for a matched document element

use ahash::HashMap;
use serde::{Deserialize, Serialize};

/// What to emit for a matched element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HtmlPath {
    /// Drop the element and everything inside it.
    Ignore,
    /// Wrap the element's content in these elements, outermost first.
    /// An empty list emits the content with no wrapper.
    Elements(Vec<HtmlPathElement>),
}

impl HtmlPath {
    pub fn empty() -> Self {
        HtmlPath::Elements(Vec::new())
    }

    /// A single collapsible element, e.g. the default `strong` for bold.
    pub fn collapsible(tag_name: impl Into<String>) -> Self {
        HtmlPath::Elements(vec![HtmlPathElement::new(vec![tag_name.into()], true)])
    }

    pub fn fresh(tag_name: impl Into<String>) -> Self {
        HtmlPath::Elements(vec![HtmlPathElement::new(vec![tag_name.into()], false)])
    }

    pub fn is_ignore(&self) -> bool {
        matches!(self, HtmlPath::Ignore)
    }

    pub fn elements(&self) -> &[HtmlPathElement] {
        match self {
            HtmlPath::Ignore => &[],
            HtmlPath::Elements(elements) => elements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPathElement {
    /// Alternatives in written order; the emitter picks one. Never empty.
    pub tag_names: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Whether the emitter may merge this element with an identical
    /// preceding sibling. `false` for elements written with `:fresh`.
    pub collapsible: bool,
}

impl HtmlPathElement {
    pub fn new(tag_names: Vec<String>, collapsible: bool) -> Self {
        debug_assert!(!tag_names.is_empty(), "path element without tag names");
        Self {
            tag_names,
            attributes: HashMap::default(),
            collapsible,
        }
    }

    /// Set the `class` attribute from class names, space-joined in order.
    /// No class names leaves the attributes untouched.
    pub fn with_classes(mut self, class_names: &[String]) -> Self {
        if !class_names.is_empty() {
            self.attributes
                .insert("class".to_string(), class_names.join(" "));
        }
        self
    }

    /// The first alternative, used when the emitter has no better choice.
    pub fn tag_name(&self) -> &str {
        &self.tag_names[0]
    }

    pub fn class(&self) -> Option<&str> {
        self.attributes.get("class").map(String::as_str)
    }
}

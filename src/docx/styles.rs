// src/docx/styles.rs
//! Style definitions a document body can refer to

use crate::document::Style;
use ahash::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Styles {
    paragraph_styles: HashMap<String, Style>,
    character_styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paragraph_style(mut self, style: Style) -> Self {
        self.paragraph_styles.insert(style.style_id.clone(), style);
        self
    }

    pub fn with_character_style(mut self, style: Style) -> Self {
        self.character_styles.insert(style.style_id.clone(), style);
        self
    }

    pub fn find_paragraph_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.paragraph_styles.get(style_id)
    }

    pub fn find_character_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.character_styles.get(style_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_and_character_styles_are_separate() {
        let styles = Styles::new()
            .with_paragraph_style(Style::named("Heading1", "Heading 1"))
            .with_character_style(Style::named("Emphasis", "Emphasis"));

        assert!(styles.find_paragraph_style_by_id("Heading1").is_some());
        assert!(styles.find_character_style_by_id("Heading1").is_none());
        assert!(styles.find_character_style_by_id("Emphasis").is_some());
    }
}

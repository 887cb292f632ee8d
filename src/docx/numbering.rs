// src/docx/numbering.rs
//! List numbering definitions, keyed by numbering id and level

use crate::document::NumberingLevel;
use ahash::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Numbering {
    levels: HashMap<String, HashMap<u32, NumberingLevel>>,
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, num_id: impl Into<String>, level_index: u32, is_ordered: bool) -> Self {
        self.levels
            .entry(num_id.into())
            .or_default()
            .insert(level_index, NumberingLevel::new(level_index, is_ordered));
        self
    }

    /// Look up a level from the raw `w:numId` and `w:ilvl` attribute values.
    /// A level that is not a non-negative integer finds nothing.
    pub fn find_level(&self, num_id: &str, level: &str) -> Option<NumberingLevel> {
        let level_index = level.trim().parse::<u32>().ok()?;
        self.levels.get(num_id)?.get(&level_index).copied()
    }
}

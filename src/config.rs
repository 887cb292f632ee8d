// src/config.rs
//! Options controlling how style map text is compiled

use crate::StyleMapError;
use serde::{Deserialize, Serialize};

/// What to do with a line that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRulePolicy {
    /// Fail the whole compilation.
    #[default]
    Abort,
    /// Leave the line out and report it as a warning.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleMapOptions {
    /// Append the built-in mappings after the user's own.
    pub include_default_style_map: bool,
    pub on_invalid_rule: InvalidRulePolicy,
}

impl Default for StyleMapOptions {
    fn default() -> Self {
        Self {
            include_default_style_map: true,
            on_invalid_rule: InvalidRulePolicy::Abort,
        }
    }
}

impl StyleMapOptions {
    /// Options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleMapError> {
        serde_json::from_str(json).map_err(|e| StyleMapError::Config(e.to_string()))
    }

    pub fn without_defaults(mut self) -> Self {
        self.include_default_style_map = false;
        self
    }

    pub fn skip_invalid_rules(mut self) -> Self {
        self.on_invalid_rule = InvalidRulePolicy::Skip;
        self
    }
}

// src/styles/mod.rs
//! Style map data model
//!
//! Matchers (the left-hand side of a mapping), HTML paths (the right-hand
//! side), and the builder that collects them in source order.

pub mod builder;
pub mod defaults;
pub mod html_path;
pub mod matcher;

pub use builder::{MappingBuilder, ParagraphRule, RunRule, StyleMapBuilder};
pub use defaults::DEFAULT_STYLE_MAP;
pub use html_path::{HtmlPath, HtmlPathElement};
pub use matcher::{DocumentMatcher, ParagraphMatcher, RunMatcher};

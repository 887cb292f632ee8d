// src/docx/mod.rs
//! Document body reader
//!
//! Turns body markup into [`DocumentElement`](crate::document::DocumentElement)s,
//! resolving style and numbering references against injected lookup tables.

pub mod body_reader;
pub mod numbering;
pub mod styles;
pub mod xml;

pub use body_reader::{BodyXmlReader, ReadResult};
pub use numbering::Numbering;
pub use styles::Styles;
pub use xml::{XmlElement, XmlNode};

// demos/read_document.rs
//! Read a small document body and look up the HTML path of each element

use docx_style_map::document::DocumentElement;
use docx_style_map::docx::{BodyXmlReader, Numbering, Styles, XmlElement, XmlNode};
use docx_style_map::{Style, StyleMap, StyleMapOptions};

fn val(name: &str, value: &str) -> XmlElement {
    XmlElement::new(name).with_attribute("w:val", value)
}

fn paragraph(style_id: Option<&str>, text: &str) -> XmlElement {
    let mut properties = XmlElement::new("w:pPr");
    if let Some(style_id) = style_id {
        properties = properties.with_child(val("w:pStyle", style_id));
    }
    XmlElement::new("w:p")
        .with_child(properties)
        .with_child(XmlElement::new("w:r").with_child(XmlElement::new("w:t").with_text(text)))
}

fn print_tree(style_map: &StyleMap, elements: &[DocumentElement], depth: usize) {
    for element in elements {
        let label = match element {
            DocumentElement::Paragraph(_) => "paragraph",
            DocumentElement::Run(_) => "run",
            DocumentElement::Text(text) => text.value.as_str(),
            DocumentElement::Tab => "tab",
            DocumentElement::Table(_) => "table",
            DocumentElement::TableRow(_) => "row",
            DocumentElement::TableCell(_) => "cell",
        };
        let path = style_map
            .element_path(element)
            .map(|path| format!("{:?}", path))
            .unwrap_or_default();
        println!("{}{} {}", "  ".repeat(depth), label, path);
        print_tree(style_map, element.children(), depth + 1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let styles = Styles::new().with_paragraph_style(Style::named("Heading1", "Heading 1"));
    let numbering = Numbering::new().with_level("1", 0, true);

    let list_item = XmlElement::new("w:p")
        .with_child(
            XmlElement::new("w:pPr").with_child(
                XmlElement::new("w:numPr")
                    .with_child(val("w:numId", "1"))
                    .with_child(val("w:ilvl", "0")),
            ),
        )
        .with_child(XmlElement::new("w:r").with_child(XmlElement::new("w:t").with_text("First")));

    let body = vec![
        XmlNode::Element(paragraph(Some("Heading1"), "Introduction")),
        XmlNode::Element(paragraph(Some("Sidebar"), "Undefined style")),
        XmlNode::Element(list_item),
        XmlNode::Element(XmlElement::new("w:bookmarkStart")),
    ];

    let reader = BodyXmlReader::new(&styles, &numbering);
    let (elements, warnings) = reader.read_elements(&body).into_parts();

    for warning in &warnings {
        println!("warning: {}", warning);
    }

    let style_map = StyleMap::compile("", &StyleMapOptions::default())
        .expect("Failed to compile style map")
        .value;

    print_tree(&style_map, &elements, 0);
}

// demos/basic_usage.rs
//! Basic usage of the style map compiler

use docx_style_map::document::{NumberingLevel, Paragraph, Run, Style};
use docx_style_map::{HtmlPath, StyleMap, StyleMapOptions};

fn describe(path: Option<&HtmlPath>) -> String {
    match path {
        None => "(no mapping)".to_string(),
        Some(HtmlPath::Ignore) => "(ignored)".to_string(),
        Some(HtmlPath::Elements(elements)) if elements.is_empty() => "(contents only)".to_string(),
        Some(HtmlPath::Elements(elements)) => elements
            .iter()
            .map(|element| {
                let mut text = element.tag_names.join("|");
                if let Some(class) = element.class() {
                    text.push('.');
                    text.push_str(class);
                }
                if !element.collapsible {
                    text.push_str(":fresh");
                }
                text
            })
            .collect::<Vec<_>>()
            .join(" > "),
    }
}

fn main() {
    println!("=== Style Map - Basic Usage ===\n");

    let source = r#"
        # Document-specific mappings
        p[style-name='Title'] -> h1.title:fresh
        p[style-name='Quote'] -> blockquote > p
        r[style-name='Code Char'] -> code
        b -> b
        comment-reference -> !

        # A typo: this line is reported and skipped
        p[style-nam='Aside'] -> aside
    "#;

    println!("Compiling style map...");
    let options = StyleMapOptions::default().skip_invalid_rules();
    let (style_map, warnings) = StyleMap::compile(source, &options)
        .expect("Failed to compile style map")
        .into_parts();
    println!("✓ Compiled {} paragraph and {} run mappings", style_map.paragraph_rules().len(), style_map.run_rules().len());
    for warning in &warnings {
        println!("  warning: {}", warning);
    }
    println!();

    println!("Paragraphs:");
    let paragraphs = [
        ("Title", Some(Style::named("Title", "Title")), None),
        ("Quote", Some(Style::named("Quote", "Quote")), None),
        ("Heading 2", Some(Style::named("Heading2", "heading 2")), None),
        ("Nested list item", None, Some(NumberingLevel::unordered(1))),
        ("Unstyled", None, None),
    ];
    for (label, style, numbering) in paragraphs {
        let paragraph = Paragraph {
            style,
            numbering,
            children: Vec::new(),
        };
        println!("  {:<18} -> {}", label, describe(style_map.paragraph_path(&paragraph)));
    }
    println!();

    println!("Runs:");
    let code = Run {
        style: Some(Style::named("CodeChar", "Code Char")),
        ..Default::default()
    };
    println!("  {:<18} -> {}", "Code Char", describe(style_map.run_path(&code)));
    println!("  {:<18} -> {}", "bold", describe(Some(style_map.bold_path())));
    println!("  {:<18} -> {}", "italic", describe(Some(style_map.italic_path())));
    println!("  {:<18} -> {}", "comment reference", describe(Some(style_map.comment_reference_path())));
    println!();

    let bytes = style_map.to_bytes().expect("Failed to serialize");
    println!("Cached style map: {} bytes", bytes.len());
    let reloaded = StyleMap::from_bytes(&bytes).expect("Failed to load");
    assert_eq!(reloaded, style_map);
    println!("✓ Reloaded style map matches");
}

//! HTML fragment assembly.
//!
//! This is the host-side half of the boundary: rules return structured nodes
//! and never touch markup; everything HTML lives here. Text payloads and
//! attribute values are escaped, attributes render in the order they were
//! set, and `Payload::Inline` payloads take one more trip through the inline
//! scanner before rendering.

use crate::inline_parser::{self, Inline};
use crate::node::{Node, Payload};
use crate::registry::RuleRegistry;

/// Render a document's block nodes, joined with newlines.
pub fn render_document(registry: &RuleRegistry, blocks: &[Node]) -> String {
    let rendered: Vec<String> = blocks.iter().map(|b| render_node(registry, b)).collect();
    rendered.join("\n")
}

/// Render one node as an HTML fragment.
pub fn render_node(registry: &RuleRegistry, node: &Node) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(node.tag);
    for (key, value) in node.attributes() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');

    match &node.payload {
        Payload::Literal(text) => out.push_str(&escape_text(text)),
        Payload::Inline(text) => {
            let items = inline_parser::scan(registry, text);
            out.push_str(&render_inlines(registry, &items));
        }
    }

    out.push_str("</");
    out.push_str(node.tag);
    out.push('>');
    out
}

/// Render a sequence of inline runs.
pub fn render_inlines(registry: &RuleRegistry, items: &[Inline]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            Inline::Text(text) => out.push_str(&escape_text(text)),
            Inline::Node(node) => out.push_str(&render_node(registry, node)),
        }
    }
    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

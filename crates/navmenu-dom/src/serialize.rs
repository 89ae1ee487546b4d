//! HTML serialization
//!
//! Renders a subtree back to markup. Attribute order is `class` first, then
//! insertion order.

use crate::{DomTree, NodeData, NodeId};
use std::fmt::Write;

/// Serialize `id` and its subtree to HTML
pub fn to_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.data {
        NodeData::Document => {
            for (child, _) in tree.children(id) {
                write_node(tree, child, out);
            }
        }
        NodeData::Text(text) => escape_into(text, out),
        NodeData::Element(el) => {
            let _ = write!(out, "<{}", el.tag);
            if !el.classes.is_empty() {
                out.push_str(" class=\"");
                escape_into(&el.classes.value(), out);
                out.push('"');
            }
            for attr in &el.attrs {
                let _ = write!(out, " {}=\"", attr.name);
                escape_into(&attr.value, out);
                out.push('"');
            }
            out.push('>');
            for (child, _) in tree.children(id) {
                write_node(tree, child, out);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

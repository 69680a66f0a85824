//! Bottom-up markup serialization for parsed tree nodes.
//!
//! The truncation walk assembles its result from child markup rather than
//! mutating the parsed tree, so everything that reaches the output passes
//! through the writers in this module. Text and attribute values are
//! entity-escaped so the output re-parses losslessly; void elements are
//! written in `<br/>` form.

use ego_tree::NodeRef;
use scraper::node::{Element, Node};

use crate::consts;

/// Serializes a full subtree back to markup, entity-escaping as needed.
///
/// Comments round-trip verbatim; doctypes and processing instructions
/// contribute nothing.
#[must_use]
pub fn markup(node: NodeRef<'_, Node>) -> String {
    let mut buf = String::new();
    write_node(node, &mut buf);
    buf
}

fn write_node(node: NodeRef<'_, Node>, buf: &mut String) {
    match node.value() {
        Node::Text(text) => buf.push_str(&escape_text(&text)),
        Node::Element(element) => {
            if consts::SELF_CLOSING_TAGS.contains(&element.name()) {
                void_tag(&element, buf);
            } else {
                open_tag(&element, buf);
                for child in node.children() {
                    write_node(child, buf);
                }
                close_tag(element.name(), buf);
            }
        }
        Node::Comment(comment) => {
            buf.push_str("<!--");
            buf.push_str(&comment);
            buf.push_str("-->");
        }
        _ => {}
    }
}

/// Writes the opening tag of `element`, attributes included.
pub(crate) fn open_tag(element: &Element, buf: &mut String) {
    buf.push('<');
    buf.push_str(element.name());
    write_attributes(element, buf);
    buf.push('>');
}

/// Writes `element` as a self-contained void tag.
pub(crate) fn void_tag(element: &Element, buf: &mut String) {
    buf.push('<');
    buf.push_str(element.name());
    write_attributes(element, buf);
    buf.push_str("/>");
}

/// Writes the closing tag for `name`.
pub(crate) fn close_tag(name: &str, buf: &mut String) {
    buf.push_str("</");
    buf.push_str(name);
    buf.push('>');
}

fn write_attributes(element: &Element, buf: &mut String) {
    for (name, value) in element.attrs() {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        buf.push_str(&escape_attr(value));
        buf.push('"');
    }
}

/// Escapes character data for use inside an element.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{00A0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\u{00A0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

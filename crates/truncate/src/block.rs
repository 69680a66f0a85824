//! Shallow truncation that selects whole block-level children.
//!
//! The block strategy operates only at the immediate-children level of the
//! document root: a block-level child costs one unit and is kept whole or
//! not at all. It never descends into a kept block's own content.

use ego_tree::NodeRef;
use scraper::node::Node;

use crate::options::Options;
use crate::{consts, serialize};

fn is_block(name: &str) -> bool {
    consts::BLOCK_TAGS.contains(&name)
}

/// Keeps whole block-level children of `root`, left to right, until `budget`
/// blocks have been taken. Interleaved text is carried through uncounted
/// while budget remains; non-block elements and comments are dropped.
///
/// When children were left unvisited, the ellipsis marker is placed inside
/// the last retained block, just before its closing tag.
pub(crate) fn truncate_blocks(root: NodeRef<'_, Node>, budget: usize, options: &Options) -> String {
    let mut kept: Vec<NodeRef<'_, Node>> = Vec::new();
    let mut last_block: Option<usize> = None;
    let mut remaining = budget;
    let mut truncated = false;
    let mut children = root.children().peekable();
    while let Some(child) = children.next() {
        match child.value() {
            Node::Element(element) if is_block(element.name()) => {
                if remaining == 0 {
                    truncated = true;
                    break;
                }
                last_block = Some(kept.len());
                kept.push(child);
                remaining -= 1;
                if remaining == 0 && children.peek().is_some() {
                    truncated = true;
                    break;
                }
            }
            Node::Text(_) if remaining > 0 => kept.push(child),
            _ => {}
        }
    }
    let mut markup = String::new();
    for (position, node) in kept.iter().enumerate() {
        if truncated && last_block == Some(position) {
            write_with_trailing_marker(*node, &options.ellipsis, &mut markup);
        } else {
            markup.push_str(&serialize::markup(*node));
        }
    }
    if truncated && last_block.is_none() {
        markup.push_str(&options.ellipsis);
    }
    markup
}

/// Serializes a block with the marker spliced in as trailing content.
fn write_with_trailing_marker(node: NodeRef<'_, Node>, marker: &str, buf: &mut String) {
    let Some(element) = node.value().as_element() else {
        return;
    };
    serialize::open_tag(element, buf);
    for child in node.children() {
        buf.push_str(&serialize::markup(child));
    }
    buf.push_str(marker);
    serialize::close_tag(element.name(), buf);
}

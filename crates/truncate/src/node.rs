//! Depth-first, budget-propagating truncation of a parsed tree.

use ego_tree::NodeRef;
use scraper::node::Node;

use crate::options::Options;
use crate::{consts, count, serialize, splice};

/// Returns `true` if an ellipsis may be inserted as trailing content of `name`.
pub(crate) fn is_ellipsable(name: &str) -> bool {
    consts::ELLIPSABLE_TAGS.contains(&name)
}

fn is_self_closing(name: &str) -> bool {
    consts::SELF_CLOSING_TAGS.contains(&name)
}

/// One truncation pass over a parsed tree.
///
/// The budget flows top-down into children and bubbles back up as leftover:
/// a unit spent anywhere in a left subtree is unavailable to everything to
/// its right, at any depth. Markup is assembled bottom-up from the recursive
/// results; the tree itself is never mutated.
pub(crate) struct Truncator<'a> {
    options: &'a Options,
    truncated: bool,
}
impl<'a> Truncator<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self { options, truncated: false }
    }

    /// The marker for the next splice. Empty once a splice has happened, so
    /// the marker lands exactly once per call, at the innermost ellipsable
    /// container where the budget first ran out.
    fn ellipsis(&self) -> &str {
        if self.truncated { "" } else { &self.options.ellipsis }
    }

    /// Truncates an element to at most `budget` units, returning its markup
    /// and the budget left over for siblings to its right.
    ///
    /// An element truncated to emptiness vanishes entirely, open and close
    /// tags included, unless it is self-closing; self-closing elements cost
    /// nothing and are kept verbatim.
    pub fn truncate_element(&mut self, node: NodeRef<'_, Node>, budget: usize) -> (String, usize) {
        let Some(element) = node.value().as_element() else {
            return (String::new(), budget);
        };
        let name = element.name();
        if budget == 0 && !is_ellipsable(name) {
            return (String::new(), 0);
        }
        let (inner, leftover) = self.truncate_children(node, name, budget);
        if inner.is_empty() {
            if is_self_closing(name) {
                let mut tag = String::new();
                serialize::void_tag(element, &mut tag);
                return (tag, leftover);
            }
            return (String::new(), leftover);
        }
        let mut markup = String::new();
        serialize::open_tag(element, &mut markup);
        markup.push_str(&inner);
        serialize::close_tag(name, &mut markup);
        (markup, leftover)
    }

    /// Left-to-right pass over the children of `node`, spending the budget
    /// as it goes. Once the budget runs out, remaining siblings are dropped;
    /// if the parent is ellipsable the accumulated markup gets the marker
    /// spliced in first.
    fn truncate_children(&mut self, node: NodeRef<'_, Node>, name: &str, budget: usize) -> (String, usize) {
        let mut inner = String::new();
        let mut remaining = budget;
        for child in node.children() {
            match child.value() {
                Node::Element(_) => {
                    let (markup, leftover) = self.truncate_element(child, remaining);
                    remaining = leftover;
                    inner.push_str(&markup);
                }
                Node::Text(text) => {
                    let taken = count::take(&text, remaining, self.options);
                    remaining = taken.leftover;
                    inner.push_str(&serialize::escape_text(&taken.kept));
                }
                // Comments and processing instructions carry no length.
                _ => {}
            }
            if remaining == 0 {
                if is_ellipsable(name) {
                    splice::splice(&mut inner, self.ellipsis());
                    self.truncated = true;
                }
                break;
            }
        }
        (inner, remaining)
    }
}

//! Structure-preserving HTML truncation.
//!
//! Truncates an HTML fragment to a target length while keeping the markup
//! nesting valid and splicing an ellipsis marker in at the exact point of
//! truncation, for excerpt generation that never leaves a dangling tag:
//!
//! - **Four counting strategies** behind [`TruncateBy`]: whitespace-delimited
//!   words (default), Unicode code points, sentence runs, or whole top-level
//!   block elements
//! - **Budget propagation**: a depth-first, left-to-right walk where a unit
//!   spent anywhere in a left subtree is unavailable to everything to its
//!   right, at any depth
//! - **Single marker**: the configured ellipsis appears at most once per
//!   call, inside the innermost container that allows one
//! - **Void elements** (`br`, `hr`, `img`) cost nothing and are kept
//!   verbatim while any budget remains
//!
//! ```rust
//! use shear_truncate::{Options, truncate};
//!
//! let excerpt = truncate("<p>This is a <strong>sample</strong> sentence.</p>", 4, &Options::default())?;
//! assert_eq!(excerpt, "<p>This is a <strong>sample</strong>…</p>");
//! # Ok::<(), shear_truncate::error::Error>(())
//! ```
//!
//! Parsing is html5ever's (via `scraper`), so input is normalized the way a
//! browser would normalize it before any counting happens; the output is
//! rebuilt bottom-up from the parsed tree and always re-parses cleanly.

mod block;
mod consts;
mod count;
pub mod error;
mod node;
mod options;
mod serialize;
mod splice;

use exn::OptionExt;
use scraper::Html;
use ego_tree::NodeRef;
use scraper::node::Node;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::node::Truncator;
pub use crate::options::{Options, TruncateBy};
pub use crate::serialize::markup;

/// Truncates `html` to at most `length` units of the configured kind.
///
/// `length` is measured in the unit implied by [`Options::truncate_by`]. A
/// zero length is valid and keeps nothing except the ellipsis inside an
/// ellipsable wrapper. The input is never mutated; the returned markup is
/// freshly assembled and structurally valid with respect to the input's
/// nesting.
///
/// # Errors
///
/// Returns [`ErrorKind::MalformedHtml`] if no parse strategy produces a
/// navigable tree for the input. Counting and truncation themselves are
/// total and never fail.
#[instrument(skip(html, options), fields(html_size = html.len()))]
pub fn truncate(html: &str, length: usize, options: &Options) -> Result<String> {
    let wrapped = wrap(html);
    let fragment = Html::parse_fragment(&wrapped);
    let root = wrapper_root(&fragment)?;
    if options.truncate_by == TruncateBy::Blocks {
        return Ok(block::truncate_blocks(root, length, options));
    }
    let mut truncator = Truncator::new(options);
    let (markup, _) = truncator.truncate_element(root, length);
    Ok(strip_wrapper(&markup))
}

/// Scrubs character runs outside the valid XML ranges down to a single
/// space, then wraps the input in the synthetic container element so
/// adjacent top-level nodes parse as one tree.
fn wrap(html: &str) -> String {
    let scrubbed = consts::INVALID_MARKUP_CHARS.replace_all(html, " ");
    format!("{}{scrubbed}{}", consts::WRAPPER_OPEN, consts::WRAPPER_CLOSE)
}

/// Locates the synthetic wrapper element in the parsed tree.
fn wrapper_root(fragment: &Html) -> Result<NodeRef<'_, Node>> {
    fragment
        .tree
        .root()
        .descendants()
        .find(|node| node.value().as_element().is_some_and(|element| element.name() == "div"))
        .ok_or_raise(|| ErrorKind::MalformedHtml("no parse strategy produced a document root".to_string()))
}

/// Strips exactly the wrapper's serialized open and close tags back off.
fn strip_wrapper(markup: &str) -> String {
    markup
        .strip_prefix(consts::WRAPPER_OPEN)
        .and_then(|inner| inner.strip_suffix(consts::WRAPPER_CLOSE))
        .unwrap_or_default()
        .to_string()
}

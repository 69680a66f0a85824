//! Clean-up of a truncation point.
//!
//! A cut rarely lands cleanly: the kept markup tends to end in whitespace,
//! orphaned punctuation, or a half-meaningful entity reference. The splicer
//! trims that clutter off and puts the ellipsis marker in its place.

use crate::consts;

/// Trims trailing whitespace, punctuation, and stray entity references from
/// the accumulated markup, then appends the ellipsis marker.
///
/// Serialized tags are safe from the trim: they end in `>`, which is not
/// punctuation in the Unicode sense.
pub(crate) fn splice(markup: &mut String, ellipsis: &str) {
    if let Some(clutter) = consts::TRAILING_CLUTTER.find(markup) {
        markup.truncate(clutter.start());
    }
    markup.push_str(ellipsis);
}

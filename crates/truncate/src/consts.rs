use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// A word token is a maximal run of non-whitespace carrying its leading whitespace,
// so concatenating consecutive tokens reassembles the original run exactly.
regex!(WORD_TOKENS, r"\s*\S+");
// A sentence ends in terminal punctuation followed by whitespace or end-of-input;
// the separator travels with the sentence.
regex!(SENTENCE_TOKENS, r"(?s).*?[.!?]+(?:\s|$)");
// Trailing whitespace, Unicode punctuation, and stray entity references at a
// truncation point. `\p{P}` keeps a closing `>` (a math symbol) out of reach.
regex!(TRAILING_CLUTTER, r"(?:[\s\p{P}]+|&(?:[a-z]+|#[0-9]+);?)*$");
// Character runs outside the ranges permitted in XML documents.
regex!(INVALID_MARKUP_CHARS, r"[^\x09\x0A\x0D\x20-\x{D7FF}\x{E000}-\x{FFFD}]+");

/// Tags that may carry a trailing ellipsis when their content is cut short.
/// The synthetic wrapper is a `div`, so the document root always qualifies.
pub(crate) const ELLIPSABLE_TAGS: &[&str] =
    &["p", "ol", "ul", "li", "div", "header", "article", "nav", "section", "footer", "aside", "dd", "dt", "dl"];

/// Void tags with no textual content, kept verbatim while any budget remains.
pub(crate) const SELF_CLOSING_TAGS: &[&str] = &["br", "hr", "img"];

/// Tags counted as one selectable unit by block truncation.
pub(crate) const BLOCK_TAGS: &[&str] =
    &["p", "ul", "ol", "div", "header", "article", "nav", "section", "footer", "aside", "dd", "dt", "dl"];

/// Serialized tag text of the synthetic wrapper element added around the
/// input before parsing and stripped back off the final output.
pub(crate) const WRAPPER_OPEN: &str = "<div>";
pub(crate) const WRAPPER_CLOSE: &str = "</div>";

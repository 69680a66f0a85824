//! Quick, non-structure-preserving HTML truncation.
//!
//! The blunt counterpart to `shear-truncate`: where that crate walks the
//! tree propagating a budget and rebuilding valid markup around the cut,
//! this one either throws the markup away entirely ([`strip_tags`]) or cuts
//! after a word count with no repair beyond dropping a dangling tag
//! ([`truncate_words`]). Use it where speed matters more than tidy output,
//! e.g. search previews over trusted content.
//!
//! The two paths intentionally share no logic; only the subtree serializer
//! is borrowed from `shear-truncate`.

use std::sync::LazyLock;

use memchr::memrchr;
use regex::Regex;
use scraper::Html;
use ego_tree::NodeRef;
use scraper::node::Node;
use shear_truncate::markup;
use tracing::instrument;

static BREAK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").unwrap());

/// Tags whose character data is code, not content.
const OPAQUE_TAGS: &[&str] = &["script", "style"];

/// Strips all markup from `html`, returning the bare character data.
///
/// `script` and `style` subtrees are dropped wholesale, contents included.
/// With `remove_breaks`, runs of spaces, tabs, and newlines collapse to a
/// single space. The result is trimmed at both ends.
#[instrument(skip(html), fields(html_size = html.len()))]
#[must_use]
pub fn strip_tags(html: &str, remove_breaks: bool) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::new();
    collect_text(fragment.tree.root(), &mut text);
    let text = if remove_breaks {
        BREAK_RUNS.replace_all(&text, " ").into_owned()
    } else {
        text
    };
    text.trim().to_string()
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) if OPAQUE_TAGS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

/// Truncates `html` to roughly `words` words, keeping whole elements.
///
/// If the stripped word count already fits the budget, the input comes back
/// verbatim. Otherwise the top-level nodes are walked in order: top-level
/// text spends the budget word by word (re-joined with single spaces), and
/// element children pass through whole, their inner words uncounted. A
/// dangling tag left at the cut point is dropped rather than repaired, so
/// the output can be unbalanced.
#[instrument(skip(html), fields(html_size = html.len()))]
#[must_use]
pub fn truncate_words(html: &str, words: usize) -> String {
    if strip_tags(html, false).split_whitespace().count() <= words {
        return html.to_string();
    }
    let fragment = Html::parse_fragment(html);
    let Some(top) = fragment.tree.root().children().find(|node| node.value().is_element()) else {
        return String::new();
    };
    let mut truncated = String::new();
    let mut count = 0;
    for child in top.children() {
        match child.value() {
            Node::Text(text) => {
                let run: &str = text;
                for word in run.split_whitespace() {
                    if count < words {
                        truncated.push_str(word);
                        truncated.push(' ');
                    }
                    count += 1;
                }
            }
            _ => truncated.push_str(&markup(child)),
        }
        if count >= words {
            break;
        }
    }
    let mut truncated = truncated.trim().to_string();
    if truncated.ends_with('>')
        && let Some(open) = memrchr(b'<', truncated.as_bytes())
    {
        truncated.truncate(open);
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<p>Hello <b>World</b></p>", "Hello World")]
    #[case("plain text stays", "plain text stays")]
    #[case("<p>keep</p><script>var x = 1;</script>", "keep")]
    #[case("<style>p { color: red; }</style><p>visible</p>", "visible")]
    #[case("", "")]
    fn test_strip_tags(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(strip_tags(html, false), expected);
    }

    #[test]
    fn test_strip_tags_collapses_breaks() {
        assert_eq!(strip_tags("<p>line\none</p>", true), "line one");
        assert_eq!(strip_tags("<p>tab\tand  spaces</p>", true), "tab and spaces");
    }

    #[test]
    fn test_strip_tags_keeps_breaks_by_default() {
        assert_eq!(strip_tags("<p>line\none</p>", false), "line\none");
    }

    #[test]
    fn test_truncate_words_within_budget_returns_input_verbatim() {
        let html = "<p>one two</p>";
        assert_eq!(truncate_words(html, 5), html);
        assert_eq!(truncate_words(html, 2), html);
    }

    #[test]
    fn test_truncate_words_counts_top_level_text_only() {
        let html = "alpha beta <b>bold</b> gamma delta";
        assert_eq!(truncate_words(html, 3), "alpha beta <b>bold</b>gamma");
    }

    #[test]
    fn test_truncate_words_drops_dangling_tag() {
        // The budget runs out while the trailing element is still open in
        // spirit; the quick path drops from the last `<` instead of closing.
        let html = "one <b>two three four five</b>";
        assert_eq!(truncate_words(html, 2), "one <b>two three four five");
    }

    #[test]
    fn test_truncate_words_empty_input() {
        assert_eq!(truncate_words("", 0), "");
    }
}

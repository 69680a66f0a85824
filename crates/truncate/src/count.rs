//! Budget measurement and slicing of text runs.
//!
//! Each function measures a run in one unit and keeps as much of it as the
//! budget allows, reporting whatever budget is left for content further to
//! the right. Leftovers are never negative; an exhausted budget comes back
//! as zero and the caller stops walking.

use crate::consts;
use crate::options::{Options, TruncateBy};

/// The kept portion of a text run plus the budget it left behind.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Taken {
    pub kept: String,
    pub leftover: usize,
}

/// Measures `run` in the configured unit and keeps what `budget` allows.
pub(crate) fn take(run: &str, budget: usize, options: &Options) -> Taken {
    match options.truncate_by {
        TruncateBy::Chars => take_chars(run, budget, options.preserve_words),
        TruncateBy::Sentences => take_sentences(run, budget),
        // Block truncation selects whole elements and never slices a run.
        TruncateBy::Words | TruncateBy::Blocks => take_words(run, budget),
    }
}

fn take_words(run: &str, budget: usize) -> Taken {
    let tokens: Vec<&str> = consts::WORD_TOKENS.find_iter(run).map(|m| m.as_str()).collect();
    if budget > tokens.len() {
        return Taken { kept: run.to_string(), leftover: budget - tokens.len() };
    }
    Taken { kept: tokens[..budget].concat(), leftover: 0 }
}

fn take_chars(run: &str, budget: usize, preserve_words: bool) -> Taken {
    let count = run.chars().count();
    if budget > count {
        return Taken { kept: run.to_string(), leftover: budget - count };
    }
    let tokens: Vec<&str> = consts::WORD_TOKENS.find_iter(run).map(|m| m.as_str()).collect();
    if tokens.len() < 2 {
        // A run with no internal whitespace is sliced mid-word either way.
        return Taken { kept: run.chars().take(budget).collect(), leftover: 0 };
    }
    let mut kept = String::new();
    let mut spent = 0;
    for token in tokens {
        let width = token.chars().count();
        if spent + width > budget {
            if !preserve_words {
                kept.extend(token.chars().take(budget - spent));
                spent = budget;
            }
            break;
        }
        kept.push_str(token);
        spent += width;
    }
    Taken { kept, leftover: budget - spent }
}

fn take_sentences(run: &str, budget: usize) -> Taken {
    let sentences: Vec<&str> = consts::SENTENCE_TOKENS.find_iter(run).map(|m| m.as_str()).collect();
    if budget >= sentences.len() && budget > 0 {
        return Taken { kept: run.to_string(), leftover: budget - sentences.len() };
    }
    Taken { kept: sentences[..budget].concat(), leftover: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("one two three", 2, "one two", 0)]
    #[case("one two three", 3, "one two three", 0)]
    #[case("one two three", 5, "one two three", 2)]
    #[case("one two three. ", 3, "one two three.", 0)]
    #[case(" leading space", 5, " leading space", 3)]
    #[case("solo", 0, "", 0)]
    #[case("   ", 2, "   ", 2)]
    fn test_take_words(#[case] run: &str, #[case] budget: usize, #[case] kept: &str, #[case] leftover: usize) {
        assert_eq!(take_words(run, budget), Taken { kept: kept.to_string(), leftover });
    }

    #[rstest]
    #[case("Example text for ", 15, false, "Example text fo", 0)]
    #[case("Example text for ", 15, true, "Example text", 3)]
    #[case("Example text for ", 30, false, "Example text for ", 13)]
    #[case("ab cd", 5, false, "ab cd", 0)]
    #[case("hello", 3, false, "hel", 0)]
    #[case("hello", 3, true, "hel", 0)]
    #[case("こんにちは", 3, false, "こんに", 0)]
    #[case("tiny word", 2, true, "", 2)]
    #[case("solo", 0, false, "", 0)]
    fn test_take_chars(
        #[case] run: &str,
        #[case] budget: usize,
        #[case] preserve_words: bool,
        #[case] kept: &str,
        #[case] leftover: usize,
    ) {
        assert_eq!(take_chars(run, budget, preserve_words), Taken { kept: kept.to_string(), leftover });
    }

    #[rstest]
    #[case("First. Second! Third?", 2, "First. Second! ", 0)]
    #[case("First. Second! Third?", 3, "First. Second! Third?", 0)]
    #[case("First. Second! Third?", 5, "First. Second! Third?", 2)]
    #[case("Sentence one... Sentence two!! Three. ", 2, "Sentence one... Sentence two!! ", 0)]
    #[case("no terminal punctuation", 1, "no terminal punctuation", 1)]
    #[case("no terminal punctuation", 0, "", 0)]
    #[case("Ends mid. And then some", 1, "Ends mid. And then some", 0)]
    #[case("One. Two. tail without punctuation", 1, "One. ", 0)]
    fn test_take_sentences(#[case] run: &str, #[case] budget: usize, #[case] kept: &str, #[case] leftover: usize) {
        assert_eq!(take_sentences(run, budget), Taken { kept: kept.to_string(), leftover });
    }

    #[test]
    fn test_take_dispatches_on_unit() {
        let words = Options::default();
        let chars = Options::by(TruncateBy::Chars);
        assert_eq!(take("one two three", 1, &words).kept, "one");
        assert_eq!(take("one two three", 6, &chars).kept, "one tw");
    }
}

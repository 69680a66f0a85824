use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// The unit a length budget is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TruncateBy {
    /// Whitespace-delimited words.
    #[default]
    Words,
    /// Unicode code points.
    Chars,
    /// Runs ending in terminal punctuation (`.` `!` `?`).
    Sentences,
    /// Whole top-level block elements.
    Blocks,
}
impl TruncateBy {
    /// Returns the canonical name for the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TruncateBy::Words => "words",
            TruncateBy::Chars => "chars",
            TruncateBy::Sentences => "sentences",
            TruncateBy::Blocks => "blocks",
        }
    }
}
impl FromStr for TruncateBy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "word" | "words" => Ok(TruncateBy::Words),
            "char" | "chars" | "characters" => Ok(TruncateBy::Chars),
            "sentence" | "sentences" => Ok(TruncateBy::Sentences),
            "block" | "blocks" => Ok(TruncateBy::Blocks),
            _ => exn::bail!(ErrorKind::UnknownUnit(s.to_string())),
        }
    }
}

/// Caller-facing truncation options.
///
/// The ellipsis marker is inserted at most once per call, at the outermost
/// point where truncation first bites; nested already-truncated contexts
/// never repeat it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Marker appended at the truncation point.
    pub ellipsis: String,
    /// Counting strategy for the length budget.
    pub truncate_by: TruncateBy,
    /// In character mode, stop at a word boundary instead of splitting mid-word.
    pub preserve_words: bool,
}
impl Default for Options {
    fn default() -> Self {
        Self {
            ellipsis: "…".to_string(),
            truncate_by: TruncateBy::Words,
            preserve_words: false,
        }
    }
}
impl Options {
    /// Options using the given counting strategy, defaults otherwise.
    #[must_use]
    pub fn by(unit: TruncateBy) -> Self {
        Self { truncate_by: unit, ..Self::default() }
    }

    /// Replaces the ellipsis marker.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Sets whether character mode stops at word boundaries.
    #[must_use]
    pub fn with_preserve_words(mut self, preserve: bool) -> Self {
        self.preserve_words = preserve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("words", TruncateBy::Words)]
    #[case("word", TruncateBy::Words)]
    #[case("WORDS", TruncateBy::Words)]
    #[case("chars", TruncateBy::Chars)]
    #[case("characters", TruncateBy::Chars)]
    #[case("sentences", TruncateBy::Sentences)]
    #[case(" sentence ", TruncateBy::Sentences)]
    #[case("blocks", TruncateBy::Blocks)]
    #[case("block", TruncateBy::Blocks)]
    fn test_unit_from_str(#[case] test: &str, #[case] expected: TruncateBy) {
        assert_eq!(test.parse::<TruncateBy>().unwrap(), expected);
    }

    #[rstest]
    #[case("paragraphs")]
    #[case("definitely not valid")]
    #[case("")]
    fn test_unit_from_str_invalid(#[case] test: &str) {
        let err = test.parse::<TruncateBy>().unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnknownUnit(_)));
    }

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.ellipsis, "…");
        assert_eq!(options.truncate_by, TruncateBy::Words);
        assert!(!options.preserve_words);
    }

    #[test]
    fn test_builders() {
        let options = Options::by(TruncateBy::Chars).with_ellipsis(" [more]").with_preserve_words(true);
        assert_eq!(options.truncate_by, TruncateBy::Chars);
        assert_eq!(options.ellipsis, " [more]");
        assert!(options.preserve_words);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_serde_round_trip() {
        let options = Options::by(TruncateBy::Sentences).with_ellipsis("...");
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"sentences\""));
        assert_eq!(serde_json::from_str::<Options>(&json).unwrap(), options);
    }
}

//! Word extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Unicode word characters.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Split text into lowercase words.
///
/// Everything that is not a word character (letters, marks, digits,
/// connector punctuation) separates words and is discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

//! Vocabulary a reader has already learned.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::source::{self, SourceOptions};

/// A set of known words, lowercased and trimmed.
///
/// Lists are read one word per line; case is ignored and blank lines are
/// skipped. Several lists merge by set union.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a word list, one word per line.
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    /// Read a single word list file.
    pub fn load(path: impl AsRef<Path>, options: &SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let known = Self::parse(&source::read_text(path, options)?);
        if known.is_empty() {
            warn!(path = %path.display(), "known-word list is empty");
        } else {
            debug!(path = %path.display(), words = known.len(), "loaded known-word list");
        }
        Ok(known)
    }

    /// Read several word list files and merge them.
    pub fn load_all<P: AsRef<Path>>(paths: &[P], options: &SourceOptions) -> Result<Self> {
        let mut merged = Self::new();
        for path in paths {
            merged = merged.union(Self::load(path, options)?);
        }
        Ok(merged)
    }

    /// Merge two vocabularies.
    pub fn union(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

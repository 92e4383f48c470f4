//! Book, page and known-word vocabulary types.

mod known;

pub use known::KnownWords;

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::reformat::Reformatter;
use crate::source::{self, SourceOptions};
use crate::stats::BookStats;

/// One physical page of a book: its words in reading order.
///
/// Words are lowercase runs of word characters, as produced by
/// [`crate::reformat::tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    words: Vec<String>,
}

impl Page {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
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

impl From<Vec<String>> for Page {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

/// An ordered sequence of pages.
///
/// Page numbers are 1-based positions in [`Book::pages`], so the synthetic
/// front-matter pages inserted by the reformatter count toward them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Read and reformat a book text file with default settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &SourceOptions::default(), &Reformatter::new())
    }

    /// Read a book text file and reformat it into pages.
    pub fn open_with(
        path: impl AsRef<Path>,
        options: &SourceOptions,
        reformatter: &Reformatter,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = source::read_text(path, options)?;
        let pages = reformatter
            .reformat_text(&text)
            .map_err(|e| e.in_file(path))?;
        Ok(Self::new(pages))
    }

    /// Reformat in-memory source lines into a book.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        Ok(Self::new(Reformatter::new().reformat(lines)?))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get a page by its 1-based page number.
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    /// All words of the book in reading order, duplicates included.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::iter)
    }

    /// Number of words in the book, duplicates included.
    pub fn total_words(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Set of distinct words in the book.
    pub fn word_set(&self) -> HashSet<&str> {
        self.words().collect()
    }

    pub fn unique_words(&self) -> usize {
        self.word_set().len()
    }

    /// Aggregate per-word statistics for this book.
    pub fn stats(&self, known: Option<&KnownWords>) -> BookStats {
        BookStats::new(self, known)
    }
}

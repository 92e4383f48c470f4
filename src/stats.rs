//! Per-word statistics for a book.

use std::collections::HashMap;
use std::fmt;

use tracing::info;

use crate::book::{Book, KnownWords};

/// Statistics for one distinct word of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct WordRecord {
    pub word: String,
    /// Occurrences across all pages.
    pub count: usize,
    /// Whether the word is in the known-word list.
    pub learned: bool,
    /// 1-based number of the first page the word appears on.
    pub page: usize,
}

/// Book-level counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Summary {
    /// Number of words, duplicates included.
    pub total_words: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Number of distinct words of the book that are known.
    pub known_words_in_book: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of words: {}", self.total_words)?;
        writeln!(f, "Number of unique words: {}", self.unique_words)?;
        write!(f, "Number of known words in book: {}", self.known_words_in_book)
    }
}

/// Word table of a book.
///
/// Records are ordered by descending count. Words with equal counts keep the
/// order in which they first appear in the book.
#[derive(Debug, Clone, Default)]
pub struct BookStats {
    summary: Summary,
    records: Vec<WordRecord>,
    index: HashMap<String, usize>,
}

impl BookStats {
    /// Aggregate the words of `book`, marking words found in `known`.
    ///
    /// Known words that never occur in the book are ignored.
    pub fn new(book: &Book, known: Option<&KnownWords>) -> Self {
        let mut records: Vec<WordRecord> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for (offset, page) in book.pages().iter().enumerate() {
            for word in page.iter() {
                match slots.get(word) {
                    Some(&slot) => records[slot].count += 1,
                    None => {
                        slots.insert(word, records.len());
                        records.push(WordRecord {
                            word: word.to_string(),
                            count: 1,
                            learned: known.is_some_and(|k| k.contains(word)),
                            page: offset + 1,
                        });
                    }
                }
            }
        }

        // Stable: equal counts stay in first-seen order.
        records.sort_by(|a, b| b.count.cmp(&a.count));

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.word.clone(), i))
            .collect();

        let summary = Summary {
            total_words: records.iter().map(|r| r.count).sum(),
            unique_words: records.len(),
            known_words_in_book: records.iter().filter(|r| r.learned).count(),
        };

        info!(
            total_words = summary.total_words,
            unique_words = summary.unique_words,
            known_words_in_book = summary.known_words_in_book,
            "computed book statistics"
        );

        Self {
            summary,
            records,
            index,
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn total_words(&self) -> usize {
        self.summary.total_words
    }

    pub fn unique_words(&self) -> usize {
        self.summary.unique_words
    }

    pub fn known_words_in_book(&self) -> usize {
        self.summary.known_words_in_book
    }

    /// All records, most frequent first.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Look up the record for a word.
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.index.get(word).map(|&i| &self.records[i])
    }

    /// Records of words not yet learned, most frequent first.
    pub fn unlearned(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter().filter(|r| !r.learned)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a BookStats {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Page reformatter: raw book lines to pages of words.
//!
//! The source text uses a fixed layout: printed page numbers sit alone on
//! their own line, and words may be split with a hyphen at the end of a line
//! or a page. Reformatting runs in stages:
//!
//! 1. [`segment_pages`] drops blank lines and splits at page numbers
//! 2. [`repair_page_breaks`] rejoins words split across pages
//! 3. [`repair_line_breaks`] rejoins words split across lines
//! 4. [`tokenize`] turns each page into lowercase words
//!
//! Finally a fixed number of empty pages is prepended so page numbers line
//! up with the printed book, whose unnumbered front matter is missing from
//! the text.
//!
//! # Example
//!
//! ```
//! use booklex::reformat::reformat;
//!
//! let pages = reformat(&["Mr und Mrs Dur-", "sley", "1", "waren stolz"]).unwrap();
//!
//! assert_eq!(pages.len(), 6);
//! assert_eq!(pages[4].words(), ["mr", "und", "mrs", "dursley"]);
//! assert_eq!(pages[5].words(), ["waren", "stolz"]);
//! ```

mod hyphen;
mod segment;
mod tokenize;

pub use hyphen::{HYPHENS, ends_with_hyphen, repair_line_breaks, repair_page_breaks};
pub use segment::{is_page_marker, segment_pages};
pub use tokenize::tokenize;

use tracing::debug;

use crate::book::Page;
use crate::error::Result;

/// Number of unnumbered pages before the first page of text.
pub const FRONT_MATTER_PAGES: usize = 4;

/// A page of source lines, before tokenization.
pub type RawPage = Vec<String>;

/// Configuration for reformatting.
#[derive(Debug, Clone)]
pub struct ReformatConfig {
    /// Empty pages prepended to the output.
    pub front_matter_pages: usize,
}

impl Default for ReformatConfig {
    fn default() -> Self {
        Self {
            front_matter_pages: FRONT_MATTER_PAGES,
        }
    }
}

impl ReformatConfig {
    pub fn with_front_matter_pages(mut self, pages: usize) -> Self {
        self.front_matter_pages = pages;
        self
    }
}

/// Turns source lines into pages of words.
#[derive(Debug, Clone, Default)]
pub struct Reformatter {
    config: ReformatConfig,
}

impl Reformatter {
    /// Create a reformatter with the default front-matter offset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReformatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReformatConfig {
        &self.config
    }

    /// Reformat source lines into pages.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedInput`] when a hyphenated word at the
    /// end of a page or line has nothing following it.
    pub fn reformat<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Page>> {
        let raw = segment_pages(lines);
        debug!(lines = lines.len(), pages = raw.len(), "segmented source text");

        let raw = repair_page_breaks(&raw)?;
        let raw = repair_line_breaks(&raw)?;

        let mut pages = Vec::with_capacity(self.config.front_matter_pages + raw.len());
        pages.resize_with(self.config.front_matter_pages, Page::default);
        pages.extend(raw.iter().map(|lines| Page::new(tokenize(&lines.join(" ")))));

        debug!(
            pages = pages.len(),
            words = pages.iter().map(Page::len).sum::<usize>(),
            "reformatted pages"
        );
        Ok(pages)
    }

    /// Reformat a whole source text.
    pub fn reformat_text(&self, text: &str) -> Result<Vec<Page>> {
        let lines: Vec<&str> = text.lines().collect();
        self.reformat(&lines)
    }
}

/// Reformat source lines with the default configuration.
pub fn reformat<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Page>> {
    Reformatter::new().reformat(lines)
}

//! # booklex
//!
//! Word statistics for page-formatted novel texts.
//!
//! ## Features
//!
//! - Split a plain-text book into pages using its printed page numbers
//! - Rejoin words hyphenated across line and page breaks
//! - Count every word and find the first page it appears on
//! - Mark words the reader already knows from one or more word lists
//! - Export the word table as TSV or JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use booklex::{Book, KnownWords, SourceOptions};
//!
//! let book = Book::open("stein_der_weisen.txt")?;
//! let known = KnownWords::load_all(&["duolingo.txt", "vocab_2000.txt"], &SourceOptions::default())?;
//!
//! let stats = book.stats(Some(&known));
//! for record in stats.unlearned().take(20) {
//!     println!("{} x{} (page {})", record.word, record.count, record.page);
//! }
//! # Ok::<(), booklex::Error>(())
//! ```
//!
//! ## Page Layout
//!
//! The reformatter expects printed page numbers alone on a line and words
//! split with a trailing hyphen at line and page ends:
//!
//! ```
//! use booklex::Book;
//!
//! let book = Book::from_lines(&["Mr und Mrs Dur-", "sley", "1", "waren stolz"])?;
//! let stats = book.stats(None);
//!
//! assert_eq!(stats.total_words(), 6);
//! assert_eq!(stats.get("dursley").unwrap().page, 5);
//! # Ok::<(), booklex::Error>(())
//! ```

pub mod book;
pub mod error;
pub mod export;
pub mod reformat;
pub mod source;
pub mod stats;

pub use book::{Book, KnownWords, Page};
pub use error::{Error, Result};
pub use reformat::{ReformatConfig, Reformatter, reformat};
pub use source::SourceOptions;
pub use stats::{BookStats, Summary, WordRecord};

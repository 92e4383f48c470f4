//! Writing a [`BookStats`] word table.
//!
//! Two exporters implement [`Exporter`], writing records in sorted order:
//!
//! - [`TsvExporter`]: one `word\tcount\tlearned\tpage` row per record, with a
//!   header row unless [`TsvConfig`] turns it off. `TsvConfig` can also
//!   restrict the rows to words not yet learned.
//! - `JsonExporter` (with the `cli` feature): an array of record objects,
//!   pretty-printed unless built with `JsonExporter::compact`.
//!
//! [`ExportFormat::from_path`] picks between them by file extension.
//!
//! # Example
//!
//! ```
//! use booklex::Book;
//! use booklex::export::{Exporter, TsvExporter};
//!
//! let book = Book::from_lines(&["Ein Zau-", "berer", "1", "Ein Besen"]).unwrap();
//! let stats = book.stats(None);
//!
//! let mut out = Vec::new();
//! TsvExporter::new().export(&stats, &mut out)?;
//!
//! let table = String::from_utf8(out).unwrap();
//! assert!(table.starts_with("word\tcount\tlearned\tpage\nein\t2\tfalse\t5\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::stats::BookStats;

#[cfg(feature = "cli")]
mod json;
mod tsv;

#[cfg(feature = "cli")]
pub use json::JsonExporter;
pub use tsv::{TsvConfig, TsvExporter};

/// Trait for exporting a word table to a specific format.
pub trait Exporter {
    /// Export the table to the provided writer.
    fn export<W: Write>(&self, stats: &BookStats, writer: &mut W) -> io::Result<()>;
}

/// Output formats for the word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Tab-separated values with a header row.
    Tsv,
    /// JSON array of records.
    #[cfg(feature = "cli")]
    Json,
}

impl ExportFormat {
    /// Pick a format from a file extension; anything but `.json` is TSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            #[cfg(feature = "cli")]
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Tsv,
        }
    }

    /// Export with the default configuration for this format.
    pub fn export<W: Write>(self, stats: &BookStats, writer: &mut W) -> io::Result<()> {
        match self {
            ExportFormat::Tsv => TsvExporter::new().export(stats, writer),
            #[cfg(feature = "cli")]
            ExportFormat::Json => JsonExporter::new().export(stats, writer),
        }
    }
}

//! Tab-separated word table.

use std::io::{self, Write};

use crate::stats::BookStats;

use super::Exporter;

/// Configuration for TSV export.
#[derive(Debug, Clone)]
pub struct TsvConfig {
    /// Emit a `word count learned page` header row.
    pub header: bool,
    /// Only emit words that are not yet learned.
    pub unlearned_only: bool,
}

impl Default for TsvConfig {
    fn default() -> Self {
        Self {
            header: true,
            unlearned_only: false,
        }
    }
}

/// Exporter for tab-separated output, one record per line.
#[derive(Debug, Clone, Default)]
pub struct TsvExporter {
    config: TsvConfig,
}

impl TsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for TsvExporter {
    fn export<W: Write>(&self, stats: &BookStats, writer: &mut W) -> io::Result<()> {
        if self.config.header {
            writeln!(writer, "word\tcount\tlearned\tpage")?;
        }
        for record in stats
            .iter()
            .filter(|r| !(self.config.unlearned_only && r.learned))
        {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                record.word, record.count, record.learned, record.page
            )?;
        }
        Ok(())
    }
}

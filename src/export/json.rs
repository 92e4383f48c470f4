//! JSON word table.

use std::io::{self, Write};

use crate::stats::BookStats;

use super::Exporter;

/// Exporter for a JSON array of `{word, count, learned, page}` objects.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write everything on one line.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, stats: &BookStats, writer: &mut W) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, stats.records())?;
        } else {
            serde_json::to_writer(&mut *writer, stats.records())?;
        }
        writeln!(writer)
    }
}

//! Error types for booklex operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a reformat or statistics run.
#[derive(Error, Debug)]
pub enum Error {
    /// A hyphenated word has no following fragment to join with.
    ///
    /// `page` is the 1-based page of the source text, counted by page
    /// markers. It does not include the front-matter offset that
    /// [`crate::WordRecord`] pages carry. `line` is the 1-based line within
    /// that page.
    #[error("malformed input{} at source page {page}, line {line}: {reason}", in_path(.path))]
    MalformedInput {
        path: Option<PathBuf>,
        page: usize,
        line: usize,
        reason: &'static str,
    },

    #[error("cannot read {}: {source}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid {encoding} text", .path.display())]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Attach the source file to a `MalformedInput` error.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Error::MalformedInput {
                path: None,
                page,
                line,
                reason,
            } => Error::MalformedInput {
                path: Some(file.to_path_buf()),
                page,
                line,
                reason,
            },
            other => other,
        }
    }
}

fn in_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Reading source texts from disk.
//!
//! Book and known-word files are plain text. Bytes are decoded strictly:
//! a byte order mark selects its encoding, otherwise the configured encoding
//! (UTF-8 unless overridden) is used, and any malformed sequence is an
//! [`Error::Encoding`] rather than a replacement character.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{Error, Result};

/// Settings for decoding input files.
#[derive(Debug, Clone, Copy)]
pub struct SourceOptions {
    /// Encoding used when the file has no byte order mark.
    pub encoding: &'static Encoding,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl SourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Select the fallback encoding by WHATWG label (e.g. `"latin1"`).
    ///
    /// Returns `None` for unknown labels.
    pub fn with_encoding_label(self, label: &str) -> Option<Self> {
        Encoding::for_label(label.as_bytes()).map(|encoding| self.with_encoding(encoding))
    }
}

/// Decode bytes to a string without lossy replacement.
///
/// Returns the decoded text, or `Err` with the name of the encoding that
/// failed. Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(
    bytes: &'a [u8],
    fallback: &'static Encoding,
) -> std::result::Result<Cow<'a, str>, &'static str> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (fallback, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(encoding.name())
}

/// Read a whole file as text.
pub fn read_text(path: &Path, options: &SourceOptions) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_text(&bytes, options.encoding).map_err(|encoding| Error::Encoding {
        path: path.to_path_buf(),
        encoding,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read source text");
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = decode_text("Größe".as_bytes(), encoding_rs::UTF_8).unwrap();
        assert_eq!(text, "Größe");
        assert!(matches!(text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let bytes = b"\xEF\xBB\xBFHallo";
        assert_eq!(decode_text(bytes, encoding_rs::UTF_8).unwrap(), "Hallo");
    }

    #[test]
    fn test_decode_rejects_malformed_utf8() {
        // Latin-1 encoded "Größe"
        let bytes = b"Gr\xF6\xDFe";
        assert_eq!(decode_text(bytes, encoding_rs::UTF_8), Err("UTF-8"));
    }

    #[test]
    fn test_decode_with_fallback_encoding() {
        let bytes = b"Gr\xF6\xDFe";
        let options = SourceOptions::new().with_encoding_label("latin1").unwrap();
        assert_eq!(decode_text(bytes, options.encoding).unwrap(), "Größe");
    }

    #[test]
    fn test_unknown_encoding_label() {
        assert!(SourceOptions::new().with_encoding_label("no-such-charset").is_none());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_text(Path::new("/nonexistent/booklex/book.txt"), &SourceOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
        assert!(err.to_string().contains("/nonexistent/booklex/book.txt"));
    }
}

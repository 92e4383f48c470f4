//! Splitting source lines into pages at printed page numbers.

use super::RawPage;

/// Check whether a line is a printed page number.
///
/// A page marker is a line holding exactly one whitespace-delimited token
/// made only of ASCII digits.
pub fn is_page_marker(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Group non-blank lines into pages.
///
/// Lines between two consecutive markers form one page; the markers
/// themselves are dropped. Lines before the first marker form the first
/// page and lines after the last marker form the final page. Adjacent
/// markers yield a page with no lines.
pub fn segment_pages<S: AsRef<str>>(lines: &[S]) -> Vec<RawPage> {
    let mut pages = Vec::new();
    let mut current = RawPage::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        if is_page_marker(line) {
            pages.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

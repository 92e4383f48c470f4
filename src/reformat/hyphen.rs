//! Rejoining words split by a hyphen at the end of a line or page.
//!
//! Both passes read only the pages they are given and build fresh pages as
//! output. The only state carried from one page or line to the next is the
//! fragment waiting to be joined, so runs of consecutive hyphenations resolve
//! in reading order.

use super::RawPage;
use crate::error::{Error, Result};

/// Characters treated as a trailing hyphen.
///
/// ASCII hyphen-minus, U+2010 HYPHEN and U+00AD SOFT HYPHEN. En and em
/// dashes mark punctuation, not a split word, and are not included.
pub const HYPHENS: [char; 3] = ['-', '\u{2010}', '\u{00AD}'];

/// Check whether a word ends in a hyphen.
pub fn ends_with_hyphen(word: &str) -> bool {
    word.ends_with(HYPHENS)
}

/// Remove one trailing hyphen, if present.
fn strip_hyphen(word: &str) -> &str {
    word.strip_suffix(HYPHENS).unwrap_or(word)
}

fn words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Rejoin words hyphenated across a page break.
///
/// When the last word of a page ends in a hyphen, the first word of the
/// following page is appended to it (hyphen removed) and dropped from the
/// following page. The completed word stays on the earlier page. If that
/// first word is hyphenated and alone on its line, the join continues with
/// the next line in reading order, crossing further pages if needed.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when a hyphenated page is the last
/// one, or the following page starts with no words.
pub fn repair_page_breaks(pages: &[RawPage]) -> Result<Vec<RawPage>> {
    let mut repaired = Vec::with_capacity(pages.len());
    // leading lines of each page whose first word was joined onto an earlier page
    let mut consumed = vec![0usize; pages.len()];

    for (index, page) in pages.iter().enumerate() {
        let mut lines = page.clone();

        for line in lines.iter_mut().take(consumed[index]) {
            let rest = words(line)[1..].join(" ");
            *line = rest;
        }

        let line_count = lines.len();
        if let Some(last) = lines.last_mut() {
            let mut line_words = words(last);
            if let Some(&tail) = line_words.last()
                && ends_with_hyphen(tail)
            {
                let joined =
                    join_across_pages(pages, tail, (index, line_count - 1), &mut consumed)?;
                line_words.pop();
                line_words.push(&joined);
                *last = line_words.join(" ");
            }
        }

        repaired.push(lines);
    }

    Ok(repaired)
}

/// Follow a hyphenated word at `from` (0-based page and line) forward
/// through the source pages, recording which lines give up their first word.
fn join_across_pages(
    pages: &[RawPage],
    tail: &str,
    from: (usize, usize),
    consumed: &mut [usize],
) -> Result<String> {
    let mut joined = strip_hyphen(tail).to_string();
    let (mut page, mut line) = from;

    loop {
        let at = (page, line);
        if line + 1 < pages[page].len() {
            line += 1;
        } else {
            page += 1;
            line = 0;
        }

        let fragment = pages
            .get(page)
            .and_then(|lines| lines.get(line))
            .and_then(|text| text.split_whitespace().next())
            .ok_or(Error::MalformedInput {
                path: None,
                page: at.0 + 1,
                line: at.1 + 1,
                reason: "hyphenated word across a page break has no continuation",
            })?;
        consumed[page] = line + 1;

        let alone = pages[page][line].split_whitespace().nth(1).is_none();
        if !(alone && ends_with_hyphen(fragment)) {
            joined.push_str(fragment);
            return Ok(joined);
        }
        joined.push_str(strip_hyphen(fragment));
    }
}

/// Rejoin words hyphenated across line breaks within each page.
///
/// When a line other than the last ends in a hyphenated word, that word is
/// removed from it and, hyphen stripped, prepended to the first word of the
/// next line.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when the line after a hyphenated line
/// holds no words.
pub fn repair_line_breaks(pages: &[RawPage]) -> Result<Vec<RawPage>> {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| repair_page_lines(index + 1, page))
        .collect()
}

fn repair_page_lines(page_number: usize, lines: &[String]) -> Result<RawPage> {
    let mut repaired = Vec::with_capacity(lines.len());
    let mut carry: Option<String> = None;
    let last_index = lines.len().saturating_sub(1);

    for (index, line) in lines.iter().enumerate() {
        let mut line_words: Vec<String> = line.split_whitespace().map(str::to_owned).collect();

        if let Some(prefix) = carry.take() {
            let Some(first) = line_words.first_mut() else {
                return Err(Error::MalformedInput {
                    path: None,
                    page: page_number,
                    line: index,
                    reason: "hyphenated word at the end of the line has no continuation",
                });
            };
            first.insert_str(0, &prefix);
        }

        if index < last_index
            && line_words.last().is_some_and(|w| ends_with_hyphen(w))
            && let Some(tail) = line_words.pop()
        {
            carry = Some(strip_hyphen(&tail).to_string());
        }

        repaired.push(line_words.join(" "));
    }

    Ok(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> RawPage {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_ends_with_hyphen() {
        assert!(ends_with_hyphen("Dur-"));
        assert!(ends_with_hyphen("Dur\u{2010}"));
        assert!(ends_with_hyphen("Dur\u{00AD}"));
        assert!(ends_with_hyphen("-"));

        assert!(!ends_with_hyphen("Dursley"));
        assert!(!ends_with_hyphen("-Dursley"));
        assert!(!ends_with_hyphen("Dur\u{2013}"));
        assert!(!ends_with_hyphen("Dur\u{2014}"));
        assert!(!ends_with_hyphen(""));
    }

    #[test]
    fn test_strip_hyphen_removes_one_char() {
        assert_eq!(strip_hyphen("Dur-"), "Dur");
        assert_eq!(strip_hyphen("Dur--"), "Dur-");
        assert_eq!(strip_hyphen("Dur\u{00AD}"), "Dur");
        assert_eq!(strip_hyphen("Dur"), "Dur");
    }

    #[test]
    fn test_page_break_repair() {
        let pages = vec![page(&["eins", "foo bar-"]), page(&["baz qux", "zwei"])];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["eins", "foo barbaz"]);
        assert_eq!(repaired[1], vec!["qux", "zwei"]);
    }

    #[test]
    fn test_page_break_leaves_empty_first_line() {
        let pages = vec![page(&["Mrs Dur-"]), page(&["sley", "war"])];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["Mrs Dursley"]);
        assert_eq!(repaired[1], vec!["", "war"]);
    }

    #[test]
    fn test_consecutive_page_breaks() {
        let pages = vec![
            page(&["a b-"]),
            page(&["c d-"]),
            page(&["e f"]),
        ];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["a bc"]);
        assert_eq!(repaired[1], vec!["de"]);
        assert_eq!(repaired[2], vec!["f"]);
    }

    #[test]
    fn test_page_break_chain_through_single_word_page() {
        let pages = vec![page(&["a x-"]), page(&["y-"]), page(&["z w"])];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["a xyz"]);
        assert_eq!(repaired[1], vec![""]);
        assert_eq!(repaired[2], vec!["w"]);
    }

    #[test]
    fn test_page_break_chain_to_end_of_book_is_malformed() {
        let pages = vec![page(&["a x-"]), page(&["ok"]), page(&["b y-"]), page(&["z-"])];

        let err = repair_page_breaks(&pages).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { page: 4, line: 1, .. }
        ));
    }

    #[test]
    fn test_page_break_chain_continues_on_next_line() {
        let pages = vec![page(&["a x-"]), page(&["y-", "z w", "ende"])];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["a xyz"]);
        assert_eq!(repaired[1], vec!["", "w", "ende"]);
    }

    #[test]
    fn test_page_break_does_not_modify_input() {
        let pages = vec![page(&["foo bar-"]), page(&["baz"])];
        let snapshot = pages.clone();

        repair_page_breaks(&pages).unwrap();
        assert_eq!(pages, snapshot);
    }

    #[test]
    fn test_hyphen_on_last_page_is_malformed() {
        let pages = vec![page(&["ok"]), page(&["das Ende-"])];

        let err = repair_page_breaks(&pages).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { page: 2, line: 1, .. }
        ));
    }

    #[test]
    fn test_hyphen_before_empty_page_is_malformed() {
        let pages = vec![page(&["foo bar-"]), RawPage::new(), page(&["baz"])];

        let err = repair_page_breaks(&pages).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { page: 1, .. }));
    }

    #[test]
    fn test_empty_pages_pass_through() {
        let pages = vec![RawPage::new(), page(&[""]), page(&["x"])];

        let repaired = repair_page_breaks(&pages).unwrap();
        assert_eq!(repaired, pages);
    }

    #[test]
    fn test_line_break_repair() {
        let pages = vec![page(&["Mr und Mrs Dur-", "sley aus dem", "Ligusterweg"])];

        let repaired = repair_line_breaks(&pages).unwrap();
        assert_eq!(
            repaired[0],
            vec!["Mr und Mrs", "Dursley aus dem", "Ligusterweg"]
        );
    }

    #[test]
    fn test_line_break_chain() {
        let pages = vec![page(&["a-", "b-", "c d"])];

        let repaired = repair_line_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["", "", "abc d"]);
    }

    #[test]
    fn test_last_line_hyphen_is_left_alone() {
        let pages = vec![page(&["eins", "zwei-"])];

        let repaired = repair_line_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["eins", "zwei-"]);
    }

    #[test]
    fn test_empty_first_line_is_not_checked() {
        let pages = vec![page(&["", "foo-", "bar"])];

        let repaired = repair_line_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["", "", "foobar"]);
    }

    #[test]
    fn test_hyphen_before_empty_line_is_malformed() {
        let pages = vec![page(&["ok"]), page(&["foo-", "", "bar"])];

        let err = repair_line_breaks(&pages).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput { page: 2, line: 1, .. }
        ));
    }

    #[test]
    fn test_line_repair_normalizes_spacing() {
        let pages = vec![page(&["  foo   bar  "])];

        let repaired = repair_line_breaks(&pages).unwrap();
        assert_eq!(repaired[0], vec!["foo bar"]);
    }
}

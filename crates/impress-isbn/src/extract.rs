//! ISBN extraction from free text

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::isbn::{Isbn, IsbnKind};

/// Extracted ISBN with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedIsbn {
    /// Canonical form as it appeared (10 or 13 characters, no separators)
    pub value: String,
    pub kind: IsbnKind,
    pub isbn13: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // ISBN-10 and ISBN-13, optionally labelled ("ISBN", "ISBN:", "ISBN-13:")
    // and split into groups by dashes or single spaces
    static ref ISBN_REGEX: Regex = Regex::new(
        r"(?i)(?:^|[^0-9a-z])(?:isbn(?:-?1[03])?[:\s-]*)?(?P<isbn>(?:97[89][- ]?)?(?:\d[- ]?){9}[\dx])\b"
    ).expect("ISBN regex is valid");

    // ISBN-10 only, anchored where a longer candidate was rejected
    static ref ISBN10_REGEX: Regex = Regex::new(
        r"(?i)^(?:\d[- ]?){9}[\dx]\b"
    ).expect("ISBN-10 regex is valid");
}

/// Extract valid ISBNs from text, in order of appearance.
///
/// Candidates that fail their checksum are dropped, as are repeats of an
/// ISBN already found (an ISBN-10 and its ISBN-13 count as the same book).
pub fn extract_isbns(text: &str) -> Vec<Isbn> {
    let mut seen = HashSet::new();
    scan(text)
        .into_iter()
        .map(|(isbn, _, _)| isbn)
        .filter(|isbn| isbn.isbn13().is_some_and(|isbn13| seen.insert(isbn13)))
        .collect()
}

/// Extract valid ISBNs from text along with their byte offsets.
///
/// Unlike [`extract_isbns`], repeats are kept so every occurrence is reported.
pub fn extract_isbns_with_positions(text: &str) -> Vec<ExtractedIsbn> {
    let mut results = Vec::new();

    for (isbn, start, end) in scan(text) {
        let value = match isbn.kind() {
            IsbnKind::Isbn10 => isbn.isbn10(),
            IsbnKind::Isbn13 => isbn.isbn13(),
            IsbnKind::Invalid => None,
        };
        if let (Some(value), Some(isbn13)) = (value, isbn.isbn13()) {
            results.push(ExtractedIsbn {
                value,
                kind: isbn.kind(),
                isbn13,
                start_index: start as u32,
                end_index: end as u32,
            });
        }
    }

    tracing::trace!(found = results.len(), "extracted ISBNs from text");
    results
}

/// Valid ISBNs in `text` with the byte range of each candidate.
///
/// The 978/979 prefix is tried first, so a valid ISBN-10 starting with those
/// digits and followed by more digits first shows up as a bogus 13-digit
/// candidate. When that happens the same start is retried as an ISBN-10 and
/// scanning resumes after whichever candidate was kept.
fn scan(text: &str) -> Vec<(Isbn, usize, usize)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(cap) = ISBN_REGEX.captures_at(text, pos) {
        let Some(m) = cap.name("isbn") else {
            break;
        };
        pos = m.end();

        let isbn = Isbn::new(m.as_str());
        if isbn.is_valid() {
            found.push((isbn, m.start(), m.end()));
            continue;
        }

        if let Some(short) = ISBN10_REGEX.find(&text[m.start()..]) {
            let isbn = Isbn::new(short.as_str());
            if isbn.is_valid() {
                let end = m.start() + short.end();
                found.push((isbn, m.start(), end));
                pos = end;
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(isbns: &[Isbn]) -> Vec<String> {
        isbns.iter().filter_map(Isbn::isbn13).collect()
    }

    #[test]
    fn test_extract_isbns() {
        let text = "ISBN: 978-0-321-12521-7 and also 0-306-40615-2";
        let isbns = extract_isbns(text);
        assert_eq!(
            canonical(&isbns),
            vec!["9780321125217".to_string(), "9780306406157".to_string()]
        );
        assert_eq!(isbns[1].isbn10().as_deref(), Some("0306406152"));
    }

    #[test]
    fn test_extract_labelled_forms() {
        let text = "ISBN-13: 9780123456786; ISBN-10 012345672x";
        let isbns = extract_isbns(text);
        assert_eq!(
            canonical(&isbns),
            vec!["9780123456786".to_string(), "9780123456724".to_string()]
        );
    }

    #[test]
    fn test_skips_bad_checksums() {
        let text = "Bad: 2314346323, good: 0123456789";
        let isbns = extract_isbns(text);
        assert_eq!(canonical(&isbns), vec!["9780123456786".to_string()]);
    }

    #[test]
    fn test_deduplicates_equivalent_forms() {
        let text = "0-12-345678-9 is the same book as 978-0-12-345678-6";
        assert_eq!(extract_isbns(text).len(), 1);
        assert_eq!(extract_isbns_with_positions(text).len(), 2);
    }

    #[test]
    fn test_ignores_longer_digit_runs() {
        assert!(extract_isbns("order 40123456789 shipped").is_empty());
        assert!(extract_isbns("no identifiers here").is_empty());
    }

    #[test]
    fn test_bookland_looking_isbn10_next_to_digits() {
        let text = "see 9781234563 123 copies";
        let isbns = extract_isbns(text);
        assert_eq!(isbns.len(), 1);
        assert_eq!(isbns[0].kind(), IsbnKind::Isbn10);
        assert_eq!(isbns[0].isbn10().as_deref(), Some("9781234563"));

        let found = extract_isbns_with_positions(text);
        assert_eq!(found.len(), 1);
        assert_eq!(
            &text[found[0].start_index as usize..found[0].end_index as usize],
            "9781234563"
        );
    }

    #[test]
    fn test_scanning_resumes_after_recovered_isbn10() {
        let text = "9781234563 123 copies and 0306406152";
        let values: Vec<String> = extract_isbns_with_positions(text)
            .into_iter()
            .map(|found| found.value)
            .collect();
        assert_eq!(values, vec!["9781234563", "0306406152"]);
    }

    #[test]
    fn test_positions() {
        let text = "See ISBN 0-306-40615-2.";
        let found = extract_isbns_with_positions(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "0306406152");
        assert_eq!(found[0].kind, IsbnKind::Isbn10);
        assert_eq!(found[0].isbn13, "9780306406157");
        assert_eq!(
            &text[found[0].start_index as usize..found[0].end_index as usize],
            "0-306-40615-2"
        );
    }
}

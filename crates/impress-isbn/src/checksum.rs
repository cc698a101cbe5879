//! ISBN-10 and ISBN-13 checksum validation and check character generation
//!
//! All functions here operate on already-normalized input (no separators).
//! ISBN-10 uses weights 10 down to 1 and must sum to a multiple of 11, with
//! `X` standing for 10 in the final position only. ISBN-13 uses alternating
//! weights 1 and 3 and must sum to a multiple of 10; it never accepts `X`.

use crate::error::IsbnError;
use crate::isbn::IsbnKind;

/// EAN prefix shared by every ISBN-13 that has an ISBN-10 equivalent
pub const BOOKLAND_PREFIX: &str = "978";

/// Validate an ISBN-10 checksum
pub fn validate_isbn10(isbn: &str) -> bool {
    check_isbn10(isbn).is_ok()
}

/// Validate an ISBN-13 checksum
pub fn validate_isbn13(isbn: &str) -> bool {
    check_isbn13(isbn).is_ok()
}

/// Validate an ISBN-10, reporting the first problem found.
///
/// Character problems are reported before the checksum is evaluated, so
/// `"XXXXXXXXXX"` fails on its first character rather than on the sum.
pub fn check_isbn10(isbn: &str) -> Result<(), IsbnError> {
    let length = isbn.chars().count();
    if length != 10 {
        return Err(IsbnError::InvalidLength { length });
    }

    let mut sum = 0u32;
    for (i, c) in isbn.chars().enumerate() {
        let value = isbn10_value(i, c).ok_or(IsbnError::InvalidCharacter {
            character: c,
            position: i + 1,
        })?;
        sum += value * (10 - i as u32);
    }

    if sum % 11 == 0 {
        Ok(())
    } else {
        Err(IsbnError::ChecksumMismatch {
            kind: IsbnKind::Isbn10,
        })
    }
}

/// Validate an ISBN-13, reporting the first problem found.
pub fn check_isbn13(isbn: &str) -> Result<(), IsbnError> {
    let length = isbn.chars().count();
    if length != 13 {
        return Err(IsbnError::InvalidLength { length });
    }

    let digits = isbn
        .chars()
        .enumerate()
        .map(|(i, c)| {
            c.to_digit(10).ok_or(IsbnError::InvalidCharacter {
                character: c,
                position: i + 1,
            })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if ean_weighted_sum(&digits) % 10 == 0 {
        Ok(())
    } else {
        Err(IsbnError::ChecksumMismatch {
            kind: IsbnKind::Isbn13,
        })
    }
}

/// Compute the ISBN-10 check character for nine leading digits.
///
/// Returns `'X'` (always uppercase) when the check value is 10, and `None`
/// if the input is not exactly nine ASCII digits.
pub fn isbn10_check_char(body: &str) -> Option<char> {
    let digits = ascii_digits(body, 9)?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();

    match (11 - sum % 11) % 11 {
        10 => Some('X'),
        check => char::from_digit(check, 10),
    }
}

/// Compute the ISBN-13 check digit for twelve leading digits.
///
/// Returns `None` if the input is not exactly twelve ASCII digits.
pub fn isbn13_check_digit(body: &str) -> Option<char> {
    let digits = ascii_digits(body, 12)?;
    char::from_digit((10 - ean_weighted_sum(&digits) % 10) % 10, 10)
}

/// Value of an ISBN-10 character at a 0-based position
fn isbn10_value(position: usize, c: char) -> Option<u32> {
    match c {
        'X' | 'x' if position == 9 => Some(10),
        _ => c.to_digit(10),
    }
}

/// EAN-13 style sum: weight 1 on even indices, 3 on odd ones
fn ean_weighted_sum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum()
}

fn ascii_digits(s: &str, expected: usize) -> Option<Vec<u32>> {
    let digits = s
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;
    (digits.len() == expected).then_some(digits)
}

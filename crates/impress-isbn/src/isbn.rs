//! The `Isbn` value type
//!
//! An [`Isbn`] is built once from a raw string and never changes. Building
//! never fails: malformed input simply produces an invalid identifier whose
//! conversions report `None`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::{
    check_isbn10, check_isbn13, isbn10_check_char, isbn13_check_digit, BOOKLAND_PREFIX,
};
use crate::error::IsbnError;
use crate::normalize::normalize_isbn;
use crate::report::IsbnReport;

/// Classification of a normalized ISBN candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum IsbnKind {
    /// Wrong length, bad characters, or failed checksum
    Invalid,
    /// Valid 10-character ISBN
    Isbn10,
    /// Valid 13-digit ISBN
    Isbn13,
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnKind::Invalid => write!(f, "invalid ISBN"),
            IsbnKind::Isbn10 => write!(f, "ISBN-10"),
            IsbnKind::Isbn13 => write!(f, "ISBN-13"),
        }
    }
}

/// An International Standard Book Number, parsed leniently.
///
/// Equality and hashing follow the book, not the input text: separators,
/// check letter case, and the 10- versus 13-character form are ignored for
/// valid identifiers. Invalid identifiers compare by their normalized text.
#[derive(Debug, Clone)]
pub struct Isbn {
    raw: String,
    normalized: String,
    kind: IsbnKind,
}

impl Isbn {
    /// Build an identifier from raw input. Never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize_isbn(&raw);
        let kind = match classify(&normalized) {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!(
                    normalized = %normalized,
                    length = normalized.chars().count(),
                    reason = %e,
                    "rejected ISBN candidate"
                );
                IsbnKind::Invalid
            }
        };
        Self {
            raw,
            normalized,
            kind,
        }
    }

    /// Build an identifier, failing if it is not a valid ISBN-10 or ISBN-13.
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        let normalized = normalize_isbn(raw);
        let kind = classify(&normalized)?;
        Ok(Self {
            raw: raw.to_string(),
            normalized,
            kind,
        })
    }

    /// The input exactly as given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The input with dashes and whitespace removed
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn kind(&self) -> IsbnKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.kind != IsbnKind::Invalid
    }

    /// Whether a 10-character form exists.
    ///
    /// True for every valid ISBN-10, and for valid ISBN-13s in the `978` range.
    pub fn has_isbn10(&self) -> bool {
        match self.kind {
            IsbnKind::Isbn10 => true,
            IsbnKind::Isbn13 => self.normalized.starts_with(BOOKLAND_PREFIX),
            IsbnKind::Invalid => false,
        }
    }

    /// Whether a 13-digit form exists (true for every valid identifier)
    pub fn has_isbn13(&self) -> bool {
        self.is_valid()
    }

    /// The canonical ISBN-10, with a trailing `x` uppercased.
    ///
    /// `None` for invalid input and for ISBN-13s outside the `978` prefix.
    pub fn isbn10(&self) -> Option<String> {
        match self.kind {
            IsbnKind::Isbn10 => Some(self.normalized.to_ascii_uppercase()),
            IsbnKind::Isbn13 => convert_13_to_10(&self.normalized),
            IsbnKind::Invalid => None,
        }
    }

    /// The canonical ISBN-13. `None` for invalid input.
    pub fn isbn13(&self) -> Option<String> {
        match self.kind {
            IsbnKind::Isbn10 => convert_10_to_13(&self.normalized),
            IsbnKind::Isbn13 => Some(self.normalized.clone()),
            IsbnKind::Invalid => None,
        }
    }

    /// Summarize this identifier for display or serialization
    pub fn report(&self) -> IsbnReport {
        IsbnReport {
            input: self.raw.clone(),
            normalized: self.normalized.clone(),
            valid: self.is_valid(),
            kind: self.kind,
            isbn10: self.isbn10(),
            isbn13: self.isbn13(),
        }
    }

    /// Key behind equality and hashing
    fn identity(&self) -> String {
        self.isbn13().unwrap_or_else(|| self.normalized.clone())
    }
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Decide which form a normalized string is, or why it is neither
fn classify(normalized: &str) -> Result<IsbnKind, IsbnError> {
    match normalized.chars().count() {
        0 => Err(IsbnError::Empty),
        10 => check_isbn10(normalized).map(|()| IsbnKind::Isbn10),
        13 => check_isbn13(normalized).map(|()| IsbnKind::Isbn13),
        length => Err(IsbnError::InvalidLength { length }),
    }
}

/// Caller guarantees `isbn10` is a valid ISBN-10
fn convert_10_to_13(isbn10: &str) -> Option<String> {
    let mut body = String::with_capacity(13);
    body.push_str(BOOKLAND_PREFIX);
    body.push_str(isbn10.get(..9)?);
    let check = isbn13_check_digit(&body)?;
    body.push(check);
    Some(body)
}

/// Caller guarantees `isbn13` is a valid ISBN-13
fn convert_13_to_10(isbn13: &str) -> Option<String> {
    let body = isbn13.strip_prefix(BOOKLAND_PREFIX)?.get(..9)?;
    let check = isbn10_check_char(body)?;
    Some(format!("{body}{check}"))
}

/// Check whether a raw string is a valid ISBN-10 or ISBN-13
pub fn is_valid_isbn(raw: &str) -> bool {
    classify(&normalize_isbn(raw)).is_ok()
}

/// Convert an ISBN-10 (separators allowed) to its ISBN-13 form.
///
/// Returns `None` unless the input is a valid ISBN-10.
pub fn isbn10_to_isbn13(isbn10: &str) -> Option<String> {
    let normalized = normalize_isbn(isbn10);
    check_isbn10(&normalized).ok()?;
    convert_10_to_13(&normalized)
}

/// Convert an ISBN-13 (separators allowed) to its ISBN-10 form.
///
/// Returns `None` unless the input is a valid ISBN-13 with the `978` prefix.
pub fn isbn13_to_isbn10(isbn13: &str) -> Option<String> {
    let normalized = normalize_isbn(isbn13);
    check_isbn13(&normalized).ok()?;
    convert_13_to_10(&normalized)
}

impl fmt::Display for Isbn {
    /// Prefers the ISBN-13 form, falling back to the normalized input
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.isbn13() {
            Some(isbn13) => f.write_str(&isbn13),
            None => f.write_str(&self.normalized),
        }
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isbn::parse(s)
    }
}

impl From<&str> for Isbn {
    fn from(raw: &str) -> Self {
        Isbn::new(raw)
    }
}

impl From<String> for Isbn {
    fn from(raw: String) -> Self {
        Isbn::new(raw)
    }
}

impl Serialize for Isbn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Isbn::new)
    }
}

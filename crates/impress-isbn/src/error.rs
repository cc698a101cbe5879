//! Error types for strict ISBN parsing

use thiserror::Error;

use crate::isbn::IsbnKind;

/// Why a string was rejected as an ISBN.
///
/// Only the strict parsing path (`str::parse::<Isbn>()` / [`crate::Isbn::parse`])
/// produces these. The lenient [`crate::Isbn::new`] never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    #[error("Empty input")]
    Empty,
    #[error("Invalid length: expected 10 or 13 characters after removing separators, got {length}")]
    InvalidLength { length: usize },
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Checksum mismatch for {kind}")]
    ChecksumMismatch { kind: IsbnKind },
}

//! UniFFI exports for Swift/Kotlin callers

use crate::extract::{extract_isbns_with_positions, ExtractedIsbn};
use crate::isbn::{is_valid_isbn, isbn10_to_isbn13, isbn13_to_isbn10, Isbn};
use crate::report::IsbnReport;

#[uniffi::export]
pub fn parse_isbn(raw: String) -> IsbnReport {
    Isbn::new(raw).report()
}

#[uniffi::export]
pub fn is_valid_isbn_ffi(raw: String) -> bool {
    is_valid_isbn(&raw)
}

#[uniffi::export]
pub fn isbn10_to_isbn13_ffi(isbn10: String) -> Option<String> {
    isbn10_to_isbn13(&isbn10)
}

#[uniffi::export]
pub fn isbn13_to_isbn10_ffi(isbn13: String) -> Option<String> {
    isbn13_to_isbn10(&isbn13)
}

#[uniffi::export]
pub fn extract_isbns_ffi(text: String) -> Vec<ExtractedIsbn> {
    extract_isbns_with_positions(&text)
}

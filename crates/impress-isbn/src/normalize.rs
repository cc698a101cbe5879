//! Separator stripping for raw ISBN input

/// Remove hyphens and whitespace from a raw ISBN.
///
/// Every other character is kept in place with its case unchanged, so
/// `"0-12-345678-9"`, `"0 12 345678 9"` and `"0123456789"` all normalize to
/// the same string. Nothing is rejected here; length and content checks
/// happen during classification.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

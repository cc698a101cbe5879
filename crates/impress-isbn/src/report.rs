//! Serializable summary of a parsed ISBN

use serde::{Deserialize, Serialize};

use crate::isbn::IsbnKind;

/// Everything known about one ISBN input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct IsbnReport {
    pub input: String,
    pub normalized: String,
    pub valid: bool,
    pub kind: IsbnKind,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
}

impl IsbnReport {
    /// One-line human readable summary, used by the CLI
    pub fn summary(&self) -> String {
        if !self.valid {
            return format!("{}: invalid", self.input);
        }
        format!(
            "{}: {} (ISBN-10: {}, ISBN-13: {})",
            self.input,
            self.kind,
            self.isbn10.as_deref().unwrap_or("-"),
            self.isbn13.as_deref().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Isbn;

    #[test]
    fn test_report_fields() {
        let report = Isbn::new("978-0-12-345678-6").report();
        assert_eq!(report.input, "978-0-12-345678-6");
        assert_eq!(report.normalized, "9780123456786");
        assert!(report.valid);
        assert_eq!(report.isbn10.as_deref(), Some("0123456789"));
        assert_eq!(report.isbn13.as_deref(), Some("9780123456786"));
    }

    #[test]
    fn test_report_json() {
        let report = Isbn::new("9790123456785").report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "isbn13");
        assert_eq!(json["valid"], true);
        assert!(json["isbn10"].is_null());
        assert_eq!(json["isbn13"], "9790123456785");
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            Isbn::new("012345672x").report().summary(),
            "012345672x: ISBN-10 (ISBN-10: 012345672X, ISBN-13: 9780123456724)"
        );
        assert_eq!(
            Isbn::new("9790123456785").report().summary(),
            "9790123456785: ISBN-13 (ISBN-10: -, ISBN-13: 9790123456785)"
        );
        assert_eq!(Isbn::new("").report().summary(), ": invalid");
    }
}

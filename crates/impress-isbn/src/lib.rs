// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! ISBN normalization, validation and conversion
//!
//! This crate provides tools for working with International Standard Book Numbers:
//! - Separator stripping (dashes and whitespace)
//! - ISBN-10 and ISBN-13 checksum validation
//! - Conversion between the 10- and 13-character forms
//! - ISBN extraction from free text
//!
//! ```
//! use impress_isbn::Isbn;
//!
//! let isbn = Isbn::new("0-12-345678-9");
//! assert!(isbn.is_valid());
//! assert_eq!(isbn.isbn13().as_deref(), Some("9780123456786"));
//! ```

pub mod checksum;
pub mod error;
pub mod extract;
pub mod isbn;
pub mod normalize;
pub mod report;

#[cfg(feature = "uniffi")]
mod ffi;

pub use error::*;
pub use extract::*;
pub use isbn::*;
pub use normalize::*;
pub use report::*;

#[cfg(feature = "uniffi")]
pub use ffi::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
